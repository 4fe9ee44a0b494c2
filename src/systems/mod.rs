//! Per-frame application systems

mod frame;
mod palette;
mod picking;

pub use frame::FrameClock;
pub use palette::accent_for;
pub use picking::{pick_node, NODE_HIT_RADIUS};
