//! Orbit Motion Library
//!
//! This crate provides the motion math and the orbit ring simulation for
//! the folio engine. Everything here is pure state + update functions so
//! the animation logic can be unit tested without a window or GPU.
//!
//! ## Core Types
//!
//! - [`RingId`] - One of the three concentric rings
//! - [`RingMotion`] - Per-ring period, direction, and radius
//! - [`RingState`] - Phase and damped time scale, advanced per frame
//! - [`ViewMode`] - Desktop/tablet/mobile presentation tiers
//! - [`OrbitSystem`] - The full three-ring simulation with inspection
//!
//! ## Motion Math
//!
//! - [`ease`] - Easing curves and exponential damping, shared by the
//!   scene and reveal crates

pub mod ease;
mod placement;
mod ring;
mod system;
mod view;

pub use placement::{slot_angle, NodeFlags, NodePlacement, NodeVisual, DIM_OPACITY, INSPECT_LIFT, INSPECT_SCALE};
pub use ring::{RingId, RingMotion, RingState, SLOWDOWN_TARGET, TIME_SCALE_GAIN};
pub use system::{NodeRef, OrbitFrame, OrbitSystem};
pub use view::ViewMode;
