//! Folio - Portfolio Presentation Engine
//!
//! A native portfolio viewer: an animated "event horizon" preloader that
//! adapts its fidelity to the machine, followed by a three-ring stack
//! orbit with hover inspection.

pub mod config;
pub mod systems;
