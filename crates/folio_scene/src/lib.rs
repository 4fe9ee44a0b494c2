//! Preloader scene model
//!
//! This crate models everything about the preloader's "event horizon"
//! scene that does not require a GPU: quality tier selection, the one-shot
//! performance watchdog, the monotonic quality governor, the collapse
//! choreography timeline, procedural particle field seeding, and the
//! damped camera rig. The render crate consumes these to drive wgpu.
//!
//! ## Quality Adaptation
//!
//! - [`QualityTier`] / [`ScenePreset`] - Three fixed fidelity presets
//! - [`DeviceProfile`] / [`pick_tier`] - Pure capability heuristic
//! - [`PerformanceWatchdog`] - Single 2.1 s fps measurement per session
//! - [`QualityGovernor`] - One-way downgrades with a dip cooldown
//!
//! ## Choreography
//!
//! - [`CollapseTimeline`] - The boot/collapse/fade beat sheet
//! - [`CameraRig`] - Pointer-following eye with exponential damping

mod collapse;
pub mod field;
mod governor;
mod quality;
mod rig;
mod watchdog;

pub use collapse::{CollapseTimeline, TimelinePhase};
pub use governor::QualityGovernor;
pub use quality::{pick_tier, DeviceProfile, QualityTier, ScenePreset};
pub use rig::CameraRig;
pub use watchdog::{PerformanceWatchdog, WatchdogVerdict};
