//! Scroll-Triggered Reveal Choreography
//!
//! Declarative batches of entrance animations keyed to element visibility
//! as the page scrolls. Each section registers its own trigger
//! independently; there is no cross-section sequencing or shared timeline.
//! A trigger fires at most once per mount, and nothing at all is
//! registered when the user prefers reduced motion.

mod choreographer;
mod trigger;

pub use choreographer::{Choreographer, RevealPlay};
pub use trigger::{BatchFlags, RevealBatch, RevealTrigger, DEFAULT_THRESHOLD};
