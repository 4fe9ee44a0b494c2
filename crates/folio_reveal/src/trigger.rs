//! Visibility triggers and reveal batches

use bitflags::bitflags;

use folio_orbit::ease;

/// Default trigger threshold: fire when the section top crosses 80% of the
/// viewport height ("top 80%").
pub const DEFAULT_THRESHOLD: f32 = 0.8;

bitflags! {
    /// Lifecycle flags for a reveal batch.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct BatchFlags: u8 {
        /// The trigger has fired; it never fires again this mount.
        const FIRED = 1 << 0;
        /// The entrance animation is still playing.
        const PLAYING = 1 << 1;
    }
}

/// A one-shot visibility trigger for one section.
#[derive(Clone, Copy, Debug)]
pub struct RevealTrigger {
    /// Document-space Y of the section top, logical pixels.
    pub section_top: f32,
    /// Fraction of the viewport height the section top must cross.
    pub threshold: f32,
}

impl RevealTrigger {
    pub fn new(section_top: f32) -> Self {
        Self {
            section_top,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Builder: override the viewport fraction.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Whether the section top is past the trigger line for this scroll
    /// position. Pure; the once-only bookkeeping lives in the batch flags.
    pub fn is_past(&self, scroll_y: f32, viewport_height: f32) -> bool {
        self.section_top <= scroll_y + viewport_height * self.threshold
    }
}

/// A batch of entrance animations for one section.
///
/// All targets share the same from-state (lifted down 26 px, alpha 0) and
/// enter with a power-2 ease-out, staggered in registration order.
#[derive(Clone, Debug)]
pub struct RevealBatch {
    /// Section name, for logging and lookups.
    pub name: String,
    pub trigger: RevealTrigger,
    /// Number of animation targets in this batch.
    pub target_count: usize,
    /// Entrance duration per target, seconds.
    pub duration: f32,
    /// Delay between consecutive targets, seconds.
    pub stagger: f32,
    /// Starting vertical offset, logical pixels.
    pub from_y: f32,
    pub flags: BatchFlags,
}

impl RevealBatch {
    pub fn new(name: impl Into<String>, trigger: RevealTrigger, target_count: usize) -> Self {
        Self {
            name: name.into(),
            trigger,
            target_count,
            duration: 0.62,
            stagger: 0.12,
            from_y: 26.0,
            flags: BatchFlags::empty(),
        }
    }

    /// Whether this batch has already fired this mount.
    #[inline]
    pub fn fired(&self) -> bool {
        self.flags.contains(BatchFlags::FIRED)
    }

    /// Total play time including the last target's stagger offset.
    pub fn total_duration(&self) -> f32 {
        self.duration + self.stagger * self.target_count.saturating_sub(1) as f32
    }

    /// Progress of target `index` at `t` seconds after the batch fired,
    /// eased. 0 = at from-state, 1 = settled.
    pub fn target_progress(&self, index: usize, t: f32) -> f32 {
        let local = t - self.stagger * index as f32;
        ease::power_out(local / self.duration, 2.0)
    }

    /// Eased (y offset, alpha) for target `index` at `t` after firing.
    pub fn target_state(&self, index: usize, t: f32) -> (f32, f32) {
        let p = self.target_progress(index, t);
        (self.from_y * (1.0 - p), p)
    }
}
