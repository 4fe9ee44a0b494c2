//! Per-section reveal registration and scroll evaluation

use crate::trigger::{BatchFlags, RevealBatch};

/// A batch that fired during the current scroll step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlay {
    /// Index into the choreographer's batch list.
    pub batch: usize,
    pub name: String,
}

/// Owns every section's reveal batch and evaluates them against scroll
/// position. Sections are independent; firing order is purely whichever
/// trigger lines the scroll position has crossed.
pub struct Choreographer {
    batches: Vec<RevealBatch>,
    reduced_motion: bool,
}

impl Choreographer {
    /// `reduced_motion` is sampled once by the caller at mount. When set,
    /// registration is a no-op and nothing ever animates.
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            batches: Vec::new(),
            reduced_motion,
        }
    }

    /// Register one section's batch. Returns the batch index, or `None`
    /// under reduced motion (the section renders in its settled state).
    pub fn register(&mut self, batch: RevealBatch) -> Option<usize> {
        if self.reduced_motion {
            return None;
        }
        self.batches.push(batch);
        Some(self.batches.len() - 1)
    }

    /// Number of registered batches. Zero under reduced motion.
    #[inline]
    pub fn registered(&self) -> usize {
        self.batches.len()
    }

    /// Access a batch by index.
    pub fn batch(&self, index: usize) -> Option<&RevealBatch> {
        self.batches.get(index)
    }

    /// Evaluate all triggers for the new scroll position.
    ///
    /// Returns the batches that fired during this step. Idempotent: a batch
    /// fires at most once per mount, so scrolling away and back replays
    /// nothing.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) -> Vec<RevealPlay> {
        let mut fired = Vec::new();
        for (index, batch) in self.batches.iter_mut().enumerate() {
            if batch.fired() {
                continue;
            }
            if batch.trigger.is_past(scroll_y, viewport_height) {
                batch.flags.insert(BatchFlags::FIRED | BatchFlags::PLAYING);
                fired.push(RevealPlay {
                    batch: index,
                    name: batch.name.clone(),
                });
            }
        }
        fired
    }

    /// Clear the PLAYING flag on batches whose animations have run out.
    pub fn settle(&mut self, batch: usize) {
        if let Some(b) = self.batches.get_mut(batch) {
            b.flags.remove(BatchFlags::PLAYING);
        }
    }
}
