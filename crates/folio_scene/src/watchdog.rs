//! One-shot frame rate measurement
//!
//! The watchdog accumulates frame deltas for a fixed window after the scene
//! starts rendering and evaluates exactly once. It never re-arms within a
//! session: dips after the first window are intentionally ignored.

use crate::quality::QualityTier;

/// Length of the sampling window in seconds.
pub const SAMPLE_WINDOW_SECS: f32 = 2.1;

/// Per-frame delta cap; shields the average from a single stalled frame.
const MAX_FRAME_DELTA: f32 = 0.25;

/// Outcome of a completed measurement window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WatchdogVerdict {
    /// Sustained fps met the tier's floor.
    Healthy { fps: f32 },
    /// Sustained fps fell below the tier's floor; one downgrade is due.
    Dip { fps: f32 },
}

/// Accumulates frame timing and renders a verdict once per session.
#[derive(Clone, Copy, Debug)]
pub struct PerformanceWatchdog {
    /// Clamped time accumulated so far; closes the window and feeds the
    /// fps average.
    elapsed: f32,
    frames: u32,
    evaluated: bool,
}

impl Default for PerformanceWatchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceWatchdog {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            frames: 0,
            evaluated: false,
        }
    }

    /// Whether the single measurement pass has already run.
    #[inline]
    pub fn evaluated(&self) -> bool {
        self.evaluated
    }

    /// Feed one frame delta; returns a verdict when the window closes.
    ///
    /// Returns `None` while sampling, after evaluation, and always at the
    /// Low tier (which has no dip threshold).
    pub fn sample(&mut self, tier: QualityTier, delta: f32) -> Option<WatchdogVerdict> {
        let threshold = tier.dip_threshold()?;
        if self.evaluated {
            return None;
        }

        let dt = delta.min(MAX_FRAME_DELTA);
        self.elapsed += dt;
        self.frames += 1;

        if self.elapsed < SAMPLE_WINDOW_SECS {
            return None;
        }

        self.evaluated = true;
        let fps = self.frames as f32 / self.elapsed.max(0.001);

        if fps < threshold {
            log::warn!("sustained {:.1} fps below {:.0} fps floor", fps, threshold);
            Some(WatchdogVerdict::Dip { fps })
        } else {
            log::debug!("sustained {:.1} fps, tier holds", fps);
            Some(WatchdogVerdict::Healthy { fps })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the watchdog at a steady frame rate until it produces a verdict.
    fn run_at(watchdog: &mut PerformanceWatchdog, tier: QualityTier, fps: f32, frames: u32) -> Vec<WatchdogVerdict> {
        let dt = 1.0 / fps;
        (0..frames).filter_map(|_| watchdog.sample(tier, dt)).collect()
    }

    #[test]
    fn test_healthy_at_60fps_high_tier() {
        let mut wd = PerformanceWatchdog::new();
        let verdicts = run_at(&mut wd, QualityTier::High, 60.0, 300);
        assert_eq!(verdicts.len(), 1);
        assert!(matches!(verdicts[0], WatchdogVerdict::Healthy { fps } if fps > 52.0));
    }

    #[test]
    fn test_sustained_30fps_dips_exactly_once() {
        // Sustained 30 fps for the full window at High: exactly one dip,
        // never a cascade within the same measurement pass.
        let mut wd = PerformanceWatchdog::new();
        let verdicts = run_at(&mut wd, QualityTier::High, 30.0, 600);
        assert_eq!(verdicts.len(), 1);
        assert!(matches!(verdicts[0], WatchdogVerdict::Dip { .. }));
        assert!(wd.evaluated());
    }

    #[test]
    fn test_medium_threshold_is_45() {
        let mut wd = PerformanceWatchdog::new();
        let verdicts = run_at(&mut wd, QualityTier::Medium, 48.0, 300);
        assert!(matches!(verdicts[0], WatchdogVerdict::Healthy { .. }));

        let mut wd = PerformanceWatchdog::new();
        let verdicts = run_at(&mut wd, QualityTier::Medium, 40.0, 300);
        assert!(matches!(verdicts[0], WatchdogVerdict::Dip { .. }));
    }

    #[test]
    fn test_low_tier_never_measures() {
        let mut wd = PerformanceWatchdog::new();
        let verdicts = run_at(&mut wd, QualityTier::Low, 10.0, 1000);
        assert!(verdicts.is_empty());
        assert!(!wd.evaluated());
    }

    #[test]
    fn test_window_closes_near_2_1_seconds() {
        let mut wd = PerformanceWatchdog::new();
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        let mut fired_at = None;
        for _ in 0..300 {
            elapsed += dt;
            if wd.sample(QualityTier::High, dt).is_some() {
                fired_at = Some(elapsed);
                break;
            }
        }
        let fired_at = fired_at.expect("window never closed");
        assert!(fired_at >= SAMPLE_WINDOW_SECS);
        assert!(fired_at < SAMPLE_WINDOW_SECS + 0.1);
    }

    #[test]
    fn test_never_reevaluates_after_window() {
        let mut wd = PerformanceWatchdog::new();
        run_at(&mut wd, QualityTier::High, 30.0, 600);
        // A later, even worse dip is ignored for the rest of the session.
        let verdicts = run_at(&mut wd, QualityTier::High, 5.0, 600);
        assert!(verdicts.is_empty());
    }

    #[test]
    fn test_stalled_frame_delta_is_clamped() {
        let mut wd = PerformanceWatchdog::new();
        // One 3-second stall must not close the window by itself with a
        // bogus 0.3 fps average.
        let verdict = wd.sample(QualityTier::High, 3.0);
        assert!(verdict.is_none());
        assert!(!wd.evaluated());
    }

    #[test]
    fn test_average_spans_the_clamped_stall() {
        // The stall's clamped quarter second counts toward both the window
        // close and the fps denominator, so a single hiccup inside an
        // otherwise steady 60 fps run stays healthy at Medium.
        let mut wd = PerformanceWatchdog::new();
        assert!(wd.sample(QualityTier::Medium, 3.0).is_none());
        let verdicts = run_at(&mut wd, QualityTier::Medium, 60.0, 300);
        assert_eq!(verdicts.len(), 1);
        assert!(matches!(verdicts[0], WatchdogVerdict::Healthy { fps } if fps > 45.0));
    }
}
