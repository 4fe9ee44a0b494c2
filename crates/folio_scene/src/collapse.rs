//! The preloader beat sheet
//!
//! A fixed choreography evaluated as pure functions of elapsed time: scene
//! fade-in, overlay and boot-line beats, the quartic collapse of the event
//! horizon, and the final fade to the portfolio. Callers sample it each
//! frame; there is no internal clock.

use folio_orbit::ease;

/// When the collapse begins, seconds from preloader start.
pub const COLLAPSE_START: f32 = 5.5;

/// Duration of the collapse ramp (progress 0 to 1).
pub const COLLAPSE_DURATION: f32 = 1.72;

/// When the full-screen fade-out begins.
pub const FADE_START: f32 = 6.86;

/// Duration of the fade-out.
pub const FADE_DURATION: f32 = 0.9;

/// Hard visibility cap on phone-sized viewports.
pub const MAX_VISIBLE_PHONE: f32 = 7.0;

/// Hard visibility cap elsewhere.
pub const MAX_VISIBLE_DEFAULT: f32 = 8.2;

/// First boot line entrance time; later lines stagger by [`BOOT_LINE_STAGGER`].
const BOOT_LINE_START: f32 = 1.36;
const BOOT_LINE_STAGGER: f32 = 0.56;
const BOOT_LINE_IN: f32 = 0.66;
const BOOT_LINE_HOLD: f32 = 1.34;
const BOOT_LINE_OUT: f32 = 0.48;

/// Coarse phase of the preloader, for state handling in the app shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelinePhase {
    /// Scene and overlay entering, boot lines cycling.
    Booting,
    /// Event horizon collapsing inward.
    Collapsing,
    /// Full-screen fade to the portfolio.
    FadingOut,
    /// Preloader is gone.
    Done,
}

/// Pure-time evaluation of the preloader choreography.
#[derive(Clone, Copy, Debug)]
pub struct CollapseTimeline {
    max_visible: f32,
}

impl CollapseTimeline {
    /// Build the timeline; phone viewports get the shorter visibility cap.
    pub fn new(phone_viewport: bool) -> Self {
        Self {
            max_visible: if phone_viewport {
                MAX_VISIBLE_PHONE
            } else {
                MAX_VISIBLE_DEFAULT
            },
        }
    }

    /// Hard cap after which the preloader is forcibly dismissed.
    #[inline]
    pub fn max_visible_secs(&self) -> f32 {
        self.max_visible
    }

    /// Which coarse phase `t` falls in.
    pub fn phase(&self, t: f32) -> TimelinePhase {
        if self.finished(t) {
            TimelinePhase::Done
        } else if t >= FADE_START {
            TimelinePhase::FadingOut
        } else if t >= COLLAPSE_START {
            TimelinePhase::Collapsing
        } else {
            TimelinePhase::Booting
        }
    }

    /// Whether the preloader should be dismissed at `t`.
    pub fn finished(&self, t: f32) -> bool {
        t >= (FADE_START + FADE_DURATION).min(self.max_visible)
    }

    /// Scene entrance alpha: exponential ease over the first 1.35 s.
    pub fn scene_alpha(&self, t: f32) -> f32 {
        ease::expo_out(t / 1.35)
    }

    /// Collapse progress in [0, 1], quartic ease-in from [`COLLAPSE_START`].
    ///
    /// Drives the `uCollapse` shader uniform: disk sink, particle infall,
    /// ring dimming.
    pub fn collapse(&self, t: f32) -> f32 {
        ease::power_in((t - COLLAPSE_START) / COLLAPSE_DURATION, 4.0)
    }

    /// Scene zoom scale during the collapse (1.0 to 1.42).
    pub fn zoom(&self, t: f32) -> f32 {
        ease::lerp(1.0, 1.42, ease::power_in((t - 5.58) / 1.62, 4.0))
    }

    /// Whole-preloader opacity during the final fade.
    pub fn fade_alpha(&self, t: f32) -> f32 {
        1.0 - ease::clamp01((t - FADE_START) / FADE_DURATION)
    }

    /// Opacity of boot line `index` at `t`: staggered rise, hold, and exit.
    pub fn boot_line_alpha(&self, index: usize, t: f32) -> f32 {
        let start = BOOT_LINE_START + index as f32 * BOOT_LINE_STAGGER;
        let exit = start + BOOT_LINE_HOLD;
        if t < start {
            0.0
        } else if t < exit {
            ease::power_out((t - start) / BOOT_LINE_IN, 2.0)
        } else {
            1.0 - ease::clamp01((t - exit) / BOOT_LINE_OUT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_in_order() {
        let tl = CollapseTimeline::new(false);
        assert_eq!(tl.phase(0.5), TimelinePhase::Booting);
        assert_eq!(tl.phase(6.0), TimelinePhase::Collapsing);
        assert_eq!(tl.phase(7.0), TimelinePhase::FadingOut);
        assert_eq!(tl.phase(8.0), TimelinePhase::Done);
    }

    #[test]
    fn test_collapse_ramp() {
        let tl = CollapseTimeline::new(false);
        assert_eq!(tl.collapse(0.0), 0.0);
        assert_eq!(tl.collapse(COLLAPSE_START), 0.0);
        let mid = tl.collapse(COLLAPSE_START + COLLAPSE_DURATION * 0.5);
        // Quartic ease-in: well under linear at the midpoint
        assert!(mid > 0.0 && mid < 0.1);
        assert_eq!(tl.collapse(COLLAPSE_START + COLLAPSE_DURATION), 1.0);
        assert_eq!(tl.collapse(100.0), 1.0);
    }

    #[test]
    fn test_collapse_monotonic() {
        let tl = CollapseTimeline::new(false);
        let mut prev = 0.0;
        let mut t = 0.0;
        while t < 9.0 {
            let c = tl.collapse(t);
            assert!(c >= prev);
            prev = c;
            t += 1.0 / 60.0;
        }
    }

    #[test]
    fn test_finished_after_fade() {
        let tl = CollapseTimeline::new(false);
        assert!(!tl.finished(7.7));
        assert!(tl.finished(FADE_START + FADE_DURATION));
    }

    #[test]
    fn test_phone_cap_cuts_fade_short() {
        let tl = CollapseTimeline::new(true);
        assert_eq!(tl.max_visible_secs(), MAX_VISIBLE_PHONE);
        // The phone cap lands before the natural fade end
        assert!(tl.finished(7.0));

        let tl = CollapseTimeline::new(false);
        assert!(!tl.finished(7.0));
    }

    #[test]
    fn test_scene_alpha_settles_at_one() {
        let tl = CollapseTimeline::new(false);
        assert_eq!(tl.scene_alpha(0.0), 0.0);
        assert!(tl.scene_alpha(1.35) > 0.999);
    }

    #[test]
    fn test_fade_alpha_ramp() {
        let tl = CollapseTimeline::new(false);
        assert_eq!(tl.fade_alpha(FADE_START), 1.0);
        assert_eq!(tl.fade_alpha(FADE_START + FADE_DURATION), 0.0);
    }

    #[test]
    fn test_boot_lines_stagger() {
        let tl = CollapseTimeline::new(false);
        // Line 1 has not started when line 0 is rising
        assert!(tl.boot_line_alpha(0, 1.6) > 0.0);
        assert_eq!(tl.boot_line_alpha(1, 1.6), 0.0);
        // Each line eventually exits
        assert_eq!(tl.boot_line_alpha(0, 4.0), 0.0);
    }
}
