//! Presentation tiers derived from viewport width
//!
//! The orbit runs full-speed on desktop, slightly slower and tighter on
//! tablet, and is replaced by a static grid on mobile.

use serde::{Deserialize, Serialize};

/// Viewport width below which the mobile tier applies.
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

/// Viewport width below which the tablet tier applies.
pub const TABLET_MAX_WIDTH: f32 = 1120.0;

/// Presentation tier for the orbit section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Desktop,
    Tablet,
    Mobile,
}

impl ViewMode {
    /// Derive the tier from the logical viewport width in pixels.
    pub fn from_width(width: f32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            ViewMode::Mobile
        } else if width < TABLET_MAX_WIDTH {
            ViewMode::Tablet
        } else {
            ViewMode::Desktop
        }
    }

    /// Multiplier on ring angular velocity for this tier.
    #[inline]
    pub fn speed_factor(self) -> f32 {
        match self {
            ViewMode::Tablet => 0.86,
            _ => 1.0,
        }
    }

    /// Multiplier on ring radii for this tier.
    #[inline]
    pub fn radius_scale(self) -> f32 {
        match self {
            ViewMode::Tablet => 0.82,
            _ => 1.0,
        }
    }

    /// Whether the orbit animation runs at all in this tier.
    #[inline]
    pub fn animates(self) -> bool {
        self != ViewMode::Mobile
    }
}
