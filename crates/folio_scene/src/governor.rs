//! Monotonic quality control
//!
//! The governor owns the session's current tier. Dip reports step the tier
//! down exactly one level; a cooldown swallows re-entrant reports from the
//! same dip. There is no upgrade path within a session.

use crate::quality::QualityTier;

/// Seconds during which further dip reports are ignored after a downgrade.
pub const DOWNGRADE_COOLDOWN_SECS: f32 = 1.5;

/// One-directional tier controller.
#[derive(Clone, Copy, Debug)]
pub struct QualityGovernor {
    tier: QualityTier,
    cooldown: f32,
    downgrades: u32,
}

impl QualityGovernor {
    /// Start the session at the heuristically chosen tier.
    pub fn new(tier: QualityTier) -> Self {
        Self {
            tier,
            cooldown: 0.0,
            downgrades: 0,
        }
    }

    /// The tier currently in force.
    #[inline]
    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Number of downgrades applied this session.
    #[inline]
    pub fn downgrades(&self) -> u32 {
        self.downgrades
    }

    /// Advance the cooldown clock.
    pub fn tick(&mut self, dt: f32) {
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
        }
    }

    /// Handle a dip report from the watchdog.
    ///
    /// Returns the new tier when a downgrade is applied. Reports during the
    /// cooldown, or at the Low floor, are ignored.
    pub fn report_dip(&mut self) -> Option<QualityTier> {
        if self.cooldown > 0.0 {
            return None;
        }

        let next = self.tier.downgraded()?;
        self.tier = next;
        self.cooldown = DOWNGRADE_COOLDOWN_SECS;
        self.downgrades += 1;
        log::info!("quality downgraded to {:?}", next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_downgrade() {
        let mut gov = QualityGovernor::new(QualityTier::High);
        assert_eq!(gov.report_dip(), Some(QualityTier::Medium));
        assert_eq!(gov.tier(), QualityTier::Medium);
        assert_eq!(gov.downgrades(), 1);
    }

    #[test]
    fn test_cooldown_swallows_reentrant_dips() {
        let mut gov = QualityGovernor::new(QualityTier::High);
        assert!(gov.report_dip().is_some());
        // Same dip reporting again immediately: ignored.
        assert!(gov.report_dip().is_none());
        gov.tick(1.0);
        assert!(gov.report_dip().is_none());
        // Cooldown expired: a genuine new dip may step down again.
        gov.tick(0.6);
        assert_eq!(gov.report_dip(), Some(QualityTier::Low));
    }

    #[test]
    fn test_low_is_the_floor() {
        let mut gov = QualityGovernor::new(QualityTier::Low);
        assert!(gov.report_dip().is_none());
        assert_eq!(gov.tier(), QualityTier::Low);
        assert_eq!(gov.downgrades(), 0);
    }

    #[test]
    fn test_never_upgrades() {
        let mut gov = QualityGovernor::new(QualityTier::High);
        gov.report_dip();
        let tier_after = gov.tier();
        // Ticking for a long stretch never moves the tier back up.
        for _ in 0..10_000 {
            gov.tick(1.0 / 60.0);
        }
        assert_eq!(gov.tier(), tier_after);
    }

    #[test]
    fn test_tier_only_ever_decreases() {
        let mut gov = QualityGovernor::new(QualityTier::High);
        let mut prev = gov.tier();
        for i in 0..500 {
            gov.tick(0.01);
            if i % 37 == 0 {
                gov.report_dip();
            }
            assert!(gov.tier() <= prev);
            prev = gov.tier();
        }
    }
}
