//! Quality tiers, presets, and the device capability heuristic
//!
//! Tier selection is a pure function of five static device signals sampled
//! once at startup. Presets fix every fidelity knob for a tier; nothing is
//! scaled continuously at runtime, so a downgrade is a single discrete
//! rebuild.

use serde::{Deserialize, Serialize};

/// Rendering fidelity tier for the preloader scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl QualityTier {
    /// The next tier down, or `None` at the floor.
    pub fn downgraded(self) -> Option<QualityTier> {
        match self {
            QualityTier::High => Some(QualityTier::Medium),
            QualityTier::Medium => Some(QualityTier::Low),
            QualityTier::Low => None,
        }
    }

    /// Sustained-fps floor below which this tier reports a dip.
    ///
    /// Low never dips: there is nowhere further down to go.
    pub fn dip_threshold(self) -> Option<f32> {
        match self {
            QualityTier::High => Some(52.0),
            QualityTier::Medium => Some(45.0),
            QualityTier::Low => None,
        }
    }
}

/// Fixed fidelity knobs for one tier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScenePreset {
    /// Min/max render resolution scale relative to the window.
    pub resolution_scale: [f32; 2],
    pub disk_layers: u32,
    pub disk_segments: u32,
    pub swirl_particles: u32,
    pub infall_particles: u32,
    pub star_particles: u32,
    pub ring_segments: u32,
    pub singularity_segments: u32,
    pub antialias: bool,
}

impl ScenePreset {
    /// The preset for a tier. Counts and segment values are fixed.
    pub fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::Low => Self {
                resolution_scale: [0.7, 1.05],
                disk_layers: 3,
                disk_segments: 96,
                swirl_particles: 330,
                infall_particles: 92,
                star_particles: 300,
                ring_segments: 160,
                singularity_segments: 48,
                antialias: false,
            },
            QualityTier::Medium => Self {
                resolution_scale: [0.85, 1.4],
                disk_layers: 5,
                disk_segments: 132,
                swirl_particles: 620,
                infall_particles: 164,
                star_particles: 620,
                ring_segments: 212,
                singularity_segments: 64,
                antialias: true,
            },
            QualityTier::High => Self {
                resolution_scale: [1.0, 1.85],
                disk_layers: 7,
                disk_segments: 168,
                swirl_particles: 920,
                infall_particles: 224,
                star_particles: 960,
                ring_segments: 256,
                singularity_segments: 80,
                antialias: true,
            },
        }
    }

    /// Total particle budget across all three fields.
    pub fn total_particles(&self) -> u32 {
        self.swirl_particles + self.infall_particles + self.star_particles
    }

    /// The device pixel ratio clamped into this preset's render range.
    ///
    /// The renderer sizes its scene target at `clamped / actual` of the
    /// surface, so low tiers render under native resolution and high tiers
    /// may supersample low-density displays.
    pub fn clamped_pixel_ratio(&self, pixel_ratio: f32) -> f32 {
        pixel_ratio.clamp(self.resolution_scale[0], self.resolution_scale[1])
    }

    /// Multisample count for the scene target: 4x when antialiasing, else
    /// a plain single-sample target.
    pub fn msaa_samples(&self) -> u32 {
        if self.antialias {
            4
        } else {
            1
        }
    }
}

/// Static device capability signals, sampled once at startup.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Coarse pointer (touch) rather than a fine pointer.
    pub coarse_pointer: bool,
    /// Logical viewport width in pixels.
    pub viewport_width: f32,
    /// Device memory in GiB.
    pub memory_gb: f32,
    /// Logical CPU core count.
    pub logical_cores: u32,
    /// Device pixel ratio.
    pub pixel_ratio: f32,
}

/// Pick the starting tier from a device profile.
///
/// Pure function: the same five signals always produce the same tier.
pub fn pick_tier(profile: &DeviceProfile) -> QualityTier {
    let phone_viewport = profile.viewport_width <= 640.0;
    let compact_viewport = profile.viewport_width <= 980.0;

    if profile.coarse_pointer
        || phone_viewport
        || profile.memory_gb <= 4.0
        || profile.logical_cores <= 4
        || profile.pixel_ratio >= 2.6
    {
        return QualityTier::Low;
    }

    if !compact_viewport
        && profile.memory_gb >= 8.0
        && profile.logical_cores >= 10
        && profile.pixel_ratio <= 2.1
    {
        return QualityTier::High;
    }

    QualityTier::Medium
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workstation() -> DeviceProfile {
        DeviceProfile {
            coarse_pointer: false,
            viewport_width: 1920.0,
            memory_gb: 16.0,
            logical_cores: 12,
            pixel_ratio: 1.0,
        }
    }

    #[test]
    fn test_workstation_gets_high() {
        assert_eq!(pick_tier(&workstation()), QualityTier::High);
    }

    #[test]
    fn test_tier_selection_is_deterministic() {
        let profile = workstation();
        let first = pick_tier(&profile);
        for _ in 0..10 {
            assert_eq!(pick_tier(&profile), first);
        }
    }

    #[test]
    fn test_coarse_pointer_forces_low() {
        let mut p = workstation();
        p.coarse_pointer = true;
        assert_eq!(pick_tier(&p), QualityTier::Low);
    }

    #[test]
    fn test_phone_viewport_forces_low() {
        let mut p = workstation();
        p.viewport_width = 640.0;
        assert_eq!(pick_tier(&p), QualityTier::Low);
    }

    #[test]
    fn test_low_memory_or_cores_force_low() {
        let mut p = workstation();
        p.memory_gb = 4.0;
        assert_eq!(pick_tier(&p), QualityTier::Low);

        let mut p = workstation();
        p.logical_cores = 4;
        assert_eq!(pick_tier(&p), QualityTier::Low);
    }

    #[test]
    fn test_extreme_pixel_ratio_forces_low() {
        let mut p = workstation();
        p.pixel_ratio = 2.6;
        assert_eq!(pick_tier(&p), QualityTier::Low);
    }

    #[test]
    fn test_middle_ground_gets_medium() {
        // Decent machine, compact viewport
        let mut p = workstation();
        p.viewport_width = 960.0;
        assert_eq!(pick_tier(&p), QualityTier::Medium);

        // Wide viewport but modest cores
        let mut p = workstation();
        p.logical_cores = 8;
        assert_eq!(pick_tier(&p), QualityTier::Medium);

        // High pixel ratio but not extreme
        let mut p = workstation();
        p.pixel_ratio = 2.2;
        assert_eq!(pick_tier(&p), QualityTier::Medium);
    }

    #[test]
    fn test_downgrade_chain_bottoms_out() {
        assert_eq!(QualityTier::High.downgraded(), Some(QualityTier::Medium));
        assert_eq!(QualityTier::Medium.downgraded(), Some(QualityTier::Low));
        assert_eq!(QualityTier::Low.downgraded(), None);
    }

    #[test]
    fn test_dip_thresholds() {
        assert_eq!(QualityTier::High.dip_threshold(), Some(52.0));
        assert_eq!(QualityTier::Medium.dip_threshold(), Some(45.0));
        assert_eq!(QualityTier::Low.dip_threshold(), None);
    }

    #[test]
    fn test_presets_scale_with_tier() {
        let low = ScenePreset::for_tier(QualityTier::Low);
        let medium = ScenePreset::for_tier(QualityTier::Medium);
        let high = ScenePreset::for_tier(QualityTier::High);

        assert!(low.total_particles() < medium.total_particles());
        assert!(medium.total_particles() < high.total_particles());
        assert_eq!(high.disk_layers, 7);
        assert_eq!(low.disk_layers, 3);
        assert!(!low.antialias);
    }

    #[test]
    fn test_pixel_ratio_clamped_to_preset_range() {
        let low = ScenePreset::for_tier(QualityTier::Low);
        // A retina display renders under native resolution at Low
        assert_eq!(low.clamped_pixel_ratio(2.0), 1.05);
        // A plain 1x display is pushed up to the range floor
        assert!((low.clamped_pixel_ratio(0.5) - 0.7).abs() < 1e-6);

        let high = ScenePreset::for_tier(QualityTier::High);
        // In-range ratios pass through untouched
        assert_eq!(high.clamped_pixel_ratio(1.5), 1.5);
        assert_eq!(high.clamped_pixel_ratio(3.0), 1.85);
    }

    #[test]
    fn test_msaa_follows_antialias_flag() {
        assert_eq!(ScenePreset::for_tier(QualityTier::Low).msaa_samples(), 1);
        assert_eq!(ScenePreset::for_tier(QualityTier::Medium).msaa_samples(), 4);
        assert_eq!(ScenePreset::for_tier(QualityTier::High).msaa_samples(), 4);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(QualityTier::Low < QualityTier::Medium);
        assert!(QualityTier::Medium < QualityTier::High);
    }
}
