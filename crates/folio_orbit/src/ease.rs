//! Easing curves and damping helpers
//!
//! Small pure functions shared by the orbit, scene, and reveal crates.
//! All curves map t in [0, 1] to [0, 1] and clamp outside that range.

/// Clamp t into the unit interval.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Polynomial ease-in: t^n.
#[inline]
pub fn power_in(t: f32, n: f32) -> f32 {
    clamp01(t).powf(n)
}

/// Polynomial ease-out: 1 - (1 - t)^n.
#[inline]
pub fn power_out(t: f32, n: f32) -> f32 {
    1.0 - (1.0 - clamp01(t)).powf(n)
}

/// Exponential ease-out. Very fast start, long settle.
#[inline]
pub fn expo_out(t: f32) -> f32 {
    let t = clamp01(t);
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0f32.powf(-10.0 * t)
    }
}

/// Sinusoidal ease-in-out.
#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    0.5 - 0.5 * (std::f32::consts::PI * t).cos()
}

/// Framerate-independent damping factor for lerping toward a target.
///
/// `1 - exp(-dt * gain)` approaches 1 as dt grows, so a lerp using this
/// factor converges at the same rate regardless of frame cadence.
#[inline]
pub fn damp(dt: f32, gain: f32) -> f32 {
    1.0 - (-dt * gain).exp()
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_endpoints() {
        assert_eq!(power_in(0.0, 4.0), 0.0);
        assert_eq!(power_in(1.0, 4.0), 1.0);
        assert_eq!(power_out(0.0, 2.0), 0.0);
        assert_eq!(power_out(1.0, 2.0), 1.0);
    }

    #[test]
    fn test_power_in_is_slow_start() {
        assert!(power_in(0.5, 4.0) < 0.5);
        assert!(power_out(0.5, 4.0) > 0.5);
    }

    #[test]
    fn test_expo_out_endpoints() {
        assert_eq!(expo_out(0.0), 0.0);
        assert_eq!(expo_out(1.0), 1.0);
        assert!(expo_out(0.3) > 0.8);
    }

    #[test]
    fn test_sine_in_out_midpoint() {
        assert!((sine_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(sine_in_out(0.0), 0.0);
        assert!((sine_in_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamping_outside_unit_range() {
        assert_eq!(power_in(-1.0, 2.0), 0.0);
        assert_eq!(power_in(2.0, 2.0), 1.0);
        assert_eq!(sine_in_out(7.0), sine_in_out(1.0));
    }

    #[test]
    fn test_damp_monotonic_in_dt() {
        let a = damp(1.0 / 120.0, 3.5);
        let b = damp(1.0 / 60.0, 3.5);
        let c = damp(1.0 / 30.0, 3.5);
        assert!(a < b && b < c);
        assert!(c < 1.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }
}
