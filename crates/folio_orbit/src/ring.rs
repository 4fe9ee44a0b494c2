//! Ring motion configuration and per-frame phase state
//!
//! Each of the three rings carries a fixed base angular velocity (expressed
//! as seconds per revolution), a rotation direction, and a radius. The only
//! mutable state is [`RingState`]: a phase angle plus a damped time-scale
//! multiplier used to slow rotation while a node is inspected.

use serde::{Deserialize, Serialize};

/// Smoothing gain for the time-scale damping.
///
/// `time_scale += (target - time_scale) * min(1, dt * GAIN)` per frame.
pub const TIME_SCALE_GAIN: f32 = 7.2;

/// Global time-scale target while a node is inspected.
pub const SLOWDOWN_TARGET: f32 = 0.26;

/// Identifier for one of the three concentric rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingId {
    /// Inner ring: core stack.
    R1,
    /// Middle ring: infrastructure.
    R2,
    /// Outer ring: tools and support.
    R3,
}

impl RingId {
    /// All rings, inner to outer.
    pub const ALL: [RingId; 3] = [RingId::R1, RingId::R2, RingId::R3];

    /// Stable index in 0..3.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RingId::R1 => 0,
            RingId::R2 => 1,
            RingId::R3 => 2,
        }
    }
}

/// Fixed motion parameters for a single ring.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RingMotion {
    /// Seconds per full revolution at time scale 1.0.
    pub period_secs: f32,
    /// Rotation direction: +1.0 clockwise, -1.0 counter-clockwise.
    pub direction: f32,
    /// Orbit radius in logical pixels.
    pub radius: f32,
}

impl RingMotion {
    /// Default motion for a ring, matching the shipped layout.
    pub fn preset(ring: RingId) -> Self {
        match ring {
            RingId::R1 => Self { period_secs: 18.0, direction: 1.0, radius: 116.0 },
            RingId::R2 => Self { period_secs: 32.0, direction: -1.0, radius: 168.0 },
            RingId::R3 => Self { period_secs: 60.0, direction: 1.0, radius: 224.0 },
        }
    }

    /// Base angular velocity in degrees per second (unsigned).
    #[inline]
    pub fn degrees_per_second(&self) -> f32 {
        360.0 / self.period_secs
    }
}

/// Mutable per-ring animation state.
///
/// Kept as an explicit small struct so the simulation can be advanced and
/// asserted on without any rendering context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingState {
    /// Current rotational offset in degrees, wrapped to [0, 360).
    pub phase_deg: f32,
    /// Damped multiplier on the ring's angular velocity.
    pub time_scale: f32,
    /// Value `time_scale` is being damped toward.
    pub target_scale: f32,
}

impl RingState {
    /// Create a state with the given starting phase.
    pub fn with_phase(phase_deg: f32) -> Self {
        Self {
            phase_deg,
            time_scale: 1.0,
            target_scale: 1.0,
        }
    }

    /// Starting phase for a ring. The rings are deliberately de-synced so
    /// node clusters never line up at mount.
    pub fn preset(ring: RingId) -> Self {
        match ring {
            RingId::R1 => Self::with_phase(16.0),
            RingId::R2 => Self::with_phase(140.0),
            RingId::R3 => Self::with_phase(246.0),
        }
    }

    /// Advance the ring by one frame.
    ///
    /// The time scale is first damped toward its target, then the phase is
    /// advanced by `velocity * direction * time_scale * dt`. The damping
    /// factor is capped at 1 so a huge dt can never overshoot the target.
    pub fn advance(&mut self, motion: &RingMotion, speed_factor: f32, dt: f32) {
        let blend = (dt * TIME_SCALE_GAIN).min(1.0);
        self.time_scale += (self.target_scale - self.time_scale) * blend;

        let deg_per_sec =
            motion.degrees_per_second() * speed_factor * motion.direction * self.time_scale;
        self.phase_deg = (self.phase_deg + deg_per_sec * dt).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_index() {
        assert_eq!(RingId::R1.index(), 0);
        assert_eq!(RingId::R2.index(), 1);
        assert_eq!(RingId::R3.index(), 2);
    }

    #[test]
    fn test_motion_presets() {
        let m1 = RingMotion::preset(RingId::R1);
        let m2 = RingMotion::preset(RingId::R2);
        let m3 = RingMotion::preset(RingId::R3);

        assert_eq!(m1.period_secs, 18.0);
        assert_eq!(m2.direction, -1.0);
        assert_eq!(m3.radius, 224.0);
        assert!((m1.degrees_per_second() - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_phase_advances_with_direction() {
        let motion = RingMotion::preset(RingId::R1);
        let mut state = RingState::with_phase(0.0);
        state.advance(&motion, 1.0, 0.5);
        // 20 deg/s for half a second
        assert!((state.phase_deg - 10.0).abs() < 1e-4);

        let motion = RingMotion::preset(RingId::R2);
        let mut state = RingState::with_phase(0.0);
        state.advance(&motion, 1.0, 0.5);
        // Counter-clockwise ring wraps below zero
        assert!(state.phase_deg > 350.0);
    }

    #[test]
    fn test_phase_wraps_to_unit_circle() {
        let motion = RingMotion::preset(RingId::R1);
        let mut state = RingState::with_phase(359.0);
        for _ in 0..100 {
            state.advance(&motion, 1.0, 0.1);
            assert!(state.phase_deg >= 0.0 && state.phase_deg < 360.0);
        }
    }

    #[test]
    fn test_time_scale_approaches_target_monotonically() {
        let motion = RingMotion::preset(RingId::R1);
        let mut state = RingState::with_phase(0.0);
        state.target_scale = SLOWDOWN_TARGET;

        let mut prev = state.time_scale;
        for _ in 0..600 {
            state.advance(&motion, 1.0, 1.0 / 60.0);
            // Never overshoots and never reverses direction
            assert!(state.time_scale <= prev + 1e-6);
            assert!(state.time_scale >= SLOWDOWN_TARGET - 1e-6);
            prev = state.time_scale;
        }
        assert!((state.time_scale - SLOWDOWN_TARGET).abs() < 1e-3);
    }

    #[test]
    fn test_time_scale_no_overshoot_on_huge_dt() {
        let motion = RingMotion::preset(RingId::R1);
        let mut state = RingState::with_phase(0.0);
        state.target_scale = SLOWDOWN_TARGET;

        // dt * GAIN >> 1: the blend factor caps at 1 and lands exactly on
        // the target instead of oscillating past it.
        state.advance(&motion, 1.0, 5.0);
        assert!((state.time_scale - SLOWDOWN_TARGET).abs() < 1e-6);
    }

    #[test]
    fn test_time_scale_recovers_upward_monotonically() {
        let motion = RingMotion::preset(RingId::R3);
        let mut state = RingState::with_phase(0.0);
        state.time_scale = SLOWDOWN_TARGET;
        state.target_scale = 1.0;

        let mut prev = state.time_scale;
        for _ in 0..600 {
            state.advance(&motion, 1.0, 1.0 / 60.0);
            assert!(state.time_scale >= prev - 1e-6);
            assert!(state.time_scale <= 1.0 + 1e-6);
            prev = state.time_scale;
        }
        assert!((state.time_scale - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_slowdown_shrinks_phase_step() {
        let motion = RingMotion::preset(RingId::R1);

        let mut fast = RingState::with_phase(0.0);
        fast.advance(&motion, 1.0, 1.0 / 60.0);

        let mut slow = RingState::with_phase(0.0);
        slow.time_scale = SLOWDOWN_TARGET;
        slow.target_scale = SLOWDOWN_TARGET;
        slow.advance(&motion, 1.0, 1.0 / 60.0);

        assert!(slow.phase_deg < fast.phase_deg);
    }
}
