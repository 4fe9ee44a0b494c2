//! Procedural particle field seeding
//!
//! Seeds for the three particle fields of the preloader scene. Each seed is
//! a Pod struct uploaded once as a vertex/instance buffer; all per-frame
//! motion happens in the shaders from `uTime`/`uCollapse`, so the CPU never
//! touches these again after upload.

use bytemuck::{Pod, Zeroable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed attributes for one swirl (accretion flow) particle.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SwirlSeed {
    pub radius: f32,
    pub angle: f32,
    pub height: f32,
    pub speed: f32,
    pub size: f32,
    pub hue_mix: f32,
}

/// Seed attributes for one infalling streak particle.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct InfallSeed {
    pub radius: f32,
    pub angle: f32,
    pub phase: f32,
    pub speed: f32,
    pub size: f32,
    pub height: f32,
}

/// A background star: static position plus a cool-white tint.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarSeed {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub color: [f32; 3],
    pub _pad1: f32,
}

const TAU: f32 = std::f32::consts::TAU;

/// Uniform sample in [lo, hi).
fn rand_range(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    rng.random_range(lo..hi)
}

/// Uniform sample in [-spread/2, spread/2).
fn rand_spread(rng: &mut StdRng, spread: f32) -> f32 {
    rng.random_range(-spread * 0.5..spread * 0.5)
}

/// Seed the swirl field.
///
/// Radii are biased inward with a 0.35 power so density rises toward the
/// horizon; speed falls off with radius (inner orbits are faster).
pub fn seed_swirl(count: u32, seed: u64) -> Vec<SwirlSeed> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let radius = rand_range(&mut rng, 1.7, 8.7) * rng.random::<f32>().powf(0.35);
            SwirlSeed {
                radius,
                angle: rand_range(&mut rng, 0.0, TAU),
                height: rand_spread(&mut rng, 0.6) * (radius / 8.7).powf(0.72),
                speed: rand_range(&mut rng, 0.66, 2.2) / (0.5 + radius * 0.24),
                size: rand_range(&mut rng, 0.44, 1.55),
                hue_mix: rand_range(&mut rng, 0.1, 0.95),
            }
        })
        .collect()
}

/// Seed the infall field: particles spiral from their spawn radius into the
/// horizon, cycling on `phase`.
pub fn seed_infall(count: u32, seed: u64) -> Vec<InfallSeed> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| InfallSeed {
            radius: rand_range(&mut rng, 2.6, 8.8),
            angle: rand_range(&mut rng, 0.0, TAU),
            phase: rng.random::<f32>(),
            speed: rand_range(&mut rng, 0.3, 0.76),
            size: rand_range(&mut rng, 0.42, 1.35),
            height: rand_spread(&mut rng, 0.42),
        })
        .collect()
}

/// Seed the background star shell: points on a flattened sphere between
/// radius 8.3 and 26, tinted toward blue-white.
pub fn seed_stars(count: u32, seed: u64) -> Vec<StarSeed> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let radius = rand_range(&mut rng, 8.3, 26.0);
            let phi = rand_spread(&mut rng, 2.0).acos();
            let theta = rand_range(&mut rng, 0.0, TAU);

            let tint = rand_range(&mut rng, 0.65, 1.0);
            StarSeed {
                position: [
                    radius * phi.sin() * theta.cos(),
                    radius * phi.cos() * 0.7,
                    radius * phi.sin() * theta.sin(),
                ],
                _pad0: 0.0,
                color: [0.42 * tint, 0.72 * tint, 1.0 * tint],
                _pad1: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(seed_swirl(330, 1).len(), 330);
        assert_eq!(seed_infall(92, 1).len(), 92);
        assert_eq!(seed_stars(300, 1).len(), 300);
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = seed_swirl(64, 42);
        let b = seed_swirl(64, 42);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.angle, y.angle);
        }
        let c = seed_swirl(64, 43);
        assert!(a.iter().zip(&c).any(|(x, y)| x.radius != y.radius));
    }

    #[test]
    fn test_swirl_ranges() {
        for s in seed_swirl(500, 7) {
            assert!(s.radius >= 0.0 && s.radius < 8.7);
            assert!(s.angle >= 0.0 && s.angle < TAU);
            assert!(s.size >= 0.44 && s.size < 1.55);
            assert!(s.hue_mix >= 0.1 && s.hue_mix < 0.95);
            assert!(s.speed > 0.0);
        }
    }

    #[test]
    fn test_infall_ranges() {
        for s in seed_infall(500, 7) {
            assert!(s.radius >= 2.6 && s.radius < 8.8);
            assert!(s.phase >= 0.0 && s.phase < 1.0);
            assert!(s.speed >= 0.3 && s.speed < 0.76);
            assert!(s.height.abs() <= 0.21);
        }
    }

    #[test]
    fn test_stars_inside_shell() {
        for s in seed_stars(500, 7) {
            let [x, y, z] = s.position;
            // Y is flattened by 0.7, so bound the un-flattened radius
            let r = (x * x + (y / 0.7) * (y / 0.7) + z * z).sqrt();
            assert!(r >= 8.3 - 1e-3 && r <= 26.0 + 1e-3);
            assert!(s.color[2] >= s.color[0]);
        }
    }

    #[test]
    fn test_seed_layouts_are_tightly_packed() {
        assert_eq!(std::mem::size_of::<SwirlSeed>(), 24);
        assert_eq!(std::mem::size_of::<InfallSeed>(), 24);
        assert_eq!(std::mem::size_of::<StarSeed>(), 32);
    }
}
