//! Node slot placement and per-frame visual output
//!
//! A node's position on its ring is fully determined by its slot index,
//! the ring's current phase, and the ring radius. The per-frame output is
//! a [`NodeVisual`]: translate, scale, opacity, and a z layer. Consumers
//! write these to transform/opacity channels only; nothing structural is
//! touched during animation.

use bitflags::bitflags;

use crate::ring::RingState;

/// Scale applied to an inspected node.
pub const INSPECT_SCALE: f32 = 1.15;

/// Vertical lift (logical pixels, negative = up) applied to an inspected node.
pub const INSPECT_LIFT: f32 = -4.0;

/// Opacity applied to every non-inspected node while any node is inspected.
pub const DIM_OPACITY: f32 = 0.4;

/// Z layer for the inspected node; siblings stay at [`Z_LAYER_BASE`].
pub const Z_LAYER_RAISED: u8 = 50;

/// Z layer for ordinary orbiting nodes.
pub const Z_LAYER_BASE: u8 = 10;

bitflags! {
    /// Presentation flags for a node within the current frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct NodeFlags: u8 {
        /// The node is currently inspected (hovered/focused).
        const INSPECTED = 1 << 0;
        /// Another node is inspected, so this one is dimmed.
        const DIMMED = 1 << 1;
    }
}

/// Fixed slot angle for node `index` of `ring_len`, in radians.
#[inline]
pub fn slot_angle(index: usize, ring_len: usize) -> f32 {
    debug_assert!(ring_len > 0);
    (index as f32 / ring_len as f32) * std::f32::consts::TAU
}

/// Raw circle position for one node slot, before inspection effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePlacement {
    pub x: f32,
    pub y: f32,
}

impl NodePlacement {
    /// Compute the position of slot `index` on a ring.
    ///
    /// `radius` is the effective radius (base radius times the view-mode
    /// radius scale). The center is the orbit origin; callers offset by
    /// their own center point.
    pub fn on_ring(state: &RingState, index: usize, ring_len: usize, radius: f32) -> Self {
        let angle = (slot_angle(index, ring_len) + state.phase_deg.to_radians())
            .rem_euclid(std::f32::consts::TAU);
        Self {
            x: angle.cos() * radius,
            y: angle.sin() * radius,
        }
    }

    /// Distance from the orbit origin.
    #[inline]
    pub fn distance_from_center(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Final per-frame visual state for one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeVisual {
    /// Translation from the orbit center, logical pixels.
    pub translate: [f32; 2],
    /// Uniform scale.
    pub scale: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Stacking layer; raised while inspected.
    pub z_layer: u8,
}

impl NodeVisual {
    /// Combine a raw placement with inspection flags.
    pub fn compose(placement: NodePlacement, flags: NodeFlags) -> Self {
        let inspected = flags.contains(NodeFlags::INSPECTED);
        let dimmed = flags.contains(NodeFlags::DIMMED);

        Self {
            translate: [
                placement.x,
                placement.y + if inspected { INSPECT_LIFT } else { 0.0 },
            ],
            scale: if inspected { INSPECT_SCALE } else { 1.0 },
            opacity: if dimmed { DIM_OPACITY } else { 1.0 },
            z_layer: if inspected { Z_LAYER_RAISED } else { Z_LAYER_BASE },
        }
    }

    /// Identity visual used for the static mobile grid: no transform math,
    /// full opacity.
    pub fn static_grid() -> Self {
        Self {
            translate: [0.0, 0.0],
            scale: 1.0,
            opacity: 1.0,
            z_layer: Z_LAYER_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RingState;

    #[test]
    fn test_slot_angles_evenly_divide_circle() {
        let n = 8;
        for i in 0..n {
            let a = slot_angle(i, n);
            assert!((a - i as f32 * std::f32::consts::TAU / 8.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_nodes_lie_exactly_on_circle_at_phase_zero() {
        let state = RingState::with_phase(0.0);
        let radius = 116.0;
        for i in 0..6 {
            let p = NodePlacement::on_ring(&state, i, 6, radius);
            assert!((p.distance_from_center() - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_nodes_stay_on_circle_for_any_phase() {
        let radius = 168.0;
        for phase in [13.0, 90.0, 181.5, 359.9] {
            let state = RingState::with_phase(phase);
            let p = NodePlacement::on_ring(&state, 2, 5, radius);
            assert!((p.distance_from_center() - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_first_slot_at_phase_zero_points_along_x() {
        let state = RingState::with_phase(0.0);
        let p = NodePlacement::on_ring(&state, 0, 4, 100.0);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
    }

    #[test]
    fn test_inspected_visual() {
        let placement = NodePlacement { x: 10.0, y: 20.0 };
        let v = NodeVisual::compose(placement, NodeFlags::INSPECTED);
        assert_eq!(v.scale, INSPECT_SCALE);
        assert_eq!(v.translate, [10.0, 20.0 + INSPECT_LIFT]);
        assert_eq!(v.opacity, 1.0);
        assert_eq!(v.z_layer, Z_LAYER_RAISED);
    }

    #[test]
    fn test_dimmed_visual() {
        let placement = NodePlacement { x: 0.0, y: 0.0 };
        let v = NodeVisual::compose(placement, NodeFlags::DIMMED);
        assert_eq!(v.scale, 1.0);
        assert_eq!(v.opacity, DIM_OPACITY);
        assert_eq!(v.z_layer, Z_LAYER_BASE);
    }

    #[test]
    fn test_neutral_visual() {
        let placement = NodePlacement { x: -3.0, y: 4.0 };
        let v = NodeVisual::compose(placement, NodeFlags::empty());
        assert_eq!(v.translate, [-3.0, 4.0]);
        assert_eq!(v.scale, 1.0);
        assert_eq!(v.opacity, 1.0);
    }
}
