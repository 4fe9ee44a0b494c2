//! The three-ring orbit simulation
//!
//! [`OrbitSystem`] owns the per-ring motion configs and states, the current
//! inspection, and the frame-callback registration. It produces one
//! [`OrbitFrame`] of [`NodeVisual`]s per update; nothing else escapes the
//! simulation, so a renderer only ever writes transform/opacity values.

use crate::placement::{NodeFlags, NodePlacement, NodeVisual};
use crate::ring::{RingId, RingMotion, RingState, SLOWDOWN_TARGET};
use crate::view::ViewMode;

/// Reference to one node slot: which ring, and which slot on that ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeRef {
    pub ring: RingId,
    pub index: usize,
}

/// One frame of visual output, one entry per node slot per ring.
#[derive(Clone, Debug)]
pub struct OrbitFrame {
    rings: [Vec<NodeVisual>; 3],
}

impl OrbitFrame {
    /// Visuals for one ring, in slot order.
    pub fn ring(&self, ring: RingId) -> &[NodeVisual] {
        &self.rings[ring.index()]
    }

    /// Visual for a single slot.
    pub fn node(&self, node: NodeRef) -> Option<&NodeVisual> {
        self.rings[node.ring.index()].get(node.index)
    }

    /// Iterate over every visual with its slot reference.
    pub fn iter(&self) -> impl Iterator<Item = (NodeRef, &NodeVisual)> {
        RingId::ALL.into_iter().flat_map(move |ring| {
            self.rings[ring.index()]
                .iter()
                .enumerate()
                .map(move |(index, v)| (NodeRef { ring, index }, v))
        })
    }
}

/// The orbit placement and interaction loop.
///
/// Reduced motion and the mobile tier are checked once at construction:
/// in either case no frame callback is registered and [`OrbitSystem::update`]
/// returns the static grid layout. Teardown is deterministic via
/// [`OrbitSystem::shutdown`] (also run on drop).
pub struct OrbitSystem {
    motions: [RingMotion; 3],
    states: [RingState; 3],
    ring_lens: [usize; 3],
    view_mode: ViewMode,
    inspected: Option<NodeRef>,
    /// Whether a per-frame callback is registered.
    registered: bool,
}

impl OrbitSystem {
    /// Create the system for the given ring occupancies.
    ///
    /// `reduced_motion` reflects the OS-level accessibility preference,
    /// sampled once by the caller at mount.
    pub fn new(ring_lens: [usize; 3], view_mode: ViewMode, reduced_motion: bool) -> Self {
        let animate = view_mode.animates() && !reduced_motion;
        Self {
            motions: [
                RingMotion::preset(RingId::R1),
                RingMotion::preset(RingId::R2),
                RingMotion::preset(RingId::R3),
            ],
            states: [
                RingState::preset(RingId::R1),
                RingState::preset(RingId::R2),
                RingState::preset(RingId::R3),
            ],
            ring_lens,
            view_mode,
            inspected: None,
            registered: animate,
        }
    }

    /// Builder: override the motion config for one ring.
    pub fn with_motion(mut self, ring: RingId, motion: RingMotion) -> Self {
        self.motions[ring.index()] = motion;
        self
    }

    /// Number of frame callbacks currently scheduled (0 or 1).
    ///
    /// Zero when reduced motion was requested or the view is mobile.
    #[inline]
    pub fn scheduled_callbacks(&self) -> usize {
        usize::from(self.registered)
    }

    /// The presentation tier this system was built for.
    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Current state of one ring (for inspection by tests and debug HUDs).
    pub fn ring_state(&self, ring: RingId) -> &RingState {
        &self.states[ring.index()]
    }

    /// Effective radius of one ring under the current view mode.
    pub fn ring_radius(&self, ring: RingId) -> f32 {
        self.motions[ring.index()].radius * self.view_mode.radius_scale()
    }

    /// The currently inspected node, if any.
    #[inline]
    pub fn inspected(&self) -> Option<NodeRef> {
        self.inspected
    }

    /// Begin inspecting a node.
    ///
    /// The slow-down is global: all three rings' targets drop together, so
    /// the whole system decelerates as one.
    pub fn inspect(&mut self, node: NodeRef) {
        self.inspected = Some(node);
        for state in &mut self.states {
            state.target_scale = SLOWDOWN_TARGET;
        }
    }

    /// Clear the inspection and restore full speed.
    pub fn clear_inspection(&mut self) {
        self.inspected = None;
        for state in &mut self.states {
            state.target_scale = 1.0;
        }
    }

    /// Unregister the frame callback. Idempotent.
    pub fn shutdown(&mut self) {
        self.registered = false;
    }

    /// Advance the simulation by `dt` seconds and emit the frame.
    ///
    /// When no callback is registered (mobile tier or reduced motion) the
    /// states stay frozen and every node gets the static grid visual.
    pub fn update(&mut self, dt: f32) -> OrbitFrame {
        if !self.registered {
            return self.static_frame();
        }

        let speed_factor = self.view_mode.speed_factor();
        for (i, state) in self.states.iter_mut().enumerate() {
            state.advance(&self.motions[i], speed_factor, dt);
        }

        let rings = RingId::ALL.map(|ring| {
            let idx = ring.index();
            let len = self.ring_lens[idx];
            let radius = self.motions[idx].radius * self.view_mode.radius_scale();
            let state = &self.states[idx];

            (0..len)
                .map(|slot| {
                    let placement = NodePlacement::on_ring(state, slot, len, radius);
                    NodeVisual::compose(placement, self.flags_for(NodeRef { ring, index: slot }))
                })
                .collect()
        });

        OrbitFrame { rings }
    }

    fn flags_for(&self, node: NodeRef) -> NodeFlags {
        match self.inspected {
            Some(active) if active == node => NodeFlags::INSPECTED,
            Some(_) => NodeFlags::DIMMED,
            None => NodeFlags::empty(),
        }
    }

    fn static_frame(&self) -> OrbitFrame {
        let rings =
            RingId::ALL.map(|ring| vec![NodeVisual::static_grid(); self.ring_lens[ring.index()]]);
        OrbitFrame { rings }
    }
}

impl Drop for OrbitSystem {
    fn drop(&mut self) {
        self.shutdown();
    }
}
