//! Pointer hit-testing against the orbit frame
//!
//! The orbit emits logical-pixel translations around a center point; the
//! picker inverts that to find the node under the cursor. When the orbit
//! is showing the static grid (mobile tier or reduced motion) every
//! translate is zero and a pointer match would be meaningless, so nothing
//! is ever picked.

use folio_orbit::{NodeRef, OrbitFrame, OrbitSystem};

/// Approximate hit radius of a resting node, logical pixels.
pub const NODE_HIT_RADIUS: f32 = 28.0;

/// The node slot under `cursor`, if any.
///
/// `center` is the orbit origin in the same logical-pixel space as the
/// cursor. The nearest node within its scaled hit radius wins.
pub fn pick_node(
    orbit: &OrbitSystem,
    frame: &OrbitFrame,
    cursor: [f32; 2],
    center: [f32; 2],
) -> Option<NodeRef> {
    if orbit.scheduled_callbacks() == 0 {
        return None;
    }

    let mut best: Option<(NodeRef, f32)> = None;
    for (node, visual) in frame.iter() {
        let x = center[0] + visual.translate[0];
        let y = center[1] + visual.translate[1];
        let dist = ((cursor[0] - x).powi(2) + (cursor[1] - y).powi(2)).sqrt();
        let radius = NODE_HIT_RADIUS * visual.scale;
        if dist <= radius && best.map(|(_, d)| dist < d).unwrap_or(true) {
            best = Some((node, dist));
        }
    }
    best.map(|(node, _)| node)
}
