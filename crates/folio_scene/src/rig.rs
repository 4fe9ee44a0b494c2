//! Damped camera rig
//!
//! The eye drifts toward either an idle sway target or the pointer-driven
//! target, with exponential damping so the motion is framerate independent
//! and never snaps.

use folio_orbit::ease;

/// Damping gain while following the pointer.
const INTERACTIVE_GAIN: f32 = 3.5;

/// Damping gain during idle sway.
const IDLE_GAIN: f32 = 2.4;

/// Pointer-following camera for the preloader scene.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    /// Current eye position.
    pub eye: [f32; 3],
    /// Whether pointer input steers the rig (fine pointer, non-low tier).
    interactive: bool,
    /// Normalized pointer position in [-1, 1] on both axes.
    pointer: [f32; 2],
    elapsed: f32,
}

impl CameraRig {
    pub fn new(interactive: bool) -> Self {
        Self {
            eye: [0.0, 0.35, 6.95],
            interactive,
            pointer: [0.0, 0.0],
            elapsed: 0.0,
        }
    }

    /// Feed the latest normalized pointer position.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = [x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)];
    }

    /// Target the eye is being damped toward right now.
    pub fn target(&self) -> [f32; 3] {
        if self.interactive {
            [
                self.pointer[0] * 0.36,
                0.34 + self.pointer[1] * 0.18,
                6.8,
            ]
        } else {
            [
                (self.elapsed * 0.22).sin() * 0.24,
                0.34 + (self.elapsed * 0.14).cos() * 0.06,
                7.02,
            ]
        }
    }

    /// Advance the rig by one frame.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        let gain = if self.interactive { INTERACTIVE_GAIN } else { IDLE_GAIN };
        let blend = ease::damp(dt, gain);
        let target = self.target();
        for axis in 0..3 {
            self.eye[axis] = ease::lerp(self.eye[axis], target[axis], blend);
        }
    }
}
