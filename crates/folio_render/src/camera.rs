//! Perspective camera fed by the scene rig

use folio_scene::CameraRig;

/// Column-major 4x4 matrix, directly uploadable as a uniform.
pub type Mat4 = [[f32; 4]; 4];

/// Builds view and projection matrices for the event horizon scene.
///
/// The eye position comes from the [`CameraRig`]; the look target is fixed
/// at the singularity (the origin).
#[derive(Debug, Clone, Copy)]
pub struct SceneCamera {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            fov_y_deg: 50.0,
            near: 0.1,
            far: 60.0,
        }
    }
}

impl SceneCamera {
    pub fn view_matrix(&self, rig: &CameraRig) -> Mat4 {
        look_at(rig.eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective(self.fov_y_deg.to_radians(), aspect, self.near, self.far)
    }
}

/// Right-handed look-at view matrix.
pub fn look_at(eye: [f32; 3], center: [f32; 3], up: [f32; 3]) -> Mat4 {
    let f = normalize(sub(center, eye));
    let s = normalize(cross(f, up));
    let u = cross(s, f);
    [
        [s[0], u[0], -f[0], 0.0],
        [s[1], u[1], -f[1], 0.0],
        [s[2], u[2], -f[2], 0.0],
        [-dot(s, eye), -dot(u, eye), dot(f, eye), 1.0],
    ]
}

/// Right-handed perspective projection mapping depth to wgpu's [0, 1] range.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range = far - near;
    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, -far / range, -1.0],
        [0.0, 0.0, -(far * near) / range, 0.0],
    ]
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len <= f32::EPSILON {
        return [0.0, 0.0, 0.0];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_eye_maps_to_origin() {
        let eye = [0.0, 0.35, 6.95];
        let m = look_at(eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        // Transform the eye point: should land at the view-space origin
        let p = transform(&m, eye);
        for c in p {
            assert!(c.abs() < 1e-4, "eye not at origin: {:?}", p);
        }
    }

    #[test]
    fn test_look_at_forward_is_negative_z() {
        let m = look_at([0.0, 0.0, 5.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        // The origin sits 5 units in front of the eye, down -Z in view space
        let p = transform(&m, [0.0, 0.0, 0.0]);
        assert!((p[2] - -5.0).abs() < 1e-4);
    }

    #[test]
    fn test_perspective_depth_range() {
        let m = perspective(1.0, 16.0 / 9.0, 0.1, 60.0);
        // Near plane maps to depth 0, far plane to depth 1
        let near = project(&m, [0.0, 0.0, -0.1]);
        let far = project(&m, [0.0, 0.0, -60.0]);
        assert!(near[2].abs() < 1e-4);
        assert!((far[2] - 1.0).abs() < 1e-4);
    }

    fn transform(m: &Mat4, v: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for i in 0..3 {
            out[i] = m[0][i] * v[0] + m[1][i] * v[1] + m[2][i] * v[2] + m[3][i];
        }
        out
    }

    fn project(m: &Mat4, v: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 4];
        for i in 0..4 {
            out[i] = m[0][i] * v[0] + m[1][i] * v[1] + m[2][i] * v[2] + m[3][i];
        }
        [out[0] / out[3], out[1] / out[3], out[2] / out[3]]
    }
}
