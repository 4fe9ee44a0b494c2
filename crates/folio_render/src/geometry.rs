//! Mesh builders for the disk and billboard quads

use crate::pipeline::types::MeshVertex;

/// Triangulated annulus in the XZ plane, centered on the origin.
///
/// UVs carry (angular fraction, radial fraction) so the shader can paint
/// spiral ribbons without trigonometry per fragment.
pub struct AnnulusMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

/// Build an annulus with `segments` angular subdivisions.
pub fn annulus(inner_radius: f32, outer_radius: f32, segments: u32) -> AnnulusMesh {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments as usize + 1) * 2);
    let mut indices = Vec::with_capacity(segments as usize * 6);

    for i in 0..=segments {
        let frac = i as f32 / segments as f32;
        let angle = frac * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        vertices.push(MeshVertex {
            position: [cos * inner_radius, sin * inner_radius],
            uv: [frac, 0.0],
        });
        vertices.push(MeshVertex {
            position: [cos * outer_radius, sin * outer_radius],
            uv: [frac, 1.0],
        });
    }

    for i in 0..segments {
        let base = (i * 2) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    AnnulusMesh { vertices, indices }
}

/// Triangulated disc centered on the origin, fanned from a center vertex.
///
/// UV y carries the radial fraction, like the annulus.
pub fn disc(radius: f32, segments: u32) -> AnnulusMesh {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize + 2);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(MeshVertex {
        position: [0.0, 0.0],
        uv: [0.0, 0.0],
    });
    for i in 0..=segments {
        let frac = i as f32 / segments as f32;
        let angle = frac * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        vertices.push(MeshVertex {
            position: [cos * radius, sin * radius],
            uv: [frac, 1.0],
        });
    }

    for i in 0..segments {
        indices.extend_from_slice(&[0, (i + 1) as u16, (i + 2) as u16]);
    }

    AnnulusMesh { vertices, indices }
}

/// Unit quad centered on the origin, for instanced billboards.
pub fn unit_quad() -> ([MeshVertex; 4], [u16; 6]) {
    let vertices = [
        MeshVertex {
            position: [-0.5, -0.5],
            uv: [0.0, 0.0],
        },
        MeshVertex {
            position: [0.5, -0.5],
            uv: [1.0, 0.0],
        },
        MeshVertex {
            position: [-0.5, 0.5],
            uv: [0.0, 1.0],
        },
        MeshVertex {
            position: [0.5, 0.5],
            uv: [1.0, 1.0],
        },
    ];
    (vertices, [0, 1, 2, 2, 1, 3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annulus_counts() {
        let mesh = annulus(1.16, 4.05, 96);
        assert_eq!(mesh.vertices.len(), 97 * 2);
        assert_eq!(mesh.indices.len(), 96 * 6);
    }

    #[test]
    fn test_annulus_radii() {
        let mesh = annulus(1.16, 4.05, 12);
        for v in &mesh.vertices {
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            if v.uv[1] == 0.0 {
                assert!((r - 1.16).abs() < 1e-4);
            } else {
                assert!((r - 4.05).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_annulus_indices_in_bounds() {
        let mesh = annulus(1.0, 2.0, 168);
        let max = mesh.vertices.len() as u16;
        assert!(mesh.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn test_annulus_minimum_segments() {
        let mesh = annulus(1.0, 2.0, 1);
        assert_eq!(mesh.indices.len(), 3 * 6);
    }

    #[test]
    fn test_disc_counts_and_radius() {
        let mesh = disc(1.34, 48);
        assert_eq!(mesh.vertices.len(), 1 + 49);
        assert_eq!(mesh.indices.len(), 48 * 3);
        for v in &mesh.vertices[1..] {
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!((r - 1.34).abs() < 1e-4);
        }
    }

    #[test]
    fn test_quad_winding() {
        let (vertices, indices) = unit_quad();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
    }
}
