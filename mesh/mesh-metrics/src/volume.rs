//! Enclosed-volume computation.

use mesh_core::TriangleMesh;

/// Compute the enclosed volume of a mesh.
///
/// Sums the signed tetrahedron volume `v0 · (v1 × v2) / 6` of every
/// face paired with the origin, then reports the absolute value of
/// the f64 sum (divergence theorem). Accumulation is done in f64 to
/// bound cancellation error over large meshes.
///
/// # Correctness boundary
///
/// The result is exact (up to float error) only for a single closed,
/// non-self-intersecting mesh with consistent outward winding.
/// Multi-shell meshes or inconsistent winding silently produce wrong
/// values; no error is raised. This mirrors how quoting treats the
/// uploaded mesh as-is rather than repairing it.
///
/// # Example
///
/// ```
/// use mesh_core::TriangleMesh;
/// use mesh_metrics::mesh_volume;
///
/// assert!(mesh_volume(&TriangleMesh::new()).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn mesh_volume(mesh: &TriangleMesh) -> f64 {
    mesh.triangles()
        .map(|tri| tri.signed_volume())
        .sum::<f64>()
        .abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_core::axis_aligned_box;

    #[test]
    fn empty_mesh_has_zero_volume() {
        assert!(mesh_volume(&TriangleMesh::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn unit_cube_volume() {
        let cube = axis_aligned_box(1.0, 1.0, 1.0);
        assert_relative_eq!(mesh_volume(&cube), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rectangular_box_volume() {
        let b = axis_aligned_box(2.0, 3.0, 4.0);
        assert_relative_eq!(mesh_volume(&b), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn volume_is_winding_invariant_under_abs() {
        // An inside-out box sums to a negative signed volume; the
        // reported volume takes the absolute value.
        let mut b = axis_aligned_box(2.0, 2.0, 2.0);
        for face in &mut b.faces {
            face.swap(1, 2);
        }
        assert_relative_eq!(mesh_volume(&b), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn inconsistent_winding_underreports_silently() {
        // Known correctness boundary: flip half the faces of a cube
        // and the signed contributions cancel instead of summing.
        let mut b = axis_aligned_box(2.0, 2.0, 2.0);
        let n = b.faces.len();
        for face in &mut b.faces[..n / 2] {
            face.swap(1, 2);
        }
        assert!(mesh_volume(&b) < 8.0 - 1e-9);
    }

    #[test]
    fn open_triangle_has_origin_dependent_volume() {
        // A single triangle is not a closed surface; the result is
        // whatever its lone tetrahedron contributes.
        let soup = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let mesh = TriangleMesh::from_triangle_soup(&soup).unwrap();
        assert_relative_eq!(mesh_volume(&mesh), 1.0 / 6.0);
    }
}
