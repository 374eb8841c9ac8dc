//! Bounding-box dimension extraction.

use mesh_core::{Point3, TriangleMesh};
use serde::Serialize;

/// Axis-aligned bounding-box measurements of a mesh.
///
/// Width, depth and height are the X, Y and Z extents in the mesh's
/// native units (millimeters for uploaded STL data). Values are kept
/// at full precision; rounding is presentation-side only.
///
/// # Example
///
/// ```
/// use mesh_core::TriangleMesh;
/// use mesh_metrics::dimensions;
///
/// let soup = [0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 5.0, 5.0, 0.0];
/// let mesh = TriangleMesh::from_triangle_soup(&soup).unwrap();
/// let dims = dimensions(&mesh);
///
/// assert!((dims.width - 10.0).abs() < 1e-10);
/// assert!((dims.depth - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Dimensions {
    /// Bounding box minimum corner.
    pub min: Point3<f64>,
    /// Bounding box maximum corner.
    pub max: Point3<f64>,
    /// X extent.
    pub width: f64,
    /// Y extent.
    pub depth: f64,
    /// Z extent.
    pub height: f64,
    /// Diagonal length of the bounding box.
    pub diagonal: f64,
    /// Center of the bounding box.
    pub center: Point3<f64>,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
            width: 0.0,
            depth: 0.0,
            height: 0.0,
            diagonal: 0.0,
            center: Point3::origin(),
        }
    }
}

impl Dimensions {
    /// Length of the longest axis.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.width.max(self.depth).max(self.height)
    }

    /// Length of the shortest axis.
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.depth).min(self.height)
    }
}

/// Measure the bounding box of a mesh.
///
/// Scans every vertex exactly once, O(vertex count). An empty mesh
/// reports the all-zero [`Dimensions`] rather than failing.
#[must_use]
pub fn dimensions(mesh: &TriangleMesh) -> Dimensions {
    if mesh.vertices.is_empty() {
        return Dimensions::default();
    }

    let bounds = mesh.bounds();
    let size = bounds.size();

    Dimensions {
        min: bounds.min,
        max: bounds.max,
        width: size.x,
        depth: size.y,
        height: size.z,
        diagonal: bounds.diagonal(),
        center: bounds.center(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_core::Vertex;

    #[test]
    fn empty_mesh_is_all_zero() {
        let dims = dimensions(&TriangleMesh::new());
        assert!(dims.width.abs() < f64::EPSILON);
        assert!(dims.depth.abs() < f64::EPSILON);
        assert!(dims.height.abs() < f64::EPSILON);
        assert!(dims.diagonal.abs() < f64::EPSILON);
    }

    #[test]
    fn box_extents() {
        let mut mesh = TriangleMesh::new();
        mesh.push_triangle(
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(10.0, 2.0, 0.0),
            Vertex::from_coords(0.0, 2.0, 1.0),
        );

        let dims = dimensions(&mesh);
        assert!((dims.width - 10.0).abs() < 1e-10);
        assert!((dims.depth - 2.0).abs() < 1e-10);
        assert!((dims.height - 1.0).abs() < 1e-10);
        assert!((dims.max_extent() - 10.0).abs() < 1e-10);
        assert!((dims.min_extent() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn single_vertex_degenerates_to_point() {
        let mesh = TriangleMesh::from_parts(vec![Vertex::from_coords(3.0, 4.0, 5.0)], vec![]);
        let dims = dimensions(&mesh);
        assert!(dims.width.abs() < f64::EPSILON);
        assert!((dims.center.x - 3.0).abs() < f64::EPSILON);
        assert!((dims.center.z - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn center_and_diagonal() {
        let mut mesh = TriangleMesh::new();
        mesh.push_triangle(
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(2.0, 0.0, 0.0),
            Vertex::from_coords(2.0, 2.0, 2.0),
        );
        let dims = dimensions(&mesh);
        assert!((dims.center.x - 1.0).abs() < 1e-10);
        assert!((dims.diagonal - (12.0_f64).sqrt()).abs() < 1e-10);
    }
}
