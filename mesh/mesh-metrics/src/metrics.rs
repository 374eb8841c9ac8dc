//! Combined geometry metrics and complexity classification.

use mesh_core::TriangleMesh;
use serde::Serialize;
use tracing::debug;

use crate::dimensions::{dimensions, Dimensions};
use crate::volume::mesh_volume;

/// Face count below which a mesh classifies as [`Complexity::Low`].
pub const LOW_COMPLEXITY_FACES: usize = 100;

/// Face count below which a mesh classifies as [`Complexity::Medium`].
pub const MEDIUM_COMPLEXITY_FACES: usize = 1000;

/// Coarse mesh-complexity bucket derived from the triangle count.
///
/// Used as a proxy for manufacturing and rendering cost signal.
/// Thresholds are fixed: fewer than 100 faces is Low, fewer than
/// 1000 is Medium, everything else High.
///
/// # Example
///
/// ```
/// use mesh_metrics::Complexity;
///
/// assert_eq!(Complexity::from_face_count(99), Complexity::Low);
/// assert_eq!(Complexity::from_face_count(100), Complexity::Medium);
/// assert_eq!(Complexity::from_face_count(1000), Complexity::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Complexity {
    /// Fewer than 100 faces.
    Low,
    /// 100 to 999 faces.
    Medium,
    /// 1000 faces or more.
    High,
}

impl Complexity {
    /// Classify a face count.
    #[must_use]
    pub const fn from_face_count(faces: usize) -> Self {
        if faces < LOW_COMPLEXITY_FACES {
            Self::Low
        } else if faces < MEDIUM_COMPLEXITY_FACES {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Full geometry report for a parsed mesh.
///
/// Produced by [`analyze_mesh`]; attached to a quote when the caller
/// requested geometry inspection alongside pricing.
#[derive(Debug, Clone, Serialize)]
pub struct GeometryMetrics {
    /// Bounding-box measurements.
    pub dimensions: Dimensions,
    /// Enclosed volume (non-negative), cubic millimeters for millimeter meshes.
    pub volume: f64,
    /// Number of vertices in the mesh buffer.
    pub vertex_count: usize,
    /// Number of triangle faces.
    pub face_count: usize,
    /// Whether any vertex carries a normal.
    pub has_normals: bool,
    /// Complexity bucket from the face count.
    pub complexity: Complexity,
}

/// Analyze a mesh into [`GeometryMetrics`].
///
/// Deterministic pure function: bounding box in one vertex scan,
/// volume in one face scan, counts and classification from buffer
/// lengths. An empty mesh yields the degenerate zero-volume,
/// zero-size result rather than an error.
///
/// # Example
///
/// ```
/// use mesh_core::axis_aligned_box;
/// use mesh_metrics::{analyze_mesh, Complexity};
///
/// let metrics = analyze_mesh(&axis_aligned_box(2.0, 3.0, 4.0));
/// assert_eq!(metrics.face_count, 12);
/// assert_eq!(metrics.complexity, Complexity::Low);
/// assert!((metrics.volume - 24.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn analyze_mesh(mesh: &TriangleMesh) -> GeometryMetrics {
    let dims = dimensions(mesh);
    let volume = mesh_volume(mesh);
    let face_count = mesh.face_count();
    let complexity = Complexity::from_face_count(face_count);

    debug!(
        faces = face_count,
        vertices = mesh.vertex_count(),
        volume,
        complexity = complexity.as_str(),
        "Mesh analysis complete"
    );

    GeometryMetrics {
        dimensions: dims,
        volume,
        vertex_count: mesh.vertex_count(),
        face_count,
        has_normals: mesh.has_normals(),
        complexity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_core::{axis_aligned_box, Vertex};

    /// Soup mesh with exactly `n` faces, all axis-aligned unit triangles.
    fn soup_with_faces(n: usize) -> TriangleMesh {
        let mut mesh = TriangleMesh::with_capacity(n * 3, n);
        for i in 0..n {
            #[allow(clippy::cast_precision_loss)]
            let z = i as f64;
            mesh.push_triangle(
                Vertex::from_coords(0.0, 0.0, z),
                Vertex::from_coords(1.0, 0.0, z),
                Vertex::from_coords(0.0, 1.0, z),
            );
        }
        mesh
    }

    #[test]
    fn complexity_boundaries() {
        assert_eq!(Complexity::from_face_count(0), Complexity::Low);
        assert_eq!(Complexity::from_face_count(99), Complexity::Low);
        assert_eq!(Complexity::from_face_count(100), Complexity::Medium);
        assert_eq!(Complexity::from_face_count(999), Complexity::Medium);
        assert_eq!(Complexity::from_face_count(1000), Complexity::High);
        assert_eq!(Complexity::from_face_count(50_000), Complexity::High);
    }

    #[test]
    fn classification_through_analyze() {
        assert_eq!(analyze_mesh(&soup_with_faces(99)).complexity, Complexity::Low);
        assert_eq!(
            analyze_mesh(&soup_with_faces(100)).complexity,
            Complexity::Medium
        );
        assert_eq!(
            analyze_mesh(&soup_with_faces(999)).complexity,
            Complexity::Medium
        );
        assert_eq!(
            analyze_mesh(&soup_with_faces(1000)).complexity,
            Complexity::High
        );
    }

    #[test]
    fn soup_face_vertex_ratio() {
        let metrics = analyze_mesh(&soup_with_faces(7));
        assert_eq!(metrics.face_count, metrics.vertex_count / 3);
    }

    #[test]
    fn box_metrics() {
        let metrics = analyze_mesh(&axis_aligned_box(3.0, 4.0, 5.0));
        assert!((metrics.volume - 60.0).abs() < 1e-9);
        assert!((metrics.dimensions.width - 3.0).abs() < 1e-10);
        assert!((metrics.dimensions.depth - 4.0).abs() < 1e-10);
        assert!((metrics.dimensions.height - 5.0).abs() < 1e-10);
        assert_eq!(metrics.vertex_count, 8);
        assert_eq!(metrics.face_count, 12);
        assert!(!metrics.has_normals);
    }

    #[test]
    fn empty_mesh_degenerates() {
        let metrics = analyze_mesh(&TriangleMesh::new());
        assert_eq!(metrics.face_count, 0);
        assert_eq!(metrics.vertex_count, 0);
        assert!(metrics.volume.abs() < f64::EPSILON);
        assert!(metrics.dimensions.width.abs() < f64::EPSILON);
        assert_eq!(metrics.complexity, Complexity::Low);
    }

    #[test]
    fn metrics_serialize_shape() {
        let metrics = analyze_mesh(&axis_aligned_box(1.0, 1.0, 1.0));
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["face_count"], 12);
        assert_eq!(json["complexity"], "Low");
        assert!(json["dimensions"]["width"].is_number());
    }
}
