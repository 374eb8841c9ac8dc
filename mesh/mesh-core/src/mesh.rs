//! Indexed triangle mesh.

use crate::{Aabb, Triangle, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing
/// vertices by index. This is the type produced by the STL loader and
/// consumed by the geometry analyzer; it is not mutated after parsing.
///
/// # Winding Order
///
/// Faces use **counter-clockwise winding** when viewed from outside,
/// so normals point outward by the right-hand rule.
///
/// # Example
///
/// ```
/// use mesh_core::{TriangleMesh, Vertex};
///
/// let mut mesh = TriangleMesh::new();
/// mesh.push_triangle(
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertex and face buffers.
    ///
    /// Every face index must be in range for `vertices`;
    /// [`triangles`](Self::triangles) assumes this. Debug builds
    /// assert it here.
    #[inline]
    #[must_use]
    pub fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        debug_assert!(
            faces
                .iter()
                .flatten()
                .all(|&i| (i as usize) < vertices.len()),
            "face index out of range"
        );
        Self { vertices, faces }
    }

    /// Build a mesh from a flat triangle-soup position buffer.
    ///
    /// The buffer holds independent triangles as
    /// `[v0x, v0y, v0z, v1x, ..., v2z, ...]`, nine components per
    /// triangle. Returns `None` if the length is not divisible by 9.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_core::TriangleMesh;
    ///
    /// let soup = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = TriangleMesh::from_triangle_soup(&soup).unwrap();
    /// assert_eq!(mesh.face_count(), 1);
    /// assert_eq!(mesh.vertex_count(), 3);
    ///
    /// assert!(TriangleMesh::from_triangle_soup(&soup[..8]).is_none());
    /// ```
    #[must_use]
    pub fn from_triangle_soup(positions: &[f64]) -> Option<Self> {
        if positions.len() % 9 != 0 {
            return None;
        }

        let face_count = positions.len() / 9;
        let mut mesh = Self::with_capacity(face_count * 3, face_count);
        for tri in positions.chunks_exact(9) {
            mesh.push_triangle(
                Vertex::from_coords(tri[0], tri[1], tri[2]),
                Vertex::from_coords(tri[3], tri[4], tri[5]),
                Vertex::from_coords(tri[6], tri[7], tri[8]),
            );
        }
        Some(mesh)
    }

    /// Append one triangle as three new vertices and one face.
    ///
    /// Soup-style building: no vertex sharing, so after N calls the
    /// mesh holds exactly 3N vertices and N faces.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    pub fn push_triangle(&mut self, v0: Vertex, v1: Vertex, v2: Vertex) {
        let base = self.vertices.len() as u32;
        self.vertices.push(v0);
        self.vertices.push(v1);
        self.vertices.push(v2);
        self.faces.push([base, base + 1, base + 2]);
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check whether any vertex carries a normal.
    #[must_use]
    pub fn has_normals(&self) -> bool {
        self.vertices.iter().any(Vertex::has_normal)
    }

    /// Iterate over faces as concrete [`Triangle`]s.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    /// Compute the axis-aligned bounding box of all vertices.
    ///
    /// Single pass over the vertex buffer; empty meshes return an
    /// empty AABB.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::empty();
        }
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// Build an axis-aligned box from the origin to `(w, d, h)`.
///
/// Closed, outward-wound, triangulated as 12 faces over 8 shared
/// vertices. Handy as a fixture with known volume `w * d * h`.
///
/// # Example
///
/// ```
/// use mesh_core::axis_aligned_box;
///
/// let cube = axis_aligned_box(1.0, 1.0, 1.0);
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn axis_aligned_box(w: f64, d: f64, h: f64) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(8, 12);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(w, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(w, d, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, d, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, h)); // 4
    mesh.vertices.push(Vertex::from_coords(w, 0.0, h)); // 5
    mesh.vertices.push(Vertex::from_coords(w, d, h)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, d, h)); // 7

    // Two CCW triangles per face, viewed from outside

    // Bottom (z=0), normal -Z
    mesh.faces.push([0, 2, 1]);
    mesh.faces.push([0, 3, 2]);
    // Top (z=h), normal +Z
    mesh.faces.push([4, 5, 6]);
    mesh.faces.push([4, 6, 7]);
    // Front (y=0), normal -Y
    mesh.faces.push([0, 1, 5]);
    mesh.faces.push([0, 5, 4]);
    // Back (y=d), normal +Y
    mesh.faces.push([3, 7, 6]);
    mesh.faces.push([3, 6, 2]);
    // Left (x=0), normal -X
    mesh.faces.push([0, 4, 7]);
    mesh.faces.push([0, 7, 3]);
    // Right (x=w), normal +X
    mesh.faces.push([1, 2, 6]);
    mesh.faces.push([1, 6, 5]);

    mesh
}
