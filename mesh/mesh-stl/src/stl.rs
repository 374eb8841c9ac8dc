//! STL (Stereolithography) parsing.
//!
//! Supports both binary and ASCII STL, detected from the content.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles, little-endian
//! foreach triangle (50 bytes)
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! # Format Detection
//!
//! Input starting with `solid` (after leading whitespace) and with no
//! NUL byte in the first 80 bytes is treated as ASCII; everything else
//! as binary. Some binary exporters put "solid" in the header, which
//! the NUL check catches.

use mesh_core::{TriangleMesh, Vector3, Vertex};

use crate::error::{LoadError, LoadResult};

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
pub const TRIANGLE_SIZE: usize = 50;

/// Parse an STL byte stream into a [`TriangleMesh`].
///
/// Pure transform: no I/O, and the input buffer is not retained.
///
/// # Errors
///
/// - [`LoadError::EmptyInput`] for a zero-byte input
/// - [`LoadError::MalformedHeader`] when binary input is shorter than
///   header + triangle count
/// - [`LoadError::TruncatedData`] when the declared triangle count
///   exceeds the available bytes
/// - [`LoadError::ParseFloat`] for malformed ASCII coordinates
///
/// # Example
///
/// ```
/// use mesh_stl::{parse_stl, LoadError};
///
/// assert!(matches!(parse_stl(b""), Err(LoadError::EmptyInput)));
/// ```
pub fn parse_stl(bytes: &[u8]) -> LoadResult<TriangleMesh> {
    if bytes.is_empty() {
        return Err(LoadError::EmptyInput);
    }

    if looks_like_ascii(bytes) {
        parse_stl_ascii(bytes)
    } else {
        parse_stl_binary(bytes)
    }
}

/// Check whether the input looks like ASCII STL.
fn looks_like_ascii(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(HEADER_SIZE)];
    if head.contains(&0) {
        return false;
    }
    String::from_utf8_lossy(head).trim_start().starts_with("solid")
}

/// Parse binary STL.
fn parse_stl_binary(bytes: &[u8]) -> LoadResult<TriangleMesh> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(LoadError::MalformedHeader { len: bytes.len() });
    }

    // Triangle count follows the 80-byte header
    let declared = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    // The count is untrusted input; verify the buffer actually holds
    // that many records before reserving anything.
    let available = (bytes.len() - HEADER_SIZE - 4) / TRIANGLE_SIZE;
    if available < declared as usize {
        #[allow(clippy::cast_possible_truncation)] // available < declared <= u32::MAX
        let parsed = available as u32;
        return Err(LoadError::TruncatedData { declared, parsed });
    }

    let mut mesh = TriangleMesh::with_capacity((declared as usize) * 3, declared as usize);

    let mut offset = HEADER_SIZE + 4;
    for _ in 0..declared {
        let record = &bytes[offset..offset + TRIANGLE_SIZE];

        let normal = read_vector(&record[0..12]);
        let mut v0 = read_vertex(&record[12..24]);
        let mut v1 = read_vertex(&record[24..36]);
        let mut v2 = read_vertex(&record[36..48]);
        // record[48..50] is the attribute byte count, ignored

        // Zero normals are common in the wild; only keep real ones
        if normal.norm() > f64::EPSILON {
            v0.normal = Some(normal);
            v1.normal = Some(normal);
            v2.normal = Some(normal);
        }

        mesh.push_triangle(v0, v1, v2);
        offset += TRIANGLE_SIZE;
    }

    Ok(mesh)
}

/// Read a vector from 12 bytes (3 little-endian f32s).
fn read_vector(buf: &[u8]) -> Vector3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vector3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Read a vertex from 12 bytes (3 little-endian f32s).
fn read_vertex(buf: &[u8]) -> Vertex {
    let v = read_vector(buf);
    Vertex::from_coords(v.x, v.y, v.z)
}

/// Parse ASCII STL from its line grammar.
fn parse_stl_ascii(bytes: &[u8]) -> LoadResult<TriangleMesh> {
    let text = String::from_utf8_lossy(bytes);

    let mut mesh = TriangleMesh::new();
    let mut in_facet = false;
    let mut in_loop = false;
    let mut facet_normal: Option<Vector3<f64>> = None;
    let mut loop_vertices: Vec<Vertex> = Vec::with_capacity(3);

    for line in text.lines() {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword.to_lowercase().as_str() {
            "facet" => {
                in_facet = true;
                // "facet normal ni nj nk"
                facet_normal = parse_normal(parts.collect::<Vec<_>>().as_slice())?;
            }
            "outer" => {
                if parts.next().is_some_and(|w| w.eq_ignore_ascii_case("loop")) {
                    in_loop = true;
                    loop_vertices.clear();
                }
            }
            "vertex" => {
                if in_loop {
                    let coords: Vec<&str> = parts.collect();
                    if coords.len() >= 3 {
                        let x: f64 = coords[0].parse()?;
                        let y: f64 = coords[1].parse()?;
                        let z: f64 = coords[2].parse()?;
                        loop_vertices.push(Vertex::from_coords(x, y, z));
                    }
                }
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                // Only complete facets are kept
                if in_facet && loop_vertices.len() == 3 {
                    let v2 = loop_vertices.pop();
                    let v1 = loop_vertices.pop();
                    let v0 = loop_vertices.pop();
                    if let (Some(mut v0), Some(mut v1), Some(mut v2)) = (v0, v1, v2) {
                        if let Some(n) = facet_normal {
                            v0.normal = Some(n);
                            v1.normal = Some(n);
                            v2.normal = Some(n);
                        }
                        mesh.push_triangle(v0, v1, v2);
                    }
                }
                in_facet = false;
                facet_normal = None;
            }
            "endsolid" => break,
            _ => {
                // Ignore unknown lines, including "solid name"
            }
        }
    }

    Ok(mesh)
}

/// Parse the three components after "facet normal".
///
/// Zero-length normals are dropped rather than kept.
fn parse_normal(parts: &[&str]) -> LoadResult<Option<Vector3<f64>>> {
    if parts.len() < 4 || !parts[0].eq_ignore_ascii_case("normal") {
        return Ok(None);
    }
    let x: f64 = parts[1].parse()?;
    let y: f64 = parts[2].parse()?;
    let z: f64 = parts[3].parse()?;
    let n = Vector3::new(x, y, z);
    if n.norm() > f64::EPSILON {
        Ok(Some(n))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Build a binary STL byte buffer from triangle-soup coordinates,
    /// nine f32 components per triangle, with zero normals.
    pub(crate) fn binary_stl(triangles: &[[f32; 9]]) -> Vec<u8> {
        let mut out = vec![0u8; HEADER_SIZE];
        #[allow(clippy::cast_possible_truncation)]
        out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for tri in triangles {
            out.extend_from_slice(&[0u8; 12]); // zero normal
            for c in tri {
                out.extend_from_slice(&c.to_le_bytes());
            }
            out.extend_from_slice(&0u16.to_le_bytes()); // attribute bytes
        }
        out
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_stl(b""), Err(LoadError::EmptyInput)));
    }

    #[test]
    fn short_binary_is_malformed_header() {
        let bytes = vec![0u8; 60];
        match parse_stl(&bytes) {
            Err(LoadError::MalformedHeader { len }) => assert_eq!(len, 60),
            other => panic!("expected MalformedHeader, got {other:?}"),
        }
    }

    #[test]
    fn binary_single_triangle() {
        let bytes = binary_stl(&[[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]]);
        let mesh = parse_stl(&bytes).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_relative_eq!(mesh.vertices[1].position.x, 1.0);
        // zero normal in the file means no normal on the vertices
        assert!(!mesh.has_normals());
    }

    #[test]
    fn binary_nonzero_normal_is_attached() {
        let mut bytes = binary_stl(&[[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]]);
        // Overwrite the normal field with +Z
        let normal_offset = HEADER_SIZE + 4;
        bytes[normal_offset + 8..normal_offset + 12].copy_from_slice(&1.0f32.to_le_bytes());
        let mesh = parse_stl(&bytes).unwrap();
        assert!(mesh.has_normals());
        let n = mesh.vertices[0].normal.unwrap();
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn truncated_binary_never_returns_partial_mesh() {
        let bytes = binary_stl(&[
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0],
        ]);
        // Drop the last 10 bytes: second record is incomplete
        let cut = &bytes[..bytes.len() - 10];
        match parse_stl(cut) {
            Err(LoadError::TruncatedData { declared, parsed }) => {
                assert_eq!(declared, 2);
                assert_eq!(parsed, 1);
            }
            other => panic!("expected TruncatedData, got {other:?}"),
        }
    }

    #[test]
    fn declared_count_with_no_records_is_truncated() {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes.extend_from_slice(&3u32.to_le_bytes());
        match parse_stl(&bytes) {
            Err(LoadError::TruncatedData { declared, parsed }) => {
                assert_eq!(declared, 3);
                assert_eq!(parsed, 0);
            }
            other => panic!("expected TruncatedData, got {other:?}"),
        }
    }

    #[test]
    fn huge_declared_count_fails_before_allocating() {
        // 84-byte input claiming u32::MAX triangles must report
        // truncation, not attempt a multi-gigabyte reservation.
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        match parse_stl(&bytes) {
            Err(LoadError::TruncatedData { declared, parsed }) => {
                assert_eq!(declared, u32::MAX);
                assert_eq!(parsed, 0);
            }
            other => panic!("expected TruncatedData, got {other:?}"),
        }
    }

    #[test]
    fn inflated_count_over_real_records_reports_parsed() {
        let mut bytes = binary_stl(&[
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0],
        ]);
        // Rewrite the count field to claim far more than is present
        bytes[HEADER_SIZE..HEADER_SIZE + 4].copy_from_slice(&1_000_000u32.to_le_bytes());
        match parse_stl(&bytes) {
            Err(LoadError::TruncatedData { declared, parsed }) => {
                assert_eq!(declared, 1_000_000);
                assert_eq!(parsed, 2);
            }
            other => panic!("expected TruncatedData, got {other:?}"),
        }
    }

    #[test]
    fn ascii_facet_grammar() {
        let src = br"solid part
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid part";
        let mesh = parse_stl(src).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert!(mesh.has_normals());
    }

    #[test]
    fn ascii_incomplete_facet_is_skipped() {
        let src = br"solid part
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
    endloop
  endfacet
endsolid part";
        let mesh = parse_stl(src).unwrap();
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn ascii_bad_coordinate_is_an_error() {
        let src = br"solid part
  facet normal 0 0 1
    outer loop
      vertex 0 zero 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid part";
        assert!(matches!(parse_stl(src), Err(LoadError::ParseFloat(_))));
    }

    #[test]
    fn binary_with_solid_in_header_is_still_binary() {
        let mut bytes = binary_stl(&[[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]]);
        bytes[..5].copy_from_slice(b"solid");
        // Header still contains NUL padding, so this must sniff binary
        let mesh = parse_stl(&bytes).unwrap();
        assert_eq!(mesh.face_count(), 1);
    }
}
