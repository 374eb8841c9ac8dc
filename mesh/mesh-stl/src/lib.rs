//! Mesh file loading for PartQuote.
//!
//! Parses an uploaded triangle-mesh byte stream into a
//! [`mesh_core::TriangleMesh`]. STL is the only implemented format:
//!
//! - **STL binary**: 80-byte header, little-endian triangle count,
//!   50-byte triangle records
//! - **STL ASCII**: `facet normal` / `outer loop` / `vertex` grammar
//! - **STEP**: recognized at the upload boundary but not parseable
//!   here; routing a STEP file to the loader reports
//!   [`LoadError::UnsupportedExtension`]
//!
//! # Example
//!
//! ```
//! use mesh_stl::{parse_mesh, MeshFormat};
//!
//! assert_eq!(MeshFormat::from_name("part.stl"), Some(MeshFormat::Stl));
//! assert_eq!(MeshFormat::from_name("part.zip"), None);
//!
//! let err = parse_mesh(b"\0", "part.obj").unwrap_err();
//! assert!(err.to_string().contains("obj"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod stl;

pub use error::{LoadError, LoadResult};
pub use stl::{parse_stl, HEADER_SIZE, TRIANGLE_SIZE};

use std::path::Path;

use mesh_core::TriangleMesh;

/// Mesh exchange formats recognized at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// STL (Stereolithography), binary or ASCII. Fully supported.
    Stl,
    /// STEP (CAD boundary representation). Accepted at the transport
    /// layer; parsing is not implemented.
    Step,
}

impl MeshFormat {
    /// Detect format from a declared file name.
    ///
    /// Matching is case-insensitive. Returns `None` for unrecognized
    /// extensions.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "stl" => Some(Self::Stl),
            "step" | "stp" => Some(Self::Step),
            _ => None,
        }
    }

    /// Canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Stl => "stl",
            Self::Step => "step",
        }
    }
}

/// Parse a mesh byte stream, routing on the declared file name.
///
/// # Errors
///
/// [`LoadError::UnsupportedExtension`] for unrecognized extensions and
/// for STEP (recognized but not parseable); otherwise whatever
/// [`parse_stl`] reports.
pub fn parse_mesh(bytes: &[u8], name: &str) -> LoadResult<TriangleMesh> {
    match MeshFormat::from_name(name) {
        Some(MeshFormat::Stl) => parse_stl(bytes),
        // STEP parsing is a non-goal; surface the gap explicitly
        Some(MeshFormat::Step) => Err(LoadError::UnsupportedExtension {
            extension: MeshFormat::Step.extension().to_string(),
        }),
        None => Err(LoadError::UnsupportedExtension {
            extension: Path::new(name)
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("(none)")
                .to_string(),
        }),
    }
}

/// Load a mesh from a file on disk.
///
/// Thin convenience over [`parse_mesh`]: reads the whole file, then
/// delegates. The byte buffer is dropped after parsing.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, plus everything
/// [`parse_mesh`] reports.
pub fn load_mesh<P: AsRef<Path>>(path: P) -> LoadResult<TriangleMesh> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    parse_mesh(&bytes, name)
}
