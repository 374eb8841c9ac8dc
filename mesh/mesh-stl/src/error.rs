//! Error types for mesh loading.

use thiserror::Error;

/// Result type for mesh loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while loading a mesh.
///
/// All variants are terminal for the request: no partial mesh is ever
/// returned alongside an error.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input byte stream was empty.
    #[error("empty input: no bytes to parse")]
    EmptyInput,

    /// The file extension is not a recognized mesh format, or the
    /// format is recognized but has no parser.
    #[error("unsupported file extension: .{extension}")]
    UnsupportedExtension {
        /// The offending extension (without the dot).
        extension: String,
    },

    /// Binary input too short to hold the 80-byte header and the
    /// 4-byte triangle count.
    #[error("malformed STL header: need at least 84 bytes, got {len}")]
    MalformedHeader {
        /// Actual input length in bytes.
        len: usize,
    },

    /// The declared triangle count exceeds the available data.
    #[error("truncated STL data: declared {declared} triangles, input ends at triangle {parsed}")]
    TruncatedData {
        /// Triangle count declared in the header.
        declared: u32,
        /// Index of the first triangle with missing bytes.
        parsed: u32,
    },

    /// A vertex coordinate in an ASCII facet failed to parse.
    #[error("invalid ASCII STL: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// I/O error reading the source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
