//! Error types for the quote engine.

use thiserror::Error;

/// Result type for quote-engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced at the quote-engine boundary.
///
/// All failures are local and terminal per request; nothing here is
/// fatal to the hosting process, and none warrant automatic retry
/// since they stem from invalid input.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The uploaded payload was empty.
    #[error("empty upload")]
    EmptyUpload,

    /// The uploaded payload exceeds the size limit.
    #[error("upload of {size} bytes exceeds the {limit}-byte limit")]
    Oversized {
        /// Payload size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// The declared file name has no recognized mesh extension.
    #[error("unsupported upload extension: .{extension}")]
    UnsupportedUpload {
        /// The offending extension (without the dot).
        extension: String,
    },

    /// Mesh parsing failed.
    #[error(transparent)]
    Load(#[from] mesh_stl::LoadError),

    /// Cost-input validation failed.
    #[error(transparent)]
    Cost(#[from] cost_model::CostError),

    /// Worker pool could not be constructed.
    #[error("worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// I/O error while staging an upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
