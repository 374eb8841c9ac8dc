//! Upload staging.
//!
//! Validates an uploaded payload before any parsing happens (cheap
//! rejections first) and writes it to a staging directory, returning
//! an opaque storage reference the caller later hands to the
//! analysis pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use mesh_stl::MeshFormat;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::timestamp::Timestamp;

/// Default upload size limit: 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Upload acceptance policy.
///
/// Extensions follow [`MeshFormat`]: `.stl` and `.step` are accepted
/// at this boundary even though only STL can be parsed downstream.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Maximum payload size in bytes.
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl UploadPolicy {
    /// Check a payload against the policy without storing it.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyUpload`], [`EngineError::Oversized`] or
    /// [`EngineError::UnsupportedUpload`].
    pub fn check(&self, name: &str, bytes: &[u8]) -> EngineResult<()> {
        if bytes.is_empty() {
            return Err(EngineError::EmptyUpload);
        }
        let size = bytes.len() as u64;
        if size > self.max_bytes {
            return Err(EngineError::Oversized {
                size,
                limit: self.max_bytes,
            });
        }
        if MeshFormat::from_name(name).is_none() {
            return Err(EngineError::UnsupportedUpload {
                extension: Path::new(name)
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("(none)")
                    .to_string(),
            });
        }
        Ok(())
    }
}

/// Opaque reference to a staged upload.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Path of the staged file.
    pub path: PathBuf,
    /// Payload size in bytes.
    pub size: u64,
}

/// Validate and stage an uploaded payload.
///
/// The staged file name is `<unix-millis>-<sanitized name>`, which
/// keeps concurrent uploads of the same part distinct.
///
/// # Errors
///
/// Policy failures from [`UploadPolicy::check`], or
/// [`EngineError::Io`] if the staging directory is not writable.
pub fn stage_upload(
    staging_dir: &Path,
    name: &str,
    bytes: &[u8],
    policy: &UploadPolicy,
) -> EngineResult<StoredUpload> {
    policy.check(name, bytes)?;

    fs::create_dir_all(staging_dir)?;
    let stored_name = format!("{}-{}", Timestamp::now().as_millis(), sanitize(name));
    let path = staging_dir.join(stored_name);
    fs::write(&path, bytes)?;

    info!(
        name,
        size = bytes.len(),
        path = %path.display(),
        "Upload staged"
    );

    Ok(StoredUpload {
        path,
        size: bytes.len() as u64,
    })
}

/// Strip path separators and shell-unfriendly characters from a
/// declared file name.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
