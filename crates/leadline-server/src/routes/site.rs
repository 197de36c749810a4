//! Landing page hosting.
//!
//! Serves the built landing page from a directory. Paths that do not match a
//! file fall back to `index.html` so client-side routes resolve.

use std::path::{Path, PathBuf};

use tower_http::services::{ServeDir, ServeFile};

/// The landing page build directory is unusable.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The configured directory does not exist.
    #[error("could not find the build directory: {}, make sure to build the client first", .path.display())]
    MissingBuildDir { path: PathBuf },
}

/// Build the static file service for `dir`.
///
/// # Errors
///
/// Returns [`SiteError::MissingBuildDir`] if `dir` is not a directory.
pub fn service(dir: &Path) -> Result<ServeDir<ServeFile>, SiteError> {
    if !dir.is_dir() {
        return Err(SiteError::MissingBuildDir {
            path: dir.to_path_buf(),
        });
    }

    Ok(ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))))
}
