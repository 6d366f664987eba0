//! Static-file collaborator.
//!
//! The router's static gate only needs two things from this module: a
//! synchronous `lookup` that maps an unconsumed request path to a
//! [`FileHandle`] (or nothing), and a `serve` step that turns a handle into
//! a wire response. Range and ETag semantics are out of scope.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::response::Response;

/// A file resolved by [`StaticFiles::lookup`], ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// Absolute (root-joined) path of the file on disk
    pub path: PathBuf,
    /// Content type derived from the file extension
    pub content_type: &'static str,
}

/// Root-directory-scoped static file lookup.
pub struct StaticFiles {
    base_dir: PathBuf,
}

impl StaticFiles {
    /// Create a lookup rooted at `base`.
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self { base_dir: base.into() }
    }

    /// Map a URL path onto the base directory, rejecting anything that
    /// would escape it (`..`, absolute components, drive prefixes).
    fn map_path(&self, url_path: &str) -> Option<PathBuf> {
        let mut pb = self.base_dir.clone();
        for comp in Path::new(url_path.trim_start_matches('/')).components() {
            match comp {
                Component::Normal(s) => pb.push(s),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(pb)
    }

    fn content_type(path: &Path) -> &'static str {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase()
            .as_str()
        {
            "html" => "text/html",
            "css" => "text/css",
            "js" => "application/javascript",
            "json" => "application/json",
            "txt" => "text/plain",
            "png" => "image/png",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }

    /// Resolve `url_path` under the root.
    ///
    /// Returns `None` when the path escapes the root, does not exist, or is
    /// not a regular file. A `None` here is a normal no-match outcome: the
    /// router's static gate falls through and later combinators still get
    /// the untouched cursor.
    #[must_use]
    pub fn lookup(&self, url_path: &str) -> Option<FileHandle> {
        let path = self.map_path(url_path)?;
        if !path.is_file() {
            debug!(url_path = %url_path, "Static lookup miss");
            return None;
        }
        let content_type = Self::content_type(&path);
        Some(FileHandle { path, content_type })
    }
}

/// Read a resolved file into a 200 response.
///
/// The handle was produced by a successful lookup, so a read failure here
/// means the file vanished between lookup and serve; that degrades to 404.
#[must_use]
pub fn serve(handle: &FileHandle) -> Response {
    match fs::read(&handle.path) {
        Ok(bytes) => Response::bytes(200, handle.content_type, bytes),
        Err(e) => {
            warn!(path = %handle.path.display(), error = %e, "Static file read failed");
            Response::not_found()
        }
    }
}
