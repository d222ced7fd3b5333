//! Content-addressed storage for extracted script bodies.
//!
//! The store is a flat directory of `<id>.js` files where `id` is the
//! content identifier of the file's bytes. Existence of a correctly named
//! file is the entire persisted state: there is no index, manifest, or
//! metadata sidecar. Entries are written once and never mutated or deleted
//! by this crate.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Error;

/// A writer over the output directory, treated as an append-only
/// content-addressed store.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    root: PathBuf,
}

impl ScriptStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The on-disk path for a given content identifier.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.js"))
    }

    /// Ensure a file with `content` exists at `<root>/<id>.js`.
    ///
    /// If the file already exists it is left untouched: the identifier is
    /// content-derived, so an existing entry already holds these bytes and
    /// re-checking content equality is unnecessary. Concurrent renders may
    /// race to create the same entry; the losing writer overwrites with
    /// identical bytes, so the existence check is an optimization rather
    /// than a lock.
    ///
    /// # Errors
    ///
    /// Returns `Error::CreateDir` or `Error::WriteFile` when the directory
    /// or file cannot be created. These are fatal; no retry is attempted.
    pub fn persist(&self, id: &str, content: &str) -> Result<PathBuf, Error> {
        let path = self.path_for(id);
        if path.exists() {
            tracing::debug!(id, "script already persisted, skipping write");
            return Ok(path);
        }

        fs::create_dir_all(&self.root)
            .map_err(|source| Error::CreateDir { path: self.root.clone(), source })?;
        fs::write(&path, content).map_err(|source| Error::WriteFile { path: path.clone(), source })?;

        tracing::debug!(id, bytes = content.len(), "persisted script file");
        Ok(path)
    }
}
