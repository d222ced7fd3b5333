//! Unified error types for exscript.

use std::path::PathBuf;

/// Errors raised while persisting extracted script files.
///
/// All variants are fatal infrastructure faults: the caller is expected to
/// abort the render rather than fall back to serving inline scripts in
/// production, which would reintroduce the CSP violation this crate exists
/// to prevent.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output directory could not be created.
    #[error("failed to create script output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A script file could not be written.
    #[error("failed to write script file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
