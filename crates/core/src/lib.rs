//! Core types and shared functionality for exscript.
//!
//! This crate provides:
//! - Inline script scanning and rewriting over HTML fragments
//! - Content-addressed persistence of extracted script bodies
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod extract;
pub mod hash;
pub mod store;

pub use config::{AppConfig, ConfigError, ExtractOptions, INTERNAL_PREFIX, Mode};
pub use error::Error;
pub use extract::rewrite;
pub use hash::content_id;
pub use store::ScriptStore;
