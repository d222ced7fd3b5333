//! Render-hook integration for exscript.
//!
//! Bridges a host render pipeline to the core extractor: the pipeline hands
//! over its rendered HTML fragments once per page, and every fragment comes
//! back with eligible inline scripts rewritten to external references.

pub mod hook;

pub use hook::{RenderedHtml, externalize_scripts};
