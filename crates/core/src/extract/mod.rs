//! Inline script extraction and rewriting.
//!
//! Scans an HTML fragment for inline `<script>` bodies, persists each
//! distinct body once under its content identifier, and rewrites the tags to
//! external `src` references. Strict Content-Security-Policy deployments
//! forbid inline script bodies; externalizing them keeps the rendered pages
//! CSP-safe without changing behavior.
//!
//! - Scanning is a single regex pass, not a DOM parse.
//! - Identical bodies across tags, fragments, and requests share one file.
//! - Everything outside rewritten tag spans is byte-identical in the output.

mod scan;

pub use scan::{ScriptMatch, scan};

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::Error;
use crate::config::{ExtractOptions, INTERNAL_PREFIX, Mode};
use crate::hash::content_id;
use crate::store::ScriptStore;

/// Matches a `type` attribute declaring a structured-data block
/// (`application/json` or `application/ld+json`), case-insensitive, single
/// or double quoted.
static DATA_TYPE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)type\s*=\s*["']application/(ld\+)?json["']"#).expect("invalid type attribute pattern")
});

impl ScriptMatch<'_> {
    /// Whether this match should be externalized.
    ///
    /// A match is skipped (left byte-identical in the output) when its body
    /// is empty or whitespace-only, when it already carries a `src`
    /// attribute, or when its `type` marks it as a JSON/JSON-LD data block
    /// rather than an executable script.
    fn is_eligible(&self) -> bool {
        if self.content.trim().is_empty() {
            return false;
        }
        if let Some(attrs) = self.attributes {
            if attrs.contains("src=") {
                return false;
            }
            if DATA_TYPE_ATTR.is_match(attrs) {
                return false;
            }
        }
        true
    }
}

/// Rewrite every eligible inline script in `fragment` to an external
/// reference, persisting each distinct body under
/// `<options.output>/<id>.js`.
///
/// In development mode this is the identity function: no scan, no I/O, the
/// input is returned unchanged so inline scripts stay visible and editable.
///
/// Matches are processed left to right and replaced by span-indexed
/// reconstruction: bytes between matches are copied through verbatim and
/// each replacement lands at its own recorded span, so two textually
/// identical tags can never alias each other's rewrite.
///
/// # Errors
///
/// Propagates [`Error`] when the output directory or a script file cannot
/// be created. Such failures are fatal to the render; there is no
/// partial-fragment fallback.
pub fn rewrite(fragment: &str, options: &ExtractOptions) -> Result<String, Error> {
    if options.mode == Mode::Development {
        return Ok(fragment.to_string());
    }

    let matches = scan(fragment);
    if matches.is_empty() {
        return Ok(fragment.to_string());
    }

    let store = ScriptStore::new(&options.output);
    let mut out = String::with_capacity(fragment.len());
    let mut cursor = 0;

    for m in &matches {
        if !m.is_eligible() {
            tracing::debug!(tag = m.raw_tag, "skipping ineligible script tag");
            continue;
        }

        let id = content_id(m.content);
        store.persist(&id, m.content)?;
        let public_path = format!("{INTERNAL_PREFIX}/{id}.js");

        out.push_str(&fragment[cursor..m.span.start]);
        match m.attributes {
            Some(attrs) => {
                let _ = write!(out, r#"<script{attrs} src="{public_path}"></script>"#);
            }
            None => {
                let _ = write!(out, r#"<script src="{public_path}"></script>"#);
            }
        }
        cursor = m.span.end;
    }

    out.push_str(&fragment[cursor..]);
    Ok(out)
}
