//! Per-page render hook applying inline script extraction.

use exscript_core::{Error, ExtractOptions, rewrite};

/// The HTML fragments a host render pipeline produces for one page.
///
/// Each slot is a sequence of independent fragment strings; slot membership
/// and order are significant to the host and are preserved by the hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedHtml {
    pub head: Vec<String>,
    pub body: Vec<String>,
    pub body_prepend: Vec<String>,
    pub body_append: Vec<String>,
}

/// Rewrite every fragment of a rendered page in place.
///
/// Fragments are processed sequentially; each rewrite is independent of the
/// others apart from the shared content-addressed store, so identical
/// scripts across slots still share one persisted file.
///
/// # Errors
///
/// Propagates the first [`Error`] from the underlying rewrite. Fragments
/// before the failure keep their rewritten content; the caller decides
/// whether to abort the render.
pub fn externalize_scripts(html: &mut RenderedHtml, options: &ExtractOptions) -> Result<(), Error> {
    for fragment in html
        .head
        .iter_mut()
        .chain(html.body.iter_mut())
        .chain(html.body_prepend.iter_mut())
        .chain(html.body_append.iter_mut())
    {
        *fragment = rewrite(fragment, options)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exscript_core::{INTERNAL_PREFIX, Mode, content_id};
    use std::fs;

    fn page() -> RenderedHtml {
        RenderedHtml {
            head: vec!["<title>t</title>".into(), "<script>head();</script>".into()],
            body: vec!["<div>content</div>".into()],
            body_prepend: vec!["<script>prepend();</script>".into()],
            body_append: vec!["<script>append();</script>".into(), "<footer>f</footer>".into()],
        }
    }

    #[test]
    fn test_hook_rewrites_all_slots() {
        let dir = tempfile::tempdir().unwrap();
        let mut html = page();

        externalize_scripts(&mut html, &ExtractOptions::new(dir.path())).unwrap();

        let head_id = content_id("head();");
        let prepend_id = content_id("prepend();");
        let append_id = content_id("append();");
        assert_eq!(html.head[1], format!(r#"<script src="{INTERNAL_PREFIX}/{head_id}.js"></script>"#));
        assert_eq!(html.body_prepend[0], format!(r#"<script src="{INTERNAL_PREFIX}/{prepend_id}.js"></script>"#));
        assert_eq!(html.body_append[0], format!(r#"<script src="{INTERNAL_PREFIX}/{append_id}.js"></script>"#));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_hook_preserves_slot_membership_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut html = page();

        externalize_scripts(&mut html, &ExtractOptions::new(dir.path())).unwrap();

        assert_eq!(html.head.len(), 2);
        assert_eq!(html.head[0], "<title>t</title>");
        assert_eq!(html.body, vec!["<div>content</div>".to_string()]);
        assert_eq!(html.body_append[1], "<footer>f</footer>");
    }

    #[test]
    fn test_hook_development_mode_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let options =
            ExtractOptions { output: dir.path().to_path_buf(), mode: Mode::Development };
        let mut html = page();
        let before = html.clone();

        externalize_scripts(&mut html, &options).unwrap();

        assert_eq!(html, before);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_hook_identical_scripts_across_slots_share_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut html = RenderedHtml {
            head: vec!["<script>shared();</script>".into()],
            body_append: vec!["<script>shared();</script>".into()],
            ..Default::default()
        };

        externalize_scripts(&mut html, &ExtractOptions::new(dir.path())).unwrap();

        assert_eq!(html.head[0], html.body_append[0]);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_hook_propagates_store_failure() {
        let mut html = page();
        let result = externalize_scripts(&mut html, &ExtractOptions::new("/proc/no-such-place/out"));
        assert!(result.is_err());
    }
}
