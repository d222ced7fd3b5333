//! Single-pass inline script scanning over raw HTML text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Matches an inline script element: `<script`, optional attribute text
/// beginning with a space, `>`, then the shortest run of any characters
/// (newlines included) up to the next `</script>`.
///
/// Tag-name matching is case-sensitive and deliberately lightweight; this is
/// a text scan over server-generated markup, not an HTML parser. Unbalanced
/// or malformed tags simply do not match and pass through untouched.
static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script( [^>]*)?>(.*?)</script>").expect("invalid script tag pattern"));

/// One inline-script occurrence found in an HTML fragment.
///
/// Borrows from the scanned fragment and lives only for the duration of one
/// rewrite pass.
#[derive(Debug, Clone)]
pub struct ScriptMatch<'a> {
    /// The full matched tag text, `<script...>...</script>`.
    pub raw_tag: &'a str,
    /// Attribute text between `<script` and `>`, including its leading
    /// space, if any attributes were present.
    pub attributes: Option<&'a str>,
    /// The script body between the opening and closing tag.
    pub content: &'a str,
    /// Byte span of the full match within the scanned fragment.
    pub span: Range<usize>,
}

/// Find every inline script occurrence in `fragment`, left to right,
/// non-overlapping.
///
/// Known limitation: a script body containing the literal substring
/// `</script>` (for example inside a string literal) terminates its match
/// early. Well-formed server-generated markup does not do this.
pub fn scan(fragment: &str) -> Vec<ScriptMatch<'_>> {
    SCRIPT_TAG
        .captures_iter(fragment)
        .map(|caps| {
            let full = caps.get(0).expect("capture group 0 always present");
            ScriptMatch {
                raw_tag: full.as_str(),
                attributes: caps.get(1).map(|m| m.as_str()),
                content: caps.get(2).map(|m| m.as_str()).unwrap_or_default(),
                span: full.range(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_bare_script() {
        let matches = scan("<script>var a=1;</script>");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].raw_tag, "<script>var a=1;</script>");
        assert_eq!(matches[0].attributes, None);
        assert_eq!(matches[0].content, "var a=1;");
        assert_eq!(matches[0].span, 0..25);
    }

    #[test]
    fn test_scan_captures_attributes_with_leading_space() {
        let matches = scan(r#"<script defer type="module">run();</script>"#);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].attributes, Some(r#" defer type="module""#));
        assert_eq!(matches[0].content, "run();");
    }

    #[test]
    fn test_scan_multiline_body() {
        let html = "<script>\nvar a = 1;\nconsole.log(a);\n</script>";
        let matches = scan(html);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].content, "\nvar a = 1;\nconsole.log(a);\n");
    }

    #[test]
    fn test_scan_multiple_matches_in_order() {
        let html = "<p>x</p><script>one();</script><div></div><script>two();</script>";
        let matches = scan(html);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].content, "one();");
        assert_eq!(matches[1].content, "two();");
        assert!(matches[0].span.end <= matches[1].span.start);
    }

    #[test]
    fn test_scan_shortest_body_wins() {
        // Lazy body match: the first closing tag ends the first match.
        let html = "<script>a();</script><script>b();</script>";
        let matches = scan(html);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].content, "a();");
        assert_eq!(matches[1].content, "b();");
    }

    #[test]
    fn test_scan_unclosed_tag_no_match() {
        assert!(scan("<script>var a=1;").is_empty());
    }

    #[test]
    fn test_scan_attribute_requires_leading_space() {
        // `<scriptfoo>` is not a script tag.
        assert!(scan("<scriptfoo>var a=1;</script>").is_empty());
    }

    #[test]
    fn test_scan_case_sensitive_tag_name() {
        assert!(scan("<SCRIPT>var a=1;</SCRIPT>").is_empty());
    }

    #[test]
    fn test_scan_spans_index_original_text() {
        let html = "<div>x</div><script>a();</script>";
        let matches = scan(html);
        assert_eq!(&html[matches[0].span.clone()], matches[0].raw_tag);
    }

    #[test]
    fn test_scan_no_scripts() {
        assert!(scan("<div>hello</div>").is_empty());
    }
}
