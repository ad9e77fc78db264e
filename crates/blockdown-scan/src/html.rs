//! Raw HTML block opener recognition.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for an opening, closing or self-closing HTML tag at the start of
/// a line. Capture 1 is the tag name.
static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?([A-Za-z][A-Za-z0-9]*)(?:\s[^>]*)?/?>").unwrap());

/// Tag names (case-insensitive) that may open a raw HTML block.
pub const BLOCK_TAGS: &[&str] = &[
    "article",
    "aside",
    "blockquote",
    "body",
    "br",
    "button",
    "canvas",
    "caption",
    "col",
    "colgroup",
    "dd",
    "div",
    "dl",
    "dt",
    "embed",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "li",
    "map",
    "object",
    "ol",
    "output",
    "p",
    "pre",
    "progress",
    "section",
    "table",
    "tbody",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
    "video",
];

/// Lookahead for the start of a raw HTML block: a tag whose name is in the
/// closed block-tag set, or the literal `<!--` or `-->`. Consumes nothing.
pub fn parse_html_block_start(s: &str) -> bool {
    if s.starts_with("<!--") || s.starts_with("-->") {
        return true;
    }
    match HTML_TAG_RE.captures(s) {
        Some(caps) => {
            let name = caps[1].to_lowercase();
            BLOCK_TAGS.contains(&name.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_tags_sorted_and_known() {
        assert!(BLOCK_TAGS.is_sorted());
        assert_eq!(BLOCK_TAGS.len(), 47);
    }

    #[test]
    fn test_opening_tags() {
        assert!(parse_html_block_start("<div>"));
        assert!(parse_html_block_start("<DIV CLASS=\"x\">text"));
        assert!(parse_html_block_start("<table border=\"1\">"));
        assert!(parse_html_block_start("<hr/>"));
    }

    #[test]
    fn test_closing_tags() {
        assert!(parse_html_block_start("</div>"));
        assert!(parse_html_block_start("</UL>"));
    }

    #[test]
    fn test_comments() {
        assert!(parse_html_block_start("<!-- note"));
        assert!(parse_html_block_start("-->"));
    }

    #[test]
    fn test_non_block_tags() {
        assert!(!parse_html_block_start("<span>"));
        assert!(!parse_html_block_start("<em>x</em>"));
        assert!(!parse_html_block_start("< div>"));
        assert!(!parse_html_block_start("plain text"));
        assert!(!parse_html_block_start("<div"));
    }
}
