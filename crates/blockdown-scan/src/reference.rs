//! Link reference definition scanning and parsing.

/// Scan a link label: `[` … `]` with backslash escapes and balanced nested
/// brackets. Returns the label contents and the rest of the input.
pub fn scan_link_label(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_prefix('[')?;
    let mut depth = 0usize;
    let mut iter = inner.char_indices();
    while let Some((i, c)) = iter.next() {
        match c {
            '\\' => {
                iter.next();
            }
            '[' => depth += 1,
            ']' => {
                if depth == 0 {
                    return Some((&inner[..i], &inner[i + 1..]));
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Lookahead: a link label followed by `:`. Consumes nothing.
pub fn scan_reference(s: &str) -> bool {
    matches!(scan_link_label(s), Some((_, rest)) if rest.starts_with(':'))
}

/// Parse a complete reference definition: label, `:`, optional whitespace
/// (at most one newline), URL, then an optional title which may sit on the
/// following line. Nothing but spaces may remain. Returns
/// `(label, url, title)`.
pub fn parse_reference(s: &str) -> Option<(String, String, String)> {
    let (label, rest) = scan_link_label(s)?;
    let rest = rest.strip_prefix(':')?;
    let rest = spnl(rest);
    let (url, rest) = parse_link_url(rest)?;
    let after_spnl = spnl(rest);
    if let Some((title, remainder)) = parse_link_title(after_spnl)
        && remainder.bytes().all(|b| b == b' ')
    {
        return Some((label.to_string(), url, title));
    }
    if rest.bytes().all(|b| b == b' ') {
        return Some((label.to_string(), url, String::new()));
    }
    None
}

/// Spaces, then at most one newline, then spaces.
fn spnl(s: &str) -> &str {
    let s = s.trim_start_matches(' ');
    match s.strip_prefix('\n') {
        Some(r) => r.trim_start_matches(' '),
        None => s,
    }
}

fn parse_link_url(s: &str) -> Option<(String, &str)> {
    // pointy form: everything up to `>`, newlines excluded
    if let Some(inner) = s.strip_prefix('<') {
        let end = inner.find('>')?;
        let url = &inner[..end];
        if url.contains('\n') {
            return None;
        }
        return Some((url.to_string(), &inner[end + 1..]));
    }
    // bare form: no whitespace, parentheses must balance; an unbalanced
    // `(` ends the url before it, an unbalanced `)` ends it there
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut paren_start = 0usize;
    let mut end = bytes.len();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b' ' | b'\t' | b'\n' => {
                end = if depth > 0 { paren_start } else { i };
                break;
            }
            b'(' => {
                if depth == 0 {
                    paren_start = i;
                }
                depth += 1;
            }
            b')' => {
                if depth == 0 {
                    end = i;
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
        i += 1;
    }
    if i >= bytes.len() && depth > 0 {
        end = paren_start;
    }
    let end = end.min(bytes.len());
    Some((s[..end].to_string(), &s[end..]))
}

fn parse_link_title(s: &str) -> Option<(String, &str)> {
    let open = s.chars().next()?;
    let close = match open {
        '"' => '"',
        '\'' => '\'',
        '(' => ')',
        _ => return None,
    };
    let inner = &s[1..];
    let mut iter = inner.char_indices();
    while let Some((i, c)) = iter.next() {
        if c == '\\' {
            iter.next();
        } else if c == close {
            return Some((inner[..i].to_string(), &inner[i + 1..]));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_link_label() {
        assert_eq!(scan_link_label("[foo]: /u"), Some(("foo", ": /u")));
        assert_eq!(scan_link_label("[a [b] c]x"), Some(("a [b] c", "x")));
        assert_eq!(scan_link_label("[esc\\]]y"), Some(("esc\\]", "y")));
        assert_eq!(scan_link_label("[unterminated"), None);
        assert_eq!(scan_link_label("no label"), None);
    }

    #[test]
    fn test_scan_reference() {
        assert!(scan_reference("[foo]: /url"));
        assert!(!scan_reference("[foo] /url"));
        assert!(!scan_reference("plain"));
    }

    #[test]
    fn test_parse_reference_basic() {
        let (label, url, title) = parse_reference("[foo]: /url").unwrap();
        assert_eq!(label, "foo");
        assert_eq!(url, "/url");
        assert_eq!(title, "");
    }

    #[test]
    fn test_parse_reference_with_title() {
        let (label, url, title) = parse_reference("[foo]: /url \"the title\"").unwrap();
        assert_eq!((label.as_str(), url.as_str(), title.as_str()), ("foo", "/url", "the title"));

        let (_, url, title) = parse_reference("[x]: <my url> (note)").unwrap();
        assert_eq!(url, "my url");
        assert_eq!(title, "note");
    }

    #[test]
    fn test_parse_reference_title_on_next_line() {
        let (_, url, title) = parse_reference("[foo]: /url\n  'title'").unwrap();
        assert_eq!(url, "/url");
        assert_eq!(title, "title");
    }

    #[test]
    fn test_parse_reference_trailing_junk() {
        assert!(parse_reference("[foo]: /url junk").is_none());
        assert!(parse_reference("[foo]: /url\ntrailing line").is_none());
    }

    #[test]
    fn test_parse_url_parens() {
        let (url, rest) = parse_link_url("/a(b)c more").unwrap();
        assert_eq!(url, "/a(b)c");
        assert_eq!(rest, " more");

        // unmatched closing paren ends the url
        let (url, rest) = parse_link_url("/a)b").unwrap();
        assert_eq!(url, "/a");
        assert_eq!(rest, ")b");

        // unmatched opening paren is excluded
        let (url, rest) = parse_link_url("/a(b c").unwrap();
        assert_eq!(url, "/a");
        assert_eq!(rest, "(b c");
    }
}
