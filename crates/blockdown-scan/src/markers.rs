//! Marker recognisers: blockquotes, headers, rules, list markers.

use regex::Regex;
use std::sync::LazyLock;

use blockdown_core::{ContainerKind, ListType, NumDelim};

use crate::space::{scan_blank_line, scan_indent_space};

/// Regex for a setext underline: `=` run (level 1) or `-` run (level 2),
/// then nothing but spaces.
static SETEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(=+|-+) *$").unwrap());

/// `>` optionally followed by one space.
pub fn scan_blockquote_start(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('>')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// `#{1,6}` followed by a space or end of line. Returns the header level
/// and the rest of the line (the delimiting space is not consumed).
pub fn parse_atx_header_start(s: &str) -> Option<(u8, &str)> {
    let rest = s.strip_prefix('#')?;
    let extra = rest.bytes().take_while(|&b| b == b'#').count();
    if extra > 5 {
        return None;
    }
    let rest = &rest[extra..];
    match rest.bytes().next() {
        None | Some(b' ') => Some((extra as u8 + 1, rest)),
        _ => None,
    }
}

/// A setext underline; returns the header level (1 for `=`, 2 for `-`).
pub fn parse_setext_header_line(s: &str) -> Option<u8> {
    let caps = SETEXT_RE.captures(s)?;
    Some(if caps[1].starts_with('=') { 1 } else { 2 })
}

/// Three or more of `*`, `_` or `-` (all the same character), interleaved
/// with optional spaces, and nothing else on the line.
pub fn scan_hrule_line(s: &str) -> bool {
    let Some(c) = s.chars().next() else {
        return false;
    };
    if c != '*' && c != '_' && c != '-' {
        return false;
    }
    let mut count = 0;
    for ch in s.chars() {
        if ch == c {
            count += 1;
        } else if ch != ' ' {
            return false;
        }
    }
    count >= 3
}

/// A bullet or numbered list marker plus its padding.
///
/// `marker_column` is the 1-based column of the marker's first character,
/// supplied by the caller. The returned container kind carries the total
/// padding (marker width plus following spaces), clamped to one space when
/// the marker is followed by a blank line or by an indented code line.
pub fn parse_list_marker(s: &str, marker_column: u32) -> Option<(ContainerKind, &str)> {
    let (list_type, rest) = parse_bullet(s).or_else(|| parse_list_number(s))?;
    let (spaces, rest) = if scan_blank_line(rest).is_some() {
        (1, "")
    } else if let Some(r) = rest.strip_prefix(' ')
        && scan_indent_space(r).is_some()
    {
        (1, r)
    } else {
        let trimmed = rest.trim_start_matches(' ');
        ((rest.len() - trimmed.len()) as u32, trimmed)
    };
    // text cannot immediately follow the marker
    if spaces == 0 {
        return None;
    }
    let kind = ContainerKind::ListItem {
        marker_column,
        padding: spaces + list_type.marker_width(),
        list_type,
    };
    Some((kind, rest))
}

fn parse_bullet(s: &str) -> Option<(ListType, &str)> {
    let c = s.chars().next()?;
    if c != '+' && c != '*' && c != '-' {
        return None;
    }
    let rest = &s[1..];
    // a `*` or `-` line that reads as a horizontal rule is not a bullet
    if c != '+' && bullet_is_hrule(c, rest) {
        return None;
    }
    Some((ListType::Bullet(c), rest))
}

fn bullet_is_hrule(c: char, rest: &str) -> bool {
    let mut count = 1;
    for ch in rest.chars() {
        if ch == c {
            count += 1;
        } else if ch != ' ' {
            return false;
        }
    }
    count >= 3
}

fn parse_list_number(s: &str) -> Option<(ListType, &str)> {
    let digits = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let num: u32 = s[..digits].parse().ok()?;
    let rest = &s[digits..];
    let (delim, rest) = if let Some(r) = rest.strip_prefix('.') {
        (NumDelim::Period, r)
    } else if let Some(r) = rest.strip_prefix(')') {
        (NumDelim::Paren, r)
    } else {
        return None;
    };
    Some((ListType::Numbered(delim, num), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_blockquote_start() {
        assert_eq!(scan_blockquote_start("> quoted"), Some("quoted"));
        assert_eq!(scan_blockquote_start(">quoted"), Some("quoted"));
        assert_eq!(scan_blockquote_start(">  x"), Some(" x"));
        assert_eq!(scan_blockquote_start("no"), None);
    }

    #[test]
    fn test_parse_atx_header_start() {
        assert_eq!(parse_atx_header_start("# Hello"), Some((1, " Hello")));
        assert_eq!(parse_atx_header_start("### x"), Some((3, " x")));
        assert_eq!(parse_atx_header_start("######"), Some((6, "")));
        assert_eq!(parse_atx_header_start("#######"), None);
        assert_eq!(parse_atx_header_start("#nospace"), None);
        assert_eq!(parse_atx_header_start("plain"), None);
    }

    #[test]
    fn test_parse_setext_header_line() {
        assert_eq!(parse_setext_header_line("==="), Some(1));
        assert_eq!(parse_setext_header_line("="), Some(1));
        assert_eq!(parse_setext_header_line("---  "), Some(2));
        assert_eq!(parse_setext_header_line("=-="), None);
        assert_eq!(parse_setext_header_line("--- x"), None);
    }

    #[test]
    fn test_scan_hrule_line() {
        assert!(scan_hrule_line("***"));
        assert!(scan_hrule_line("- - -"));
        assert!(scan_hrule_line("___  _"));
        assert!(!scan_hrule_line("--"));
        assert!(!scan_hrule_line("-*-"));
        assert!(!scan_hrule_line("--- x"));
    }

    #[test]
    fn test_parse_bullet_marker() {
        let (kind, rest) = parse_list_marker("- item", 1).unwrap();
        assert_eq!(rest, "item");
        match kind {
            ContainerKind::ListItem {
                marker_column,
                padding,
                list_type,
            } => {
                assert_eq!(marker_column, 1);
                assert_eq!(padding, 2);
                assert_eq!(list_type, ListType::Bullet('-'));
            }
            _ => panic!("expected a list item"),
        }
    }

    #[test]
    fn test_parse_numbered_marker() {
        let (kind, rest) = parse_list_marker("12. item", 3).unwrap();
        assert_eq!(rest, "item");
        match kind {
            ContainerKind::ListItem {
                marker_column,
                padding,
                list_type,
            } => {
                assert_eq!(marker_column, 3);
                // 3 for the marker width of a two-digit number, 1 for the space
                assert_eq!(padding, 4);
                assert_eq!(list_type, ListType::Numbered(NumDelim::Period, 12));
            }
            _ => panic!("expected a list item"),
        }
    }

    #[test]
    fn test_marker_rejects_hrule() {
        assert!(parse_list_marker("- - -", 1).is_none());
        assert!(parse_list_marker("***", 1).is_none());
        // a lone dash is still a marker (only two characters short of a rule)
        assert!(parse_list_marker("- x", 1).is_some());
    }

    #[test]
    fn test_marker_requires_space() {
        assert!(parse_list_marker("-x", 1).is_none());
        assert!(parse_list_marker("1.x", 1).is_none());
    }

    #[test]
    fn test_marker_padding_clamps() {
        // marker followed by a blank line: padding is one space
        let (kind, rest) = parse_list_marker("-   ", 1).unwrap();
        assert_eq!(rest, "");
        assert!(matches!(kind, ContainerKind::ListItem { padding: 2, .. }));

        // five or more spaces: one space of padding, the rest is code
        let (kind, rest) = parse_list_marker("-     code", 1).unwrap();
        assert_eq!(rest, "    code");
        assert!(matches!(kind, ContainerKind::ListItem { padding: 2, .. }));

        // exactly four spaces are all padding
        let (kind, rest) = parse_list_marker("-    text", 1).unwrap();
        assert_eq!(rest, "text");
        assert!(matches!(kind, ContainerKind::ListItem { padding: 5, .. }));
    }
}
