//! Per-line recognition: container continuation and new-container starts.

use blockdown_core::{Container, ContainerKind, Leaf};
use blockdown_scan as scan;

/// Outcome of matching a line against the open container stack.
#[derive(Debug, Clone, Copy)]
pub struct Continuation<'a> {
    /// Text left after the successful continuations
    pub remainder: &'a str,
    /// Characters consumed from the start of the line
    pub consumed: u32,
    /// Number of deepest containers that failed to match
    pub num_unmatched: usize,
}

/// Walk the open containers from the outside in, applying each one's
/// continuation rule, stopping at the first failure. The remainder is the
/// text left after the successful continuations; `num_unmatched` counts
/// the deeper containers that did not match.
pub fn continue_line<'a>(stack: &[Container], line: &'a str) -> Continuation<'a> {
    let mut rest = line;
    let mut matched = 0;
    for container in stack {
        let col = (line.len() - rest.len()) as u32 + 1;
        let next = match &container.kind {
            ContainerKind::Document => Some(rest),
            ContainerKind::BlockQuote => {
                scan::scan_blockquote_start(scan::scan_nonindent_space(rest))
            }
            ContainerKind::IndentedCode => scan::scan_indent_space(rest),
            ContainerKind::FencedCode { start_column, .. } => {
                Some(scan::scan_spaces_up_to_column(rest, col, *start_column))
            }
            ContainerKind::RawHtmlBlock => match scan::scan_blank_line(rest) {
                Some(_) => None,
                None => Some(rest),
            },
            ContainerKind::ListItem {
                marker_column,
                padding,
                ..
            } => {
                if scan::scan_blank_line(rest).is_some() {
                    Some(rest)
                } else {
                    scan::scan_spaces_to_column(rest, col, marker_column + 1)
                        .map(|r| scan::scan_spaces_up_to(r, padding.saturating_sub(1)))
                }
            }
            ContainerKind::Reference => {
                if scan::scan_blank_line(rest).is_some()
                    || scan::scan_reference(scan::scan_nonindent_space(rest))
                {
                    None
                } else {
                    Some(rest)
                }
            }
        };
        match next {
            Some(r) => {
                rest = r;
                matched += 1;
            }
            None => break,
        }
    }
    Continuation {
        remainder: rest,
        consumed: (line.len() - rest.len()) as u32,
        num_unmatched: stack.len() - matched,
    }
}

/// Recognise the containers a line opens and the leaf that follows them.
///
/// Regular containers (blockquotes, list items) are taken greedily; then at
/// most one verbatim container may open. A fenced code block may open even
/// directly after a text line; the other verbatim containers may not.
/// `offset` is the column offset already consumed by continuations.
pub fn try_new_containers(
    last_line_is_text: bool,
    offset: u32,
    text: &str,
) -> (Vec<ContainerKind>, Leaf) {
    let mut kinds = Vec::new();
    let mut rest = text;
    loop {
        let skipped = scan::scan_nonindent_space(rest);
        let col = offset + (text.len() - skipped.len()) as u32 + 1;
        if let Some(r) = scan::scan_blockquote_start(skipped) {
            kinds.push(ContainerKind::BlockQuote);
            rest = r;
        } else if let Some((kind, r)) = scan::parse_list_marker(skipped, col) {
            kinds.push(kind);
            rest = r;
        } else {
            break;
        }
    }
    if scan::scan_blank_line(rest).is_none() {
        let skipped = scan::scan_nonindent_space(rest);
        let col = offset + (text.len() - skipped.len()) as u32 + 1;
        if let Some(fence) = scan::parse_code_fence(skipped) {
            kinds.push(ContainerKind::FencedCode {
                start_column: col,
                fence: fence.fence,
                info: fence.info,
            });
            // the opener line contributes no content of its own
            return (kinds, Leaf::BlankLine(String::new()));
        }
        if !last_line_is_text {
            if let Some(r) = scan::scan_indent_space(rest)
                && scan::scan_blank_line(r).is_none()
            {
                kinds.push(ContainerKind::IndentedCode);
                return (kinds, text_line_or_blank(r));
            }
            if scan::parse_html_block_start(skipped) {
                kinds.push(ContainerKind::RawHtmlBlock);
                return (kinds, text_line_or_blank(skipped));
            }
            if scan::scan_reference(skipped) {
                kinds.push(ContainerKind::Reference);
                return (kinds, text_line_or_blank(skipped));
            }
        }
    }
    (kinds, leaf(last_line_is_text, rest))
}

/// Recognise the leaf on a line once container starts are exhausted:
/// ATX header, setext underline (only right after a text line), horizontal
/// rule, and finally a plain text or blank line.
fn leaf(last_line_is_text: bool, text: &str) -> Leaf {
    let rest = scan::scan_nonindent_space(text);
    if let Some((level, after)) = scan::parse_atx_header_start(rest) {
        return Leaf::AtxHeader {
            level,
            text: strip_atx_suffix(after),
        };
    }
    if last_line_is_text
        && let Some(level) = scan::parse_setext_header_line(rest)
    {
        // the text is taken later from the line this one underlines
        return Leaf::SetextHeader {
            level,
            text: String::new(),
        };
    }
    if scan::scan_hrule_line(rest) {
        return Leaf::Rule;
    }
    text_line_or_blank(rest)
}

fn text_line_or_blank(text: &str) -> Leaf {
    if text.bytes().all(|b| b == b' ') {
        Leaf::BlankLine(text.to_string())
    } else {
        Leaf::TextLine(text.to_string())
    }
}

/// Strip the trailing run of `#` and spaces from ATX header text; an
/// escaped `\#` at the end stays literal.
fn strip_atx_suffix(text: &str) -> String {
    let stripped = text.trim_end_matches([' ', '#']);
    let restored = if stripped.ends_with('\\') {
        format!("{stripped}#")
    } else {
        stripped.to_string()
    };
    restored.trim().to_string()
}
