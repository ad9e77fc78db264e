//! The container tree built by the block-structure recogniser.
//!
//! A document is parsed line by line into a tree of [`Container`]s whose
//! leaves are line-level tokens ([`Leaf`]). The tree is an intermediate
//! representation: a second pass turns it into the block AST in
//! [`crate::blocks`]. Containers are mutated only while they sit on the
//! parser's stack; once closed they become children of their parent and
//! are never touched again.

use serde::{Deserialize, Serialize};

use crate::enums::ListType;

/// A line-level token attached to a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leaf {
    /// A non-blank content line
    TextLine(String),
    /// A line consisting solely of spaces
    BlankLine(String),
    /// An ATX header (`#{1,6}` prefix); level is 1..=6
    AtxHeader { level: u8, text: String },
    /// A setext header; level 1 (`=` underline) or 2 (`-` underline).
    /// Retroactively replaces the text line above the underline.
    SetextHeader { level: u8, text: String },
    /// A horizontal rule
    Rule,
}

impl Leaf {
    /// The token's text, for leaves that carry one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Leaf::TextLine(t) | Leaf::BlankLine(t) => Some(t),
            Leaf::AtxHeader { text, .. } | Leaf::SetextHeader { text, .. } => Some(text),
            Leaf::Rule => None,
        }
    }
}

/// What kind of block a container is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    /// The root; exactly one, always at the bottom of the stack
    Document,
    /// A `>` blockquote
    BlockQuote,
    /// One list item. `marker_column` is the 1-based column of the bullet or
    /// number; `padding` is marker width plus the spaces after it, so the
    /// item's content column is `marker_column + padding`.
    ListItem {
        marker_column: u32,
        padding: u32,
        list_type: ListType,
    },
    /// A fenced code block. `start_column` is the 1-based column of the
    /// opening fence; `fence` is the exact opener run; `info` is the info
    /// string after it.
    FencedCode {
        start_column: u32,
        fence: String,
        info: String,
    },
    /// A four-space indented code block
    IndentedCode,
    /// A raw HTML block, closed by a blank line
    RawHtmlBlock,
    /// Buffers the lines of a link reference definition
    Reference,
}

impl ContainerKind {
    fn label(&self) -> &'static str {
        match self {
            ContainerKind::Document => "document",
            ContainerKind::BlockQuote => "block_quote",
            ContainerKind::ListItem { .. } => "list_item",
            ContainerKind::FencedCode { .. } => "fenced_code",
            ContainerKind::IndentedCode => "indented_code",
            ContainerKind::RawHtmlBlock => "raw_html_block",
            ContainerKind::Reference => "reference",
        }
    }
}

/// One entry in a container's ordered child sequence: either a closed
/// sub-container or a leaf with the number of the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Child(Container),
    Leaf { line: u32, leaf: Leaf },
}

/// A block element that can contain other elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub kind: ContainerKind,
    pub children: Vec<Element>,
}

impl Container {
    /// Create an empty container of the given kind.
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Whether the most recently added child is a text line.
    pub fn last_child_is_text_line(&self) -> bool {
        matches!(
            self.children.last(),
            Some(Element::Leaf {
                leaf: Leaf::TextLine(_),
                ..
            })
        )
    }

    /// Whether the most recently added child is a blank line.
    pub fn last_child_is_blank_line(&self) -> bool {
        matches!(
            self.children.last(),
            Some(Element::Leaf {
                leaf: Leaf::BlankLine(_),
                ..
            })
        )
    }

    /// Render an indented, human-oriented view of the tree. This is the
    /// payload of the debug side channel; the format is not a contract.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        out.push_str(&pad);
        out.push_str(self.kind.label());
        match &self.kind {
            ContainerKind::ListItem {
                marker_column,
                padding,
                list_type,
            } => {
                out.push_str(&format!(
                    " col={} pad={} {}",
                    marker_column, padding, list_type
                ));
            }
            ContainerKind::FencedCode {
                start_column,
                fence,
                info,
            } => {
                out.push_str(&format!(" col={} fence={:?} info={:?}", start_column, fence, info));
            }
            _ => {}
        }
        out.push('\n');
        for child in &self.children {
            match child {
                Element::Child(c) => c.render_into(out, depth + 1),
                Element::Leaf { line, leaf } => {
                    out.push_str(&"  ".repeat(depth + 1));
                    let desc = match leaf {
                        Leaf::TextLine(t) => format!("text_line {} {:?}", line, t),
                        Leaf::BlankLine(t) => format!("blank_line {} {:?}", line, t),
                        Leaf::AtxHeader { level, text } => {
                            format!("atx_header {} level={} {:?}", line, level, text)
                        }
                        Leaf::SetextHeader { level, text } => {
                            format!("setext_header {} level={} {:?}", line, level, text)
                        }
                        Leaf::Rule => format!("rule {}", line),
                    };
                    out.push_str(&desc);
                    out.push('\n');
                }
            }
        }
    }
}
