//! The block AST produced by the tree-to-blocks transformer.

use serde::{Deserialize, Serialize};

use crate::enums::ListType;

/// Inline content of a paragraph or header.
///
/// Block parsing leaves inline syntax uninterpreted: the collected text is
/// carried as-is, and a later inline pass resolves emphasis, links, and
/// reference usages against the [`crate::ReferenceMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inlines {
    pub raw: String,
}

impl Inlines {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl std::fmt::Display for Inlines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Attributes of a code block: the language, taken from the first
/// whitespace-delimited word of a fence's info string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAttr {
    pub language: Option<String>,
}

impl CodeAttr {
    /// Derive attributes from a fence info string.
    pub fn from_info(info: &str) -> Self {
        Self {
            language: info.split_whitespace().next().map(str::to_string),
        }
    }
}

/// A block-level element of the finished document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A paragraph
    Para(Inlines),
    /// An ATX or setext header; level is 1..=6
    Header { level: u8, content: Inlines },
    /// A `>` blockquote wrapping nested blocks
    Blockquote(Blocks),
    /// A list. `tight` lists render without paragraph wrappers around
    /// items; each item is itself a block sequence.
    List {
        tight: bool,
        list_type: ListType,
        items: Vec<Blocks>,
    },
    /// A fenced or indented code block
    CodeBlock { attr: CodeAttr, text: String },
    /// A raw HTML block, passed through verbatim
    HtmlBlock(String),
    /// A horizontal rule
    HRule,
}

/// An ordered sequence of blocks; output order reflects input order.
pub type Blocks = Vec<Block>;
