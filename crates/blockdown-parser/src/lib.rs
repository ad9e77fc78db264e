//! Blockdown Parser
//!
//! The block-structure recogniser of a markdown processor: a line-driven
//! state machine that maintains a stack of nested open containers
//! (document, blockquote, list item, fenced code, indented code, raw HTML
//! block, reference definition), decides for each line whether it
//! continues existing containers, opens new ones, closes some, or lazily
//! continues a paragraph, and then flattens the finished tree into a block
//! AST plus a map of link reference definitions.
//!
//! # Example
//!
//! ```
//! use blockdown_core::{Block, ParseOptions};
//! use blockdown_parser::parse_document;
//!
//! let (blocks, refmap) = parse_document(&ParseOptions::default(), "# Hello\n").unwrap();
//! assert!(matches!(&blocks[0], Block::Header { level: 1, .. }));
//! assert!(refmap.is_empty());
//! ```

pub mod builder;
pub mod inline;
pub mod lines;
pub mod recognize;
pub mod transform;

pub use builder::TreeBuilder;
pub use inline::parse_inlines;

use blockdown_core::{Blocks, Container, ParseOptions, ReferenceMap, Result};

/// Parse a whole document into its container tree and reference map.
///
/// The tree is the intermediate representation: containers in document
/// order, leaves tagged with the 1-based number of the line they came
/// from. Most callers want [`parse_document`] instead.
pub fn parse_container_tree(text: &str) -> (Container, ReferenceMap) {
    let mut builder = TreeBuilder::new();
    for (number, line) in lines::preprocess(text) {
        builder.process_line(number, &line);
    }
    builder.finish()
}

/// Parse a document into its blocks and reference map.
///
/// With `options.debug` set, the serialised container tree is written to
/// stderr and the returned block sequence is empty; no other option
/// changes what the block parser does.
pub fn parse_document(options: &ParseOptions, text: &str) -> Result<(Blocks, ReferenceMap)> {
    let (doc, refmap) = parse_container_tree(text);
    if options.debug {
        eprint!("{}", doc.render_tree());
        return Ok((Blocks::new(), refmap));
    }
    let blocks = transform::process_blocks(&refmap, &doc)?;
    Ok((blocks, refmap))
}
