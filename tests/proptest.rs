//! Property-based tests for blockdown.
//!
//! These tests use proptest to generate random inputs and verify that the
//! parser handles them gracefully and that its structural guarantees hold.

use proptest::prelude::*;

use blockdown_core::{Block, Blocks, ParseOptions, ReferenceMap};
use blockdown_parser::parse_document;

/// Generate a random markdown-like string.
fn markdown_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate a random line of printable text.
fn text_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E]{0,200}").unwrap()
}

/// Generate a word that cannot be mistaken for block structure.
fn plain_word() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-z][a-z0-9]{0,11}").unwrap()
}

/// Generate a heading line.
fn heading() -> impl Strategy<Value = (usize, String)> {
    (1..=6usize, plain_word()).prop_map(|(level, text)| {
        let line = format!("{} {}", "#".repeat(level), text);
        (level, line)
    })
}

/// Generate a well-formed fenced code block over a safe alphabet.
fn code_block() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::vec(
            prop::string::string_regex(r"[a-z ]{0,20}").unwrap(),
            0..8,
        ),
        prop::string::string_regex(r"[a-z]{0,6}").unwrap(),
    )
        .prop_map(|(lines, lang)| {
            let doc = format!("```{}\n{}\n```\n", lang, lines.join("\n"));
            (lines, doc)
        })
}

/// Generate a bullet list of safe one-word items.
fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(plain_word(), 1..10)
}

fn parse(input: &str) -> (Blocks, ReferenceMap) {
    parse_document(&ParseOptions::default(), input).expect("block parsing never fails on input")
}

fn count_paragraphs(blocks: &Blocks) -> usize {
    blocks
        .iter()
        .filter(|b| matches!(b, Block::Para(_)))
        .count()
}

// =============================================================================
// Robustness properties
// =============================================================================

proptest! {
    /// The parser never fails on any input.
    #[test]
    fn parser_never_fails(input in markdown_string()) {
        let _ = parse(&input);
    }

    /// A single line yields at most one block (a reference definition or a
    /// blank line may yield none).
    #[test]
    fn parser_handles_single_lines(line in text_line()) {
        let (blocks, _) = parse(&line);
        prop_assert!(blocks.len() <= 1);
    }

    /// The debug option always yields an empty block sequence.
    #[test]
    fn debug_option_yields_no_blocks(input in markdown_string()) {
        let opts = ParseOptions { debug: false, ..ParseOptions::default() };
        let quiet = ParseOptions { debug: true, ..opts };
        let (blocks, _) = parse_document(&quiet, &input).unwrap();
        prop_assert!(blocks.is_empty());
    }
}

// =============================================================================
// Structural properties
// =============================================================================

proptest! {
    /// A plain paragraph of words survives parsing intact.
    #[test]
    fn paragraph_text_round_trips(words in prop::collection::vec(plain_word(), 1..8)) {
        let text = words.join(" ");
        let (blocks, _) = parse(&format!("{}\n", text));
        prop_assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Para(p) => prop_assert_eq!(&p.raw, &text),
            other => prop_assert!(false, "expected a paragraph, got {:?}", other),
        }
    }

    /// Blank-separated paragraphs come out one block each.
    #[test]
    fn blank_separated_paragraphs(paras in prop::collection::vec(plain_word(), 1..6)) {
        let doc = paras.join("\n\n");
        let (blocks, _) = parse(&doc);
        prop_assert_eq!(count_paragraphs(&blocks), paras.len());
    }

    /// Headings keep their level.
    #[test]
    fn heading_levels_preserved((level, line) in heading()) {
        let (blocks, _) = parse(&format!("{}\n", line));
        prop_assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Header { level: l, .. } => prop_assert_eq!(*l as usize, level),
            other => prop_assert!(false, "expected a header, got {:?}", other),
        }
    }

    /// A well-formed fence round-trips its content verbatim.
    #[test]
    fn fenced_code_round_trips((lines, doc) in code_block()) {
        let (blocks, _) = parse(&doc);
        prop_assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::CodeBlock { text, .. } => prop_assert_eq!(text, &lines.join("\n")),
            other => prop_assert!(false, "expected a code block, got {:?}", other),
        }
    }

    /// Adjacent single-line bullet items form one tight list.
    #[test]
    fn adjacent_items_form_tight_list(items in word_list()) {
        let doc: String = items.iter().map(|w| format!("- {}\n", w)).collect();
        let (blocks, _) = parse(&doc);
        prop_assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::List { tight, items: parsed, .. } => {
                prop_assert!(*tight);
                prop_assert_eq!(parsed.len(), items.len());
            }
            other => prop_assert!(false, "expected a list, got {:?}", other),
        }
    }

    /// A blank line between two items makes the list loose.
    #[test]
    fn separated_items_form_loose_list(a in plain_word(), b in plain_word()) {
        let doc = format!("- {}\n\n- {}\n", a, b);
        let (blocks, _) = parse(&doc);
        prop_assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::List { tight, items, .. } => {
                prop_assert!(!*tight);
                prop_assert_eq!(items.len(), 2);
            }
            other => prop_assert!(false, "expected a list, got {:?}", other),
        }
    }

    /// Reference definitions land in the map and never in the blocks.
    #[test]
    fn references_go_to_the_map(label in plain_word(), url in prop::string::string_regex(r"/[a-z]{1,12}").unwrap()) {
        let doc = format!("[{}]: {}\n", label, url);
        let (blocks, refmap) = parse(&doc);
        prop_assert!(blocks.is_empty());
        prop_assert_eq!(refmap.lookup(&label).map(|(u, _)| u.as_str()), Some(url.as_str()));
    }
}
