//! The tree-to-blocks transformer: a second pass over the finished
//! container tree that groups text lines into paragraphs, merges adjacent
//! list items into lists, and classifies lists as tight or loose.

use blockdown_core::{
    Block, BlockdownError, Blocks, CodeAttr, Container, ContainerKind, Element, Leaf, ListType,
    ReferenceMap, Result,
};

use crate::inline::parse_inlines;

/// Transform the finished tree into the block AST.
pub fn process_blocks(refmap: &ReferenceMap, doc: &Container) -> Result<Blocks> {
    process_elts(refmap, &doc.children)
}

fn process_elts(refmap: &ReferenceMap, elts: &[Element]) -> Result<Blocks> {
    let mut blocks = Blocks::new();
    let mut i = 0;
    while i < elts.len() {
        match &elts[i] {
            Element::Leaf { leaf, .. } => match leaf {
                Leaf::TextLine(first) => {
                    // consecutive text lines form one paragraph: each line
                    // left-trimmed, joined, right-trimmed overall
                    let mut lines = vec![first.trim_start()];
                    while let Some(Element::Leaf {
                        leaf: Leaf::TextLine(t),
                        ..
                    }) = elts.get(i + 1)
                    {
                        lines.push(t.trim_start());
                        i += 1;
                    }
                    let text = lines.join("\n");
                    blocks.push(Block::Para(parse_inlines(refmap, text.trim_end())));
                }
                Leaf::BlankLine(_) => {}
                Leaf::AtxHeader { level, text } | Leaf::SetextHeader { level, text } => {
                    blocks.push(Block::Header {
                        level: *level,
                        content: parse_inlines(refmap, text),
                    });
                }
                Leaf::Rule => blocks.push(Block::HRule),
            },
            Element::Child(c) => match &c.kind {
                ContainerKind::Document => {
                    return Err(BlockdownError::Invariant(
                        "document container nested inside the tree".into(),
                    ));
                }
                ContainerKind::BlockQuote => {
                    blocks.push(Block::Blockquote(process_elts(refmap, &c.children)?));
                }
                ContainerKind::ListItem { list_type, .. } => {
                    let (block, extra) = process_list(refmap, *list_type, c, &elts[i + 1..])?;
                    blocks.push(block);
                    i += extra;
                }
                ContainerKind::FencedCode { info, .. } => {
                    blocks.push(Block::CodeBlock {
                        attr: CodeAttr::from_info(info),
                        text: join_text(&c.children),
                    });
                }
                ContainerKind::IndentedCode => {
                    let (block, extra) = process_indented_code(c, &elts[i + 1..]);
                    blocks.push(block);
                    i += extra;
                }
                ContainerKind::RawHtmlBlock => {
                    blocks.push(Block::HtmlBlock(join_text(&c.children)));
                }
                // already consumed into the reference map
                ContainerKind::Reference => {}
            },
        }
        i += 1;
    }
    Ok(blocks)
}

/// Merge a run of sibling items of the same list kind, possibly separated
/// by single blank lines, into one list. Returns the list block and the
/// number of extra sibling elements consumed.
fn process_list(
    refmap: &ReferenceMap,
    list_type: ListType,
    first: &Container,
    rest: &[Element],
) -> Result<(Block, usize)> {
    let mut items: Vec<&Container> = vec![first];
    let mut blank_between = false;
    let mut consumed = 0;
    let mut i = 0;
    while i < rest.len() {
        match &rest[i] {
            Element::Child(c) if is_matching_item(c, &list_type) => {
                items.push(c);
                i += 1;
                consumed = i;
            }
            Element::Leaf {
                leaf: Leaf::BlankLine(_),
                ..
            } => {
                // a blank joins the list only when a matching item follows
                match rest.get(i + 1) {
                    Some(Element::Child(c)) if is_matching_item(c, &list_type) => {
                        blank_between = true;
                        items.push(c);
                        i += 2;
                        consumed = i;
                    }
                    _ => break,
                }
            }
            _ => break,
        }
    }
    let tight = !blank_between && items.iter().all(|item| no_blank_children(item));
    let mut processed = Vec::with_capacity(items.len());
    for item in &items {
        processed.push(process_elts(refmap, &item.children)?);
    }
    Ok((
        Block::List {
            tight,
            list_type,
            items: processed,
        },
        consumed,
    ))
}

fn is_matching_item(c: &Container, list_type: &ListType) -> bool {
    matches!(&c.kind, ContainerKind::ListItem { list_type: lt, .. } if lt.matches(list_type))
}

fn no_blank_children(c: &Container) -> bool {
    !c.children.iter().any(|e| {
        matches!(
            e,
            Element::Leaf {
                leaf: Leaf::BlankLine(_),
                ..
            }
        )
    })
}

/// Collect an indented code container together with any immediately
/// following indented code and blank-line siblings into one code block.
fn process_indented_code(first: &Container, rest: &[Element]) -> (Block, usize) {
    let mut lines: Vec<String> = Vec::new();
    extract_code(first, &mut lines);
    let mut consumed = 0;
    for (i, elt) in rest.iter().enumerate() {
        match elt {
            Element::Child(c) if c.kind == ContainerKind::IndentedCode => {
                extract_code(c, &mut lines);
                consumed = i + 1;
            }
            Element::Leaf {
                leaf: Leaf::BlankLine(t),
                ..
            } => {
                // continuations left at most three of the blank's spaces;
                // indented code wants four, so the first is dropped
                lines.push(t.get(1..).unwrap_or("").to_string());
                consumed = i + 1;
            }
            _ => break,
        }
    }
    while lines.last().is_some_and(|l| l.bytes().all(|b| b == b' ')) {
        lines.pop();
    }
    (
        Block::CodeBlock {
            attr: CodeAttr::default(),
            text: lines.join("\n"),
        },
        consumed,
    )
}

fn extract_code(c: &Container, lines: &mut Vec<String>) {
    for e in &c.children {
        if let Element::Leaf {
            leaf: Leaf::TextLine(t),
            ..
        } = e
        {
            lines.push(t.clone());
        }
    }
}

fn join_text(children: &[Element]) -> String {
    children
        .iter()
        .filter_map(|e| match e {
            Element::Leaf {
                leaf: Leaf::TextLine(t),
                ..
            }
            | Element::Leaf {
                leaf: Leaf::BlankLine(t),
                ..
            } => Some(t.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
