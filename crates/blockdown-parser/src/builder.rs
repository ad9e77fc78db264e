//! The container tree builder: maintains the stack of open containers and
//! feeds lines through continuation and new-container recognition.

use blockdown_core::{Container, ContainerKind, Element, Leaf, ReferenceMap};
use blockdown_scan as scan;
use log::trace;

use crate::recognize::{self, Continuation};

enum Dispatch {
    /// Raw HTML or indented code whose continuations all matched: the line
    /// is taken verbatim
    Verbatim,
    /// Fenced code absorbs lines until its closing fence, ignoring
    /// unmatched parents
    Fenced(String),
    General,
}

/// Builds the container tree line by line.
///
/// The stack is never empty; its bottom is always the document container.
/// Containers above it are mutated in place until they close, at which
/// point they attach as children of the container below.
pub struct TreeBuilder {
    stack: Vec<Container>,
    refmap: ReferenceMap,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Container::new(ContainerKind::Document)],
            refmap: ReferenceMap::new(),
        }
    }

    fn top(&self) -> &Container {
        self.stack
            .last()
            .expect("stack bottom is the document container")
    }

    fn top_mut(&mut self) -> &mut Container {
        self.stack
            .last_mut()
            .expect("stack bottom is the document container")
    }

    /// Feed one preprocessed line into the tree.
    pub fn process_line(&mut self, number: u32, text: &str) {
        let Continuation {
            remainder,
            consumed,
            num_unmatched,
        } = recognize::continue_line(&self.stack, text);
        let last_line_is_text = num_unmatched == 0 && self.top().last_child_is_text_line();

        let dispatch = match &self.top().kind {
            ContainerKind::RawHtmlBlock | ContainerKind::IndentedCode if num_unmatched == 0 => {
                Dispatch::Verbatim
            }
            ContainerKind::FencedCode { fence, .. } => Dispatch::Fenced(fence.clone()),
            _ => Dispatch::General,
        };

        match dispatch {
            Dispatch::Verbatim => {
                self.add_leaf(number, Leaf::TextLine(remainder.to_string()));
            }
            Dispatch::Fenced(fence) => {
                if remainder.starts_with(&fence) {
                    // this line is the closing fence
                    self.close_container();
                } else {
                    self.add_leaf(number, Leaf::TextLine(remainder.to_string()));
                }
            }
            Dispatch::General => {
                let (kinds, leaf) =
                    recognize::try_new_containers(last_line_is_text, consumed, remainder);
                trace!(
                    "line {}: {} new container(s), {} unmatched",
                    number,
                    kinds.len(),
                    num_unmatched
                );

                let lazy_text = kinds.is_empty()
                    && matches!(leaf, Leaf::TextLine(_))
                    && self.top().last_child_is_text_line()
                    && self.top().kind != ContainerKind::IndentedCode;
                if lazy_text {
                    // lazy continuation: the paragraph absorbs the line
                    // without closing the unmatched parents
                    self.add_leaf(number, leaf);
                    return;
                }

                if kinds.is_empty()
                    && num_unmatched == 0
                    && let Leaf::SetextHeader { level, .. } = leaf
                {
                    self.promote_setext(number, level);
                    return;
                }

                for _ in 0..num_unmatched {
                    self.close_container();
                }
                let opened_fence =
                    matches!(kinds.last(), Some(ContainerKind::FencedCode { .. }));
                for kind in kinds {
                    self.stack.push(Container::new(kind));
                }
                // the fence opener's line leaves no blank behind
                if !(opened_fence && matches!(leaf, Leaf::BlankLine(_))) {
                    self.add_leaf(number, leaf);
                }
            }
        }
    }

    /// Close everything down to the document and hand over the results.
    pub fn finish(mut self) -> (Container, ReferenceMap) {
        while self.stack.len() > 1 {
            self.close_container();
        }
        let doc = self
            .stack
            .pop()
            .expect("stack bottom is the document container");
        (doc, self.refmap)
    }

    /// Retroactively turn the preceding text line into a setext header.
    fn promote_setext(&mut self, number: u32, level: u8) {
        let top = self.top_mut();
        if let Some(Element::Leaf { line, leaf }) = top.children.last_mut()
            && let Leaf::TextLine(text) = leaf
        {
            let text = std::mem::take(text);
            *leaf = Leaf::SetextHeader { level, text };
            *line = number;
        }
    }

    fn add_leaf(&mut self, number: u32, leaf: Leaf) {
        // a second blank line in a row breaks out of a list item; the item
        // closes and the blank is delivered to whatever is beneath it
        if matches!(leaf, Leaf::BlankLine(_))
            && matches!(self.top().kind, ContainerKind::ListItem { .. })
            && self.top().last_child_is_blank_line()
        {
            self.close_container();
            self.add_leaf(number, leaf);
            return;
        }
        self.top_mut().children.push(Element::Leaf { line: number, leaf });
    }

    /// Pop the top container and attach it to the one below.
    ///
    /// A reference container is parsed into the reference map instead of
    /// attaching (and dropped either way). A list item whose last child is
    /// a blank line gives the blank up to its parent, where it later marks
    /// the enclosing list as loose.
    fn close_container(&mut self) {
        let Some(top) = self.stack.pop() else { return };
        if self.stack.is_empty() {
            // the document itself only closes at end of input
            self.stack.push(top);
            return;
        }
        match top.kind {
            ContainerKind::Reference if !top.children.is_empty() => {
                let text = top
                    .children
                    .iter()
                    .filter_map(|e| match e {
                        Element::Leaf {
                            leaf: Leaf::TextLine(t),
                            ..
                        } => Some(t.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                if let Some((label, url, title)) = scan::parse_reference(text.trim()) {
                    trace!("reference [{}] -> {}", label, url);
                    self.refmap.insert(&label, url, title);
                }
                // parsed or not, the container is dropped
            }
            ContainerKind::ListItem { .. } => {
                let mut item = top;
                let trailing_blank = if item.last_child_is_blank_line() {
                    item.children.pop()
                } else {
                    None
                };
                // an item emptied by the hoist keeps nothing and the blank
                // disappears with it
                let hoisted = trailing_blank.filter(|_| !item.children.is_empty());
                let parent = self.top_mut();
                parent.children.push(Element::Child(item));
                if let Some(blank) = hoisted {
                    parent.children.push(blank);
                }
            }
            _ => {
                let parent = self.top_mut();
                parent.children.push(Element::Child(top));
            }
        }
    }
}
