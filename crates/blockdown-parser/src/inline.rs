//! Seam to the inline parser.

use blockdown_core::{Inlines, ReferenceMap};

/// Hand paragraph or header text across to the inline stage.
///
/// Block parsing does not interpret inline syntax: the collected text is
/// carried raw. The reference map is part of the seam because reference
/// usages (`[foo]`) resolve against it when inlines are parsed.
pub fn parse_inlines(_refmap: &ReferenceMap, text: &str) -> Inlines {
    Inlines::new(text)
}
