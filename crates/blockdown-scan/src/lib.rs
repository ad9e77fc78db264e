//! Blockdown Scan
//!
//! Stateless line-level recognisers used by the block parser. Each scanner
//! is a pure function over a line remainder: consumers return the
//! unconsumed suffix (`Option<&str>`), producers return a value alongside
//! it. None of them look beyond the current line.
//!
//! Columns are 1-based. Scanners that need to know where they are on the
//! line take the current column as an argument; callers recover the number
//! of consumed characters by comparing slice lengths (everything a scanner
//! consumes is ASCII).

pub mod fence;
pub mod html;
pub mod markers;
pub mod reference;
pub mod space;

pub use fence::{CodeFence, parse_code_fence};
pub use html::{BLOCK_TAGS, parse_html_block_start};
pub use markers::{
    parse_atx_header_start, parse_list_marker, parse_setext_header_line, scan_blockquote_start,
    scan_hrule_line,
};
pub use reference::{parse_reference, scan_link_label, scan_reference};
pub use space::{
    scan_blank_line, scan_indent_space, scan_nonindent_space, scan_spaces_to_column,
    scan_spaces_up_to, scan_spaces_up_to_column,
};
