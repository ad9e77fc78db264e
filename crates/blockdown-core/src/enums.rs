//! List classification enums.
//!
//! A list item records the kind of list it belongs to. Two adjacent items
//! merge into one list exactly when their kinds match by constructor and
//! discriminating field: same bullet character, or same number delimiter.

use serde::{Deserialize, Serialize};

/// Delimiter following the number of an ordered-list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumDelim {
    /// `1.` style
    Period,
    /// `1)` style
    Paren,
}

impl std::fmt::Display for NumDelim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumDelim::Period => write!(f, "period"),
            NumDelim::Paren => write!(f, "paren"),
        }
    }
}

/// The kind of a list, as determined by its marker.
///
/// # Example
///
/// ```
/// use blockdown_core::{ListType, NumDelim};
///
/// let a = ListType::Numbered(NumDelim::Period, 1);
/// let b = ListType::Numbered(NumDelim::Period, 7);
/// assert!(a.matches(&b)); // start numbers may differ
/// assert!(!a.matches(&ListType::Bullet('-')));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListType {
    /// Unordered list with a bullet character (`+`, `*` or `-`)
    Bullet(char),
    /// Ordered list with a delimiter and a start number
    Numbered(NumDelim, u32),
}

impl ListType {
    /// Whether two markers belong to the same list: same bullet character,
    /// or same delimiter (start numbers may differ).
    pub fn matches(&self, other: &ListType) -> bool {
        match (self, other) {
            (ListType::Bullet(a), ListType::Bullet(b)) => a == b,
            (ListType::Numbered(d1, _), ListType::Numbered(d2, _)) => d1 == d2,
            _ => false,
        }
    }

    /// Width in columns of the marker itself: one for a bullet, digits plus
    /// delimiter for a numbered marker.
    pub fn marker_width(&self) -> u32 {
        match self {
            ListType::Bullet(_) => 1,
            ListType::Numbered(_, n) => match *n {
                0..=9 => 2,
                10..=99 => 3,
                100..=999 => 4,
                _ => 5,
            },
        }
    }
}

impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListType::Bullet(c) => write!(f, "bullet({})", c),
            ListType::Numbered(d, n) => write!(f, "numbered({}, {})", d, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_match() {
        assert!(ListType::Bullet('-').matches(&ListType::Bullet('-')));
        assert!(!ListType::Bullet('-').matches(&ListType::Bullet('*')));
        assert!(!ListType::Bullet('+').matches(&ListType::Numbered(NumDelim::Period, 1)));
    }

    #[test]
    fn test_numbered_match_ignores_start() {
        let a = ListType::Numbered(NumDelim::Paren, 3);
        let b = ListType::Numbered(NumDelim::Paren, 9);
        assert!(a.matches(&b));
        assert!(!a.matches(&ListType::Numbered(NumDelim::Period, 3)));
    }

    #[test]
    fn test_marker_width() {
        assert_eq!(ListType::Bullet('*').marker_width(), 1);
        assert_eq!(ListType::Numbered(NumDelim::Period, 9).marker_width(), 2);
        assert_eq!(ListType::Numbered(NumDelim::Period, 10).marker_width(), 3);
        assert_eq!(ListType::Numbered(NumDelim::Paren, 999).marker_width(), 4);
        assert_eq!(ListType::Numbered(NumDelim::Paren, 1000).marker_width(), 5);
    }
}
