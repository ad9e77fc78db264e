//! Recognised parser options.

use serde::{Deserialize, Serialize};

/// Options accepted by the parser and its collaborators.
///
/// Only `debug` changes what the block parser itself does: when set, the
/// raw container tree is emitted on stderr and the returned block sequence
/// is empty. The remaining fields are plumbed through for the inline and
/// rendering stages.
///
/// # Example
///
/// ```
/// use blockdown_core::ParseOptions;
///
/// let opts = ParseOptions::default();
/// assert!(!opts.debug);
/// assert!(opts.allow_raw_html);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Dump the container tree instead of producing blocks
    pub debug: bool,
    /// Pass raw HTML through to the output stage
    pub allow_raw_html: bool,
    /// Sanitize HTML in the output stage
    pub sanitize: bool,
    /// Treat newlines inside paragraphs as hard breaks
    pub preserve_hard_breaks: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            debug: false,
            allow_raw_html: true,
            sanitize: true,
            preserve_hard_breaks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert!(!opts.debug);
        assert!(opts.allow_raw_html);
        assert!(opts.sanitize);
        assert!(!opts.preserve_hard_breaks);
    }
}
