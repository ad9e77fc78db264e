//! Command-line interface for blockdown.

use clap::Parser;
use std::path::PathBuf;

use blockdown_core::ParseOptions;

/// bd - parse markdown documents into a block AST.
///
/// Runs the block-structure recogniser over whole documents and prints the
/// resulting block AST as JSON, with the reference map on request.
#[derive(Parser, Debug)]
#[command(
    name = "bd",
    version,
    about = "Parse markdown documents into a block AST",
    after_help = "Examples:\n  \
                  cat README.md | bd\n  \
                  bd document.md\n  \
                  bd --debug document.md 2>tree.txt\n  \
                  bd --refs -c 'sanitize = false' input.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Dump the container tree to stderr and emit no blocks
    #[arg(long = "debug")]
    pub debug: bool,

    /// Strip raw HTML in later stages instead of passing it through
    #[arg(long = "no-raw-html")]
    pub no_raw_html: bool,

    /// Disable HTML sanitizing in later stages
    #[arg(long = "no-sanitize")]
    pub no_sanitize: bool,

    /// Treat newlines inside paragraphs as hard breaks
    #[arg(long = "hard-breaks")]
    pub hard_breaks: bool,

    /// Also print the reference map
    #[arg(long = "refs")]
    pub refs: bool,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long = "compact")]
    pub compact: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply the flag overrides on top of configured options.
    pub fn apply_options(&self, mut options: ParseOptions) -> ParseOptions {
        if self.debug {
            options.debug = true;
        }
        if self.no_raw_html {
            options.allow_raw_html = false;
        }
        if self.no_sanitize {
            options.sanitize = false;
        }
        if self.hard_breaks {
            options.preserve_hard_breaks = true;
        }
        options
    }
}
