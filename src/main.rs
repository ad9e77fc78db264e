//! bd - a markdown block parser.
//!
//! This binary wraps the blockdown library: it reads whole documents from
//! files or stdin, runs the block-structure recogniser, and prints the
//! block AST as JSON. With `--debug` the raw container tree goes to
//! stderr instead.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{LevelFilter, debug, error, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use blockdown_core::{BlockdownError, Blocks, ParseOptions, ReferenceMap, Result};
use blockdown_parser::parse_document;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    setup_logging(&cli.log_level);
    info!("blockdown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let options = cli.apply_options(load_options(cli)?);
    debug!("Parse options: {:?}", options);

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        emit(cli, &options, &text)
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let text = fs::read_to_string(path)?;
            emit(cli, &options, &text)?;
        }
        Ok(())
    }
}

/// Load configured options: `-c` takes a file path or inline TOML. A
/// config that fails to parse is reported and ignored.
fn load_options(cli: &Cli) -> Result<ParseOptions> {
    let Some(config_arg) = &cli.config else {
        return Ok(ParseOptions::default());
    };
    let text = if Path::new(config_arg).exists() {
        fs::read_to_string(config_arg)?
    } else {
        config_arg.clone()
    };
    match toml::from_str::<ParseOptions>(&text) {
        Ok(options) => {
            debug!("Loaded config: {:?}", options);
            Ok(options)
        }
        Err(e) => {
            error!("Failed to parse config: {}", e);
            Ok(ParseOptions::default())
        }
    }
}

/// JSON payload when the reference map is requested alongside the blocks.
#[derive(Serialize)]
struct Output<'a> {
    blocks: &'a Blocks,
    references: &'a ReferenceMap,
}

/// Parse one document and print the result.
fn emit(cli: &Cli, options: &ParseOptions, text: &str) -> Result<()> {
    let (blocks, refmap) = parse_document(options, text)?;

    let json = if cli.refs {
        let out = Output {
            blocks: &blocks,
            references: &refmap,
        };
        to_json(&out, cli.compact)?
    } else {
        to_json(&blocks, cli.compact)?
    };

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let encoded = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    encoded.map_err(|e| BlockdownError::Config(format!("JSON encoding failed: {e}")))
}
