//! CLI entry point for validate_keymap
//!
//! Reads a ZMK keymap, checks every binding argument and reports the
//! result. Exit status is 0 when the keymap is clean and 1 otherwise.

use clap::{error::ErrorKind, Parser};
use colored::*;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use zmk_keymap_validator::{
    config::{ConfigError, KeymapFile},
    core::validate_keymap,
    init_tracing,
    report::{render_report, Report},
};

const USAGE: &str = "Usage: validate_keymap <keymap_file>";

#[derive(Parser)]
#[command(name = "validate_keymap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ZMK keymap file
    keymap: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug). Overrides RUST_LOG.
    #[arg(long = "log-level")]
    log_level: Option<String>,

    /// Anything after the keymap path is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            process::exit(1);
        }
    };
    init_tracing(cli.log_level.as_deref());

    if !cli.extra.is_empty() {
        debug!(ignored = ?cli.extra, "extra arguments after keymap path");
    }

    let Some(path) = cli.keymap else {
        println!("{}", USAGE);
        process::exit(1);
    };

    let keymap = match KeymapFile::open(&path) {
        Ok(keymap) => keymap,
        Err(e @ ConfigError::NotFound(_)) => {
            println!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    // Permission and encoding failures propagate as-is
    let content = keymap.read()?;

    let report = Report::new(validate_keymap(&content));
    info!(
        path = %keymap.path().display(),
        diagnostics = report.len(),
        "validation finished"
    );

    render_report(&report, &mut io::stdout().lock())?;

    if !report.is_valid() {
        process::exit(1);
    }

    Ok(())
}
