//! Command Line Front End
//!
//! Reads JSON documents from files or standard input, validates each one and
//! prints a report line per document.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::{Args, Config, OutputFormat};
use crate::validation::ValidationResult;

const STDIN_NAME: &str = "<stdin>";

/// Parse arguments, set up logging and check every input.
///
/// Returns whether all documents were valid.
pub fn run() -> Result<bool> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = Config::from_args(args)?;
    if let Some(path) = &config.config_file {
        log::info!("Using config file: {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_inputs(&config, io::stdin().lock(), &mut out)
}

/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Validate every configured input, writing one report line each
pub fn check_inputs<R: Read, W: Write>(config: &Config, mut stdin: R, out: &mut W) -> Result<bool> {
    let validator = config.validator();
    let mut all_valid = true;

    let stdin_only = [Path::new("-").to_path_buf()];
    let inputs = if config.inputs.is_empty() {
        &stdin_only[..]
    } else {
        &config.inputs[..]
    };

    for input in inputs {
        let (name, content) = if input.as_os_str() == "-" {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            (STDIN_NAME.to_string(), content)
        } else {
            let content = fs::read_to_string(input)
                .with_context(|| format!("Failed to read document: {}", input.display()))?;
            (input.display().to_string(), content)
        };

        let document: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse document JSON: {}", name))?;

        let result = validator.validate_value(&document);
        all_valid &= result.is_valid();
        write_report(out, config.format, &name, &result)?;
    }

    Ok(all_valid)
}

fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    name: &str,
    result: &ValidationResult,
) -> Result<()> {
    match format {
        OutputFormat::Text => match result.violation() {
            None => writeln!(out, "{}: ok", name)?,
            Some(violation) => writeln!(out, "{}: {}", name, violation)?,
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, result)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
