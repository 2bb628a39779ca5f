//! Configuration management for the document validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Config file discovery and loading (`[validator]` table in TOML)
//! - Merging CLI overrides on top of file settings

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::{Validator, ValidatorOptions};

/// Project-local config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".doctree.toml";

/// Command-line arguments for `doctree-check`
#[derive(Debug, Parser)]
#[command(name = "doctree-check")]
#[command(about = "Validate rich-text document trees against the document schema")]
#[command(version)]
pub struct Args {
    /// JSON documents to validate; `-` or no file reads standard input
    pub files: Vec<PathBuf>,

    /// Config file to use instead of the discovered one
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Maximum node nesting depth")]
    pub max_depth: Option<usize>,

    #[arg(long, help = "Accept any value for image width and height")]
    pub lenient_dimensions: bool,

    #[arg(long, help = "Do not validate the children of list items")]
    pub skip_list_items: bool,

    #[arg(long, help = "Accept elements with an unknown type")]
    pub allow_unrecognized: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human readable line per document
    Text,
    /// One serialized validation result per line
    Json,
}

/// On-disk config file layout
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    validator: ValidatorOptions,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents to validate; empty means standard input
    pub inputs: Vec<PathBuf>,
    pub options: ValidatorOptions,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file the options were loaded from, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let config_file = match args.config {
            Some(path) => Some(path),
            None => Self::search_paths().into_iter().find(|path| path.is_file()),
        };

        let mut options = match &config_file {
            Some(path) => load_options(path)?,
            None => ValidatorOptions::default(),
        };

        if let Some(max_depth) = args.max_depth {
            options.max_depth = max_depth;
        }
        if args.lenient_dimensions {
            options.strict_dimensions = false;
        }
        if args.skip_list_items {
            options.descend_into_list_items = false;
        }
        if args.allow_unrecognized {
            options.allow_unrecognized_elements = true;
        }

        Ok(Config {
            inputs: args.files,
            options,
            format: args.format,
            log_level: args.log_level,
            config_file,
        })
    }

    /// Config file locations in priority order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("doctree").join("config.toml"));
        }

        paths
    }

    /// Build a validator with the effective options
    pub fn validator(&self) -> Validator {
        Validator::new(self.options)
    }
}

/// Load validator options from a TOML config file
pub fn load_options(path: &Path) -> Result<ValidatorOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_options(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse validator options from TOML config content
pub fn parse_options(content: &str) -> Result<ValidatorOptions> {
    let file: ConfigFile = toml::from_str(content)?;
    log::debug!("loaded validator options: {:?}", file.validator);
    Ok(file.validator)
}
