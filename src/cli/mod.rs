//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// Indemnity - Look up Algerian labor-code allowances
#[derive(Parser, Debug)]
#[command(name = "indemnity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Interface and catalog language (fr, ar, en)
    #[arg(long, short = 'l', global = true, value_name = "CODE")]
    pub lang: Option<String>,

    /// Directory the catalog path template is resolved against
    #[arg(long, global = true, value_name = "DIR")]
    pub data_root: Option<PathBuf>,

    /// Fetch catalogs from this base URL instead of a directory
    #[arg(long, global = true, value_name = "URL", conflicts_with = "data_root")]
    pub data_url: Option<String>,

    /// Output format (human, json, jsonl, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/indemnity/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective output format: the flag, else the configured one, else human.
    #[must_use]
    pub fn output_format(&self, configured: &str) -> OutputFormat {
        self.output_format
            .or_else(|| OutputFormat::from_config(configured))
            .unwrap_or_default()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search allowances by free text
    Search(commands::search::SearchArgs),

    /// List every allowance in the catalog
    List(commands::list::ListArgs),

    /// Show or change the interface language
    Lang(commands::lang::LangArgs),

    /// Print the interface strings of the active language
    Strings(commands::strings::StringsArgs),
}
