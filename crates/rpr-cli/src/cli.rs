//! CLI argument definitions for the decision data studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rpr-decisions",
    version,
    about = "Decision data studio - inspect, validate and preview dataset submissions",
    long_about = "Work with recognition decision datasets for the professions register.\n\n\
                  Reads captured form submissions (JSON) and runs the same parsing,\n\
                  validation and structural-edit engine the register uses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the country reference set.
    Countries,

    /// Validate a captured form submission.
    Validate(ValidateArgs),

    /// Parse a captured form submission, apply its edit action and show the
    /// resulting matrix.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the captured submission (JSON).
    #[arg(value_name = "FORM_FILE")]
    pub form: PathBuf,

    /// Emit the validation report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the captured submission (JSON).
    #[arg(value_name = "FORM_FILE")]
    pub form: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
