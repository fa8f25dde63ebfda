//! CLI argument definitions for the column annotator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "column-annotator",
    version,
    about = "Column Annotation Studio - Annotate table columns with semantic types",
    long_about = "Annotate the columns of a tabular file with semantic data types\n\
                  (date, phone, weight, distance, ...) and region/unit refinements.\n\
                  Annotations are persisted to a shared JSON configuration that the\n\
                  `show` command reads back as a per-column summary."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Annotate the columns of a tabular file and save the configuration.
    Annotate(AnnotateArgs),

    /// Print the per-column summary of the stored configuration.
    Show(ShowArgs),

    /// List the country reference table (phone codes and time zones).
    Countries,
}

#[derive(Parser)]
pub struct AnnotateArgs {
    /// Path to the tabular file (CSV) whose columns to annotate.
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Location of the shared configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = "shared_config.json")]
    pub config: PathBuf,

    /// Scripted assignment; any --set makes the whole run non-interactive.
    ///
    /// Grammar: COL=TYPE[,country=NAME][,time_zone=ZONE][,phone_code=CODE][,unit=UNIT]
    /// Repeatable. Columns without an assignment keep their current record,
    /// and the configuration is saved without a confirmation prompt.
    #[arg(long = "set", value_name = "SPEC")]
    pub set: Vec<String>,

    /// Review without saving the configuration.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the confirmation prompt before saving.
    ///
    /// Implied by --set: scripted runs never prompt.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Location of the shared configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = "shared_config.json")]
    pub config: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
