//! CLI argument definitions for the project converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "projconv",
    version,
    about = "Convert legacy project descriptors to simplified SDK-style ones",
    long_about = "Convert legacy .csproj/.vbproj/.fsproj descriptors to simplified SDK-style ones.\n\n\
                  Resolves the project name, detects WPF projects and strips legacy\n\
                  properties while keeping source-control bindings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Convert project files, or every project found under directories.
    Convert(ConvertArgs),

    /// Transform a single project and print the result without writing it.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Project files or directories to search for projects.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Write converted files here instead of overwriting the sources.
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "dry_run")]
    pub output_dir: Option<PathBuf>,

    /// Transform and report without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not keep a .old copy when overwriting in place.
    #[arg(long = "no-backup")]
    pub no_backup: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Project file to inspect.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Print the transformed model as JSON instead of XML.
    #[arg(long = "json")]
    pub json: bool,
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
