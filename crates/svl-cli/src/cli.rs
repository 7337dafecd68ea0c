//! CLI argument definitions for the shader variant list tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "svl",
    version,
    about = "Shader variant list tool - generate, extend and compact variant lists",
    long_about = "Generate, extend and compact shader variant lists.\n\n\
                  A shader's option layout is read from a JSON array of option\n\
                  descriptors at the shader path. Its system option setting is the\n\
                  sibling file with the configured settings extension."
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

    /// Expansion settings (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the option descriptors of a shader.
    Descriptors(DescriptorsArgs),

    /// Create a variant list for a shader from its system option setting.
    Init(InitArgs),

    /// Append a sparse block of variants to an existing list.
    Append(AppendArgs),

    /// Remove duplicate variants and renumber stable ids from 1.
    Defrag(DefragArgs),

    /// Show the variants of a list as a table.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct DescriptorsArgs {
    /// Path to the shader option layout.
    #[arg(value_name = "SHADER")]
    pub shader: PathBuf,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Path to the shader option layout.
    #[arg(value_name = "SHADER")]
    pub shader: PathBuf,

    /// Where to write the new list (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the configured expansion strategy.
    #[arg(long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,
}

#[derive(Parser)]
pub struct AppendArgs {
    /// Path to the variant list.
    #[arg(value_name = "LIST")]
    pub list: PathBuf,

    /// Option names, one per matrix column.
    #[arg(long = "headers", value_delimiter = ',', required = true)]
    pub headers: Vec<String>,

    /// Row-major option values; empty cells are allowed.
    #[arg(long = "values", value_delimiter = ',', required = true)]
    pub values: Vec<String>,

    /// Where to write the result (default: overwrite LIST).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DefragArgs {
    /// Path to the variant list.
    #[arg(value_name = "LIST")]
    pub list: PathBuf,

    /// Where to write the result (default: overwrite LIST).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the variant list.
    #[arg(value_name = "LIST")]
    pub list: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Cartesian,
    PerAxis,
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
