//! Shader variant list CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use svl_cli::commands::{
    load_options, read_list, run_append, run_defrag, run_descriptors, run_init, write_list,
};
use svl_cli::logging::{LogConfig, LogFormat, init_logging};
use svl_cli::tables::{descriptor_table, variant_table};
use svl_core::ExpansionStrategy;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, StrategyArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = load_options(cli.config.as_deref())?;
    match &cli.command {
        Command::Descriptors(args) => {
            let schema = run_descriptors(&args.shader)?;
            println!("Shader: {}", args.shader.display());
            println!("{}", descriptor_table(&schema));
        }
        Command::Init(args) => {
            let options = match args.strategy {
                Some(StrategyArg::Cartesian) => {
                    options.with_strategy(ExpansionStrategy::Cartesian)
                }
                Some(StrategyArg::PerAxis) => options.with_strategy(ExpansionStrategy::PerAxis),
                None => options,
            };
            let list = run_init(&args.shader, options)?;
            write_list(&list, args.output.as_deref())?;
        }
        Command::Append(args) => {
            let list = run_append(&args.list, &args.headers, &args.values, options)?;
            write_list(&list, Some(args.output.as_deref().unwrap_or(&args.list)))?;
        }
        Command::Defrag(args) => {
            let list = run_defrag(&args.list, options)?;
            write_list(&list, Some(args.output.as_deref().unwrap_or(&args.list)))?;
        }
        Command::Show(args) => {
            let list = read_list(&args.list)?;
            println!("Shader: {}", list.shader_file_path);
            println!("Variants: {}", list.len());
            println!("{}", variant_table(&list));
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file.clone_from(&cli.log_file);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
