//! NOTAM codec CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use notam_cli::cli::{Cli, Command, DictionaryArgs, LogFormatArg, LogLevelArg};
use notam_cli::commands::{load_dictionary_for, run_suggest, run_transform};
use notam_cli::config::AppConfig;
use notam_cli::input::InputError;
use notam_cli::logging::{LogConfig, LogFormat, init_logging};
use notam_cli::summary::{dictionary_json, print_dictionary, print_suggestions};
use notam_dictionary::LoadedDictionary;
use notam_transform::Direction;

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
            match error.downcast_ref::<InputError>() {
                Some(InputError::Empty(_)) => 2,
                _ => 1,
            }
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let loaded = load_dictionary_for(cli.dictionary.as_deref(), cli.strict, &config)?;
    match &cli.command {
        Command::Encode(args) => {
            let result =
                run_transform(Direction::Encode, args, &loaded.mapping, io::stdin().lock())?;
            println!("{result}");
        }
        Command::Decode(args) => {
            let result =
                run_transform(Direction::Decode, args, &loaded.mapping, io::stdin().lock())?;
            println!("{result}");
        }
        Command::Suggest(args) => {
            let suggestions = run_suggest(args, &loaded.mapping, &config);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                print_suggestions(&args.word.join(" "), &suggestions);
            }
        }
        Command::Dictionary(args) => show_dictionary(args, &loaded)?,
    }
    Ok(())
}

fn show_dictionary(args: &DictionaryArgs, loaded: &LoadedDictionary) -> Result<()> {
    if args.json {
        let value = dictionary_json(loaded, args.ambiguous);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_dictionary(loaded, args.ambiguous);
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
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
