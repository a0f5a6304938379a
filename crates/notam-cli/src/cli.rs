//! CLI argument definitions for the NOTAM codec.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "notam",
    version,
    about = "NOTAM codec - Convert notice text to and from ICAO abbreviations",
    long_about = "Convert plain-language NOTAM text to its abbreviated form and back.\n\n\
                  Abbreviations come from a CSV dictionary with 'phrase' and\n\
                  'abbreviation' columns. Abbreviations shared by several phrases\n\
                  decode to every candidate, separated by '/'."
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

    /// Abbreviation dictionary CSV (default: $NOTAM_DICTIONARY, config, bundled).
    #[arg(long = "dictionary", short = 'd', value_name = "PATH", global = true)]
    pub dictionary: Option<PathBuf>,

    /// Reject dictionary rows with a blank phrase or abbreviation.
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Configuration file (default: ./notam.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replace plain-language phrases with their abbreviations.
    Encode(TransformArgs),

    /// Expand abbreviations into plain-language phrases.
    Decode(TransformArgs),

    /// Suggest dictionary phrases or abbreviations close to a word.
    Suggest(SuggestArgs),

    /// Show the loaded dictionary and how it was built.
    Dictionary(DictionaryArgs),
}

#[derive(Args)]
pub struct TransformArgs {
    /// NOTAM text. Reads standard input when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the NOTAM text from a file.
    #[arg(long = "input", short = 'i', value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Also write the result to a file.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Word or phrase to look up.
    #[arg(value_name = "WORD", required = true)]
    pub word: Vec<String>,

    /// Maximum number of suggestions (default from config, else 3).
    #[arg(long = "limit", short = 'n')]
    pub limit: Option<usize>,

    /// Minimum similarity between 0 and 1 (default from config, else 0.6).
    #[arg(long = "cutoff", value_parser = parse_cutoff)]
    pub cutoff: Option<f64>,

    /// Print suggestions as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct DictionaryArgs {
    /// Only list abbreviations shared by more than one phrase.
    #[arg(long = "ambiguous")]
    pub ambiguous: bool,

    /// Print the build report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

fn parse_cutoff(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("cutoff must be between 0 and 1, got '{raw}'"))
    }
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
