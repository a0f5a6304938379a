use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use notam_dictionary::{BuildOptions, LoadedDictionary, load_dictionary, resolve_dictionary_path};
use notam_map::{Suggestion, SuggestionEngine};
use notam_model::AbbreviationMapping;
use notam_transform::{Direction, NotamCodec};

use crate::cli::{SuggestArgs, TransformArgs};
use crate::config::AppConfig;
use crate::input::{read_text, require_text};

/// Resolve and load the dictionary named by flags, environment, or config.
pub fn load_dictionary_for(
    explicit: Option<&Path>,
    strict: bool,
    config: &AppConfig,
) -> Result<LoadedDictionary> {
    let path = resolve_dictionary_path(explicit, config.dictionary.as_deref());
    let options = BuildOptions {
        strict: strict || config.strict,
    };
    load_dictionary(&path, options)
        .with_context(|| format!("load abbreviation dictionary {}", path.display()))
}

/// Encode or decode the text named by `args`.
///
/// Blank input is rejected before the engine runs. When `--output` is set
/// the result is also written there.
pub fn run_transform<R: Read>(
    direction: Direction,
    args: &TransformArgs,
    mapping: &AbbreviationMapping,
    stdin: R,
) -> Result<String> {
    let raw = read_text(&args.text, args.input.as_deref(), stdin)?;
    let text = require_text(&raw, direction)?;
    let codec = NotamCodec::new(mapping);
    let result = codec.apply(direction, text);
    debug!(direction = direction.as_str(), chars = result.chars().count(), "transformed");
    if let Some(path) = &args.output {
        std::fs::write(path, format!("{result}\n"))
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "result written");
    }
    Ok(result)
}

/// Look up dictionary terms close to the requested word.
pub fn run_suggest(
    args: &SuggestArgs,
    mapping: &AbbreviationMapping,
    config: &AppConfig,
) -> Vec<Suggestion> {
    let mut options = config.suggest.options();
    if let Some(limit) = args.limit {
        options = options.with_limit(limit);
    }
    if let Some(cutoff) = args.cutoff {
        options = options.with_cutoff(cutoff);
    }
    let word = args.word.join(" ");
    SuggestionEngine::new(mapping, options).suggest(&word)
}
