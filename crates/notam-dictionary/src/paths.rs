//! Dictionary path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the dictionary file.
pub const DICTIONARY_ENV_VAR: &str = "NOTAM_DICTIONARY";

/// File name of the bundled ICAO abbreviation dictionary.
pub const DEFAULT_DICTIONARY_FILE: &str = "icao_abbreviations.csv";

/// The dictionary bundled with the workspace.
pub fn default_dictionary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../dictionaries")
        .join(DEFAULT_DICTIONARY_FILE)
}

/// Resolve the dictionary to load.
///
/// Resolution order:
/// 1. explicit path (command-line flag)
/// 2. `NOTAM_DICTIONARY` environment variable
/// 3. configured path (config file)
/// 4. bundled default
pub fn resolve_dictionary_path(explicit: Option<&Path>, configured: Option<&Path>) -> PathBuf {
    let env_value = std::env::var_os(DICTIONARY_ENV_VAR).map(PathBuf::from);
    resolve_dictionary_path_with(explicit, env_value.as_deref(), configured)
}

/// Same as [`resolve_dictionary_path`] with the environment value supplied.
pub fn resolve_dictionary_path_with(
    explicit: Option<&Path>,
    env_value: Option<&Path>,
    configured: Option<&Path>,
) -> PathBuf {
    explicit
        .or(env_value.filter(|p| !p.as_os_str().is_empty()))
        .or(configured)
        .map_or_else(default_dictionary_path, Path::to_path_buf)
}
