use std::fs;
use std::path::PathBuf;

use notam_cli::cli::{SuggestArgs, TransformArgs};
use notam_cli::commands::{load_dictionary_for, run_suggest, run_transform};
use notam_cli::config::{AppConfig, ConfigError};
use notam_cli::input::InputError;
use notam_dictionary::{BuildOptions, DictionaryError, build_from_pairs};
use notam_model::AbbreviationMapping;
use notam_transform::Direction;

fn mapping() -> AbbreviationMapping {
    let (mapping, _) = build_from_pairs(
        [
            ("runway", "RWY"),
            ("closed", "CLSD"),
            ("shut", "CLSD"),
            ("maintenance", "MAINT"),
        ],
        BuildOptions::default(),
    )
    .expect("build mapping");
    mapping
}

fn transform_args(text: &[&str]) -> TransformArgs {
    TransformArgs {
        text: text.iter().map(|s| (*s).to_string()).collect(),
        input: None,
        output: None,
    }
}

#[test]
fn encode_joins_words_from_arguments() {
    let args = transform_args(&["Runway", "closed", "for", "maintenance"]);
    let result = run_transform(Direction::Encode, &args, &mapping(), std::io::empty()).unwrap();
    assert_eq!(result, "RWY CLSD FOR MAINT.");
}

#[test]
fn decode_reads_stdin_and_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("decoded.txt");
    let mut args = transform_args(&[]);
    args.output = Some(output.clone());

    let result = run_transform(Direction::Decode, &args, &mapping(), "RWY CLSD\n".as_bytes()).unwrap();
    assert_eq!(result, "Runway closed/shut.");
    assert_eq!(fs::read_to_string(&output).unwrap(), "Runway closed/shut.\n");
}

#[test]
fn input_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notam.txt");
    fs::write(&input, "runway   shut\n").unwrap();
    let mut args = transform_args(&[]);
    args.input = Some(input);

    let result = run_transform(Direction::Encode, &args, &mapping(), std::io::empty()).unwrap();
    assert_eq!(result, "RWY CLSD.");
}

#[test]
fn blank_input_is_rejected_before_transforming() {
    let args = transform_args(&["   "]);
    let err = run_transform(Direction::Encode, &args, &mapping(), std::io::empty()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::Empty(Direction::Encode))
    ));
}

#[test]
fn suggest_flags_override_config() {
    let args = SuggestArgs {
        word: vec!["runwya".to_string()],
        limit: Some(1),
        cutoff: None,
        json: false,
    };
    let suggestions = run_suggest(&args, &mapping(), &AppConfig::default());
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].term, "runway");
}

#[test]
fn config_strict_applies_to_dictionary_load() {
    let dir = tempfile::tempdir().unwrap();
    let dictionary = dir.path().join("dict.csv");
    fs::write(&dictionary, "phrase,abbreviation\nrunway,RWY\n,CLSD\n").unwrap();

    let lenient = load_dictionary_for(Some(&dictionary), false, &AppConfig::default()).unwrap();
    assert_eq!(lenient.mapping.len(), 1);
    assert_eq!(lenient.report.skipped.len(), 1);

    let config = AppConfig {
        strict: true,
        ..AppConfig::default()
    };
    let err = load_dictionary_for(Some(&dictionary), false, &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DictionaryError>(),
        Some(DictionaryError::EmptyField { row: 2, .. })
    ));
}

#[test]
fn config_dictionary_is_relative_to_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dict.csv"), "phrase,abbreviation\ntaxiway,TWY\n").unwrap();
    let config_path = dir.path().join("notam.toml");
    fs::write(&config_path, "dictionary = \"dict.csv\"\n").unwrap();

    let config = AppConfig::load(Some(&config_path)).unwrap();
    assert_eq!(config.dictionary, Some(dir.path().join("dict.csv")));
}

#[test]
fn explicit_config_must_exist_and_parse() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        AppConfig::load(Some(&missing)),
        Err(ConfigError::Io { .. })
    ));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "strict = maybe\n").unwrap();
    let err = AppConfig::load(Some(&broken)).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { ref path, .. } if *path == PathBuf::from(&broken)));
}
