use notam_map::{SuggestOptions, SuggestionEngine};
use notam_model::{AbbreviationEntry, AbbreviationMapping};

fn sample_mapping() -> AbbreviationMapping {
    [
        ("runway", "RWY"),
        ("taxiway", "TWY"),
        ("closed", "CLSD"),
        ("shut", "CLSD"),
        ("unserviceable", "U/S"),
    ]
    .into_iter()
    .map(|(phrase, abbreviation)| AbbreviationEntry::new(phrase, abbreviation).unwrap())
    .collect()
}

#[test]
fn suggests_phrases_and_abbreviations() {
    let engine = SuggestionEngine::new(&sample_mapping(), SuggestOptions::default());

    let phrase = engine.suggest("unservicable");
    assert_eq!(phrase[0].term, "unserviceable");
    assert_eq!(phrase[0].distance, 1);

    let abbreviation = engine.suggest("TWYY");
    assert_eq!(abbreviation[0].term, "TWY");
}

#[test]
fn vocabulary_and_known_words() {
    let engine = SuggestionEngine::new(&sample_mapping(), SuggestOptions::default());
    assert_eq!(engine.vocabulary().len(), 10);
    assert!(engine.is_known("Runway"));
    assert!(engine.is_known("clsd"));
    assert!(!engine.is_known("apron"));
}

#[test]
fn suggestions_serialize_for_machine_output() {
    let engine = SuggestionEngine::new(&sample_mapping(), SuggestOptions::default().with_limit(1));
    let results = engine.suggest("runwy");
    let json = serde_json::to_value(&results).expect("serialize suggestions");
    assert_eq!(json[0]["term"], "runway");
    assert_eq!(json[0]["distance"], 1);
    assert_eq!(json.as_array().map(Vec::len), Some(1));
}
