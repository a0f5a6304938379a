use notam_model::{AbbreviationEntry, AbbreviationMapping, ReverseIndex};

fn mapping(pairs: &[(&str, &str)]) -> AbbreviationMapping {
    pairs
        .iter()
        .map(|(phrase, abbreviation)| AbbreviationEntry::new(phrase, abbreviation).unwrap())
        .collect()
}

#[test]
fn reverse_index_groups_phrases_in_insertion_order() {
    let mapping = mapping(&[
        ("closed", "CLSD"),
        ("runway", "RWY"),
        ("shut", "clsd"),
    ]);
    let index = ReverseIndex::from_mapping(&mapping);

    assert_eq!(index.len(), 2);
    assert_eq!(
        index.get("CLSD"),
        Some(&["closed".to_string(), "shut".to_string()][..])
    );
    assert_eq!(index.get("rwy"), Some(&["runway".to_string()][..]));
    assert!(index.get("twy").is_none());

    let ambiguous: Vec<_> = index.ambiguous().map(|(key, _)| key).collect();
    assert_eq!(ambiguous, vec!["clsd"]);
}

#[test]
fn reverse_index_follows_overwritten_abbreviation() {
    let mapping = mapping(&[("closed", "CLSD"), ("closed", "CLD")]);
    let index = mapping.reverse_index();

    assert!(index.get("clsd").is_none());
    assert_eq!(index.get("cld"), Some(&["closed".to_string()][..]));
}

#[test]
fn empty_mapping_has_empty_index() {
    let index = AbbreviationMapping::new().reverse_index();
    assert!(index.is_empty());
    assert_eq!(index.iter().count(), 0);
}

#[test]
fn deserializing_rejects_blank_entries() {
    let result: Result<AbbreviationMapping, _> =
        serde_json::from_str(r#"[{"phrase":"  ","abbreviation":"X"}]"#);
    assert!(result.is_err());
}
