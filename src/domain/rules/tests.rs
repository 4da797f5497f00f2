// Unit tests for filename rules

use super::*;

#[test]
fn test_munge_fixed_substitutions() {
    let name = FilenameRules::munge("A/B:C", &Replace::new());
    assert_eq!(name, "a-b-c");
}

#[test]
fn test_munge_lowercases_before_mapping() {
    let replace = Replace::from_pairs([("x", "Y")]).unwrap();
    assert_eq!(FilenameRules::munge("aXb", &replace), "aYb");
}

#[test]
fn test_munge_default_mapping() {
    let name = FilenameRules::munge(
        "NOT/VERY|GOOD<AT>\\ALL:*\"HERE?",
        &Replace::filesystem_safe(),
    );
    assert_eq!(name, "not-very-good-at--all---here-");
}

#[test]
fn test_munge_mapping_applies_after_fixed_rules() {
    let replace = Replace::from_pairs([("-", "_")]).unwrap();
    assert_eq!(FilenameRules::munge("a/b", &replace), "a_b");
}

#[test]
fn test_munge_source_skips_fixed_rules() {
    let replace = Replace::from_pairs([(" ", "_")]).unwrap();
    assert_eq!(
        FilenameRules::munge_source("2020-01-01 10:00", &replace),
        "2020-01-01_10:00"
    );
}

#[test]
fn test_join_fields() {
    assert_eq!(FilenameRules::join_fields(["a", "b", "c"]), "a - b - c");
}
