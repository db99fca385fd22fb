use coveet::geo::{resolve, Country};

#[test]
fn first_matching_token_wins() {
    let (region, country) = resolve("I live in Ontario, Canada").unwrap();
    assert_eq!(region, "ontario");
    assert_eq!(country, Country::Canada);
}

#[test]
fn unknown_location_does_not_resolve() {
    assert!(resolve("I live somewhere unknown").is_none());
    assert!(resolve("").is_none());
    assert!(resolve("   ").is_none());
}

#[test]
fn matching_is_case_insensitive() {
    let (region, country) = resolve("TEXAS forever").unwrap();
    assert_eq!(region, "texas");
    assert_eq!(country, Country::UnitedStates);
}

#[test]
fn surrounding_punctuation_is_stripped() {
    let (region, _) = resolve("(Quebec)").unwrap();
    assert_eq!(region, "quebec");
}

#[test]
fn canada_is_checked_before_the_us() {
    // Both tables are scanned per token, Canada first.
    let (_, country) = resolve("Ontario California").unwrap();
    assert_eq!(country, Country::Canada);
}

#[test]
fn multi_word_region_names_never_match_as_phrases() {
    // Known single-token limitation, preserved deliberately.
    assert!(resolve("New Brunswick").is_none());
    assert!(resolve("British Columbia").is_none());
}

#[test]
fn leftmost_token_beats_later_matches() {
    let (region, country) = resolve("moved from Alaska to Yukon").unwrap();
    assert_eq!(region, "alaska");
    assert_eq!(country, Country::UnitedStates);
}
