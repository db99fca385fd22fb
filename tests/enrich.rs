use std::io::Write;

use coveet::{
    geo::Country,
    nlp::SentimentAnalyzer,
    pipeline::{enrich, load_records, Record},
};

#[test]
fn end_to_end_three_line_fixture() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"text": "Feeling great today!", "user": {{"location": "Ontario"}}}}"#
    )
    .unwrap();
    writeln!(file, r#"{{"text": "No location on this one.", "user": {{"location": ""}}}}"#).unwrap();
    writeln!(file, r#"{{"text": "Hello from nowhere.", "user": {{"location": "xyzzy"}}}}"#).unwrap();

    let records = load_records(file.path()).unwrap();
    let analyzer = SentimentAnalyzer::new();
    let enriched: Vec<_> = enrich(records, &analyzer).collect();

    assert_eq!(enriched.len(), 1);
    assert_eq!(enriched[0].resolved_region, "ontario");
    assert_eq!(enriched[0].country, Country::Canada);
}

#[test]
fn malformed_line_aborts_the_whole_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"text": "fine", "user": {{"location": "Ontario"}}}}"#).unwrap();
    writeln!(file, "this is not json").unwrap();
    writeln!(file, r#"{{"text": "also fine", "user": {{"location": "Texas"}}}}"#).unwrap();

    assert!(load_records(file.path()).is_err());
}

#[test]
fn missing_required_field_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"text": "no user object here"}}"#).unwrap();

    assert!(load_records(file.path()).is_err());
}

#[test]
fn never_emits_more_than_input_and_preserves_order() {
    let records = vec![
        Record {
            text: "Good day.".into(),
            raw_location: "Alberta calling".into(),
        },
        Record {
            text: "...".into(), // no scoreable sentences, dropped
            raw_location: "Texas".into(),
        },
        Record {
            text: "Bad day.".into(),
            raw_location: "somewhere in Nevada".into(),
        },
        Record {
            text: "Unresolvable.".into(),
            raw_location: "Mars".into(),
        },
    ];
    let analyzer = SentimentAnalyzer::new();
    let enriched: Vec<_> = enrich(records, &analyzer).collect();

    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].resolved_region, "alberta");
    assert_eq!(enriched[1].resolved_region, "nevada");
}

#[test]
fn empty_location_records_are_skipped() {
    let records = vec![Record {
        text: "Great!".into(),
        raw_location: String::new(),
    }];
    let analyzer = SentimentAnalyzer::new();
    assert_eq!(enrich(records, &analyzer).count(), 0);
}
