use std::{fs, path::Path};

use chrono::NaiveDate;
use coveet::{
    config::Settings,
    dataset::{DatasetIndex, SENTIMENT_BINS},
};

fn settings_for(root: &Path) -> Settings {
    Settings {
        data_dir: root.to_path_buf(),
        tweet_file: "hydrated_tweets.json".to_string(),
        ca_cases_file: "Provincial_Daily_Totals.csv".to_string(),
        us_cases_file: "State_Daily_Totals.csv".to_string(),
    }
}

fn write_date_dir(root: &Path, date: &str, lines: &[&str]) {
    let dir = root.join(date);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("hydrated_tweets.json"), lines.join("\n")).unwrap();
}

#[test]
fn discovery_lists_date_directories_only() {
    let tmp = tempfile::tempdir().unwrap();
    write_date_dir(tmp.path(), "2021-03-01", &[]);
    write_date_dir(tmp.path(), "2021-03-02", &[]);
    fs::create_dir_all(tmp.path().join("not-a-date")).unwrap();
    fs::write(tmp.path().join("stray.txt"), "x").unwrap();

    let index = DatasetIndex::discover(&settings_for(tmp.path())).unwrap();
    let dates: Vec<_> = index.available_dates().collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 2).unwrap(),
        ]
    );
}

#[test]
fn unknown_date_yields_empty_snapshot_without_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut index = DatasetIndex::discover(&settings_for(tmp.path())).unwrap();

    let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    let snapshot = index.get_aggregates(date).unwrap();

    assert!(snapshot.canada.is_empty());
    assert!(snapshot.united_states.is_empty());
    assert!(snapshot.regions.is_empty());
    assert_eq!(snapshot.bins, SENTIMENT_BINS.to_vec());
}

#[test]
fn present_date_runs_the_pipeline() {
    let tmp = tempfile::tempdir().unwrap();
    write_date_dir(
        tmp.path(),
        "2021-03-01",
        &[
            r#"{"text": "Feeling great today!", "user": {"location": "Ontario"}}"#,
            r#"{"text": "This is terrible.", "user": {"location": "Austin Texas"}}"#,
            r#"{"text": "No place given.", "user": {"location": ""}}"#,
        ],
    );

    let mut index = DatasetIndex::discover(&settings_for(tmp.path())).unwrap();
    let date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
    let snapshot = index.get_aggregates(date).unwrap();

    assert!(snapshot.canada.contains_key("Ontario"));
    assert!(snapshot.united_states.contains_key("Texas"));
    assert_eq!(snapshot.regions, vec!["Ontario".to_string(), "Texas".to_string()]);
}

#[test]
fn repeat_calls_return_equal_snapshots() {
    let tmp = tempfile::tempdir().unwrap();
    write_date_dir(
        tmp.path(),
        "2021-03-01",
        &[r#"{"text": "Feeling great today!", "user": {"location": "Ontario"}}"#],
    );

    let mut index = DatasetIndex::discover(&settings_for(tmp.path())).unwrap();
    let date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();

    let first = index.get_aggregates(date).unwrap();

    // The cached snapshot survives even if the file disappears afterwards.
    fs::remove_file(tmp.path().join("2021-03-01").join("hydrated_tweets.json")).unwrap();
    let second = index.get_aggregates(date).unwrap();

    assert_eq!(first, second);
}

#[test]
fn malformed_file_fails_the_whole_date() {
    let tmp = tempfile::tempdir().unwrap();
    write_date_dir(
        tmp.path(),
        "2021-03-01",
        &[
            r#"{"text": "fine", "user": {"location": "Ontario"}}"#,
            "not json at all",
        ],
    );

    let mut index = DatasetIndex::discover(&settings_for(tmp.path())).unwrap();
    let date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
    assert!(index.get_aggregates(date).is_err());
}
