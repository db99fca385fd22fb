//! Runtime configuration utilities for coveet.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder holding one sub-directory per collection date.
    pub data_dir: PathBuf,
    /// File name of the line-delimited tweet dump inside each date folder.
    pub tweet_file: String,
    /// Canadian daily case totals CSV, relative to the data root.
    pub ca_cases_file: String,
    /// US daily case totals CSV, relative to the data root.
    pub us_cases_file: String,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let tweet_file =
            env::var("TWEET_FILE").unwrap_or_else(|_| "hydrated_tweets.json".to_string());
        let ca_cases_file =
            env::var("CA_CASES_FILE").unwrap_or_else(|_| "Provincial_Daily_Totals.csv".to_string());
        let us_cases_file =
            env::var("US_CASES_FILE").unwrap_or_else(|_| "State_Daily_Totals.csv".to_string());

        Ok(Self {
            data_dir,
            tweet_file,
            ca_cases_file,
            us_cases_file,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}
