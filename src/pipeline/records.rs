//! Typed ingestion of line-delimited tweet dumps.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;
use tracing::info;

use crate::error::PipelineError;

/// One raw social post, as ingested. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub text: String,
    /// Free-text user location, possibly empty.
    pub raw_location: String,
}

#[derive(Debug, Deserialize)]
struct RawTweet {
    text: String,
    user: RawUser,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    location: String,
}

/// Load records from a line-delimited JSON file, one object per line.
///
/// Records with an empty user location never enter the pipeline. A malformed
/// line (bad JSON or a missing required field) aborts the whole load with
/// [`PipelineError::Parse`]; there is no per-line recovery.
pub fn load_records(path: &Path) -> Result<Vec<Record>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut total = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawTweet =
            serde_json::from_str(&line).map_err(|source| PipelineError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
        total += 1;
        if raw.user.location.is_empty() {
            continue;
        }
        records.push(Record {
            text: raw.text,
            raw_location: raw.user.location,
        });
    }

    info!(
        path = %path.display(),
        total,
        located = records.len(),
        "loaded tweet records"
    );
    Ok(records)
}
