//! Typed failures of the record pipeline.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal failures while loading a date's record file.
///
/// Resolution failures and unscoreable texts are not represented here: both
/// are recovered locally by dropping the record. An unknown date is also soft
/// and yields empty aggregates instead of an error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Could not open or read the record file.
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A malformed line aborts the whole load; no per-line recovery.
    #[error("malformed record at {path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// The sentiment scorer was handed a text with no scoreable sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("text yields no scoreable sentences")]
pub struct EmptyInputError;
