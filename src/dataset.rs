//! Date-keyed dataset discovery and cached sentiment aggregates.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::PathBuf,
};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::Settings,
    error::PipelineError,
    nlp::SentimentAnalyzer,
    pipeline::{aggregate, enrich, load_records, RegionAggregate},
};

/// Fixed bin boundaries for color-classifying sentiment aggregates. The scale
/// is independent of the data, unlike the case-count bins.
pub const SENTIMENT_BINS: [f64; 9] = [-1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, 1.0];

/// Everything the rendering layer needs for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSnapshot {
    pub canada: IndexMap<String, RegionAggregate>,
    pub united_states: IndexMap<String, RegionAggregate>,
    pub bins: Vec<f64>,
    /// Canada display names followed by US display names.
    pub regions: Vec<String>,
}

impl SentimentSnapshot {
    fn new(
        canada: IndexMap<String, RegionAggregate>,
        united_states: IndexMap<String, RegionAggregate>,
    ) -> Self {
        let regions = canada
            .keys()
            .chain(united_states.keys())
            .cloned()
            .collect();
        Self {
            canada,
            united_states,
            bins: SENTIMENT_BINS.to_vec(),
            regions,
        }
    }

    fn empty() -> Self {
        Self::new(IndexMap::new(), IndexMap::new())
    }
}

/// Explicit context object owning the discovered date set and the per-date
/// aggregate cache. Exclusively owned by one pipeline-invoking caller; cache
/// entries live for the whole process, there is no invalidation.
#[derive(Debug)]
pub struct DatasetIndex {
    root: PathBuf,
    tweet_file: String,
    available: BTreeSet<NaiveDate>,
    cache: HashMap<NaiveDate, SentimentSnapshot>,
    analyzer: SentimentAnalyzer,
}

impl DatasetIndex {
    /// List the data root once; every sub-directory named `YYYY-MM-DD` is an
    /// available collection date. Non-date entries are ignored.
    pub fn discover(settings: &Settings) -> Result<Self, PipelineError> {
        let root = settings.data_dir.clone();
        let mut available = BTreeSet::new();

        let entries = fs::read_dir(&root).map_err(|source| PipelineError::Io {
            path: root.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| PipelineError::Io {
                path: root.clone(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name();
            if let Ok(date) = NaiveDate::parse_from_str(&name.to_string_lossy(), "%Y-%m-%d") {
                available.insert(date);
            }
        }

        info!(root = %root.display(), dates = available.len(), "discovered dataset dates");
        Ok(Self {
            root,
            tweet_file: settings.tweet_file.clone(),
            available,
            cache: HashMap::new(),
            analyzer: SentimentAnalyzer::new(),
        })
    }

    /// Dates with a record-set on disk, ascending.
    pub fn available_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.available.iter().copied()
    }

    /// Per-region mean sentiment for one date, computed at most once per
    /// process.
    ///
    /// A date absent from the discovered set yields an empty snapshot, not an
    /// error. Only I/O failures and malformed record files propagate; such a
    /// load fails whole, with nothing cached for the date.
    pub fn get_aggregates(&mut self, date: NaiveDate) -> Result<SentimentSnapshot, PipelineError> {
        if let Some(hit) = self.cache.get(&date) {
            debug!(%date, "aggregate cache hit");
            return Ok(hit.clone());
        }

        let snapshot = if !self.available.contains(&date) {
            debug!(%date, "date absent from dataset, serving empty aggregates");
            SentimentSnapshot::empty()
        } else {
            let path = self
                .root
                .join(date.format("%Y-%m-%d").to_string())
                .join(&self.tweet_file);
            let records = load_records(&path)?;
            let (canada, united_states) = aggregate(enrich(records, &self.analyzer));
            info!(
                %date,
                ca_regions = canada.len(),
                us_regions = united_states.len(),
                "computed sentiment aggregates"
            );
            SentimentSnapshot::new(canada, united_states)
        };

        self.cache.insert(date, snapshot.clone());
        Ok(snapshot)
    }
}
