//! Filter raw records and attach derived region and sentiment fields.

use crate::{
    geo::{resolve, Country},
    nlp::SentimentAnalyzer,
    pipeline::records::Record,
};

/// A record whose location resolved, annotated with its sentiment score.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    /// Lower-case canonical region token, e.g. "ontario".
    pub resolved_region: String,
    pub country: Country,
    /// Mean sentence polarity in [-1, 1].
    pub sentiment_score: f64,
}

/// Lazily enrich a record sequence, preserving input order.
///
/// Records are dropped (not errored) when the location is empty, when it
/// resolves to no canonical region, or when the text has no scoreable
/// sentences. The output never holds more records than the input. Input
/// records are consumed, not mutated, so the pass is restartable by
/// re-invoking on the same source.
pub fn enrich<'a, I>(
    records: I,
    analyzer: &'a SentimentAnalyzer,
) -> impl Iterator<Item = EnrichedRecord> + 'a
where
    I: IntoIterator<Item = Record>,
    I::IntoIter: 'a,
{
    records.into_iter().filter_map(move |record| {
        if record.raw_location.is_empty() {
            return None;
        }
        let (resolved_region, country) = resolve(&record.raw_location)?;
        let sentiment_score = analyzer.score(&record.text).ok()?;
        Some(EnrichedRecord {
            resolved_region,
            country,
            sentiment_score,
        })
    })
}
