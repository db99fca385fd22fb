//! Per-region mean sentiment, partitioned by country.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    geo::{title_case, Country},
    pipeline::enrich::EnrichedRecord,
};

/// One row of pipeline output, keyed by display name in the country map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionAggregate {
    /// Title-cased region token, e.g. "Ontario".
    pub region_name: String,
    pub country: Country,
    /// Arithmetic mean over all scores for this exact region and country.
    /// Always computed over a non-empty group.
    pub mean_score: f64,
}

/// Group enriched records by resolved region and reduce to per-region means.
///
/// Returns the Canadian map first, then the US map. The two maps never share
/// keys; regions with zero surviving records are absent rather than
/// zero-valued. An empty input yields two empty maps. Key order follows first
/// appearance in the input, which keeps the reduction deterministic.
pub fn aggregate<I>(
    enriched: I,
) -> (
    IndexMap<String, RegionAggregate>,
    IndexMap<String, RegionAggregate>,
)
where
    I: IntoIterator<Item = EnrichedRecord>,
{
    let mut canada: IndexMap<String, Vec<f64>> = IndexMap::new();
    let mut united_states: IndexMap<String, Vec<f64>> = IndexMap::new();

    for record in enriched {
        let bucket = match record.country {
            Country::Canada => &mut canada,
            Country::UnitedStates => &mut united_states,
        };
        bucket
            .entry(record.resolved_region)
            .or_default()
            .push(record.sentiment_score);
    }

    (
        summarise(canada, Country::Canada),
        summarise(united_states, Country::UnitedStates),
    )
}

fn summarise(
    groups: IndexMap<String, Vec<f64>>,
    country: Country,
) -> IndexMap<String, RegionAggregate> {
    groups
        .into_iter()
        .map(|(token, scores)| {
            let mean_score = scores.iter().sum::<f64>() / scores.len() as f64;
            let region_name = title_case(&token);
            (
                region_name.clone(),
                RegionAggregate {
                    region_name,
                    country,
                    mean_score,
                },
            )
        })
        .collect()
}
