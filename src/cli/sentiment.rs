//! CLI entry-point for per-region sentiment aggregates.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, dataset::DatasetIndex};

/// Args for the `sentiment` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Collection date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    /// Emit JSON instead of a plain table.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let mut index = DatasetIndex::discover(&settings)?;
    let snapshot = index.get_aggregates(args.date)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if snapshot.regions.is_empty() {
        println!("no records for {}", args.date);
        return Ok(());
    }
    for row in snapshot.canada.values().chain(snapshot.united_states.values()) {
        println!(
            "{:<28} {:<14} {:+.4}",
            row.region_name,
            row.country.to_string(),
            row.mean_score
        );
    }
    Ok(())
}
