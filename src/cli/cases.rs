//! CLI entry-point for per-region COVID case counts.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{cases::CovidCases, config::Settings};

/// Args for the `cases` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Reporting date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    /// Emit JSON instead of a plain table.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let cases = CovidCases::load(&settings)?;
    let snapshot = cases.get_cases(args.date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    for row in snapshot.canada.iter().chain(snapshot.united_states.iter()) {
        println!("{:<28} {:>10.1}", row.region_name, row.count);
    }
    Ok(())
}
