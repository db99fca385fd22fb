//! CLI entry-point listing discovered collection dates.

use anyhow::Result;

use crate::{config::Settings, dataset::DatasetIndex};

pub fn run(settings: Settings) -> Result<()> {
    let index = DatasetIndex::discover(&settings)?;
    for date in index.available_dates() {
        println!("{date}");
    }
    Ok(())
}
