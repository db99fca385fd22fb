//! Daily COVID case counts from the provincial and state totals CSVs.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Settings;

/// Raw provincial names are inconsistent across export vintages; map them all
/// onto the canonical display names used by the sentiment side.
const PROVINCE_RENAMES: &[(&str, &str)] = &[
    ("ALBERTA", "Alberta"),
    ("BC", "British Columbia"),
    ("BRITISH COLUMBIA", "British Columbia"),
    ("MANITOBA", "Manitoba"),
    ("NEW BRUNSWICK", "New Brunswick"),
    ("NL", "Newfoundland and Labrador"),
    ("NEWFOUNDLAND AND LABRADOR", "Newfoundland and Labrador"),
    ("NWT", "Northwest Territories"),
    ("NORTHWEST TERRITORIES", "Northwest Territories"),
    ("NOVA SCOTIA", "Nova Scotia"),
    ("NUNAVUT", "Nunavut"),
    ("ONTARIO", "Ontario"),
    ("PEI", "Prince Edward Island"),
    ("PRINCE EDWARD ISLAND", "Prince Edward Island"),
    ("QUEBEC", "Quebec"),
    ("SASKATCHEWAN", "Saskatchewan"),
    ("YUKON", "Yukon"),
];

#[derive(Debug, Deserialize)]
struct ProvincialRow {
    #[serde(rename = "Province")]
    province: String,
    #[serde(rename = "SummaryDate")]
    summary_date: String,
    #[serde(rename = "DailyTotals")]
    daily_totals: f64,
}

#[derive(Debug, Deserialize)]
struct StateRow {
    #[serde(rename = "State Name")]
    state: String,
    #[serde(rename = "Submission Date")]
    submission_date: String,
    #[serde(rename = "7-day Avg Cases")]
    avg_cases: f64,
}

/// Case count for one region on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCases {
    pub region_name: String,
    pub count: f64,
}

/// Case counts for one date plus the data-dependent bin scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseSnapshot {
    pub canada: Vec<RegionCases>,
    pub united_states: Vec<RegionCases>,
    pub bins: Vec<f64>,
}

#[derive(Debug, Clone)]
struct CaseRow {
    region: String,
    date: String,
    count: f64,
}

/// Cleaned daily case tables for both countries, loaded once.
#[derive(Debug)]
pub struct CovidCases {
    canada: Vec<CaseRow>,
    united_states: Vec<CaseRow>,
}

impl CovidCases {
    /// Load and clean both CSVs: normalize province names, drop repatriated
    /// rows, clamp negative counts to zero, and normalize dates to
    /// `YYYY-MM-DD`.
    pub fn load(settings: &Settings) -> Result<Self> {
        let ca_path = settings.join_data(&settings.ca_cases_file);
        let mut canada = Vec::new();
        let mut reader = csv::Reader::from_path(&ca_path)
            .with_context(|| format!("opening {}", ca_path.display()))?;
        for result in reader.deserialize() {
            let row: ProvincialRow =
                result.with_context(|| format!("parsing {}", ca_path.display()))?;
            if row.province == "REPATRIATED" {
                continue;
            }
            let region = match rename_province(&row.province) {
                Some(name) => name.to_string(),
                None => row.province.clone(),
            };
            // "2020/03/15 12:00:00+00" -> "2020-03-15"
            let date = row
                .summary_date
                .chars()
                .take(10)
                .map(|c| if c == '/' { '-' } else { c })
                .collect();
            canada.push(CaseRow {
                region,
                date,
                count: row.daily_totals.max(0.0),
            });
        }

        let us_path = settings.join_data(&settings.us_cases_file);
        let mut united_states = Vec::new();
        let mut reader = csv::Reader::from_path(&us_path)
            .with_context(|| format!("opening {}", us_path.display()))?;
        for result in reader.deserialize() {
            let row: StateRow =
                result.with_context(|| format!("parsing {}", us_path.display()))?;
            united_states.push(CaseRow {
                region: row.state,
                date: row.submission_date,
                count: row.avg_cases.max(0.0),
            });
        }

        info!(
            ca_rows = canada.len(),
            us_rows = united_states.len(),
            "loaded covid case tables"
        );
        Ok(Self {
            canada,
            united_states,
        })
    }

    /// Per-region counts for one date, with ten bin boundaries spanning zero
    /// to the joint maximum of both countries on that date.
    pub fn get_cases(&self, date: NaiveDate) -> CaseSnapshot {
        let key = date.format("%Y-%m-%d").to_string();
        let canada: Vec<RegionCases> = self
            .canada
            .iter()
            .filter(|row| row.date == key)
            .map(|row| RegionCases {
                region_name: row.region.clone(),
                count: row.count,
            })
            .collect();
        let united_states: Vec<RegionCases> = self
            .united_states
            .iter()
            .filter(|row| row.date == key)
            .map(|row| RegionCases {
                region_name: row.region.clone(),
                count: row.count,
            })
            .collect();

        let max_cases = canada
            .iter()
            .chain(united_states.iter())
            .map(|r| r.count)
            .fold(0.0_f64, f64::max);
        let step = max_cases / 9.0;
        let bins = (0..10).map(|i| i as f64 * step).collect();

        CaseSnapshot {
            canada,
            united_states,
            bins,
        }
    }
}

fn rename_province(raw: &str) -> Option<&'static str> {
    PROVINCE_RENAMES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}
