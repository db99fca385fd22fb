//! Canonical region vocabulary: 13 Canadian provinces/territories and 50 US
//! states. Tables are read-only and built once; the resolver matches against
//! the lower-case token form and the display layer uses the title-case form.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Country a canonical region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Country {
    Canada,
    UnitedStates,
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Country::Canada => write!(f, "Canada"),
            Country::UnitedStates => write!(f, "United States"),
        }
    }
}

pub const CANADA_REGIONS: &[&str] = &[
    "alberta",
    "british columbia",
    "manitoba",
    "new brunswick",
    "newfoundland and labrador",
    "northwest territories",
    "nova scotia",
    "nunavut",
    "ontario",
    "prince edward island",
    "quebec",
    "saskatchewan",
    "yukon",
];

pub const US_REGIONS: &[&str] = &[
    "alabama",
    "alaska",
    "arizona",
    "arkansas",
    "california",
    "colorado",
    "connecticut",
    "delaware",
    "florida",
    "georgia",
    "hawaii",
    "idaho",
    "illinois",
    "indiana",
    "iowa",
    "kansas",
    "kentucky",
    "louisiana",
    "maine",
    "maryland",
    "massachusetts",
    "michigan",
    "minnesota",
    "mississippi",
    "missouri",
    "montana",
    "nebraska",
    "nevada",
    "new hampshire",
    "new jersey",
    "new mexico",
    "new york",
    "north carolina",
    "north dakota",
    "ohio",
    "oklahoma",
    "oregon",
    "pennsylvania",
    "rhode island",
    "south carolina",
    "south dakota",
    "tennessee",
    "texas",
    "utah",
    "vermont",
    "virginia",
    "washington",
    "west virginia",
    "wisconsin",
    "wyoming",
];

pub(crate) static CANADA_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CANADA_REGIONS.iter().copied().collect());

pub(crate) static US_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| US_REGIONS.iter().copied().collect());

/// Title-case a region token for display, e.g. "ontario" -> "Ontario".
pub fn title_case(token: &str) -> String {
    token
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
