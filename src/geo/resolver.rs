//! Free-text user-location resolution against the canonical region tables.

use super::vocab::{Country, CANADA_SET, US_SET};

/// Map a free-text location to a canonical region token and its country.
///
/// Tokens are scanned left-to-right; each is stripped of surrounding
/// punctuation and case-folded, then checked against the Canadian set first
/// and the US set second. The first matching token wins. `None` means the
/// record cannot be placed and must be dropped upstream, never defaulted.
///
/// Matching is single-token only: multi-word canonical names such as
/// "New Brunswick" are never matched as phrases. Downstream calibration
/// depends on this granularity, so it stays as-is.
pub fn resolve(raw_location: &str) -> Option<(String, Country)> {
    for token in raw_location.split_whitespace() {
        let cleaned = token.trim_matches(|c: char| !c.is_alphanumeric());
        if cleaned.is_empty() {
            continue;
        }
        let folded = cleaned.to_lowercase();
        if CANADA_SET.contains(folded.as_str()) {
            return Some((folded, Country::Canada));
        }
        if US_SET.contains(folded.as_str()) {
            return Some((folded, Country::UnitedStates));
        }
    }
    None
}
