//! Coarse sentence-boundary segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Split text into coarse sentences on terminal punctuation runs.
///
/// Deterministic for a given input. Whitespace-only fragments are dropped, so
/// an empty or punctuation-only text yields no sentences at all.
pub fn split(text: &str) -> Vec<String> {
    BOUNDARY
        .split(text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
