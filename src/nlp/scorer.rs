//! Mean-of-sentences polarity scoring.

use tracing::trace;

use super::{lexicon::Lexicon, sentence};
use crate::error::EmptyInputError;

/// Damping applied when a negation cue flips a valence.
const NEGATION_DAMPING: f64 = 0.8;

/// Rule-based polarity scorer over the shared valence lexicon.
///
/// A text is segmented into sentences; each sentence is scored independently
/// in [-1, 1] and the text score is the arithmetic mean across sentences.
/// Scoring is pure and deterministic for a fixed lexicon.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: &'static Lexicon,
    /// Number of tokens after a negation cue that still get flipped.
    negation_window: usize,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::general(),
            negation_window: 3,
        }
    }

    /// Score a whole text as the mean of its per-sentence polarities.
    ///
    /// A text yielding zero sentences has no defined mean and fails with
    /// [`EmptyInputError`]; callers drop the record rather than defaulting
    /// the score.
    pub fn score(&self, text: &str) -> Result<f64, EmptyInputError> {
        let sentences = sentence::split(text);
        if sentences.is_empty() {
            return Err(EmptyInputError);
        }
        let sum: f64 = sentences.iter().map(|s| self.score_sentence(s)).sum();
        let mean = sum / sentences.len() as f64;
        trace!(sentences = sentences.len(), score = mean, "scored text");
        Ok(mean)
    }

    /// Score one sentence in [-1, 1]. A sentence with no lexicon hits is
    /// neutral (0.0).
    fn score_sentence(&self, sentence: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut multiplier = 1.0;
        let mut negated_for = 0usize;

        for token in sentence.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            if self.lexicon.is_negation(&word) {
                negated_for = self.negation_window;
                continue;
            }
            if let Some(boost) = self.lexicon.intensifier(&word) {
                multiplier = boost;
                continue;
            }

            if let Some(valence) = self.lexicon.valence(&word) {
                let mut value = valence * multiplier;
                if negated_for > 0 {
                    value = -value * NEGATION_DAMPING;
                }
                total += value;
                hits += 1;
                multiplier = 1.0;
            }

            negated_for = negated_for.saturating_sub(1);
        }

        if hits == 0 {
            0.0
        } else {
            (total / hits as f64).clamp(-1.0, 1.0)
        }
    }
}
