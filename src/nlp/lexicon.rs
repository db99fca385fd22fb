//! General-purpose valence lexicon with intensifiers and negation cues.
//!
//! Word valences live in [-1, 1]. The table is intentionally compact; it
//! trades recall for zero model downloads and fully deterministic scoring.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

const WORD_VALENCES: &[(&str, f64)] = &[
    // strongly positive
    ("amazing", 0.85),
    ("awesome", 0.8),
    ("best", 0.85),
    ("brilliant", 0.8),
    ("excellent", 0.85),
    ("fantastic", 0.85),
    ("incredible", 0.8),
    ("love", 0.75),
    ("loved", 0.75),
    ("loves", 0.75),
    ("perfect", 0.85),
    ("wonderful", 0.8),
    ("thrilled", 0.8),
    ("delighted", 0.8),
    ("outstanding", 0.8),
    // moderately positive
    ("better", 0.45),
    ("calm", 0.35),
    ("care", 0.35),
    ("comfort", 0.4),
    ("encouraging", 0.55),
    ("enjoy", 0.55),
    ("enjoyed", 0.55),
    ("glad", 0.55),
    ("good", 0.55),
    ("grateful", 0.65),
    ("great", 0.65),
    ("happy", 0.65),
    ("heal", 0.45),
    ("healthy", 0.5),
    ("help", 0.35),
    ("helpful", 0.5),
    ("hero", 0.6),
    ("heroes", 0.6),
    ("hope", 0.5),
    ("hopeful", 0.6),
    ("improve", 0.45),
    ("improved", 0.5),
    ("improving", 0.5),
    ("kind", 0.45),
    ("nice", 0.5),
    ("optimistic", 0.6),
    ("positive", 0.5),
    ("progress", 0.45),
    ("proud", 0.6),
    ("recover", 0.45),
    ("recovered", 0.55),
    ("recovery", 0.5),
    ("relief", 0.5),
    ("relieved", 0.55),
    ("safe", 0.45),
    ("smile", 0.5),
    ("strong", 0.4),
    ("succeed", 0.55),
    ("success", 0.6),
    ("support", 0.4),
    ("thank", 0.55),
    ("thanks", 0.55),
    ("thankful", 0.65),
    ("win", 0.55),
    ("winning", 0.55),
    // moderately negative
    ("afraid", -0.55),
    ("angry", -0.6),
    ("anxious", -0.55),
    ("bad", -0.55),
    ("bored", -0.35),
    ("broke", -0.4),
    ("broken", -0.45),
    ("concern", -0.35),
    ("concerned", -0.4),
    ("crisis", -0.6),
    ("cry", -0.5),
    ("crying", -0.55),
    ("danger", -0.55),
    ("dangerous", -0.6),
    ("difficult", -0.4),
    ("doubt", -0.35),
    ("fail", -0.55),
    ("failed", -0.55),
    ("failure", -0.6),
    ("fear", -0.55),
    ("frustrated", -0.55),
    ("frustrating", -0.55),
    ("hard", -0.3),
    ("hurt", -0.5),
    ("ill", -0.45),
    ("lonely", -0.5),
    ("lose", -0.45),
    ("losing", -0.45),
    ("lost", -0.45),
    ("mad", -0.5),
    ("miss", -0.3),
    ("negative", -0.5),
    ("outbreak", -0.55),
    ("pain", -0.55),
    ("painful", -0.6),
    ("panic", -0.6),
    ("poor", -0.45),
    ("problem", -0.4),
    ("problems", -0.4),
    ("sad", -0.55),
    ("scared", -0.6),
    ("scary", -0.55),
    ("shortage", -0.5),
    ("sick", -0.5),
    ("stress", -0.5),
    ("stressed", -0.55),
    ("struggle", -0.5),
    ("struggling", -0.5),
    ("stuck", -0.35),
    ("suffer", -0.6),
    ("suffering", -0.6),
    ("tired", -0.35),
    ("upset", -0.55),
    ("worried", -0.5),
    ("worry", -0.45),
    ("worse", -0.55),
    // strongly negative
    ("awful", -0.8),
    ("catastrophe", -0.85),
    ("dead", -0.75),
    ("death", -0.8),
    ("deaths", -0.8),
    ("devastating", -0.85),
    ("die", -0.8),
    ("died", -0.8),
    ("disaster", -0.8),
    ("disgusting", -0.8),
    ("dying", -0.85),
    ("hate", -0.75),
    ("hated", -0.75),
    ("horrible", -0.8),
    ("hopeless", -0.75),
    ("kill", -0.8),
    ("killed", -0.8),
    ("nightmare", -0.75),
    ("terrible", -0.8),
    ("terrifying", -0.8),
    ("tragedy", -0.8),
    ("tragic", -0.8),
    ("worst", -0.85),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.6),
    ("completely", 1.35),
    ("extremely", 1.5),
    ("fairly", 0.85),
    ("hardly", 0.6),
    ("incredibly", 1.45),
    ("kinda", 0.8),
    ("pretty", 1.1),
    ("quite", 1.15),
    ("really", 1.25),
    ("slightly", 0.7),
    ("so", 1.2),
    ("somewhat", 0.8),
    ("totally", 1.3),
    ("truly", 1.25),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "no", "not", "never", "without", "neither", "nor", "nothing", "nobody", "cannot", "can't",
    "don't", "doesn't", "didn't", "won't", "wouldn't", "couldn't", "shouldn't", "isn't", "aren't",
    "wasn't", "weren't", "ain't",
];

/// Read-only lookup tables backing the sentiment analyzer.
#[derive(Debug)]
pub struct Lexicon {
    valences: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

static GENERAL: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    valences: WORD_VALENCES.iter().copied().collect(),
    intensifiers: INTENSIFIERS.iter().copied().collect(),
    negations: NEGATIONS.iter().copied().collect(),
});

impl Lexicon {
    /// The built-in general-purpose English lexicon.
    pub fn general() -> &'static Lexicon {
        &GENERAL
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }
}
