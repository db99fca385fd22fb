//! Lexicon-and-rule sentiment scoring over sentence-segmented text.

pub mod lexicon;
pub mod scorer;
pub mod sentence;

pub use scorer::SentimentAnalyzer;
