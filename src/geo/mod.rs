//! Geographic vocabulary and free-text location resolution.

pub mod resolver;
pub mod vocab;

pub use resolver::resolve;
pub use vocab::{title_case, Country};
