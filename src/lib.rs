//! Core pipeline for the Coveet choropleth tool: raw tweet records in,
//! per-region mean sentiment (and COVID case counts) out. Rendering is a
//! downstream consumer and lives elsewhere.

pub mod cases;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod logging;
pub mod nlp;
pub mod pipeline;
