//! Record loading, enrichment, and regional aggregation.

pub mod aggregate;
pub mod enrich;
pub mod records;

pub use aggregate::{aggregate, RegionAggregate};
pub use enrich::{enrich, EnrichedRecord};
pub use records::{load_records, Record};
