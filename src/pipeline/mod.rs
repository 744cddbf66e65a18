// Match pipeline: normalization, dedupe, fallback and aggregation

pub mod aggregator;
pub mod dedupe;
pub mod processing;
pub mod sample;

pub use aggregator::Aggregator;
pub use sample::SampleData;
