// Base trait and utilities for provider-specific normalizers
pub mod base;

// Individual normalizer implementations
pub mod api_football;
pub mod football_data;
pub mod thesportsdb;

// Re-export the main components
pub use api_football::ApiFootballNormalizer;
pub use base::{ExtractedFields, MatchNormalizer, NormalizerUtils};
pub use football_data::FootballDataNormalizer;
pub use thesportsdb::TheSportsDbNormalizer;
