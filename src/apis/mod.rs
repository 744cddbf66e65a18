// Upstream providers, one source per API
pub mod base;
pub mod factory;

pub mod api_football;
pub mod football_data;
pub mod thesportsdb;
