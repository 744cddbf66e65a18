pub mod apis;
pub mod common;
pub mod config;
pub mod observability;
pub mod pipeline;

// Layered boundaries for application ports and infrastructure adapters
pub mod app;
pub mod infra;
