use crate::apis::api_football::ApiFootballSource;
use crate::apis::football_data::FootballDataSource;
use crate::apis::thesportsdb::TheSportsDbSource;
use crate::app::ports::{JsonTransport, Pacer};
use crate::common::constants::*;
use crate::common::types::MatchSource;
use crate::config::Config;
use std::sync::Arc;
use tracing::{info, warn};

/// Create one source by provider name. Keyed providers without a
/// credential are left out, since every call would be rejected.
pub fn create_source(
    api_name: &str,
    config: &Config,
    transport: Arc<dyn JsonTransport>,
    pacer: Arc<dyn Pacer>,
) -> Option<Box<dyn MatchSource>> {
    match api_name {
        THESPORTSDB_API => Some(Box::new(TheSportsDbSource::new(
            config.thesportsdb.clone(),
            transport,
            pacer,
        ))),
        API_FOOTBALL_API if config.api_football.api_key.is_some() => Some(Box::new(
            ApiFootballSource::new(config.api_football.clone(), transport, pacer),
        )),
        FOOTBALL_DATA_API if config.football_data.api_key.is_some() => Some(Box::new(
            FootballDataSource::new(config.football_data.clone(), transport, pacer),
        )),
        API_FOOTBALL_API | FOOTBALL_DATA_API => {
            info!("Skipping {}: no credential configured", api_name);
            None
        }
        _ => {
            warn!("Unknown provider in config: {}", api_name);
            None
        }
    }
}

/// Build the ordered fallback chain from `config.providers`
pub fn create_sources(
    config: &Config,
    transport: Arc<dyn JsonTransport>,
    pacer: Arc<dyn Pacer>,
) -> Vec<Box<dyn MatchSource>> {
    config
        .providers
        .iter()
        .filter_map(|name| create_source(name.trim(), config, transport.clone(), pacer.clone()))
        .collect()
}
