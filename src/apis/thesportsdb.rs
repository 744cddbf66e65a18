use crate::apis::base::{event_list, EventCollector, PacedCalls};
use crate::app::ports::{JsonTransport, Pacer};
use crate::common::constants::{THESPORTSDB_API, THESPORTSDB_DEFAULT_KEY};
use crate::common::error::{Result, ScraperError};
use crate::common::types::{FetchedEvent, MatchSource};
use crate::config::TheSportsDbConfig;
use crate::observability::metrics::sources;
use crate::pipeline::processing::normalize::ProviderShape;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// TheSportsDB: live scores for every configured league, topped up with
/// today's fixtures from the leading leagues when live play is thin.
pub struct TheSportsDbSource {
    config: TheSportsDbConfig,
    transport: Arc<dyn JsonTransport>,
    pacer: Arc<dyn Pacer>,
}

impl TheSportsDbSource {
    pub fn new(
        config: TheSportsDbConfig,
        transport: Arc<dyn JsonTransport>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            config,
            transport,
            pacer,
        }
    }

    fn endpoint(&self, path_and_query: &str) -> String {
        let key = self.config.api_key.as_deref().unwrap_or(THESPORTSDB_DEFAULT_KEY);
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            key,
            path_and_query
        )
    }

    /// Fixtures come back with whatever status the feed has; ones without
    /// any are upcoming.
    fn stamp_not_started(payload: &mut Value) {
        if let Some(obj) = payload.as_object_mut() {
            let missing = obj
                .get("strStatus")
                .and_then(Value::as_str)
                .map_or(true, |s| s.trim().is_empty());
            if missing {
                obj.insert("strStatus".to_string(), json!("NS"));
            }
        }
    }

    async fn collect(&self) -> Result<Vec<FetchedEvent>> {
        let mut calls = PacedCalls::new(
            THESPORTSDB_API,
            self.transport.as_ref(),
            self.pacer.as_ref(),
            Duration::from_millis(self.config.delay_ms),
        );
        let mut collector = EventCollector::new("/idEvent");

        for league in &self.config.leagues {
            info!("Fetching live scores from {}...", league.name);
            let body = calls
                .get_json(&self.endpoint(&format!("livescore.php?l={}", league.id)), &[])
                .await?;
            for payload in event_list(THESPORTSDB_API, &body, "events")? {
                collector.push(FetchedEvent::with_league(payload, league.name.as_str()));
            }
        }

        if collector.len() < self.config.min_events {
            info!(
                "Only {} live events, adding today's fixtures...",
                collector.len()
            );
            let today = Utc::now().format("%Y-%m-%d").to_string();
            let mut added = 0;

            'leagues: for league in self.config.leagues.iter().take(self.config.fixture_leagues) {
                if added >= self.config.fixtures_limit {
                    break;
                }
                debug!("Fetching today's fixtures from {}...", league.name);
                let url = self.endpoint(&format!("eventsday.php?d={}&l={}", today, league.id));
                let body = calls.get_json(&url, &[]).await?;
                for mut payload in event_list(THESPORTSDB_API, &body, "events")? {
                    if added >= self.config.fixtures_limit {
                        break 'leagues;
                    }
                    Self::stamp_not_started(&mut payload);
                    if collector.push(FetchedEvent::with_league(payload, league.name.as_str())) {
                        added += 1;
                    }
                }
            }
            info!("Added {} fixtures", added);
        }

        debug!("{} calls made", calls.calls());
        Ok(collector.into_events())
    }
}

#[async_trait::async_trait]
impl MatchSource for TheSportsDbSource {
    fn source_name(&self) -> &'static str {
        THESPORTSDB_API
    }

    fn shape(&self) -> ProviderShape {
        ProviderShape::TheSportsDb
    }

    /// Leagues are enumerated explicitly, so the same pairing in two
    /// competitions is two matches.
    fn keys_by_league(&self) -> bool {
        true
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> Result<Vec<FetchedEvent>> {
        let events = self
            .collect()
            .await
            .map_err(|e| ScraperError::fetch(THESPORTSDB_API, e))?;
        sources::events_fetched(THESPORTSDB_API, events.len());
        info!("Successfully fetched {} events from TheSportsDB", events.len());
        Ok(events)
    }
}
