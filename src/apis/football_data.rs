use crate::apis::base::{event_list, EventCollector, PacedCalls};
use crate::app::ports::{JsonTransport, Pacer};
use crate::common::constants::FOOTBALL_DATA_API;
use crate::common::error::{Result, ScraperError};
use crate::common::types::{FetchedEvent, MatchSource};
use crate::config::FootballDataConfig;
use crate::observability::metrics::sources;
use crate::pipeline::processing::normalize::ProviderShape;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

const AUTH_HEADER: &str = "X-Auth-Token";

/// football-data.org v4: matches in play, then today's schedule if too few.
pub struct FootballDataSource {
    config: FootballDataConfig,
    transport: Arc<dyn JsonTransport>,
    pacer: Arc<dyn Pacer>,
}

impl FootballDataSource {
    pub fn new(
        config: FootballDataConfig,
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
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path_and_query)
    }

    fn check_errors(body: &Value) -> Result<()> {
        if let Some(code) = body.get("errorCode") {
            let message = body.get("message").and_then(Value::as_str).unwrap_or("unknown");
            return Err(ScraperError::Api {
                message: format!("football_data error {code}: {message}"),
            });
        }
        Ok(())
    }

    async fn collect(&self) -> Result<Vec<FetchedEvent>> {
        let token = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ScraperError::Config(format!("{FOOTBALL_DATA_API} has no API token")))?;
        let headers = [(AUTH_HEADER, token)];
        let mut calls = PacedCalls::new(
            FOOTBALL_DATA_API,
            self.transport.as_ref(),
            self.pacer.as_ref(),
            Duration::from_millis(self.config.delay_ms),
        );
        let mut collector = EventCollector::new("/id");

        info!("Fetching matches in play from football-data.org...");
        let body = calls
            .get_json(&self.endpoint("matches?status=IN_PLAY,PAUSED"), &headers)
            .await?;
        Self::check_errors(&body)?;
        for payload in event_list(FOOTBALL_DATA_API, &body, "matches")? {
            collector.push(FetchedEvent::new(payload));
        }

        if collector.len() < self.config.min_events {
            info!("Only {} matches in play, adding today's schedule...", collector.len());
            let today = Utc::now().format("%Y-%m-%d").to_string();
            let url = self.endpoint(&format!("matches?dateFrom={today}&dateTo={today}"));
            let body = calls.get_json(&url, &headers).await?;
            Self::check_errors(&body)?;
            for payload in event_list(FOOTBALL_DATA_API, &body, "matches")? {
                collector.push(FetchedEvent::new(payload));
            }
        }

        Ok(collector.into_events())
    }
}

#[async_trait::async_trait]
impl MatchSource for FootballDataSource {
    fn source_name(&self) -> &'static str {
        FOOTBALL_DATA_API
    }

    fn shape(&self) -> ProviderShape {
        ProviderShape::FootballData
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> Result<Vec<FetchedEvent>> {
        let events = self
            .collect()
            .await
            .map_err(|e| ScraperError::fetch(FOOTBALL_DATA_API, e))?;
        sources::events_fetched(FOOTBALL_DATA_API, events.len());
        info!("Successfully fetched {} events from football-data.org", events.len());
        Ok(events)
    }
}
