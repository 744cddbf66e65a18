use crate::apis::base::{event_list, EventCollector, PacedCalls};
use crate::app::ports::{JsonTransport, Pacer};
use crate::common::constants::API_FOOTBALL_API;
use crate::common::error::{Result, ScraperError};
use crate::common::types::{FetchedEvent, MatchSource};
use crate::config::ApiFootballConfig;
use crate::observability::metrics::sources;
use crate::pipeline::processing::normalize::ProviderShape;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

const API_KEY_HEADER: &str = "x-apisports-key";

/// API-Football v3: all live fixtures, then today's fixtures if too few.
pub struct ApiFootballSource {
    config: ApiFootballConfig,
    transport: Arc<dyn JsonTransport>,
    pacer: Arc<dyn Pacer>,
}

impl ApiFootballSource {
    pub fn new(
        config: ApiFootballConfig,
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

    /// API-Football answers 200 with a populated `errors` field on bad keys
    /// and exhausted quotas.
    fn check_errors(body: &Value) -> Result<()> {
        let has_errors = match body.get("errors") {
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            _ => false,
        };
        if has_errors {
            return Err(ScraperError::Api {
                message: format!("api_football reported errors: {}", body["errors"]),
            });
        }
        Ok(())
    }

    async fn collect(&self) -> Result<Vec<FetchedEvent>> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ScraperError::Config(format!("{API_FOOTBALL_API} has no API key")))?;
        let headers = [(API_KEY_HEADER, key)];
        let mut calls = PacedCalls::new(
            API_FOOTBALL_API,
            self.transport.as_ref(),
            self.pacer.as_ref(),
            Duration::from_millis(self.config.delay_ms),
        );
        let mut collector = EventCollector::new("/fixture/id");

        info!("Fetching live fixtures from API-Football...");
        let body = calls.get_json(&self.endpoint("fixtures?live=all"), &headers).await?;
        Self::check_errors(&body)?;
        for payload in event_list(API_FOOTBALL_API, &body, "response")? {
            collector.push(FetchedEvent::new(payload));
        }

        if collector.len() < self.config.min_events {
            info!("Only {} live fixtures, adding today's fixtures...", collector.len());
            let today = Utc::now().format("%Y-%m-%d").to_string();
            let body = calls
                .get_json(&self.endpoint(&format!("fixtures?date={today}")), &headers)
                .await?;
            Self::check_errors(&body)?;
            for payload in event_list(API_FOOTBALL_API, &body, "response")? {
                collector.push(FetchedEvent::new(payload));
            }
        }

        Ok(collector.into_events())
    }
}

#[async_trait::async_trait]
impl MatchSource for ApiFootballSource {
    fn source_name(&self) -> &'static str {
        API_FOOTBALL_API
    }

    fn shape(&self) -> ProviderShape {
        ProviderShape::ApiFootball
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> Result<Vec<FetchedEvent>> {
        let events = self
            .collect()
            .await
            .map_err(|e| ScraperError::fetch(API_FOOTBALL_API, e))?;
        sources::events_fetched(API_FOOTBALL_API, events.len());
        info!("Successfully fetched {} events from API-Football", events.len());
        Ok(events)
    }
}
