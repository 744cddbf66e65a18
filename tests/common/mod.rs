#![allow(dead_code)]

use async_trait::async_trait;
use live_scores::app::ports::{JsonTransport, Pacer};
use live_scores::common::error::{Result, ScraperError};
use live_scores::common::types::{FetchedEvent, MatchSource};
use live_scores::pipeline::processing::normalize::ProviderShape;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Answers by the first route whose pattern is contained in the URL
pub struct ScriptedTransport {
    routes: Vec<(String, std::result::Result<Value, String>)>,
    pub calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn route(mut self, pattern: &str, body: Value) -> Self {
        self.routes.push((pattern.to_string(), Ok(body)));
        self
    }

    pub fn fail(mut self, pattern: &str, message: &str) -> Self {
        self.routes.push((pattern.to_string(), Err(message.to_string())));
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }
}

#[async_trait]
impl JsonTransport for ScriptedTransport {
    async fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value> {
        self.calls.lock().unwrap().push((
            url.to_string(),
            headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        ));
        match self.routes.iter().find(|(pattern, _)| url.contains(pattern.as_str())) {
            Some((_, Ok(body))) => Ok(body.clone()),
            Some((_, Err(message))) => Err(ScraperError::Api {
                message: message.clone(),
            }),
            None => Err(ScraperError::Api {
                message: format!("no route for {url}"),
            }),
        }
    }
}

/// Returns immediately, remembering every requested delay
#[derive(Default)]
pub struct RecordingPacer {
    pub waits: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn wait(&self, delay: Duration) {
        self.waits.lock().unwrap().push(delay);
    }
}

/// A source with a canned outcome that counts how often it was asked
pub struct StaticSource {
    pub name: &'static str,
    pub shape: ProviderShape,
    pub by_league: bool,
    outcome: std::result::Result<Vec<FetchedEvent>, String>,
    pub fetches: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn ok(name: &'static str, shape: ProviderShape, events: Vec<FetchedEvent>) -> Self {
        Self {
            name,
            shape,
            by_league: false,
            outcome: Ok(events),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &'static str, message: &str) -> Self {
        Self {
            name,
            shape: ProviderShape::FootballData,
            by_league: false,
            outcome: Err(message.to_string()),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn by_league(mut self) -> Self {
        self.by_league = true;
        self
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.fetches.clone()
    }
}

#[async_trait]
impl MatchSource for StaticSource {
    fn source_name(&self) -> &'static str {
        self.name
    }

    fn shape(&self) -> ProviderShape {
        self.shape
    }

    fn keys_by_league(&self) -> bool {
        self.by_league
    }

    async fn fetch(&self) -> Result<Vec<FetchedEvent>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(events) => Ok(events.clone()),
            Err(message) => Err(ScraperError::fetch(
                self.name,
                ScraperError::Api {
                    message: message.clone(),
                },
            )),
        }
    }
}
