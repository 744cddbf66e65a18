use crate::app::ports::{JsonTransport, Pacer};
use crate::common::error::{Result, ScraperError};
use crate::common::types::FetchedEvent;
use crate::observability::metrics::sources;
use serde_json::Value;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// Issues one provider's requests strictly in sequence, waiting `delay`
/// between consecutive calls (never before the first).
pub struct PacedCalls<'a> {
    provider: &'static str,
    transport: &'a dyn JsonTransport,
    pacer: &'a dyn Pacer,
    delay: Duration,
    calls: usize,
}

impl<'a> PacedCalls<'a> {
    pub fn new(
        provider: &'static str,
        transport: &'a dyn JsonTransport,
        pacer: &'a dyn Pacer,
        delay: Duration,
    ) -> Self {
        Self {
            provider,
            transport,
            pacer,
            delay,
            calls: 0,
        }
    }

    pub async fn get_json(&mut self, url: &str, headers: &[(&str, &str)]) -> Result<Value> {
        if self.calls > 0 {
            self.pacer.wait(self.delay).await;
        }
        self.calls += 1;

        debug!(provider = self.provider, url, "provider call {}", self.calls);
        let started = Instant::now();
        let result = self.transport.get_json(url, headers).await;
        sources::request_duration(self.provider, started.elapsed().as_secs_f64());
        match &result {
            Ok(_) => sources::request_success(self.provider),
            Err(_) => sources::request_error(self.provider),
        }
        result
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

/// Pull the event list out of a response envelope. A missing or null list
/// is an empty result; anything else that isn't an array is malformed.
pub fn event_list(provider: &str, body: &Value, key: &str) -> Result<Vec<Value>> {
    let object = body.as_object().ok_or_else(|| ScraperError::Api {
        message: format!("{provider} response is not a JSON object"),
    })?;
    match object.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(ScraperError::Api {
            message: format!("{provider} field '{key}' is not a list: {other}"),
        }),
    }
}

/// Accumulates events across calls, dropping any whose provider-native id
/// was already collected. Events without an id are always kept.
pub struct EventCollector {
    id_pointer: &'static str,
    seen: HashSet<String>,
    events: Vec<FetchedEvent>,
}

impl EventCollector {
    pub fn new(id_pointer: &'static str) -> Self {
        Self {
            id_pointer,
            seen: HashSet::new(),
            events: Vec::new(),
        }
    }

    fn native_id(&self, payload: &Value) -> Option<String> {
        match payload.pointer(self.id_pointer)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns whether the event was appended
    pub fn push(&mut self, event: FetchedEvent) -> bool {
        if let Some(id) = self.native_id(&event.payload) {
            if !self.seen.insert(id) {
                return false;
            }
        }
        self.events.push(event);
        true
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<FetchedEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_list_shapes() {
        assert_eq!(event_list("p", &json!({"events": null}), "events").unwrap().len(), 0);
        assert_eq!(event_list("p", &json!({}), "events").unwrap().len(), 0);
        assert_eq!(event_list("p", &json!({"events": [1, 2]}), "events").unwrap().len(), 2);
        assert!(event_list("p", &json!({"events": "nope"}), "events").is_err());
        assert!(event_list("p", &json!("<html>"), "events").is_err());
    }

    #[test]
    fn test_collector_dedupes_by_native_id() {
        let mut collector = EventCollector::new("/fixture/id");
        assert!(collector.push(FetchedEvent::new(json!({"fixture": {"id": 7}}))));
        assert!(!collector.push(FetchedEvent::new(json!({"fixture": {"id": 7}, "x": 1}))));
        assert!(collector.push(FetchedEvent::new(json!({"fixture": {"id": 8}}))));
        assert!(collector.push(FetchedEvent::new(json!({"no": "id"}))));
        assert!(collector.push(FetchedEvent::new(json!({"no": "id"}))));
        assert_eq!(collector.len(), 4);

        let events = collector.into_events();
        assert_eq!(events[0].payload, json!({"fixture": {"id": 7}}));
    }
}
