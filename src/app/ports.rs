use crate::common::error::Result;
use crate::common::types::Report;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

// Fetch-side ports

/// GET a URL and parse the body as JSON. Non-2xx responses are errors.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value>;
}

/// The wait inserted between consecutive calls to one provider
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn wait(&self, delay: Duration);
}

// Output-side ports

#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write_report(&self, report: &Report) -> Result<()>;
}
