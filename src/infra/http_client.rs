use crate::app::ports::JsonTransport;
use crate::common::error::{Result, ScraperError};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::debug;

pub struct ReqwestTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestTransport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value> {
        let mut request = self.client.get(url).header(USER_AGENT, &self.user_agent);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "provider response");

        if !status.is_success() {
            return Err(ScraperError::Api {
                message: format!("{} returned HTTP {}", url, status.as_u16()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
