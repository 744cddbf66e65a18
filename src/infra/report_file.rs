use crate::app::ports::ReportSink;
use crate::common::error::Result;
use crate::common::types::Report;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the report as pretty-printed JSON, replacing any previous file
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSink for JsonFileSink {
    async fn write_report(&self, report: &Report) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json_content = serde_json::to_string_pretty(report)?;
        tokio::fs::write(&self.path, json_content).await?;
        info!("💾 Saved report to {}", self.path.display());
        Ok(())
    }
}
