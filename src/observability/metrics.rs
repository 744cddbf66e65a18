//! Metrics for the live-score pipeline
//!
//! Recorded through the `metrics` facade using Prometheus naming
//! conventions. Nothing is exported over the network; `init` installs a
//! recorder whose rendered snapshot the binary logs after a run.

use crate::common::types::Report;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;
use tracing::{info, warn};

/// Every metric name used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Sources metrics
    SourcesRequestsSuccess,
    SourcesRequestsError,
    SourcesRequestDuration,
    SourcesEventsFetched,

    // Pipeline metrics
    PipelineFetchOutcomes,
    PipelineDuplicatesDropped,
    PipelineSampleFallbacks,
    PipelineTerminalFailures,

    // Report metrics
    ReportMatches,
    ReportLiveMatches,
    ReportFinishedMatches,
    ReportUpcomingMatches,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::SourcesRequestsSuccess => "scores_sources_requests_success_total",
            MetricName::SourcesRequestsError => "scores_sources_requests_error_total",
            MetricName::SourcesRequestDuration => "scores_sources_request_duration_seconds",
            MetricName::SourcesEventsFetched => "scores_sources_events_fetched_total",

            MetricName::PipelineFetchOutcomes => "scores_pipeline_fetch_outcomes_total",
            MetricName::PipelineDuplicatesDropped => "scores_pipeline_duplicates_dropped_total",
            MetricName::PipelineSampleFallbacks => "scores_pipeline_sample_fallbacks_total",
            MetricName::PipelineTerminalFailures => "scores_pipeline_terminal_failures_total",

            MetricName::ReportMatches => "scores_report_matches",
            MetricName::ReportLiveMatches => "scores_report_live_matches",
            MetricName::ReportFinishedMatches => "scores_report_finished_matches",
            MetricName::ReportUpcomingMatches => "scores_report_upcoming_matches",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install the Prometheus recorder. Failing to install only loses metrics.
pub fn init() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            warn!("Failed to install Prometheus recorder: {}", e);
            None
        }
    }
}

// ============================================================================
// Sources Metrics
// ============================================================================

pub mod sources {
    use super::MetricName;

    pub fn request_success(provider: &'static str) {
        ::metrics::counter!(MetricName::SourcesRequestsSuccess.as_str(), "provider" => provider).increment(1);
    }

    pub fn request_error(provider: &'static str) {
        ::metrics::counter!(MetricName::SourcesRequestsError.as_str(), "provider" => provider).increment(1);
    }

    pub fn request_duration(provider: &'static str, secs: f64) {
        ::metrics::histogram!(MetricName::SourcesRequestDuration.as_str(), "provider" => provider).record(secs);
    }

    pub fn events_fetched(provider: &'static str, count: usize) {
        ::metrics::counter!(MetricName::SourcesEventsFetched.as_str(), "provider" => provider)
            .increment(count as u64);
    }
}

// ============================================================================
// Pipeline Metrics
// ============================================================================

pub mod pipeline {
    use super::MetricName;

    /// `outcome` is one of `success`, `empty`, `failure`
    pub fn fetch_outcome(provider: &'static str, outcome: &'static str) {
        ::metrics::counter!(
            MetricName::PipelineFetchOutcomes.as_str(),
            "provider" => provider,
            "outcome" => outcome
        )
        .increment(1);
    }

    pub fn duplicates_dropped(count: usize) {
        ::metrics::counter!(MetricName::PipelineDuplicatesDropped.as_str()).increment(count as u64);
    }

    pub fn sample_fallback() {
        ::metrics::counter!(MetricName::PipelineSampleFallbacks.as_str()).increment(1);
    }

    pub fn terminal_failure() {
        ::metrics::counter!(MetricName::PipelineTerminalFailures.as_str()).increment(1);
    }
}

// ============================================================================
// Report Metrics
// ============================================================================

pub mod report {
    use super::{MetricName, Report};

    pub fn recorded(report: &Report) {
        ::metrics::gauge!(MetricName::ReportMatches.as_str()).set(report.total_matches as f64);
        ::metrics::gauge!(MetricName::ReportLiveMatches.as_str()).set(report.live_matches as f64);
        ::metrics::gauge!(MetricName::ReportFinishedMatches.as_str())
            .set(report.finished_matches as f64);
        ::metrics::gauge!(MetricName::ReportUpcomingMatches.as_str())
            .set(report.upcoming_matches as f64);
    }
}
