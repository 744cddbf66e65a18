use crate::app::ports::ReportSink;
use crate::common::constants::SAMPLE_SOURCE;
use crate::common::error::Result;
use crate::common::types::{FetchedEvent, Match, MatchSource, Report};
use crate::observability::metrics::{pipeline, report};
use crate::pipeline::dedupe::dedupe_matches;
use crate::pipeline::processing::normalize::normalizers::MatchNormalizer;
use crate::pipeline::sample::SampleData;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Drives one run: walk the fallback chain, normalize, dedupe, cap, count.
pub struct Aggregator {
    sources: Vec<Box<dyn MatchSource>>,
    sample: SampleData,
    capacity: usize,
}

impl Aggregator {
    /// `sources` are tried in the given order, never concurrently
    pub fn new(sources: Vec<Box<dyn MatchSource>>, sample: SampleData, capacity: usize) -> Self {
        Self {
            sources,
            sample,
            capacity,
        }
    }

    /// Produce the run's report. Never fails: provider failures degrade to
    /// the sample set, and a broken sample set yields the terminal report
    /// carrying whatever sample records could still be read.
    #[instrument(skip(self), fields(sources = self.sources.len(), capacity = self.capacity))]
    pub async fn run(&self) -> Report {
        let started = Instant::now();
        let report = match self.try_run().await {
            Ok(report) => report,
            Err(e) => {
                error!("Pipeline failed even on fallback: {}", e);
                pipeline::terminal_failure();
                let mut salvaged = self.sample.salvage();
                salvaged.truncate(self.capacity);
                Report::terminal(e.to_string(), salvaged)
            }
        };
        report::recorded(&report);
        info!(
            source = %report.source,
            total = report.total_matches,
            live = report.live_matches,
            finished = report.finished_matches,
            upcoming = report.upcoming_matches,
            "Pipeline finished in {:.2}s",
            started.elapsed().as_secs_f64()
        );
        report
    }

    /// Run the pipeline and hand the report to `sink`
    pub async fn run_and_persist(&self, sink: &dyn ReportSink) -> Result<Report> {
        let report = self.run().await;
        sink.write_report(&report).await?;
        Ok(report)
    }

    async fn try_run(&self) -> Result<Report> {
        let mut failures = 0;

        for source in &self.sources {
            let name = source.source_name();
            info!("📡 Fetching matches from {}...", name);
            match source.fetch().await {
                Ok(events) if events.is_empty() => {
                    warn!("{} returned no events, trying next source", name);
                    pipeline::fetch_outcome(name, "empty");
                }
                Ok(events) => {
                    pipeline::fetch_outcome(name, "success");
                    let matches = self.collect_matches(source.as_ref(), &events);
                    if !matches.is_empty() {
                        return Ok(Report::from_matches(matches, name));
                    }
                }
                Err(e) => {
                    warn!("{}", e);
                    pipeline::fetch_outcome(name, "failure");
                    failures += 1;
                }
            }
        }

        if failures > 0 && failures == self.sources.len() {
            warn!("All {} sources failed, using sample data", failures);
        } else {
            warn!("No matches found, using sample data");
        }
        pipeline::sample_fallback();

        let mut matches = self.sample.matches()?;
        matches.truncate(self.capacity);
        Ok(Report::from_matches(matches, SAMPLE_SOURCE))
    }

    /// Normalize, dedupe, then cap, so capacity counts unique matches.
    fn collect_matches(&self, source: &dyn MatchSource, events: &[FetchedEvent]) -> Vec<Match> {
        let shape = source.shape();
        let normalized: Vec<Match> = events
            .iter()
            .map(|event| shape.normalize(&event.payload, event.league.as_deref()))
            .collect();
        let before = normalized.len();

        let mut matches = dedupe_matches(normalized, source.keys_by_league());
        pipeline::duplicates_dropped(before - matches.len());
        matches.truncate(self.capacity);

        debug!(
            "{} events -> {} unique matches (capped at {})",
            before,
            matches.len(),
            self.capacity
        );
        matches
    }
}
