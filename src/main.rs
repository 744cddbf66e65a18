use clap::Parser;
use live_scores::apis::factory::create_sources;
use live_scores::app::ports::{JsonTransport, Pacer};
use live_scores::common::constants::{CONFIG_PATH, OUTPUT_PATH};
use live_scores::config::Config;
use live_scores::infra::http_client::ReqwestTransport;
use live_scores::infra::pacer::TokioPacer;
use live_scores::infra::report_file::JsonFileSink;
use live_scores::observability::{init_logging, metrics};
use live_scores::pipeline::{Aggregator, SampleData};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "live_scores")]
#[command(about = "Fetch live football scores and write live-scores.json")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    dotenv::dotenv().ok();
    let _log_guard = init_logging();
    let metrics_handle = metrics::init();

    // A broken config file must not cost us the report
    let config = match Config::load(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; continuing with defaults", e);
            Config::default()
        }
    }
    .with_env_credentials();

    let transport: Arc<dyn JsonTransport> = Arc::new(ReqwestTransport::new(config.user_agent.clone()));
    let pacer: Arc<dyn Pacer> = Arc::new(TokioPacer);
    let sources = create_sources(&config, transport, pacer);
    info!(
        "🚀 Fetching live scores ({} sources: {})",
        sources.len(),
        sources.iter().map(|s| s.source_name()).collect::<Vec<_>>().join(", ")
    );

    let sample = SampleData::bundled();
    if let Some(warning) = sample
        .matches()
        .ok()
        .and_then(|records| config.capacity_warning(records.len()))
    {
        warn!("{}", warning);
    }

    let aggregator = Aggregator::new(sources, sample, config.capacity);
    let sink = JsonFileSink::new(OUTPUT_PATH);
    let report = aggregator.run_and_persist(&sink).await?;

    if report.success {
        println!("✅ Successfully fetched {} matches", report.total_matches);
    } else {
        println!(
            "❌ Error: {}",
            report.error.as_deref().unwrap_or("unknown failure")
        );
    }
    println!(
        "Live: {}, Finished: {}, Upcoming: {}",
        report.live_matches, report.finished_matches, report.upcoming_matches
    );

    if let Some(handle) = metrics_handle {
        debug!("Metrics snapshot:\n{}", handle.render());
    }
    Ok(())
}
