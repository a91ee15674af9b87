use anyhow::Result;
use clap::Parser;
use moodline::{App, ClassifierClient, Config, DetectionSession, Notifier, SessionConfig, ToastTiming};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Live emotion-detection session client
#[derive(Debug, Parser)]
#[command(name = "moodline", version)]
struct Args {
    /// Config file path (without extension)
    #[arg(long, default_value = "config/moodline")]
    config: String,

    /// Override the classifier endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Override the capture tick interval in seconds
    #[arg(long)]
    interval_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    let endpoint = args.endpoint.unwrap_or(cfg.classifier.endpoint);
    let tick_secs = args.interval_secs.unwrap_or(cfg.classifier.tick_interval_secs);

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Classifier endpoint: {}", endpoint);
    info!("Tick interval: {}s", tick_secs);

    let session_config = SessionConfig {
        endpoint: endpoint.clone(),
        tick_interval: Duration::from_secs(tick_secs),
        ..SessionConfig::default()
    };

    let notifier = Notifier::with_timing(ToastTiming {
        dwell: Duration::from_millis(cfg.ui.toast_dwell_ms),
        ..ToastTiming::default()
    });

    let source = Arc::new(ClassifierClient::new(endpoint));
    let session = Arc::new(DetectionSession::new(session_config, source, notifier));

    info!("Session id: {}", session.session_id());

    App::new(session).run().await
}
