//! Score one assessment draft read as JSON from stdin
//!
//! Usage: `risk-score [config.toml] < request.json`
//!
//! The request is `{"draft": {...}, "controls": [...]}`; the scored
//! assessment is written to stdout as JSON.

use anyhow::Context;
use risk_engine::{AssessmentDraft, Config, Control, LogFormat, RiskScoringEngine};
use serde::Deserialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    draft: AssessmentDraft,
    #[serde(default)]
    controls: Vec<Control>,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => Config::from_env().context("failed to load config from environment")?,
    };
    config.validate()?;

    init_tracing(&config);
    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        locale = ?config.locale,
        "Starting risk scoring"
    );

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read request from stdin")?;
    let request: ScoreRequest =
        serde_json::from_str(&input).context("request is not a valid score request")?;

    let engine = RiskScoringEngine::from_config(&config);
    let scored = engine.assess(request.draft, &request.controls)?;

    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}
