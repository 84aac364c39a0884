//! leader-impact: run the speech effect pipeline on an impact payload.
//!
//! Reads an impact payload (JSON, optionally wrapped in a markdown code
//! fence) from a file or stdin, then normalizes, modulates and synthesizes
//! it, submits the effects to an in-memory ledger and prints the result as
//! JSON on stdout. Logs go to stderr.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use leader_impact::adapters::{InMemoryEffectLedger, MockContentProvider};
use leader_impact::application::{
    DroppedEffect, SynthesizeSpeechEffectsCommand, SynthesizeSpeechEffectsHandler,
};
use leader_impact::config::{AppConfig, CONFIG_FILE_VAR};
use leader_impact::domain::foundation::{DeliveryMode, SpeechType, UrgencyLevel};
use leader_impact::domain::impact::SimulationEffect;
use leader_impact::domain::normalize::{extract_json, ValidationDefault};

#[derive(Parser)]
#[command(name = "leader-impact")]
#[command(about = "Synthesize simulation effects from a speech impact payload")]
struct Cli {
    /// Impact payload file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// How the speech was delivered: avatar, teleprompter or off-the-cuff
    #[arg(short, long, default_value = "avatar")]
    delivery_mode: DeliveryMode,

    /// Kind of speech, e.g. crisis_address or rally
    #[arg(short, long, default_value = "policy_announcement")]
    speech_type: SpeechType,

    /// Source id recorded on every effect
    #[arg(long, default_value = "cli")]
    source_id: String,

    /// Configuration file
    #[arg(short, long, env = CONFIG_FILE_VAR)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    priority: UrgencyLevel,
    effects: Vec<SimulationEffect>,
    suppressed: Vec<String>,
    validation_defaults: Vec<ValidationDefault>,
    dropped: Vec<DroppedEffect>,
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            Ok(text)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())?;
    config.validate()?;
    config.logging.init()?;

    let payload = extract_json(&read_input(cli.input.as_ref())?).context("input is not an impact payload")?;

    let ledger = InMemoryEffectLedger::new();
    // The payload is always supplied, so the provider is never called.
    let handler = SynthesizeSpeechEffectsHandler::new(
        Arc::new(MockContentProvider::new()),
        Arc::new(ledger.clone()),
        config.provider.clone(),
        config.engine.thresholds(),
        config.knob_set(),
    );

    let cmd = SynthesizeSpeechEffectsCommand::new(cli.source_id, cli.speech_type, cli.delivery_mode)
        .with_impact(payload);
    let result = handler.handle(cmd).await?;

    info!(ledger_entries = ledger.len().await, "Pipeline finished");

    let report = Report {
        priority: result.priority,
        effects: result.effects,
        suppressed: result.suppressed,
        validation_defaults: result.validation_defaults,
        dropped: result.report.dropped,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
