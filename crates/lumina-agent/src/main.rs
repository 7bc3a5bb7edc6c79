//! # lumina
//!
//! Terminal fortune-teller: loads configuration, wires the hosted
//! capability clients into the orchestrator and runs the interactive shell.

#![deny(unsafe_code)]

mod commands;
mod render;
mod shell;
mod upload;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use lumina_core::{LuminaError, Mode};
use lumina_llm::{AzureOpenAIClient, CapabilityClients};
use lumina_logging::{LogFormat, LogLevel};
use lumina_runtime::{Orchestrator, Session};
use lumina_settings::{AzureCredentials, LuminaSettings};
use tokio::io::BufReader;

use crate::render::Renderer;
use crate::shell::Shell;

/// Lumina, the mystic tarot master.
#[derive(Parser, Debug)]
#[command(name = "lumina", version, about = "신비한 타로 마스터 루미나")]
struct Cli {
    /// Starting mode: chat, reading, or talisman.
    #[arg(long)]
    mode: Option<Mode>,

    /// Start with spoken answers disabled.
    #[arg(long)]
    no_tts: bool,

    /// Settings file (defaults to `~/.lumina/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Directory for generated audio files.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Log level for stderr (`RUST_LOG` takes precedence).
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn start_mode(&self, settings: &LuminaSettings) -> Mode {
        self.mode.unwrap_or(settings.session.default_mode)
    }

    fn tts_enabled(&self, settings: &LuminaSettings) -> bool {
        !self.no_tts && settings.session.tts_enabled
    }

    fn output_dir(&self, settings: &LuminaSettings) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&settings.session.output_dir))
    }

    fn log_level(&self, settings: &LuminaSettings) -> LogLevel {
        LogLevel::from_str_lossy(self.log_level.as_deref().unwrap_or(&settings.logging.level))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // .env first so its values feed the env-override layer
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: failed to read .env: {e}");
        }
    }

    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(lumina_settings::settings_path);
    let settings = lumina_settings::load_settings_from_path(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;

    lumina_logging::init_subscriber(
        args.log_level(&settings),
        LogFormat::from_json_flag(settings.logging.json),
    );

    let credentials = AzureCredentials::resolve(&settings).map_err(|e| {
        let err = LuminaError::from(e);
        tracing::error!(category = err.category(), error = %err, "startup configuration invalid");
        anyhow!(err.user_message())
    })?;
    tracing::info!(
        endpoint = %credentials.endpoint,
        chat = %credentials.chat_deployment,
        tts = %credentials.tts_deployment,
        image = %credentials.image_deployment,
        "capability clients configured"
    );

    let client = AzureOpenAIClient::new(credentials).context("Failed to build HTTP client")?;
    let orchestrator = Orchestrator::new(CapabilityClients::from_single(Arc::new(client)));
    let session = Session::new(args.start_mode(&settings), args.tts_enabled(&settings));
    tracing::info!(session_id = %session.id(), mode = %session.mode(), tts = session.tts_enabled(), "session started");

    let mut shell = Shell::new(
        orchestrator,
        session,
        Renderer::new(args.output_dir(&settings)),
        std::io::stdout(),
    );
    shell.run(BufReader::new(tokio::io::stdin())).await
}
