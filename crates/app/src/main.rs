// Logging behavior:
// - Writes logs to a daily-rotated file at logs/notevox.log only; stderr is
//   reserved for notices and the status line.
// - Controlled via --log-level or RUST_LOG (e.g., "info", "debug").
// - File output uses a non-blocking writer; logs/ is created if missing.
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use notevox_foundation::{Language, Settings};
use notevox_stt::WhisperRunner;
use notevox_transcribe::{Orchestrator, RunOutcome, StatusReporter};
use notevox_vault::FsVault;

use ui::{StderrNotifier, TermStatus};

fn init_logging(cli_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("logs")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "notevox.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

    // Prefer the CLI-provided level; fall back to RUST_LOG; then default to info.
    let effective_level = if !cli_level.is_empty() {
        cli_level.to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };
    let env_filter = EnvFilter::try_new(effective_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Transcribe audio embeds in a note via the Whisper CLI"
)]
struct Cli {
    /// Path to the note to process
    note: PathBuf,
    /// Vault root directory (defaults to the note's parent directory)
    #[arg(long)]
    vault: Option<PathBuf>,
    /// Transcription language
    #[arg(long, default_value = "auto", value_enum)]
    language: CliLanguage,
    /// Whisper binary to invoke (overrides settings)
    #[arg(long = "whisper-bin")]
    whisper_bin: Option<String>,
    /// Whisper model size (overrides settings)
    #[arg(long)]
    model: Option<String>,
    /// Log level filter (overrides RUST_LOG)
    #[arg(long = "log-level", default_value = "")]
    log_level: String,
}

/// One value per command the hosting palette exposed.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliLanguage {
    Auto,
    En,
    Nl,
}

impl From<CliLanguage> for Language {
    fn from(value: CliLanguage) -> Self {
        match value {
            CliLanguage::Auto => Language::Auto,
            CliLanguage::En => Language::En,
            CliLanguage::Nl => Language::Nl,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;
    tracing::info!("Starting notevox");

    let mut settings = Settings::new()?;
    if let Some(bin) = cli.whisper_bin {
        settings.whisper_bin = bin;
    }
    if let Some(model) = cli.model {
        settings.model = model;
    }
    tracing::debug!(?settings, "effective settings");

    let vault_root = match cli.vault {
        Some(dir) => dir,
        None => cli
            .note
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let vault = FsVault::open(&vault_root, Some(&cli.note))
        .with_context(|| format!("failed to open vault at {}", vault_root.display()))?;

    let status = StatusReporter::new(Arc::new(TermStatus::default()), &settings);
    let orchestrator = Orchestrator::new(
        Arc::new(vault),
        Arc::new(StderrNotifier),
        Arc::new(WhisperRunner::from_settings(&settings)),
        status,
    );

    let outcome = orchestrator.run(cli.language.into()).await?;
    match outcome {
        RunOutcome::NoAudio => tracing::info!("no audio embeds found"),
        RunOutcome::Completed {
            transcribed,
            failed,
            skipped,
        } => tracing::info!(transcribed, failed, skipped, "run complete"),
    }

    Ok(())
}
