//! The embed-scan-and-splice transcription pipeline.
//!
//! Matches are processed in reverse document order so the byte offsets
//! computed from the original buffer stay valid as transcripts are spliced
//! in: inserting after a later match never moves an earlier one.

use std::sync::Arc;

use tracing::{debug, error, info};

use notevox_foundation::{AppError, Language};
use notevox_scan::{splice_after, EmbedScanner};
use notevox_stt::TranscriptionTool;
use notevox_vault::{NoteHost, Notifier};

use crate::status::StatusReporter;

/// Result of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The note contained no audio embeds; nothing was touched.
    NoAudio,
    /// The run completed; the counts cover every match found.
    Completed {
        transcribed: usize,
        failed: usize,
        skipped: usize,
    },
}

/// Drives one transcription command over the active note.
pub struct Orchestrator {
    host: Arc<dyn NoteHost>,
    notifier: Arc<dyn Notifier>,
    tool: Arc<dyn TranscriptionTool>,
    status: StatusReporter,
    scanner: EmbedScanner,
}

impl Orchestrator {
    pub fn new(
        host: Arc<dyn NoteHost>,
        notifier: Arc<dyn Notifier>,
        tool: Arc<dyn TranscriptionTool>,
        status: StatusReporter,
    ) -> Self {
        Self {
            host,
            notifier,
            tool,
            status,
            scanner: EmbedScanner::new(),
        }
    }

    /// Run the pipeline: scan, transcribe each embed last-to-first, splice,
    /// persist once.
    ///
    /// Per-match failures are contained in the loop; only a missing active
    /// note aborts the whole run. The final persist happens whenever the
    /// loop completes, no matter how many matches failed or were skipped.
    pub async fn run(&self, language: Language) -> Result<RunOutcome, AppError> {
        let Some(note) = self.host.active_note() else {
            self.notifier.notify("Open and save the note first.");
            return Err(AppError::NoActiveNote);
        };

        let mut content = self.host.read_note(&note)?;
        let matches = self.scanner.scan(&content);
        if matches.is_empty() {
            self.notifier.notify("No audio embeds found in this note.");
            return Ok(RunOutcome::NoAudio);
        }

        self.notifier.notify(&format!(
            "Found {} audio file(s). Transcribing...",
            matches.len()
        ));

        let mut transcribed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for embed in matches.iter().rev() {
            let Some(audio_path) = self.host.resolve_link(&embed.file_name, &note) else {
                debug!("skipping unresolved embed: {}", embed.file_name);
                skipped += 1;
                continue;
            };

            let label = audio_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| embed.file_name.clone());

            self.notifier
                .notify(&format!("Transcribing {}...", embed.file_name));
            let running = self.status.start(&label);

            match self.tool.transcribe(&audio_path, language).await {
                Ok(transcript) => {
                    running.finish(true).await;
                    self.notifier.notify(&format!("Finished {}", embed.file_name));
                    let insertion = format!(
                        "\n\n**Transcript ({}):**\n{}\n",
                        language.label(),
                        transcript
                    );
                    splice_after(&mut content, embed, &insertion);
                    transcribed += 1;
                }
                Err(e) => {
                    running.finish(false).await;
                    error!("transcription failed for {}: {}", embed.file_name, e);
                    self.notifier
                        .notify(&format!("Error transcribing {}", embed.file_name));
                    failed += 1;
                }
            }
        }

        self.host.persist(&note, &content)?;
        self.notifier.notify("Transcription finished.");
        info!(transcribed, failed, skipped, "transcription run complete");

        Ok(RunOutcome::Completed {
            transcribed,
            failed,
            skipped,
        })
    }
}
