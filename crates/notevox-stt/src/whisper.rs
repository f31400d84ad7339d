//! Whisper CLI backend.
//!
//! We invoke the `whisper` binary as a subprocess rather than linking an
//! inference engine. The CLI writes its outputs next to the audio file; this
//! module reads the `.txt` transcript back and sweeps the side files once the
//! child has exited, whether or not it succeeded.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

use notevox_foundation::{Language, Settings};

use crate::{SttError, TranscriptionTool};

/// Side files the whisper CLI writes next to the audio file.
pub const OUTPUT_EXTENSIONS: [&str; 5] = ["txt", "json", "vtt", "srt", "tsv"];

/// Transcribes audio files by shelling out to the whisper CLI.
#[derive(Debug, Clone)]
pub struct WhisperRunner {
    bin: String,
    model: String,
}

impl WhisperRunner {
    pub fn new(bin: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            model: model.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.whisper_bin.clone(), settings.model.clone())
    }

    /// Argument vector for one invocation:
    /// `<audio> --model <model> [--language <lang>] --output_dir <dir>`.
    /// The `--language` flag is omitted entirely when the selector is auto.
    fn args(&self, audio: &Path, language: Language, output_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![audio.as_os_str().to_os_string()];
        args.push("--model".into());
        args.push(self.model.clone().into());
        if let Some(lang) = language.flag() {
            args.push("--language".into());
            args.push(lang.into());
        }
        args.push("--output_dir".into());
        args.push(output_dir.as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl TranscriptionTool for WhisperRunner {
    async fn transcribe(&self, audio: &Path, language: Language) -> Result<String, SttError> {
        let output_dir = audio
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let stem = output_stem(audio);

        debug!("invoking {} on {}", self.bin, audio.display());
        let mut child = Command::new(&self.bin)
            .args(self.args(audio, language, &output_dir))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SttError::Launch(format!("{}: {}", self.bin, e)))?;

        // Stream the tool's stderr into the log while it runs.
        let stderr_task = child.stderr.take().map(|stderr| {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!(target: "whisper", "{}", line);
                }
            })
        });

        // No timeout and no cancellation: the contract is to block until the
        // tool exits.
        let status = child.wait().await;
        if let Some(task) = stderr_task {
            let _ = task.await;
        }

        let result = match status {
            Ok(status) if status.success() => read_transcript(&stem),
            Ok(status) => Err(SttError::NonZeroExit { status }),
            Err(e) => Err(SttError::Io(e)),
        };

        // Side files are disposable once the child has exited, success or not.
        cleanup_outputs(&stem);
        result
    }
}

/// Output path stem: the audio path with its extension removed.
pub fn output_stem(audio: &Path) -> PathBuf {
    audio.with_extension("")
}

/// Read the transcript body; a missing file is an empty transcript.
fn read_transcript(stem: &Path) -> Result<String, SttError> {
    let path = stem.with_extension("txt");
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(SttError::Io(e)),
    }
}

/// Delete every known side file at the stem. Failures are logged only.
pub fn cleanup_outputs(stem: &Path) {
    for ext in OUTPUT_EXTENSIONS {
        let path = stem.with_extension(ext);
        match std::fs::remove_file(&path) {
            Ok(()) => debug!("deleted whisper output file: {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "failed to delete whisper output file {}: {}",
                path.display(),
                e
            ),
        }
    }
}
