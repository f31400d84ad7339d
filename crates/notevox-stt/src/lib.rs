//! Transcription backends for Notevox.
//!
//! This crate owns the transcription seam: the [`TranscriptionTool`] trait
//! one pipeline run drives once per audio file, and the production backend
//! that shells out to the Whisper CLI (see [`whisper`]).

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use notevox_foundation::Language;

pub mod whisper;

pub use whisper::WhisperRunner;

/// Errors from a transcription backend.
#[derive(Debug, Error)]
pub enum SttError {
    /// The tool could not be spawned at all.
    #[error("Failed to launch transcription tool: {0}")]
    Launch(String),

    /// The tool ran but exited with a non-zero status.
    #[error("Transcription tool exited with {status}")]
    NonZeroExit { status: std::process::ExitStatus },

    /// An I/O error occurred around the invocation.
    #[error("I/O error during transcription: {0}")]
    Io(#[from] std::io::Error),
}

/// A blocking-per-call transcription backend.
///
/// One call transcribes one audio file and returns the plain-text transcript
/// body. Implementations own their on-disk side effects; callers only see
/// the returned text. There is no timeout and no cancellation: a call blocks
/// until the backend is done.
#[async_trait]
pub trait TranscriptionTool: Send + Sync {
    async fn transcribe(&self, audio: &Path, language: Language) -> Result<String, SttError>;
}
