use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for one transcription command run.
#[derive(Error, Debug)]
pub enum AppError {
    /// No note is open, or the open note has never been saved to disk.
    /// Fatal to the whole run; no filesystem or subprocess work is attempted.
    #[error("No active note with a saved file")]
    NoActiveNote,

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors from the note vault.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Note not found: {}", path.display())]
    NoteNotFound { path: PathBuf },

    #[error("Vault root is not a directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
