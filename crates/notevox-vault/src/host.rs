use std::path::PathBuf;

use notevox_foundation::VaultError;

/// Identity of a note within a vault, as a vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    pub path: PathBuf,
}

/// Access to the active note and its vault.
pub trait NoteHost: Send + Sync {
    /// The note a command run operates on, if one is open and saved.
    fn active_note(&self) -> Option<NoteRef>;

    /// Full text of the note.
    fn read_note(&self, note: &NoteRef) -> Result<String, VaultError>;

    /// Resolve an embedded file name to an absolute path, or `None` when the
    /// link does not point at a file in the vault. Resolution failure is a
    /// per-item condition, never a run failure.
    fn resolve_link(&self, file_name: &str, context: &NoteRef) -> Option<PathBuf>;

    /// Write the full buffer back to the note's backing file.
    fn persist(&self, note: &NoteRef, content: &str) -> Result<(), VaultError>;
}

/// Transient user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Single-line status display, persistent until cleared.
pub trait StatusSink: Send + Sync {
    fn set_status(&self, text: &str);
    fn clear_status(&self);
}
