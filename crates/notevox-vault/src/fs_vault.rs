use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use notevox_foundation::VaultError;

use crate::host::{NoteHost, NoteRef};

/// A vault rooted at a directory, with one designated active note.
///
/// Link resolution approximates the hosting application's shortest-path
/// rules: a name carrying a path separator is resolved against the vault
/// root; a bare file name is looked up first in the note's own directory,
/// then by a deterministic sorted sweep of the vault with case-insensitive
/// name comparison.
#[derive(Debug)]
pub struct FsVault {
    root: PathBuf,
    active: Option<NoteRef>,
}

impl FsVault {
    /// Open a vault. `note` is the active note, given relative to `root` or
    /// as an absolute path inside it.
    pub fn open(root: impl Into<PathBuf>, note: Option<&Path>) -> Result<Self, VaultError> {
        let root: PathBuf = root.into();
        if !root.is_dir() {
            return Err(VaultError::InvalidRoot { path: root });
        }

        let active = match note {
            Some(p) => {
                let rel = p.strip_prefix(&root).unwrap_or(p).to_path_buf();
                let abs = root.join(&rel);
                if !abs.is_file() {
                    return Err(VaultError::NoteNotFound { path: abs });
                }
                Some(NoteRef { path: rel })
            }
            None => None,
        };

        Ok(Self { root, active })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn abs(&self, note: &NoteRef) -> PathBuf {
        self.root.join(&note.path)
    }
}

impl NoteHost for FsVault {
    fn active_note(&self) -> Option<NoteRef> {
        self.active.clone()
    }

    fn read_note(&self, note: &NoteRef) -> Result<String, VaultError> {
        let path = self.abs(note);
        std::fs::read_to_string(&path).map_err(|source| VaultError::Io { path, source })
    }

    fn resolve_link(&self, file_name: &str, context: &NoteRef) -> Option<PathBuf> {
        // A name with a path component is taken as vault-relative.
        if file_name.contains('/') || file_name.contains('\\') {
            let candidate = self.root.join(file_name);
            return candidate.is_file().then_some(candidate);
        }

        // Bare names prefer the note's own directory.
        let note_dir = self
            .abs(context)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        let sibling = note_dir.join(file_name);
        if sibling.is_file() {
            return Some(sibling);
        }

        // Otherwise the first case-insensitive name match in a sorted sweep
        // of the vault wins.
        let wanted = file_name.to_lowercase();
        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if entry.file_name().to_string_lossy().to_lowercase() == wanted {
                debug!("resolved link {} -> {}", file_name, entry.path().display());
                return Some(entry.path().to_path_buf());
            }
        }

        debug!("link did not resolve: {}", file_name);
        None
    }

    fn persist(&self, note: &NoteRef, content: &str) -> Result<(), VaultError> {
        let path = self.abs(note);
        std::fs::write(&path, content).map_err(|source| VaultError::Io { path, source })
    }
}
