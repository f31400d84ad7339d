//! Host surface for Notevox.
//!
//! The hosting application — note access, link resolution, notifications,
//! the status bar — is modeled as a set of injected interfaces so the
//! orchestrator never touches a concrete host. [`FsVault`] is the
//! filesystem-backed implementation used by the CLI.

pub mod fs_vault;
pub mod host;

pub use fs_vault::FsVault;
pub use host::{NoteHost, NoteRef, Notifier, StatusSink};
