//! Terminal shims for the host notification and status surfaces.

use std::io::Write;
use std::sync::Mutex;

use notevox_vault::{Notifier, StatusSink};

/// Prints notices to stderr, one per line.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Maintains a single status line on stderr using carriage returns.
///
/// The previous line's width is remembered so shorter updates overwrite the
/// tail of longer ones.
#[derive(Default)]
pub struct TermStatus {
    width: Mutex<usize>,
}

impl StatusSink for TermStatus {
    fn set_status(&self, text: &str) {
        let mut width = self.width.lock().unwrap();
        let pad = width.saturating_sub(text.len());
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r{}{}", text, " ".repeat(pad));
        let _ = stderr.flush();
        *width = text.len();
    }

    fn clear_status(&self) {
        let mut width = self.width.lock().unwrap();
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r{}\r", " ".repeat(*width));
        let _ = stderr.flush();
        *width = 0;
    }
}
