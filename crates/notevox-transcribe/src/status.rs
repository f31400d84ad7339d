//! Status-line reporting for in-flight transcription runs.
//!
//! One [`RunningStatus`] is bound to one subprocess: a repeating ticker task
//! updates the line with elapsed time while the tool runs, and is cancelled
//! and joined before the terminal message goes out. The terminal message is
//! cleared after a fixed delay, longer on failure than on success.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use notevox_foundation::Settings;
use notevox_vault::StatusSink;

/// Factory for per-file status tickers.
pub struct StatusReporter {
    sink: Arc<dyn StatusSink>,
    tick: Duration,
    clear_after_success: Duration,
    clear_after_failure: Duration,
}

impl StatusReporter {
    pub fn new(sink: Arc<dyn StatusSink>, settings: &Settings) -> Self {
        Self {
            sink,
            tick: Duration::from_secs(settings.status_tick_secs),
            clear_after_success: Duration::from_secs(settings.clear_after_success_secs),
            clear_after_failure: Duration::from_secs(settings.clear_after_failure_secs),
        }
    }

    /// Start the ticker for one file. The returned handle must be finished
    /// before the next file begins.
    pub fn start(&self, file_label: &str) -> RunningStatus {
        let label = file_label.to_string();
        self.sink.set_status(&format!("Transcribing {}...", label));

        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
        let sink = Arc::clone(&self.sink);
        let tick = self.tick;
        let tick_secs = tick.as_secs();
        let task_label = label.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // The first tick of a tokio interval completes immediately;
            // consume it so the first update lands after one full period.
            interval.tick().await;
            let mut elapsed_secs = 0u64;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        elapsed_secs += tick_secs;
                        sink.set_status(&format!(
                            "Transcribing {}... ({}s elapsed)",
                            task_label, elapsed_secs
                        ));
                    }
                    _ = stop_rx.recv() => break,
                }
            }
        });

        RunningStatus {
            sink: Arc::clone(&self.sink),
            label,
            stop_tx,
            handle,
            clear_after_success: self.clear_after_success,
            clear_after_failure: self.clear_after_failure,
        }
    }
}

/// A live ticker for one subprocess.
pub struct RunningStatus {
    sink: Arc<dyn StatusSink>,
    label: String,
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
    clear_after_success: Duration,
    clear_after_failure: Duration,
}

impl RunningStatus {
    /// Cancel the ticker, write the terminal message, and schedule the
    /// delayed clear.
    pub async fn finish(self, success: bool) {
        let _ = self.stop_tx.send(()).await;
        let _ = self.handle.await;

        let (message, clear_after) = if success {
            (format!("Finished {}", self.label), self.clear_after_success)
        } else {
            (
                format!("Error transcribing {}", self.label),
                self.clear_after_failure,
            )
        };
        self.sink.set_status(&message);
        debug!("status ticker stopped for {}", self.label);

        let sink = self.sink;
        tokio::spawn(async move {
            tokio::time::sleep(clear_after).await;
            sink.clear_status();
        });
    }
}
