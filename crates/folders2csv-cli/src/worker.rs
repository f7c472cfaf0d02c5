use folders2csv_core::{Backend, Outcome, ProgressReporter};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use tracing::error;

/// A scan running on its own thread. Status lines are queued for the caller
/// so the terminal is only touched from the main thread.
pub struct ScanJob {
    handle: JoinHandle<Outcome>,
    events: Receiver<String>,
}

struct ChannelReporter {
    sender: Mutex<Sender<String>>,
}

impl ProgressReporter for ChannelReporter {
    fn on_status(&self, message: &str) {
        if let Ok(sender) = self.sender.lock() {
            // The receiver only hangs up once the job is being torn down.
            let _ = sender.send(message.to_string());
        }
    }
}

pub fn spawn_scan(backend: Backend, selected: Vec<String>, csv_path: String) -> io::Result<ScanJob> {
    let (sender, events) = mpsc::channel();
    let handle = thread::Builder::new()
        .name("folders2csv-scan".to_string())
        .spawn(move || {
            let reporter = ChannelReporter {
                sender: Mutex::new(sender),
            };
            backend.process_drives_to_csv(&selected, &csv_path, &reporter)
        })?;

    Ok(ScanJob { handle, events })
}

impl ScanJob {
    /// Forward status lines to `reporter` until the scan finishes.
    pub fn wait(self, reporter: &dyn ProgressReporter) -> Outcome {
        for message in self.events.iter() {
            reporter.on_status(&message);
        }

        match self.handle.join() {
            Ok(outcome) => outcome,
            Err(_) => {
                error!("Scan worker panicked");
                Outcome::failed("Error processing drives: scan worker panicked")
            }
        }
    }
}
