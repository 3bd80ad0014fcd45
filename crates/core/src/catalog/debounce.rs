//! Input debouncing for the search box.
//!
//! Raw keystrokes go in one side; a value comes out the other only after the
//! input has been quiet for the full window. A newer submission supersedes
//! any pending one, so intermediate values never reach the pipeline.

use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

/// Sending half of a debounced channel.
#[derive(Clone)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> Debouncer<T> {
    /// Submit a value. Restarts the quiet-period timer; the previously
    /// pending value (if any) is discarded.
    pub fn submit(&self, value: T) {
        // Receiver gone means the session ended; nothing to debounce into.
        let _ = self.tx.send(value);
    }
}

/// Create a debounced channel with the given quiet window.
///
/// Spawns a background task that forwards only the latest value once no new
/// submission has arrived for `window`. Dropping the [`Debouncer`] flushes a
/// pending value and stops the task.
pub fn debounced<T: Send + 'static>(window: Duration) -> (Debouncer<T>, mpsc::UnboundedReceiver<T>) {
    let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

    tokio::spawn(async move {
        while let Some(mut pending) = in_rx.recv().await {
            loop {
                tokio::select! {
                    next = in_rx.recv() => match next {
                        Some(value) => pending = value,
                        None => {
                            let _ = out_tx.send(pending);
                            return;
                        }
                    },
                    _ = sleep(window) => {
                        let _ = out_tx.send(pending);
                        break;
                    }
                }
            }
        }
    });

    (Debouncer { tx: in_tx }, out_rx)
}
