// KramerPrefs - app/worker.rs
//
// Runs backend calls off the UI thread.
//
// Architecture:
//   - `RequestWorker` lives on the UI thread; each dispatched command runs on
//     its own short-lived background thread.
//   - Outcomes come back as `PanelMessage`s over one mpsc channel that the UI
//     polls every frame.
//   - Requests may overlap freely. There is no cancellation: once issued a
//     call runs to completion or failure, and its outcome is always delivered
//     while the worker is alive.
//   - An `Arc<AtomicUsize>` counts calls in flight so the UI knows to keep
//     repainting.

use crate::app::backend::{self, PreferencesBackend};
use crate::core::message::{Command, PanelMessage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};

pub struct RequestWorker {
    backend: Arc<dyn PreferencesBackend>,
    tx: mpsc::Sender<PanelMessage>,
    rx: mpsc::Receiver<PanelMessage>,
    in_flight: Arc<AtomicUsize>,
}

impl RequestWorker {
    pub fn new(backend: Arc<dyn PreferencesBackend>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            tx,
            rx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Start `command` on a background thread.
    pub fn dispatch(&self, command: Command, identity: String) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let name = command.name();

        // The command is shared with the thread so a failed spawn can still
        // answer it.
        let pending = Arc::new(Mutex::new(Some(command)));
        let claimed = Arc::clone(&pending);

        in_flight.fetch_add(1, Ordering::SeqCst);
        let spawned = std::thread::Builder::new()
            .name(format!("request-{name}"))
            .spawn(move || {
                let command = claimed.lock().ok().and_then(|mut slot| slot.take());
                if let Some(command) = command {
                    let outcome = backend::execute(backend.as_ref(), command, &identity);
                    // Receiver dropped means the window closed; nothing to do.
                    let _ = tx.send(outcome);
                }
                // Decrement after sending: once the count reads zero every
                // outcome is already queued.
                in_flight.fetch_sub(1, Ordering::SeqCst);
            });

        if let Err(e) = spawned {
            tracing::error!(command = name, error = %e, "Failed to spawn request thread");
            let command = pending.lock().ok().and_then(|mut slot| slot.take());
            if let Some(command) = command {
                let _ = self.tx.send(backend::failure_outcome(command, e.to_string()));
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Poll for outcomes without blocking. Returns all pending messages in
    /// arrival order.
    pub fn poll_outcomes(&self) -> Vec<PanelMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Number of calls issued but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}
