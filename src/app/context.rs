// KramerPrefs - app/context.rs
//
// Explicit context object for the panel: owns the controller, the request
// worker and the host client, and is handed to every UI handler instead of
// any ambient global state.
//
// Flow per frame (driven by gui.rs):
//   1. `pump` drains backend outcomes into the controller and expires banners.
//   2. Panels render from `controller()` and collect `PanelMessage`s.
//   3. Each collected message goes through `dispatch`, which runs the
//      controller's central update and starts the resulting commands.

use crate::app::backend::PreferencesBackend;
use crate::app::host::{resolve_identity, HostEnvironment};
use crate::app::worker::RequestWorker;
use crate::core::controller::PanelController;
use crate::core::message::PanelMessage;
use crate::core::model::ThemeParams;
use std::sync::Arc;
use std::time::Instant;

pub struct PanelContext {
    controller: PanelController,
    worker: RequestWorker,
    host: Box<dyn HostEnvironment>,
    /// Token attached to outgoing requests; re-read from the host on every
    /// (re)initialisation.
    identity: String,
    started: bool,
}

impl PanelContext {
    pub fn new(host: Box<dyn HostEnvironment>, backend: Arc<dyn PreferencesBackend>) -> Self {
        Self {
            controller: PanelController::new(),
            worker: RequestWorker::new(backend),
            host,
            identity: String::new(),
            started: false,
        }
    }

    /// Startup handshake: ready signal, initial load, viewport expansion.
    /// Idempotent; only the first call has any effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.host.signal_ready();
        self.dispatch(PanelMessage::Initialize);
        self.host.request_expand();
    }

    /// Route one message through the controller and issue its commands.
    pub fn dispatch(&mut self, message: PanelMessage) {
        if matches!(message, PanelMessage::Initialize) {
            self.identity = resolve_identity(self.host.as_ref());
        }
        for command in self.controller.update(message) {
            tracing::debug!(command = command.name(), "Dispatching command");
            self.worker.dispatch(command, self.identity.clone());
        }
    }

    /// Apply finished backend calls and expire the success banner.
    /// Returns true if panel state changed.
    pub fn pump(&mut self, now: Instant) -> bool {
        let outcomes = self.worker.poll_outcomes();
        let mut changed = !outcomes.is_empty();
        for outcome in outcomes {
            self.dispatch(outcome);
        }
        changed |= self.controller.tick(now);
        changed
    }

    pub fn controller(&self) -> &PanelController {
        &self.controller
    }

    /// Number of backend calls still running.
    pub fn in_flight(&self) -> usize {
        self.worker.in_flight()
    }

    pub fn theme(&self) -> Option<ThemeParams> {
        self.host.theme_params()
    }
}
