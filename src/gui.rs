// KramerPrefs - gui.rs
//
// Top-level eframe::App implementation and the desktop host environment.
// Pumps backend outcomes into the panel context, lays out the panels, then
// routes the messages they collected back through the controller.

use crate::app::backend::PreferencesBackend;
use crate::app::context::PanelContext;
use crate::app::host::{HostEnvironment, HostSettings};
use crate::core::controller::ViewState;
use crate::core::message::PanelMessage;
use crate::core::model::ThemeParams;
use crate::ui;
use crate::ui::theme::Palette;
use crate::util::constants::IN_FLIGHT_REPAINT_MS;
use std::sync::Arc;
use std::time::{Duration, Instant};

// =============================================================================
// Host environment bound to the eframe viewport
// =============================================================================

/// Host for the desktop build: identity and theme come from CLI/config, the
/// viewport is the eframe window.
pub struct ViewportHost {
    settings: HostSettings,
    ctx: egui::Context,
}

impl ViewportHost {
    pub fn new(settings: HostSettings, ctx: egui::Context) -> Self {
        Self { settings, ctx }
    }
}

impl HostEnvironment for ViewportHost {
    fn signal_ready(&self) {
        tracing::info!("Panel ready");
        self.ctx.request_repaint();
    }

    fn request_expand(&self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Maximized(true));
    }

    fn identity_token(&self) -> Option<String> {
        self.settings.identity_token.clone()
    }

    fn theme_params(&self) -> Option<ThemeParams> {
        self.settings.theme.clone()
    }
}

// =============================================================================
// App
// =============================================================================

/// The KramerPrefs application.
pub struct KramerPrefsApp {
    pub context: PanelContext,
    palette: Palette,
}

impl KramerPrefsApp {
    /// Build the app, apply the host theme and run the startup handshake.
    pub fn new(
        egui_ctx: &egui::Context,
        host: ViewportHost,
        backend: Arc<dyn PreferencesBackend>,
    ) -> Self {
        let mut context = PanelContext::new(Box::new(host), backend);
        let theme = context.theme();
        ui::theme::apply(egui_ctx, theme.as_ref());
        let palette = Palette::from_theme(theme.as_ref());
        context.start();
        Self { context, palette }
    }
}

impl eframe::App for KramerPrefsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.context.pump(Instant::now()) {
            ctx.request_repaint();
        }
        // Keep polling while calls are outstanding or a banner awaits expiry.
        if self.context.in_flight() > 0 || self.context.controller().banner_pending() {
            ctx.request_repaint_after(Duration::from_millis(IN_FLIGHT_REPAINT_MS));
        }

        let mut outbox: Vec<PanelMessage> = Vec::new();
        let controller = self.context.controller();
        let palette = self.palette;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Deal notification preferences");
            ui.add_space(4.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match controller.last_synced() {
                    Some(at) => ui.label(format!("Last synced {}", at.format("%H:%M:%S"))),
                    None => ui.label("Not synced yet"),
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let pending = self.context.in_flight();
                    if pending > 0 {
                        ui.label(format!("{pending} request(s) pending"));
                        ui.spinner();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match controller.view() {
                    ViewState::Loading => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading preferences...");
                        });
                    }
                    ViewState::Error => {
                        ui::panels::notice::render_error_view(ui, controller, &palette, &mut outbox);
                    }
                    ViewState::Ready => {
                        // Only the success banner can be present here.
                        ui::panels::notice::render(ui, controller.notice(), &palette);
                        ui::panels::toggles::render(ui, controller, &mut outbox);
                        ui.add_space(ui::theme::SECTION_SPACING);
                        ui::panels::keywords::render(ui, controller, &palette, &mut outbox);
                        ui.add_space(ui::theme::SECTION_SPACING);
                        ui::panels::test_notification::render(ui, controller, &mut outbox);
                    }
                });
        });

        for message in outbox {
            self.context.dispatch(message);
        }
    }
}
