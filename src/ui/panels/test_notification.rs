// KramerPrefs - ui/panels/test_notification.rs

use crate::core::controller::PanelController;
use crate::core::message::PanelMessage;

/// Render the test-notification trigger. Disabled, with a busy label, while
/// a request is in flight.
pub fn render(ui: &mut egui::Ui, controller: &PanelController, outbox: &mut Vec<PanelMessage>) {
    ui.heading("Test");
    ui.separator();
    ui.horizontal(|ui| {
        let button = egui::Button::new(controller.test_label());
        if ui.add_enabled(controller.test_enabled(), button).clicked() {
            outbox.push(PanelMessage::TestNotificationRequested);
        }
        if !controller.test_enabled() {
            ui.spinner();
        }
    });
}
