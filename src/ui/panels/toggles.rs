// KramerPrefs - ui/panels/toggles.rs
//
// The four notification toggles.

use crate::core::controller::PanelController;
use crate::core::message::PanelMessage;
use crate::core::model::PreferenceKey;

/// Render one checkbox per preference. A flip is reported as
/// `ToggleChanged`; the controller applies it optimistically.
pub fn render(ui: &mut egui::Ui, controller: &PanelController, outbox: &mut Vec<PanelMessage>) {
    ui.heading("Notifications");
    ui.separator();

    let prefs = controller.preferences();
    for &key in PreferenceKey::all() {
        let mut checked = prefs.get(key);
        if ui.checkbox(&mut checked, key.label()).changed() {
            outbox.push(PanelMessage::ToggleChanged {
                key,
                value: checked,
            });
        }
    }
}
