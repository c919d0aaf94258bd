// KramerPrefs - ui/panels/notice.rs
//
// The shared message region (errors and the success banner) and the
// full-panel error view.

use crate::core::controller::{Notice, NoticeKind, PanelController};
use crate::core::message::PanelMessage;
use crate::ui::theme::Palette;

/// Render the message region if there is something to show.
pub fn render(ui: &mut egui::Ui, notice: Option<&Notice>, palette: &Palette) {
    let Some(notice) = notice else {
        return;
    };
    let colour = match notice.kind {
        NoticeKind::Error => palette.error,
        NoticeKind::Success => palette.success,
    };
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, colour))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(notice.display_text()).color(colour));
        });
    ui.add_space(8.0);
}

/// Error view: the message plus a Reload control that re-runs the initial load.
pub fn render_error_view(
    ui: &mut egui::Ui,
    controller: &PanelController,
    palette: &Palette,
    outbox: &mut Vec<PanelMessage>,
) {
    render(ui, controller.notice(), palette);
    if ui.button("Reload").clicked() {
        outbox.push(PanelMessage::Initialize);
    }
}
