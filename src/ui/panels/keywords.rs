// KramerPrefs - ui/panels/keywords.rs
//
// Keyword filter management: input row with Add button, then the
// server-confirmed list with a Remove control per entry.

use crate::core::controller::{KeywordRows, PanelController};
use crate::core::message::PanelMessage;
use crate::ui::theme::{Palette, KEYWORD_INPUT_WIDTH};

pub fn render(
    ui: &mut egui::Ui,
    controller: &PanelController,
    palette: &Palette,
    outbox: &mut Vec<PanelMessage>,
) {
    ui.heading("Keywords");
    ui.separator();
    ui.label(
        egui::RichText::new("Get notified about any deal whose title contains one of these.")
            .small()
            .weak(),
    );
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let mut input = controller.keyword_input().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut input)
                .hint_text("e.g. rtx 4090")
                .desired_width(KEYWORD_INPUT_WIDTH),
        );
        // Input change must be applied before a same-frame add request.
        if response.changed() {
            outbox.push(PanelMessage::KeywordInputChanged(input));
        }

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(controller.add_enabled(), egui::Button::new("Add"))
            .clicked();
        if clicked || (submitted && controller.add_enabled()) {
            outbox.push(PanelMessage::AddKeywordRequested);
        }
    });

    ui.add_space(6.0);

    match controller.keyword_rows() {
        KeywordRows::Placeholder(text) => {
            ui.label(egui::RichText::new(text).italics().color(palette.hint));
        }
        KeywordRows::Entries(keywords) => {
            for keyword in keywords {
                ui.horizontal(|ui| {
                    ui.label(keyword.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Bound to this exact value at render time.
                        if ui.small_button("Remove").clicked() {
                            outbox.push(PanelMessage::RemoveKeywordRequested(keyword.clone()));
                        }
                    });
                });
            }
        }
    }
}
