use eframe::egui;

use crate::theme::COL_ERROR;
use crate::utils::section_label;

/// Labeled single-line field. Returns true when the value changed this
/// frame.
pub fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    section_label(ui, label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
    .changed()
}

pub fn password_field(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    section_label(ui, label);
    ui.add(
        egui::TextEdit::singleline(value)
            .password(true)
            .desired_width(f32::INFINITY),
    )
    .changed()
}

pub fn error_label(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).small().color(COL_ERROR));
    }
}
