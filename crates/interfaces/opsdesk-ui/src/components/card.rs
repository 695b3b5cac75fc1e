use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use crate::theme::{COL_ACCENT, COL_BORDER, COL_TEXT, COL_TEXT_DIM};

/// Decorative payment-card illustration for the billing screen. Purely
/// painted; carries no real card data.
pub fn payment_card(ui: &mut egui::Ui, holder: &str) {
    let size = Vec2::new(300.0, 180.0);
    let (rect, _resp) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 12, Color32::from_rgb(30, 34, 48));
    painter.rect_stroke(
        rect,
        12,
        Stroke::new(1.0, COL_BORDER),
        egui::StrokeKind::Inside,
    );

    // Chip
    let chip = Rect::from_min_size(rect.min + Vec2::new(20.0, 48.0), Vec2::new(38.0, 28.0));
    painter.rect_filled(chip, 4, COL_ACCENT.linear_multiply(0.6));

    // Masked number
    painter.text(
        Pos2::new(rect.min.x + 20.0, rect.min.y + 104.0),
        egui::Align2::LEFT_TOP,
        "••••  ••••  ••••  4242",
        egui::FontId::monospace(16.0),
        COL_TEXT,
    );

    painter.text(
        Pos2::new(rect.min.x + 20.0, rect.max.y - 36.0),
        egui::Align2::LEFT_TOP,
        holder.to_uppercase(),
        egui::FontId::proportional(11.0),
        COL_TEXT_DIM,
    );
    painter.text(
        Pos2::new(rect.max.x - 20.0, rect.max.y - 36.0),
        egui::Align2::RIGHT_TOP,
        "••/••",
        egui::FontId::monospace(11.0),
        COL_TEXT_DIM,
    );
}
