use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Slate palette with an indigo accent.
pub const COL_BG: Color32 = Color32::from_rgb(15, 17, 23);
pub const COL_BG_PANEL: Color32 = Color32::from_rgb(22, 25, 34);
pub const COL_BORDER: Color32 = Color32::from_rgb(45, 50, 65);
pub const COL_TEXT: Color32 = Color32::from_rgb(226, 230, 240);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(140, 148, 166);
pub const COL_ACCENT: Color32 = Color32::from_rgb(129, 140, 248);
pub const COL_WARN: Color32 = Color32::from_rgb(251, 191, 36);
pub const COL_DANGER: Color32 = Color32::from_rgb(244, 63, 94);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(52, 211, 153);
pub const COL_INFO: Color32 = Color32::from_rgb(96, 165, 250);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG_PANEL;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_PANEL;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.12);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    ctx.set_style(style);
}

pub const COL_ERROR: Color32 = COL_DANGER;
