use eframe::egui;

use opsdesk_app_core::{AppKernel, AppState};
use opsdesk_config::Endpoints;

use crate::theme::COL_TEXT_DIM;
use crate::utils::{action_button, section_label, ButtonKind};

pub fn draw(ui: &mut egui::Ui, kernel: &mut AppKernel, snapshot: &AppState) {
    ui.heading("Settings");
    ui.separator();

    section_label(ui, "PREFERENCES");
    let mut prefs = snapshot.prefs.clone();
    let mut changed = ui
        .checkbox(&mut prefs.remember_email, "Remember sign-in email")
        .changed();
    if prefs.remember_email {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Remembered:").color(COL_TEXT_DIM));
            changed |= ui.text_edit_singleline(&mut prefs.remembered_email).changed();
        });
    } else if !prefs.remembered_email.is_empty() {
        prefs.remembered_email.clear();
        changed = true;
    }
    if changed {
        kernel.set_prefs(prefs.clone());
    }
    ui.add_space(6.0);
    if action_button(ui, "SAVE PREFERENCES", ButtonKind::Primary, true).clicked() {
        kernel.save_prefs(prefs);
    }

    ui.add_space(16.0);
    section_label(ui, "BACKEND MODULES");
    ui.label(
        egui::RichText::new("Resolved from the environment at startup.").color(COL_TEXT_DIM),
    );
    let endpoints = Endpoints::from_env();
    egui::Grid::new("endpoints").num_columns(2).show(ui, |ui| {
        for (name, url) in [
            ("Auth", &endpoints.auth),
            ("Financial", &endpoints.financial),
            ("Billing", &endpoints.billing),
            ("Inventory", &endpoints.inventory),
            ("Users", &endpoints.users),
        ] {
            ui.label(name);
            ui.monospace(url);
            ui.end_row();
        }
    });
}
