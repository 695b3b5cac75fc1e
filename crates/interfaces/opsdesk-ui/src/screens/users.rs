use eframe::egui;
use egui_extras::{Column, TableBuilder};

use opsdesk_app_core::viewmodel::user_list_vm;
use opsdesk_app_core::{AppCommand, AppKernel, AppState};

use crate::theme::COL_TEXT_DIM;
use crate::utils::{action_button, section_label, ButtonKind};

pub fn draw(ui: &mut egui::Ui, kernel: &mut AppKernel, snapshot: &AppState) {
    let vm = user_list_vm(snapshot);

    ui.horizontal(|ui| {
        ui.heading("Users");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if action_button(ui, "REFRESH", ButtonKind::Outline, !vm.loading).clicked() {
                kernel.dispatch(AppCommand::RefreshUsers);
            }
        });
    });
    ui.separator();

    if vm.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading users...").color(COL_TEXT_DIM));
        });
        return;
    }
    if let Some(empty) = vm.empty_message {
        ui.label(egui::RichText::new(empty).color(COL_TEXT_DIM));
        return;
    }
    if let Some(hint) = vm.idle_hint {
        ui.label(egui::RichText::new(hint).color(COL_TEXT_DIM));
        return;
    }
    if vm.rows.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(90.0))
        .header(20.0, |mut header| {
            for title in ["Email", "Name", "Role", "Status"] {
                header.col(|ui| {
                    section_label(ui, title);
                });
            }
        })
        .body(|mut body| {
            for row_vm in &vm.rows {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(&row_vm.email);
                    });
                    row.col(|ui| {
                        ui.label(&row_vm.display_name);
                    });
                    row.col(|ui| {
                        ui.label(&row_vm.role);
                    });
                    row.col(|ui| {
                        ui.label(row_vm.status_label);
                    });
                });
            }
        });
}
