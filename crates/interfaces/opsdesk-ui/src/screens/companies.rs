use eframe::egui;
use egui_extras::{Column, TableBuilder};

use opsdesk_app_core::viewmodel::{company_editor_vm, company_list_vm};
use opsdesk_app_core::{AppCommand, AppKernel, AppState};

use crate::components::forms;
use crate::theme::COL_TEXT_DIM;
use crate::utils::{action_button, section_label, ButtonKind};

pub fn draw(ui: &mut egui::Ui, kernel: &mut AppKernel, snapshot: &AppState) {
    let vm = company_list_vm(snapshot);

    ui.horizontal(|ui| {
        ui.heading("Companies");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if action_button(ui, "NEW", ButtonKind::Primary, true).clicked() {
                kernel.dispatch(AppCommand::StartNewCompany);
            }
            if action_button(ui, "REFRESH", ButtonKind::Outline, !vm.loading).clicked() {
                kernel.dispatch(AppCommand::RefreshCompanies);
            }
        });
    });
    ui.separator();

    if let Some(editor) = company_editor_vm(snapshot) {
        draw_editor(ui, kernel, &editor);
        ui.separator();
    }

    if vm.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading companies...").color(COL_TEXT_DIM));
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
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(150.0))
        .header(20.0, |mut header| {
            for title in ["Name", "Trade name", "Tax ID", "Status", ""] {
                header.col(|ui| {
                    section_label(ui, title);
                });
            }
        })
        .body(|mut body| {
            for row_vm in &vm.rows {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        if ui
                            .selectable_label(row_vm.selected, &row_vm.name)
                            .clicked()
                        {
                            kernel.dispatch(AppCommand::SelectCompany(row_vm.id.clone()));
                        }
                    });
                    row.col(|ui| {
                        ui.label(&row_vm.trade_name);
                    });
                    row.col(|ui| {
                        ui.monospace(&row_vm.tax_id);
                    });
                    row.col(|ui| {
                        ui.label(row_vm.status_label);
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                kernel.dispatch(AppCommand::EditCompany(row_vm.id.clone()));
                            }
                            if ui.small_button("Delete").clicked() {
                                kernel.dispatch(AppCommand::DeleteCompany(row_vm.id.clone()));
                            }
                        });
                    });
                });
            }
        });
}

fn draw_editor(
    ui: &mut egui::Ui,
    kernel: &mut AppKernel,
    editor: &opsdesk_app_core::viewmodel::CompanyEditorVm,
) {
    section_label(
        ui,
        if editor.is_new {
            "NEW COMPANY"
        } else {
            "EDIT COMPANY"
        },
    );

    kernel.store.with_company_draft_mut(|draft| {
        forms::text_field(ui, "NAME", &mut draft.name, "Legal name");
        forms::error_label(ui, &editor.name_error);
        forms::text_field(ui, "TRADE NAME", &mut draft.trade_name, "Doing business as");
        forms::text_field(ui, "TAX ID", &mut draft.tax_id, "00.000.000/0000-00");
        ui.checkbox(&mut draft.active, "Active");
    });

    ui.horizontal(|ui| {
        if action_button(ui, "SAVE", ButtonKind::Primary, editor.can_save).clicked() {
            kernel.dispatch(AppCommand::SaveCompanyDraft);
        }
        if action_button(ui, "CANCEL", ButtonKind::Outline, true).clicked() {
            kernel.dispatch(AppCommand::CancelCompanyDraft);
        }
    });
}
