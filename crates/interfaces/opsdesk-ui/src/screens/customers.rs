use eframe::egui;
use egui_extras::{Column, TableBuilder};

use opsdesk_app_core::viewmodel::{customer_editor_vm, customer_list_vm};
use opsdesk_app_core::{AppCommand, AppKernel, AppState};

use crate::components::forms;
use crate::theme::COL_TEXT_DIM;
use crate::utils::{action_button, section_label, ButtonKind};

pub fn draw(ui: &mut egui::Ui, kernel: &mut AppKernel, snapshot: &AppState) {
    let vm = customer_list_vm(snapshot);

    ui.horizontal(|ui| {
        ui.heading("Customers");
        if let Some(company) = &vm.company_name {
            ui.label(egui::RichText::new(format!("· {company}")).color(COL_TEXT_DIM));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_company = vm.company_name.is_some();
            if action_button(ui, "NEW", ButtonKind::Primary, has_company).clicked() {
                kernel.dispatch(AppCommand::StartNewCustomer);
            }
            if action_button(ui, "REFRESH", ButtonKind::Outline, has_company && !vm.loading)
                .clicked()
            {
                kernel.dispatch(AppCommand::RefreshCustomers);
            }
        });
    });
    ui.separator();

    if vm.company_name.is_none() {
        ui.label(
            egui::RichText::new("Select a company on the Companies screen first.")
                .color(COL_TEXT_DIM),
        );
        return;
    }

    if let Some(editor) = customer_editor_vm(snapshot) {
        draw_editor(ui, kernel, &editor);
        ui.separator();
    }

    if vm.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading customers...").color(COL_TEXT_DIM));
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
        .column(Column::auto().at_least(150.0))
        .header(20.0, |mut header| {
            for title in ["Name", "Email", "Phone", ""] {
                header.col(|ui| {
                    section_label(ui, title);
                });
            }
        })
        .body(|mut body| {
            for row_vm in &vm.rows {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&row_vm.name);
                    });
                    row.col(|ui| {
                        ui.monospace(&row_vm.email);
                    });
                    row.col(|ui| {
                        ui.label(&row_vm.phone);
                    });
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                kernel.dispatch(AppCommand::EditCustomer(row_vm.id.clone()));
                            }
                            if ui.small_button("Delete").clicked() {
                                kernel.dispatch(AppCommand::DeleteCustomer(row_vm.id.clone()));
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
    editor: &opsdesk_app_core::viewmodel::CustomerEditorVm,
) {
    section_label(
        ui,
        if editor.is_new {
            "NEW CUSTOMER"
        } else {
            "EDIT CUSTOMER"
        },
    );

    kernel.store.with_customer_draft_mut(|draft| {
        forms::text_field(ui, "NAME", &mut draft.name, "Customer name");
        forms::error_label(ui, &editor.name_error);
        forms::text_field(ui, "EMAIL", &mut draft.email, "billing@customer.com");
        forms::error_label(ui, &editor.email_error);
        forms::text_field(ui, "PHONE", &mut draft.phone, "+55 11 0000-0000");
    });

    ui.horizontal(|ui| {
        if action_button(ui, "SAVE", ButtonKind::Primary, editor.can_save).clicked() {
            kernel.dispatch(AppCommand::SaveCustomerDraft);
        }
        if action_button(ui, "CANCEL", ButtonKind::Outline, true).clicked() {
            kernel.dispatch(AppCommand::CancelCustomerDraft);
        }
    });
}
