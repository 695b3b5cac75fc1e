use eframe::egui;
use egui_extras::{Column, TableBuilder};

use opsdesk_app_core::viewmodel::billing_vm;
use opsdesk_app_core::{AppCommand, AppKernel, AppState};

use crate::components::card;
use crate::theme::COL_TEXT_DIM;
use crate::utils::{action_button, section_label, ButtonKind};

pub fn draw(ui: &mut egui::Ui, kernel: &mut AppKernel, snapshot: &AppState) {
    let vm = billing_vm(snapshot);

    ui.horizontal(|ui| {
        ui.heading("Billing");
        if let Some(company) = &vm.company_name {
            ui.label(egui::RichText::new(format!("· {company}")).color(COL_TEXT_DIM));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_company = vm.company_name.is_some();
            if action_button(ui, "REFRESH", ButtonKind::Outline, has_company && !vm.loading)
                .clicked()
            {
                kernel.dispatch(AppCommand::RefreshInvoices);
            }
        });
    });
    ui.separator();

    ui.horizontal_top(|ui| {
        card::payment_card(ui, &vm.card_holder);
        ui.add_space(16.0);
        ui.vertical(|ui| {
            section_label(ui, "INVOICES");

            if vm.company_name.is_none() {
                ui.label(
                    egui::RichText::new("Select a company to see its invoices.")
                        .color(COL_TEXT_DIM),
                );
                return;
            }
            if vm.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Loading invoices...").color(COL_TEXT_DIM));
                });
                return;
            }
            if let Some(empty) = vm.empty_message {
                ui.label(egui::RichText::new(empty).color(COL_TEXT_DIM));
                return;
            }
            if vm.rows.is_empty() {
                return;
            }

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(110.0))
                .column(Column::auto().at_least(110.0))
                .column(Column::auto().at_least(90.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    for title in ["Number", "Amount", "Status", "Issued"] {
                        header.col(|ui| {
                            section_label(ui, title);
                        });
                    }
                })
                .body(|mut body| {
                    for row_vm in &vm.rows {
                        body.row(24.0, |mut row| {
                            row.col(|ui| {
                                ui.monospace(&row_vm.number);
                            });
                            row.col(|ui| {
                                ui.monospace(&row_vm.amount);
                            });
                            row.col(|ui| {
                                ui.label(&row_vm.status);
                            });
                            row.col(|ui| {
                                ui.label(&row_vm.issued);
                            });
                        });
                    }
                });
        });
    });
}
