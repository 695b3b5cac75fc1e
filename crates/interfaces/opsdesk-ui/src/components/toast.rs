use eframe::egui;

use opsdesk_app_core::viewmodel::ToastVm;

use crate::theme::{COL_BG_PANEL, COL_TEXT, COL_TEXT_DIM};
use crate::utils::severity_color;

/// Floating toast in the top-right corner. Returns true when the user
/// clicked dismiss.
pub fn overlay(ctx: &egui::Context, id: &str, vm: &ToastVm) -> bool {
    let mut dismissed = false;
    egui::Area::new(egui::Id::new(id))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let accent = severity_color(vm.severity);
            egui::Frame::new()
                .fill(COL_BG_PANEL)
                .stroke(egui::Stroke::new(1.0, accent))
                .inner_margin(egui::Margin::same(10))
                .corner_radius(4)
                .show(ui, |ui| {
                    ui.set_max_width(340.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&vm.message).color(COL_TEXT).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            if ui.small_button("✕").clicked() {
                                dismissed = true;
                            }
                        });
                    });
                    if let Some(details) = &vm.details {
                        ui.label(egui::RichText::new(details).small().color(COL_TEXT_DIM));
                    }
                    ui.horizontal(|ui| {
                        if let Some(code) = &vm.error_code {
                            ui.label(egui::RichText::new(code).small().color(accent));
                        }
                        if let Some(countdown) = vm.countdown {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Min),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(format!("{countdown}s"))
                                            .small()
                                            .color(COL_TEXT_DIM),
                                    );
                                },
                            );
                        }
                    });
                });
        });
    dismissed
}

/// Inline banner variant for surfaces that render inside a form, like the
/// sign-in screen.
pub fn banner(ui: &mut egui::Ui, vm: &ToastVm) -> bool {
    let mut dismissed = false;
    let accent = severity_color(vm.severity);
    egui::Frame::new()
        .fill(accent.linear_multiply(0.08))
        .stroke(egui::Stroke::new(1.0, accent))
        .inner_margin(egui::Margin::same(8))
        .corner_radius(4)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&vm.message).color(COL_TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.small_button("✕").clicked() {
                        dismissed = true;
                    }
                });
            });
            if let Some(details) = &vm.details {
                ui.label(egui::RichText::new(details).small().color(COL_TEXT_DIM));
            }
            if vm.error_code.is_some() || vm.countdown.is_some() {
                ui.horizontal(|ui| {
                    if let Some(code) = &vm.error_code {
                        ui.label(egui::RichText::new(code).small().color(accent));
                    }
                    if let Some(countdown) = vm.countdown {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(format!("{countdown}s"))
                                        .small()
                                        .color(COL_TEXT_DIM),
                                );
                            },
                        );
                    }
                });
            }
        });
    dismissed
}
