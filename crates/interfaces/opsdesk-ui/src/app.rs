use std::time::Duration;

use eframe::egui;

use opsdesk_app_core::debounce::Debounce;
use opsdesk_app_core::viewmodel::{nav_vm, toast_vm};
use opsdesk_app_core::{AppCommand, AppKernel, BootState, Route, ToastSurface};
use opsdesk_config::VALIDATION_DEBOUNCE_MS;

use crate::components::toast;
use crate::screens::{billing, companies, customers, settings, signin, users};
use crate::theme::{COL_DANGER, COL_TEXT_DIM};
use crate::utils::section_label;

/// Frame-local UI state that never belongs in the application store.
pub struct SignInUiState {
    pub email_debounce: Debounce,
    pub email_touched: bool,
}

pub struct OpsDeskApp {
    kernel: AppKernel,
    signin_ui: SignInUiState,
}

impl OpsDeskApp {
    pub fn new(kernel: AppKernel) -> Self {
        Self {
            kernel,
            signin_ui: SignInUiState {
                email_debounce: Debounce::new(VALIDATION_DEBOUNCE_MS),
                email_touched: false,
            },
        }
    }
}

impl eframe::App for OpsDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.kernel.tick();

        if let Some(route) = self.kernel.store.take_pending_navigation() {
            self.kernel.dispatch(AppCommand::Navigate(route));
        }

        let snapshot = self.kernel.store.state();

        match &snapshot.boot {
            BootState::Loading => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                });
                ctx.request_repaint_after(Duration::from_millis(100));
                return;
            }
            BootState::Failed(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new(format!("Startup failed: {message}"))
                                .color(COL_DANGER),
                        );
                    });
                });
                return;
            }
            BootState::Ready => {}
        }

        if snapshot.session.is_signed_in() {
            let nav = nav_vm(&snapshot);
            egui::TopBottomPanel::top("nav").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    section_label(ui, "OPSDESK");
                    ui.separator();
                    for route in &nav.routes {
                        let selected = *route == nav.current;
                        if ui.selectable_label(selected, route.label()).clicked() && !selected {
                            self.kernel.dispatch(AppCommand::Navigate(*route));
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Sign out").clicked() {
                            self.kernel.dispatch(AppCommand::SignOut);
                        }
                        if let Some(operator) = &nav.operator_label {
                            ui.label(egui::RichText::new(operator).color(COL_TEXT_DIM));
                        }
                    });
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match snapshot.route {
            Route::SignIn => signin::draw(ui, &mut self.kernel, &snapshot, &mut self.signin_ui),
            Route::Companies => companies::draw(ui, &mut self.kernel, &snapshot),
            Route::Customers => customers::draw(ui, &mut self.kernel, &snapshot),
            Route::Users => users::draw(ui, &mut self.kernel, &snapshot),
            Route::Billing => billing::draw(ui, &mut self.kernel, &snapshot),
            Route::Settings => settings::draw(ui, &mut self.kernel, &snapshot),
        });

        if let Some(vm) = toast_vm(&snapshot.toast) {
            if toast::overlay(ctx, "global-toast", &vm) {
                self.kernel
                    .dispatch(AppCommand::DismissToast(ToastSurface::Global));
            }
        }

        // Countdown-bearing state needs frames even without input.
        if snapshot.toast.is_visible
            || snapshot.auth_toast.is_visible
            || snapshot.redirect.is_redirecting
            || snapshot.signing_in
        {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
