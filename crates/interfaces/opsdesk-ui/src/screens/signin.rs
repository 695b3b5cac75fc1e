use eframe::egui;

use opsdesk_app_core::viewmodel::{sign_in_vm, toast_vm};
use opsdesk_app_core::{AppCommand, AppKernel, AppState, ToastSurface};

use crate::app::SignInUiState;
use crate::components::{forms, toast};
use crate::theme::{COL_ACCENT, COL_TEXT_DIM};
use crate::utils::{action_button, section_label, ButtonKind};

pub fn draw(
    ui: &mut egui::Ui,
    kernel: &mut AppKernel,
    snapshot: &AppState,
    ui_state: &mut SignInUiState,
) {
    // Validation waits for the field to go quiet; submit gating does not.
    let show_validation = ui_state.email_touched && ui_state.email_debounce.settled();
    let vm = sign_in_vm(snapshot, show_validation);

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("Sign in to OpsDesk");
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Operations console").color(COL_TEXT_DIM));
        ui.add_space(16.0);

        ui.scope(|ui| {
            ui.set_max_width(360.0);

            if let Some(banner_vm) = toast_vm(&snapshot.auth_toast) {
                if toast::banner(ui, &banner_vm) {
                    kernel.dispatch(AppCommand::DismissToast(ToastSurface::Auth));
                }
                ui.add_space(8.0);
            }

            if let Some(redirect) = &vm.redirect {
                redirect_banner(ui, kernel, redirect);
                return;
            }

            let email_changed = kernel
                .store
                .with_signin_mut(|draft| forms::text_field(ui, "EMAIL", &mut draft.email, "you@company.com"));
            if email_changed {
                ui_state.email_touched = true;
                ui_state.email_debounce.touch();
            }
            forms::error_label(ui, &vm.email_error);

            kernel
                .store
                .with_signin_mut(|draft| forms::password_field(ui, "PASSWORD", &mut draft.password));
            forms::error_label(ui, &vm.password_error);

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if action_button(ui, "SIGN IN", ButtonKind::Primary, vm.can_submit).clicked() {
                    kernel.dispatch(AppCommand::SignIn);
                }
                if vm.busy {
                    ui.spinner();
                    ui.label(egui::RichText::new("Signing in...").color(COL_TEXT_DIM));
                }
            });
        });
    });
}

fn redirect_banner(
    ui: &mut egui::Ui,
    kernel: &mut AppKernel,
    redirect: &opsdesk_app_core::viewmodel::RedirectVm,
) {
    section_label(ui, "SIGNED IN");
    ui.label(
        egui::RichText::new(format!(
            "Taking you to {} in {}s...",
            redirect.destination_label, redirect.seconds
        ))
        .color(COL_ACCENT),
    );
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if action_button(ui, "GO NOW", ButtonKind::Primary, true).clicked() {
            kernel.dispatch(AppCommand::RedirectNow);
        }
        if action_button(ui, "STAY HERE", ButtonKind::Outline, true).clicked() {
            kernel.dispatch(AppCommand::CancelRedirect);
        }
    });
}
