mod app;
mod components;
mod screens;
mod theme;
mod utils;

use opsdesk_app_core::{AppCommand, AppKernel, ServiceSet};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("OpsDesk"),
        ..Default::default()
    };

    eframe::run_native(
        "OpsDesk",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let mut kernel = AppKernel::new(ServiceSet::from_env());
            kernel.dispatch(AppCommand::LoadInitialState);

            Ok(Box::new(app::OpsDeskApp::new(kernel)))
        }),
    )
}
