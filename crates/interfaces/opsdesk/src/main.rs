#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = opsdesk_ui::run() {
        eprintln!("OpsDesk failed: {err}");
        std::process::exit(1);
    }
}
