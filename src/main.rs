#![windows_subsystem = "windows"]

mod assets;
mod config;
mod economy;
mod format;
mod gui;
mod launcher;
mod layout;

use eframe::egui;
use gui::ClickerApp;

fn main() -> eframe::Result<()> {
    setup_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::MENU_SIZE)
            .with_resizable(true)
            .with_decorations(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        config::MENU_TITLE,
        options,
        Box::new(|cc| Box::new(ClickerApp::new(cc))),
    )
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}
