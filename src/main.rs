//! NivasiSahay - Entry Point
//!
//! Registrera medborgarärenden med fotobevis.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)]

mod app;
mod db;
mod models;
mod ui;
mod utils;

use app::NivasiApp;
use eframe::egui;
use models::AppSettings;

fn main() -> eframe::Result<()> {
    // Initiera logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Startar NivasiSahay v{}", env!("CARGO_PKG_VERSION"));

    let app_settings = AppSettings::load();

    // Fönsterinställningar
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("NivasiSahay")
            .with_inner_size([app_settings.window_width, app_settings.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_app_id("nivasisahay"),
        ..Default::default()
    };

    eframe::run_native(
        "NivasiSahay",
        options,
        Box::new(move |cc| Ok(Box::new(NivasiApp::new(cc, app_settings)))),
    )
}
