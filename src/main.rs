// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Livelay - livestream viewer with positioned overlays
//!
//! Plays HLS and progressive video streams and lets the user place text and
//! color overlays on top of them. Overlay configurations are stored by a
//! companion REST service.

mod api;
mod app;
mod io;
mod models;
mod playback;
mod render;
mod state;
mod tasks;
mod ui;
mod util;
#[cfg(target_arch = "wasm32")]
mod web;

use app::LivestreamApp;
use io::settings::Settings;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::load()?;
    log::info!("Starting with API at {}", settings.api_base_url);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Livestream Player"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Livestream Player",
        options,
        Box::new(|_cc| Ok(Box::new(LivestreamApp::new(settings)?))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Redirect log output to the browser console
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let settings = match Settings::load() {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Invalid settings, using defaults: {:#}", e);
                Settings::default()
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                web::CANVAS_ID,
                web_options,
                Box::new(|_cc| Ok(Box::new(LivestreamApp::new(settings)?))),
            )
            .await;

        if let Err(e) = result {
            log::error!("Failed to start: {:?}", e);
        }
    });
}
