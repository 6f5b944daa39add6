#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod alert;
mod app;
mod config;
mod style;
mod views;

use std::sync::Arc;

use app::InventoryApp;
use config::Config;
use eframe::egui;
use egui::IconData;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const APP_ID: &str = "Merbabu";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,merbabu=debug,merbabu_core=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn load_icon() -> Arc<IconData> {
    let icon_bytes = include_bytes!("../assets/merbabu_256.png");

    match image::load_from_memory(icon_bytes) {
        Ok(image) => {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            Arc::new(IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(err) => {
            warn!(error = %err, "failed to decode application icon, using generated one");
            Arc::new(create_default_icon())
        }
    }
}

fn create_default_icon() -> IconData {
    let size: u32 = 64;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let border = x < 6 || y < 6 || x >= size - 6 || y >= size - 6;
            let pixel = if border { [50, 50, 150, 255] } else { [50, 150, 50, 255] };
            rgba.extend_from_slice(&pixel);
        }
    }
    IconData {
        rgba,
        width: size,
        height: size,
    }
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    info!("Merbabu v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    let theme = config.resolved_theme();
    debug!(strict = config.strict, theme = ?config.theme, "configuration resolved");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(theme.window_size)
        .with_title(&theme.window_title)
        .with_icon(load_icon());

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| Box::new(InventoryApp::new(cc, &config))),
    )
}
