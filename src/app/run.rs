//! Top-level entry point for running the ground station as a native window.

use eframe::egui;

use crate::config::StationConfig;
use crate::error::{IconError, StationError};

use super::StationApp;

/// Launch the ground station in a native window.
///
/// Validates `cfg`, opens a window of the configured size with the project
/// icon (when it can be rendered), and enters the eframe event loop. The call
/// blocks until the window is closed.
pub fn run_groundstation(cfg: StationConfig) -> Result<(), StationError> {
    let title = cfg.title.clone();
    let window_size = cfg.window_size;
    let app = StationApp::new(cfg)?;
    let effective = app.station.config();
    log::info!(
        "starting '{}' (tick {} ms, timer {} ms, seed {:?})",
        effective.title,
        effective.tick_period_ms,
        effective.timer_period_ms,
        effective.seed
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(title.clone())
        .with_inner_size(egui::vec2(window_size[0], window_size[1]));
    match load_app_icon_svg() {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(e) => log::warn!("window icon unavailable: {e}"),
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )?;
    log::info!("window closed");
    Ok(())
}

/// Render the project's `icon.svg` into an [`egui::IconData`].
fn load_app_icon_svg() -> Result<egui::IconData, IconError> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path)?;
    icon_from_svg(&data)
}

pub(crate) fn icon_from_svg(data: &[u8]) -> Result<egui::IconData, IconError> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(IconError::Empty)?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Ok(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
