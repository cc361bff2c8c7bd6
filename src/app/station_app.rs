//! Standalone application wrapper for the ground station.
//!
//! [`StationApp`] owns a [`GroundStation`] plus the panels that render it and
//! implements [`eframe::App`] so the console can run as a native window.

use std::time::Instant;

use eframe::egui;

use crate::config::{FeatureFlags, StationConfig};
use crate::error::ConfigError;
use crate::panels::{ChartsPanel, ControlsPanel, Panel, RocketPanel, StatusPanel, TimerPanel};
use crate::station::GroundStation;

/// Native ground-station window.
///
/// Each frame it:
///
/// 1. Polls the station so due ticks and timer refreshes run.
/// 2. Renders the menu bar and the panels top to bottom: rocket canvas,
///    controls, status labels, charts, timer.
/// 3. Requests the next repaint at the earliest pending deadline.
pub struct StationApp {
    /// Simulation state and loops.
    pub station: GroundStation,

    pub rocket_panel: RocketPanel,
    pub controls_panel: ControlsPanel,
    pub status_panel: StatusPanel,
    pub charts_panel: ChartsPanel,
    pub timer_panel: TimerPanel,

    pub features: FeatureFlags,
}

impl StationApp {
    pub fn new(config: StationConfig) -> Result<Self, ConfigError> {
        let features = config.features.clone();
        let charts_panel = ChartsPanel::with_pressure(features.pressure_chart);
        Ok(Self {
            station: GroundStation::new(config)?,
            rocket_panel: RocketPanel::default(),
            controls_panel: ControlsPanel::default(),
            status_panel: StatusPanel::default(),
            charts_panel,
            timer_panel: TimerPanel::default(),
            features,
        })
    }

    /// Panels that can be hidden from the View menu.
    pub(crate) fn toggleable_panels(&mut self) -> [&mut dyn Panel; 3] {
        [
            &mut self.rocket_panel,
            &mut self.charts_panel,
            &mut self.timer_panel,
        ]
    }

    fn render_body(&mut self, ui: &mut egui::Ui, now: Instant) {
        let station = &mut self.station;
        ui.vertical_centered(|ui| {
            if self.rocket_panel.state().visible {
                ui.add_space(20.0);
                self.rocket_panel.render_panel(ui, station, now);
            }
            ui.add_space(8.0);
            self.controls_panel.render_panel(ui, station, now);
            ui.add_space(4.0);
            self.status_panel.render_panel(ui, station, now);
        });
        if self.charts_panel.state().visible {
            ui.add_space(20.0);
            self.charts_panel.render_panel(ui, station, now);
        }
        if self.timer_panel.state().visible {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| self.timer_panel.render_panel(ui, station, now));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for StationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.station.poll(now);

        if self.features.menu_bar {
            self.render_menu_bar(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.render_body(ui, now));
        });

        // Button presses may have queued work for this instant.
        if self.station.poll(now) {
            ctx.request_repaint();
        }

        if let Some(deadline) = self.station.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
