//! Control buttons, live status labels and the mission timer.

use std::time::Instant;

use egui::{RichText, Ui};
use egui_phosphor::regular::{BROOM, PLAY, ROCKET_LAUNCH, STOP, TIMER};

use super::panel_trait::{Panel, PanelState};
use crate::station::GroundStation;

/// Launch / Start / Stop / Clear Log buttons.
#[derive(Default)]
pub struct ControlsPanel {
    state: PanelState,
}

impl Panel for ControlsPanel {
    fn title(&self) -> &'static str {
        "Controls"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, station: &mut GroundStation, now: Instant) {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{ROCKET_LAUNCH} Launch Rocket"))
                .on_hover_text("Draw the rocket and start the mission timer")
                .clicked()
            {
                station.launch(now);
            }
            ui.add_space(10.0);
            if ui
                .add_enabled(
                    !(station.is_receiving() && station.tick_pending()),
                    egui::Button::new(format!("{PLAY} Start Receiving")),
                )
                .clicked()
            {
                station.start_receiving(now);
            }
            ui.add_space(10.0);
            if ui.button(format!("{STOP} Stop Receiving")).clicked() {
                station.stop_receiving(now);
            }
            ui.add_space(10.0);
            if ui.button(format!("{BROOM} Clear Log")).clicked() {
                station.clear_log();
            }
        });
    }
}

/// Parachute status and GPS coordinates.
#[derive(Default)]
pub struct StatusPanel {
    state: PanelState,
}

impl Panel for StatusPanel {
    fn title(&self) -> &'static str {
        "Status"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, station: &mut GroundStation, _now: Instant) {
        ui.label(station.parachute().label());
        ui.label(station.gps().label());
    }
}

/// Large `HH:MM:SS` mission timer.
#[derive(Default)]
pub struct TimerPanel {
    state: PanelState,
}

impl Panel for TimerPanel {
    fn title(&self) -> &'static str {
        "Timer"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(TIMER)
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, station: &mut GroundStation, _now: Instant) {
        ui.label(RichText::new(station.timer().label()).size(24.0).monospace());
    }
}
