//! Strip-charts for the recorded telemetry channels.
//!
//! Every chart is rebuilt from the complete history each frame; there is no
//! decimation or windowing.

use std::time::Instant;

use egui::Ui;
use egui_plot::{Line, Plot};

use super::panel_trait::{Panel, PanelState};
use crate::data::chart_look::ChartLook;
use crate::data::history::{Quantity, SampleHistory};
use crate::station::GroundStation;

pub struct ChartsPanel {
    state: PanelState,
    /// Show the pressure chart after the four standard charts.
    pub show_pressure: bool,
    pub chart_height: f32,
}

impl Default for ChartsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::default(),
            show_pressure: false,
            chart_height: 220.0,
        }
    }
}

impl ChartsPanel {
    pub fn with_pressure(show_pressure: bool) -> Self {
        Self {
            show_pressure,
            ..Default::default()
        }
    }

    /// Channels to draw, in display order.
    pub fn quantities(&self) -> Vec<Quantity> {
        let mut qs = Quantity::CHARTED.to_vec();
        if self.show_pressure {
            qs.push(Quantity::Pressure);
        }
        qs
    }

    fn render_chart(&self, ui: &mut Ui, history: &SampleHistory, quantity: Quantity, width: f32) {
        let look = ChartLook::for_quantity(quantity);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.vertical_centered(|ui| ui.strong(quantity.title()));
            Plot::new(quantity.title())
                .width(width)
                .height(self.chart_height)
                .allow_scroll(false)
                .allow_drag(false)
                .allow_zoom(false)
                .x_axis_label("Time")
                .y_axis_label(quantity.axis_label())
                .show(ui, |plot_ui| {
                    let line = Line::new(quantity.axis_label(), history.plot_points(quantity))
                        .color(look.color)
                        .width(look.width)
                        .style(look.style);
                    plot_ui.line(line);
                });
        });
    }
}

impl Panel for ChartsPanel {
    fn title(&self) -> &'static str {
        "Charts"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::CHART_LINE)
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, station: &mut GroundStation, _now: Instant) {
        let quantities = self.quantities();
        let spacing = ui.spacing().item_spacing.x + 10.0;
        let n = quantities.len() as f32;
        let width = ((ui.available_width() - spacing * (n - 1.0)) / n).max(120.0);
        ui.horizontal(|ui| {
            for (i, q) in quantities.iter().enumerate() {
                if i > 0 {
                    ui.add_space(10.0);
                }
                self.render_chart(ui, station.history(), *q, width);
            }
        });
    }
}
