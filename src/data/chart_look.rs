//! ChartLook: visual styling for telemetry charts.

use eframe::egui;
use egui_plot::LineStyle;

use super::history::Quantity;

/// The visual presentation of one chart line.
#[derive(Debug, Clone)]
pub struct ChartLook {
    pub color: egui::Color32,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for ChartLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl ChartLook {
    /// Look used for the given channel.
    pub fn for_quantity(quantity: Quantity) -> Self {
        Self {
            color: Self::color_of(quantity),
            ..Default::default()
        }
    }

    pub fn color_of(quantity: Quantity) -> egui::Color32 {
        match quantity {
            Quantity::Altitude => egui::Color32::from_rgb(0, 0, 255),
            Quantity::Acceleration => egui::Color32::from_rgb(255, 0, 0),
            Quantity::Temperature => egui::Color32::from_rgb(0, 128, 0),
            Quantity::Pressure => egui::Color32::from_rgb(128, 0, 128),
            Quantity::Humidity => egui::Color32::from_rgb(255, 165, 0),
        }
    }
}
