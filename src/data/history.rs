//! Append-only sample history, one sequence per telemetry channel.

use crate::source::TelemetrySample;

/// A telemetry channel that can be recorded and plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Altitude,
    Acceleration,
    Temperature,
    Pressure,
    Humidity,
}

impl Quantity {
    /// Channels plotted by default, in display order.
    pub const CHARTED: [Quantity; 4] = [
        Quantity::Altitude,
        Quantity::Acceleration,
        Quantity::Temperature,
        Quantity::Humidity,
    ];

    /// Chart title including the unit.
    pub fn title(self) -> &'static str {
        match self {
            Quantity::Altitude => "Altitude (m)",
            Quantity::Acceleration => "Acceleration (m/s²)",
            Quantity::Temperature => "Temperature (°C)",
            Quantity::Pressure => "Pressure (Pa)",
            Quantity::Humidity => "Humidity (%)",
        }
    }

    /// Y-axis label.
    pub fn axis_label(self) -> &'static str {
        match self {
            Quantity::Altitude => "Altitude",
            Quantity::Acceleration => "Acceleration",
            Quantity::Temperature => "Temperature",
            Quantity::Pressure => "Pressure",
            Quantity::Humidity => "Humidity",
        }
    }

    /// Read this channel out of a sample.
    pub fn of(self, sample: &TelemetrySample) -> f64 {
        match self {
            Quantity::Altitude => sample.altitude,
            Quantity::Acceleration => sample.acceleration,
            Quantity::Temperature => sample.temperature,
            Quantity::Pressure => sample.pressure,
            Quantity::Humidity => sample.humidity,
        }
    }
}

/// Every recorded value since the session started, indexed by tick.
///
/// Growth is unbounded; charts redraw from the full sequences.
#[derive(Debug, Default, Clone)]
pub struct SampleHistory {
    altitude: Vec<f64>,
    acceleration: Vec<f64>,
    temperature: Vec<f64>,
    pressure: Vec<f64>,
    humidity: Vec<f64>,
}

impl SampleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every channel of `sample`.
    pub fn push(&mut self, sample: &TelemetrySample) {
        self.altitude.push(sample.altitude);
        self.acceleration.push(sample.acceleration);
        self.temperature.push(sample.temperature);
        self.pressure.push(sample.pressure);
        self.humidity.push(sample.humidity);
    }

    pub fn series(&self, quantity: Quantity) -> &[f64] {
        match quantity {
            Quantity::Altitude => &self.altitude,
            Quantity::Acceleration => &self.acceleration,
            Quantity::Temperature => &self.temperature,
            Quantity::Pressure => &self.pressure,
            Quantity::Humidity => &self.humidity,
        }
    }

    /// Number of recorded ticks. All sequences share this length.
    pub fn len(&self) -> usize {
        self.altitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitude.is_empty()
    }

    /// Latest value of a channel, if anything was recorded.
    pub fn latest(&self, quantity: Quantity) -> Option<f64> {
        self.series(quantity).last().copied()
    }

    /// `[tick, value]` pairs for plotting.
    pub fn plot_points(&self, quantity: Quantity) -> Vec<[f64; 2]> {
        self.series(quantity)
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }

    pub fn clear(&mut self) {
        self.altitude.clear();
        self.acceleration.clear();
        self.temperature.clear();
        self.pressure.clear();
        self.humidity.clear();
    }
}
