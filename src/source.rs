//! Telemetry sources feeding the ground station.
//!
//! A [`TelemetrySource`] hands out one [`TelemetrySample`] per tick. The only
//! implementation today is [`SimulatedSource`], which draws every channel
//! independently and uniformly from the configured [`SampleRanges`]; a radio
//! decoder would slot in behind the same trait.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::{SampleRange, SampleRanges};

/// One reading of every sensor channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetrySample {
    /// Altitude in meters.
    pub altitude: f64,
    /// Acceleration in m/s².
    pub acceleration: f64,
    /// Temperature in °C.
    pub temperature: f64,
    /// Pressure in Pa.
    pub pressure: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

/// Anything that can produce telemetry samples on demand.
pub trait TelemetrySource {
    /// Short human-readable name, shown in logs.
    fn name(&self) -> &str;

    /// Produce the sample for the current tick.
    fn next_sample(&mut self) -> TelemetrySample;
}

/// Pseudo-random source with no continuity between samples.
pub struct SimulatedSource {
    rng: StdRng,
    ranges: SampleRanges,
}

impl SimulatedSource {
    /// Create a source seeded from OS entropy.
    pub fn new(ranges: SampleRanges) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            ranges,
        }
    }

    /// Create a reproducible source.
    pub fn with_seed(ranges: SampleRanges, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ranges,
        }
    }

    fn draw(&mut self, range: SampleRange) -> f64 {
        self.rng.gen_range(range.min..range.max)
    }
}

impl TelemetrySource for SimulatedSource {
    fn name(&self) -> &str {
        "simulated"
    }

    fn next_sample(&mut self) -> TelemetrySample {
        let ranges = self.ranges;
        TelemetrySample {
            altitude: self.draw(ranges.altitude),
            acceleration: self.draw(ranges.acceleration),
            temperature: self.draw(ranges.temperature),
            pressure: self.draw(ranges.pressure),
            humidity: self.draw(ranges.humidity),
        }
    }
}
