//! Configuration types for the ground-station console.

use std::time::Duration;

use serde::Serialize;

use crate::error::ConfigError;

// ─────────────────────────────────────────────────────────────────────────────
// Sample ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Half-open interval `[min, max)` a simulated reading is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        // Both bounds finite is not enough: the span itself must not overflow.
        let span = self.max - self.min;
        if !span.is_finite() || self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Ranges for every simulated sensor channel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampleRanges {
    /// Altitude in meters.
    pub altitude: SampleRange,
    /// Acceleration in m/s².
    pub acceleration: SampleRange,
    /// Temperature in °C.
    pub temperature: SampleRange,
    /// Pressure in Pa.
    pub pressure: SampleRange,
    /// Relative humidity in percent.
    pub humidity: SampleRange,
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            altitude: SampleRange::new(0.0, 20.0),
            acceleration: SampleRange::new(-2.0, 2.0),
            temperature: SampleRange::new(-20.0, 20.0),
            pressure: SampleRange::new(90_000.0, 110_000.0),
            humidity: SampleRange::new(0.0, 100.0),
        }
    }
}

impl SampleRanges {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.altitude.validate("altitude")?;
        self.acceleration.validate("acceleration")?;
        self.temperature.validate("temperature")?;
        self.pressure.validate("pressure")?;
        self.humidity.validate("humidity")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle optional UI elements.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureFlags {
    /// Show the top menu bar.
    pub menu_bar: bool,
    /// Show the pressure chart next to the four standard charts.
    pub pressure_chart: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            menu_bar: true,
            pressure_chart: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StationConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the ground station.
///
/// | Field group      | Purpose |
/// |------------------|---------|
/// | timing           | Simulation tick and timer-label refresh periods |
/// | simulation       | Sample ranges, RNG seed, rotation step, GPS walk |
/// | window / chrome  | Title, initial size, feature flags |
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationConfig {
    // ── Timing ───────────────────────────────────────────────────────────────
    /// Period of the simulation/redraw tick in milliseconds.
    pub tick_period_ms: u64,
    /// Period of the timer-label refresh in milliseconds.
    pub timer_period_ms: u64,

    // ── Simulation ───────────────────────────────────────────────────────────
    /// Ranges the simulated sensor readings are drawn from.
    pub ranges: SampleRanges,
    /// Seed for the simulated source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Degrees the rocket glyph rotates per tick.
    pub rotation_step_deg: f64,
    /// Altitude (m) above which the parachute is reported as ejected.
    pub parachute_threshold_m: f64,
    /// Initial `(latitude, longitude)` of the simulated GPS fix.
    pub gps_origin: (f64, f64),
    /// Maximum per-tick perturbation of each GPS coordinate, in degrees.
    pub gps_step_deg: f64,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Initial inner window size in logical points.
    pub window_size: [f32; 2],
    /// Optional UI elements.
    pub features: FeatureFlags,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 100,
            timer_period_ms: 1000,

            ranges: SampleRanges::default(),
            seed: None,
            rotation_step_deg: 2.0,
            parachute_threshold_m: 10.0,
            gps_origin: (28.7041, 77.1025),
            gps_step_deg: 0.0001,

            title: "XBee Ground Station".to_string(),
            window_size: [1200.0, 800.0],
            features: FeatureFlags::default(),
        }
    }
}

impl StationConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn timer_period(&self) -> Duration {
        Duration::from_millis(self.timer_period_ms)
    }

    /// Check that every value describes a runnable station.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "tick" });
        }
        if self.timer_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "timer" });
        }
        self.ranges.validate()?;
        finite("rotation step", self.rotation_step_deg)?;
        finite("parachute threshold", self.parachute_threshold_m)?;
        finite("GPS latitude", self.gps_origin.0)?;
        finite("GPS longitude", self.gps_origin.1)?;
        finite("GPS step", self.gps_step_deg)?;
        if self.gps_step_deg < 0.0 {
            return Err(ConfigError::NegativeGpsStep(self.gps_step_deg));
        }
        finite("GPS step span", 2.0 * self.gps_step_deg)?;
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}
