//! Ground-station console crate root: re-exports and module wiring.
//!
//! The console shows live rocket telemetry in an egui/eframe window: a
//! rotating rocket glyph, parachute status, GPS fix, a mission timer and
//! strip-charts. Samples come from a [`TelemetrySource`]; the bundled
//! [`SimulatedSource`] generates them at random.
//!
//! - `config`: [`StationConfig`] and validation
//! - `source`: telemetry samples and sources
//! - `data`: history buffers, rocket geometry, status derivation, timers
//! - `station`: the UI-agnostic [`GroundStation`] controller
//! - `panels`: egui renderers for each window section
//! - `app`: the eframe application and [`run_groundstation`]

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod source;
pub mod station;

mod menu_ui;

pub use app::{run_groundstation, StationApp};
pub use config::{FeatureFlags, SampleRange, SampleRanges, StationConfig};
pub use error::{ConfigError, StationError};
pub use source::{SimulatedSource, TelemetrySample, TelemetrySource};
pub use station::GroundStation;
