//! Error types for configuration and application startup.

use thiserror::Error;

/// Problems found while validating a [`StationConfig`](crate::config::StationConfig).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} period must be greater than zero")]
    ZeroPeriod { name: &'static str },
    #[error("sample range for {name} is empty or inverted: [{min}, {max})")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("GPS step must not be negative, got {0}")]
    NegativeGpsStep(f64),
}

/// Top-level error returned by [`run_groundstation`](crate::run_groundstation).
#[derive(Debug, Error)]
pub enum StationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

/// Reasons the window icon could not be produced. Never fatal.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to read icon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),
    #[error("icon has zero size")]
    Empty,
}
