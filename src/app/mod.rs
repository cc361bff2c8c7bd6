//! Main application module for the ground station.
//!
//! | Sub-module         | Responsibility |
//! | ------------------ | -------------- |
//! | [`station_app`]    | [`StationApp`] (eframe) wrapper: per-frame polling, layout, repaint scheduling |
//! | [`run`]            | Top-level [`run_groundstation()`] entry point and icon loading |
//!
//! The menu bar lives in [`crate::menu_ui`].

mod run;
mod station_app;

pub use run::run_groundstation;
pub use station_app::StationApp;
