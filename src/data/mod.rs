pub mod chart_look;
pub mod gps;
pub mod history;
pub mod parachute;
pub mod rocket;
pub mod schedule;
pub mod timer;
