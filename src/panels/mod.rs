pub mod charts_ui;
pub mod panel_trait;
pub mod rocket_ui;
pub mod status_ui;

pub use charts_ui::ChartsPanel;
pub use panel_trait::{Panel, PanelState};
pub use rocket_ui::RocketPanel;
pub use status_ui::{ControlsPanel, StatusPanel, TimerPanel};
