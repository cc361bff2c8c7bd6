//! Menu UI: top menu bar rendering for the ground-station window.
//!
//! File open/save, module and serial configuration, and the help entries are
//! placeholders that only log the request.

use eframe::egui;
use egui_phosphor::regular::{
    BOOK_OPEN, BROADCAST, FLOPPY_DISK, FOLDER_OPEN, GEAR, INFO, PLUGS, SIGN_OUT,
};

use crate::app::StationApp;

fn not_implemented(action: &str) {
    log::debug!("{action}: not implemented");
}

impl StationApp {
    /// Render the top menu bar.
    pub(crate) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button(format!("{FOLDER_OPEN} Open")).clicked() {
                        not_implemented("open file");
                        ui.close();
                    }
                    if ui.button(format!("{FLOPPY_DISK} Save")).clicked() {
                        not_implemented("save file");
                        ui.close();
                    }
                    ui.separator();
                    if ui.button(format!("{SIGN_OUT} Exit")).clicked() {
                        log::info!("exit requested");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.charts_panel.show_pressure, "Show pressure chart")
                        .on_hover_text("Plot the recorded pressure next to the other charts");
                    ui.separator();
                    for panel in self.toggleable_panels() {
                        let label = panel.title_and_icon();
                        ui.checkbox(&mut panel.state_mut().visible, label);
                    }
                });
                ui.menu_button(format!("{GEAR} Settings"), |ui| {
                    if ui
                        .button(format!("{BROADCAST} Configure XBee Module"))
                        .clicked()
                    {
                        not_implemented("configure XBee module");
                        ui.close();
                    }
                    if ui.button(format!("{PLUGS} Configure Serial Port")).clicked() {
                        not_implemented("configure serial port");
                        ui.close();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button(format!("{INFO} About")).clicked() {
                        not_implemented("about");
                        ui.close();
                    }
                    if ui.button(format!("{BOOK_OPEN} Documentation")).clicked() {
                        not_implemented("documentation");
                        ui.close();
                    }
                });
            });
        });
    }
}
