//! Rocket canvas: a square drawing surface showing the rotating rocket body
//! and the static launch glyph.

use std::time::Instant;

use egui::{Color32, Pos2, Rect, Sense, Stroke, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::rocket::{GlyphColor, GlyphShape, CANVAS_SIZE};
use crate::station::GroundStation;

pub struct RocketPanel {
    state: PanelState,
    /// Largest on-screen side length in points.
    pub max_side: f32,
}

impl Default for RocketPanel {
    fn default() -> Self {
        Self {
            state: PanelState::default(),
            max_side: CANVAS_SIZE,
        }
    }
}

fn color(c: GlyphColor) -> Color32 {
    match c {
        GlyphColor::White => Color32::WHITE,
        GlyphColor::Yellow => Color32::YELLOW,
        GlyphColor::Red => Color32::RED,
    }
}

/// Maps logical canvas coordinates onto a screen rectangle.
struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    fn new(rect: Rect) -> Self {
        Self {
            origin: rect.min,
            scale: rect.width() / CANVAS_SIZE,
        }
    }

    fn pos(&self, x: f32, y: f32) -> Pos2 {
        Pos2::new(self.origin.x + x * self.scale, self.origin.y + y * self.scale)
    }
}

impl Panel for RocketPanel {
    fn title(&self) -> &'static str {
        "Rocket"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::ROCKET)
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, station: &mut GroundStation, _now: Instant) {
        let side = ui
            .available_width()
            .min(ui.available_height())
            .min(self.max_side)
            .max(50.0);
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), Sense::hover());
        let rect = response.rect;
        let tf = CanvasTransform::new(rect);

        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let body: Vec<Pos2> = station
            .orientation()
            .body()
            .iter()
            .map(|p| tf.pos(p[0] as f32, p[1] as f32))
            .collect();
        painter.add(egui::Shape::convex_polygon(
            body,
            Color32::from_white_alpha(40),
            Stroke::new(1.5, Color32::YELLOW),
        ));

        for shape in station.glyph().shapes() {
            match shape {
                GlyphShape::Oval {
                    bounds,
                    fill,
                    outline,
                } => {
                    let center = tf.pos((bounds[0] + bounds[2]) / 2.0, (bounds[1] + bounds[3]) / 2.0);
                    let radius = (bounds[2] - bounds[0]) / 2.0 * tf.scale;
                    painter.circle(center, radius, color(fill), Stroke::new(1.0, color(outline)));
                }
                GlyphShape::Line {
                    from,
                    to,
                    color: c,
                    width,
                } => {
                    painter.line_segment(
                        [tf.pos(from[0], from[1]), tf.pos(to[0], to[1])],
                        Stroke::new(width * tf.scale, color(c)),
                    );
                }
            }
        }

        response.on_hover_text(format!("{:.0}°", station.orientation().degrees()));
    }
}
