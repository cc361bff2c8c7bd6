//! Rocket glyph geometry: orientation, polygon rotation and the launch drawing.
//!
//! All coordinates live on a 400×400 logical canvas with the origin at the
//! top-left corner and y growing downwards.

/// Logical side length of the square rocket canvas.
pub const CANVAS_SIZE: f32 = 400.0;

/// Pivot the rocket polygon rotates around.
pub const PIVOT: [f64; 2] = [200.0, 100.0];

/// Unrotated outline of the rocket body.
pub const BODY: [[f64; 2]; 5] = [
    [200.0, 50.0],
    [230.0, 100.0],
    [230.0, 300.0],
    [170.0, 300.0],
    [170.0, 100.0],
];

/// Orientation of the rocket in degrees, always within `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RocketOrientation {
    degrees: f64,
}

impl RocketOrientation {
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Advance by `step` degrees, wrapping at 360.
    pub fn advance(&mut self, step: f64) {
        self.degrees = (self.degrees + step).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if self.degrees >= 360.0 {
            self.degrees = 0.0;
        }
    }

    /// The rocket body rotated about [`PIVOT`].
    pub fn body(&self) -> [[f64; 2]; 5] {
        BODY.map(|p| rotate(p, PIVOT, self.degrees))
    }
}

/// Rotate `point` by `degrees` about `pivot`.
pub fn rotate(point: [f64; 2], pivot: [f64; 2], degrees: f64) -> [f64; 2] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = point[0] - pivot[0];
    let dy = point[1] - pivot[1];
    [pivot[0] + dx * cos - dy * sin, pivot[1] + dx * sin + dy * cos]
}

/// Colours used by the glyph primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphColor {
    White,
    Yellow,
    Red,
}

/// One drawing primitive on the rocket canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphShape {
    /// Filled circle bounded by the box `[x0, y0, x1, y1]`.
    Oval {
        bounds: [f32; 4],
        fill: GlyphColor,
        outline: GlyphColor,
    },
    /// Straight segment of the given stroke width.
    Line {
        from: [f32; 2],
        to: [f32; 2],
        color: GlyphColor,
        width: f32,
    },
}

/// What the canvas shows besides the rotating body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RocketGlyph {
    /// Small nose marker shown before launch.
    #[default]
    Idle,
    /// Tall segmented rocket drawn on launch.
    Segmented,
}

impl RocketGlyph {
    pub fn shapes(self) -> Vec<GlyphShape> {
        match self {
            RocketGlyph::Idle => vec![GlyphShape::Oval {
                bounds: [190.0, 40.0, 210.0, 60.0],
                fill: GlyphColor::White,
                outline: GlyphColor::Yellow,
            }],
            RocketGlyph::Segmented => segmented_rocket(),
        }
    }
}

fn line(from: [f32; 2], to: [f32; 2], color: GlyphColor) -> GlyphShape {
    GlyphShape::Line {
        from,
        to,
        color,
        width: 2.0,
    }
}

fn segmented_rocket() -> Vec<GlyphShape> {
    let white = GlyphColor::White;
    let mut shapes = vec![
        GlyphShape::Oval {
            bounds: [190.0, 40.0, 210.0, 60.0],
            fill: white,
            outline: GlyphColor::Yellow,
        },
        line([200.0, 60.0], [200.0, 100.0], white),
        line([200.0, 60.0], [220.0, 80.0], white),
        line([200.0, 60.0], [180.0, 80.0], white),
        line([200.0, 100.0], [220.0, 120.0], white),
        line([200.0, 100.0], [180.0, 120.0], white),
    ];
    // Five segments from y=120 down to y=320, each ending in a pair of fins.
    let mut y = 120.0;
    while y < 300.0 {
        shapes.push(line([200.0, y], [200.0, y + 20.0], white));
        shapes.push(line([200.0, y + 20.0], [220.0, y + 40.0], white));
        shapes.push(line([200.0, y + 20.0], [180.0, y + 40.0], white));
        y += 40.0;
    }
    let red = GlyphColor::Red;
    shapes.push(GlyphShape::Oval {
        bounds: [190.0, 320.0, 210.0, 340.0],
        fill: red,
        outline: red,
    });
    shapes.push(line([200.0, 340.0], [200.0, 360.0], red));
    shapes.push(line([200.0, 360.0], [220.0, 380.0], red));
    shapes.push(line([200.0, 360.0], [180.0, 380.0], red));
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_wraps_exactly_at_360() {
        let mut o = RocketOrientation::default();
        for _ in 0..179 {
            o.advance(2.0);
        }
        assert_eq!(o.degrees(), 358.0);
        o.advance(2.0);
        assert_eq!(o.degrees(), 0.0);
    }

    #[test]
    fn angle_stays_in_range_for_odd_steps() {
        let mut o = RocketOrientation::default();
        for _ in 0..10_000 {
            o.advance(7.3);
            assert!((0.0..360.0).contains(&o.degrees()));
        }
    }

    #[test]
    fn zero_rotation_keeps_body() {
        let o = RocketOrientation::default();
        assert_eq!(o.body(), BODY);
    }

    #[test]
    fn quarter_turn_rotates_about_pivot() {
        let p = rotate([200.0, 50.0], PIVOT, 90.0);
        assert!((p[0] - 250.0).abs() < 1e-9);
        assert!((p[1] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn pivot_is_fixed_point() {
        assert_eq!(rotate(PIVOT, PIVOT, 123.0), PIVOT);
    }

    #[test]
    fn segmented_rocket_ends_with_red_exhaust() {
        let shapes = RocketGlyph::Segmented.shapes();
        assert_eq!(shapes.len(), 1 + 5 + 15 + 4);
        assert!(matches!(
            shapes.last(),
            Some(GlyphShape::Line {
                color: GlyphColor::Red,
                ..
            })
        ));
    }
}
