//! Parameter structs for drawing operations.
//!
//! These structs replace long positional argument lists with named fields,
//! grouping semantically related parameters together.

/// Parameters for an elliptical arc given by a start angle and a signed sweep.
///
/// Angles are in radians and grow clockwise on screen (y points down), so a
/// positive sweep runs clockwise and a negative one counterclockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// X coordinate of the arc center.
    pub x: f32,
    /// Y coordinate of the arc center.
    pub y: f32,
    /// Horizontal radius.
    pub radius_x: f32,
    /// Vertical radius.
    pub radius_y: f32,
    /// Starting angle in radians.
    pub start_angle: f32,
    /// Signed angular extent in radians.
    pub sweep: f32,
}

impl ArcParams {
    /// A circular arc.
    pub fn circular(x: f32, y: f32, radius: f32, start_angle: f32, sweep: f32) -> Self {
        Self {
            x,
            y,
            radius_x: radius,
            radius_y: radius,
            start_angle,
            sweep,
        }
    }

    /// Point on the arc at the given angle.
    pub fn point_at(&self, angle: f32) -> (f32, f32) {
        (
            self.x + self.radius_x * angle.cos(),
            self.y + self.radius_y * angle.sin(),
        )
    }
}

/// Parameters for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// X coordinate of the rectangle origin.
    pub x: f32,
    /// Y coordinate of the rectangle origin.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

/// A backend-neutral RGBA color with 8-bit straight-alpha components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    pub const BLACK: CanvasColor = CanvasColor::from_rgba8(0, 0, 0, 255);
    pub const WHITE: CanvasColor = CanvasColor::from_rgba8(255, 255, 255, 255);

    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}
