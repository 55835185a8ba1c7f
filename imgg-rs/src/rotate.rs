//! Rotation of text bitmaps and placement of their anchor points.

use crate::text::GlyphBitmap;

// Absorbs float noise such as cos(90°) = 6e-17 before rounding up
const SIZE_EPSILON: f64 = 1e-6;

/// Vertical placement of the anchor within a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Horizontal placement of the anchor within a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// A two-character alignment code such as `"tl"` or `"cr"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub vertical: VerticalAlign,
    pub horizontal: HorizontalAlign,
}

impl Alignment {
    pub const CENTER: Alignment = Alignment {
        vertical: VerticalAlign::Center,
        horizontal: HorizontalAlign::Center,
    };

    /// Parse a vertical-then-horizontal code. A single character is taken as
    /// the horizontal part of a vertically centered code and the empty code
    /// is `"cc"`. Unknown characters mean center.
    pub fn parse(code: &str) -> Self {
        let mut chars = code.chars();
        let (v, h) = match (chars.next(), chars.next()) {
            (None, _) => ('c', 'c'),
            (Some(h), None) => ('c', h),
            (Some(v), Some(h)) => (v, h),
        };
        let vertical = match v {
            't' => VerticalAlign::Top,
            'b' => VerticalAlign::Bottom,
            _ => VerticalAlign::Center,
        };
        let horizontal = match h {
            'l' => HorizontalAlign::Left,
            'r' => HorizontalAlign::Right,
            _ => HorizontalAlign::Center,
        };
        Self {
            vertical,
            horizontal,
        }
    }

    fn is_center(&self) -> bool {
        *self == Self::CENTER
    }

    /// Anchor position inside an unrotated `w` x `h` box.
    fn unrotated(&self, w: i32, h: i32) -> (i32, i32) {
        let x = match self.horizontal {
            HorizontalAlign::Left => 0,
            HorizontalAlign::Center => w / 2,
            HorizontalAlign::Right => w,
        };
        let y = match self.vertical {
            VerticalAlign::Top => 0,
            VerticalAlign::Center => h / 2,
            VerticalAlign::Bottom => h,
        };
        (x, y)
    }
}

/// Size of the box holding a `w` x `h` bitmap rotated by `degrees`.
pub fn rotated_size(w: u32, h: u32, degrees: f64) -> (u32, u32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let (w, h) = (w as f64, h as f64);
    let rw = (h * sin + w * cos - SIZE_EPSILON).ceil().max(1.0);
    let rh = (h * cos + w * sin - SIZE_EPSILON).ceil().max(1.0);
    (rw as u32, rh as u32)
}

/// Rotate `bitmap` counter-clockwise on screen by `degrees` about its center
/// into a box of [`rotated_size`].
pub fn rotate(bitmap: &GlyphBitmap, degrees: f64) -> GlyphBitmap {
    let (rw, rh) = rotated_size(bitmap.width, bitmap.height, degrees);
    let mut out = GlyphBitmap::new(rw, rh);

    let (Some(mut source), Some(mut target)) = (
        tiny_skia::Pixmap::new(bitmap.width, bitmap.height),
        tiny_skia::Pixmap::new(rw, rh),
    ) else {
        return out;
    };
    // Opacity as premultiplied white
    for (px, &a) in source.data_mut().chunks_exact_mut(4).zip(&bitmap.data) {
        px.copy_from_slice(&[a, a, a, a]);
    }

    let transform = tiny_skia::Transform::from_rotate(-degrees as f32)
        .pre_translate(-(bitmap.width as f32) / 2.0, -(bitmap.height as f32) / 2.0)
        .post_translate(rw as f32 / 2.0, rh as f32 / 2.0);
    let paint = tiny_skia::PixmapPaint {
        quality: tiny_skia::FilterQuality::Bilinear,
        ..Default::default()
    };
    target.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

    for (d, px) in out.data.iter_mut().zip(target.pixels()) {
        *d = px.alpha();
    }
    out
}

/// Position of the `align` anchor inside the box of a `w` x `h` text bitmap
/// after rotating it by `degrees`.
///
/// Between 0° and 90° the anchors are the rotated box corners and edge
/// midpoints, built from trig projections truncated to whole pixels. The top
/// and bottom centers are the midpoints of the rotated top and bottom edges.
/// Other angles carry the unrotated anchor through the same rotation that
/// [`rotate`] applies.
pub fn anchor_offset(w: u32, h: u32, align: Alignment, degrees: f64) -> (i32, i32) {
    let (rw, rh) = rotated_size(w, h, degrees);
    let turn = degrees.rem_euclid(360.0);
    if turn == 0.0 {
        return align.unrotated(w as i32, h as i32);
    }
    if align.is_center() {
        return ((rw / 2) as i32, (rh / 2) as i32);
    }
    if turn < 90.0 {
        return first_quadrant_anchor(w, h, align, turn, rw as i32, rh as i32);
    }

    let (w, h, rw, rh) = (w as f64, h as f64, rw as f64, rh as f64);
    let (ax, ay) = align.unrotated(w as i32, h as i32);
    let dx = ax as f64 - w / 2.0;
    let dy = ay as f64 - h / 2.0;
    let (sin, cos) = degrees.to_radians().sin_cos();
    let x = rw / 2.0 + dx * cos + dy * sin;
    let y = rh / 2.0 - dx * sin + dy * cos;
    (x.round() as i32, y.round() as i32)
}

fn first_quadrant_anchor(
    w: u32,
    h: u32,
    align: Alignment,
    degrees: f64,
    rw: i32,
    rh: i32,
) -> (i32, i32) {
    use HorizontalAlign as H;
    use VerticalAlign as V;

    let alpha = degrees / 180.0 * std::f64::consts::PI;
    let (sin, cos) = (alpha.sin(), alpha.cos());
    let (w, h) = (w as f64, h as f64);
    let (hs, hc) = (h * sin, h * cos);
    let (ws, wc) = (w * sin, w * cos);

    match (align.vertical, align.horizontal) {
        (V::Bottom, H::Left) => (hs as i32, rh),
        (V::Bottom, H::Center) => ((hs + wc / 2.0) as i32, rh - (ws / 2.0) as i32),
        (V::Bottom, H::Right) => (rw, hc as i32),
        (V::Top, H::Left) => (0, rh - hc as i32),
        (V::Top, H::Center) => ((wc / 2.0) as i32, (ws / 2.0) as i32),
        (V::Top, H::Right) => (rw - hs as i32, 0),
        (V::Center, H::Left) => ((hs / 2.0) as i32, rh - (hc / 2.0) as i32),
        (V::Center, H::Right) => (rw - (hs / 2.0) as i32, (hc / 2.0) as i32),
        (V::Center, H::Center) => (rw / 2, rh / 2),
    }
}
