//! Glyph rasterization into single-channel opacity bitmaps.

use crate::error::TextError;
use crate::font::FontResource;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// A single-channel opacity image, one byte per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl GlyphBitmap {
    /// A fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) as usize]
    }

    /// Whether no pixel has any coverage.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&a| a == 0)
    }
}

/// Point sizes of the small, medium and large font size classes.
pub fn point_size(size_class: i32) -> u32 {
    match size_class {
        s if s < 0 => 10,
        0 => 12,
        _ => 14,
    }
}

impl FontResource {
    /// Pixels per em at `point_size`, rounded up.
    pub fn em_px(&self, point_size: u32) -> u32 {
        (point_size * self.dpi()).div_ceil(72)
    }

    /// Render `text` on a single line into an opacity bitmap.
    ///
    /// The baseline sits `em_px` pixels below the top and the bitmap is
    /// `em_px * 5 / 4` pixels tall, leaving room for descenders. Its width is
    /// the pen advance truncated to whole pixels. Empty or zero-width text
    /// yields `None`.
    pub fn render_text(
        &self,
        text: &str,
        point_size: u32,
    ) -> Result<Option<GlyphBitmap>, TextError> {
        if text.is_empty() {
            return Ok(None);
        }
        let face = self.face()?;
        let em_px = self.em_px(point_size);
        let scale = em_px as f32 / face.units_per_em() as f32;
        let baseline = em_px as f32;

        let mut outline = GlyphOutline::new(scale, baseline);
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let glyph = face.glyph_index(c).unwrap_or(GlyphId(0));
            if let Some(left) = previous {
                outline.pen_x += kerning(&face, left, glyph) as f32 * scale;
            }
            // Glyphs without outlines (spaces) still advance the pen
            let _ = face.outline_glyph(glyph, &mut outline);
            outline.pen_x += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
            previous = Some(glyph);
        }

        let width = outline.pen_x.max(0.0) as u32;
        let height = em_px * 5 / 4;
        if width == 0 || height == 0 {
            return Ok(None);
        }

        let Some(path) = outline.builder.finish() else {
            // Only whitespace: a transparent box of the right size
            return Ok(Some(GlyphBitmap::new(width, height)));
        };

        // Scratch area wider than the result so overhanging glyphs are not
        // clipped before cropping
        let scratch_width = width + em_px;
        let mut scratch = tiny_skia::Pixmap::new(scratch_width, height).ok_or_else(|| {
            TextError::Rasterize {
                text: text.to_string(),
                reason: format!("cannot allocate {}x{} scratch area", scratch_width, height),
            }
        })?;
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::WHITE);
        paint.anti_alias = true;
        scratch.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );

        let mut bitmap = GlyphBitmap::new(width, height);
        for (y, row) in scratch.pixels().chunks(scratch_width as usize).enumerate() {
            let dst = &mut bitmap.data[y * width as usize..(y + 1) * width as usize];
            for (d, p) in dst.iter_mut().zip(row) {
                *d = p.alpha();
            }
        }
        Ok(Some(bitmap))
    }
}

/// Horizontal kerning between two glyphs from the `kern` table, in font units.
fn kerning(face: &Face<'_>, left: GlyphId, right: GlyphId) -> i16 {
    let Some(kern) = face.tables().kern else {
        return 0;
    };
    kern.subtables
        .into_iter()
        .filter(|st| st.horizontal && !st.variable)
        .find_map(|st| st.glyphs_kerning(left, right))
        .unwrap_or(0)
}

/// Collects glyph outlines into one path, placing each glyph at the pen
/// position and flipping the y axis so the baseline lands at `baseline`.
struct GlyphOutline {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    baseline: f32,
    pen_x: f32,
}

impl GlyphOutline {
    fn new(scale: f32, baseline: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            baseline,
            pen_x: 0.0,
        }
    }

    fn tx(&self, x: f32) -> f32 {
        self.pen_x + x * self.scale
    }

    fn ty(&self, y: f32) -> f32 {
        self.baseline - y * self.scale
    }
}

impl OutlineBuilder for GlyphOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.tx(x), self.ty(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.tx(x), self.ty(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.tx(x1), self.ty(y1), self.tx(x), self.ty(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.tx(x1),
            self.ty(y1),
            self.tx(x2),
            self.ty(y2),
            self.tx(x),
            self.ty(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
