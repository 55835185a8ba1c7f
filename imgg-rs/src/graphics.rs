//! [`Graphics`] implementation that renders charts into a raster image.

use crate::blend::blend;
use crate::error::FontUnavailable;
use crate::font::{default_font, FontResource};
use crate::gc::GraphicContext;
use crate::rotate::{anchor_offset, rotate, Alignment};
use crate::text::point_size;
use imgg_canvas2d::{ArcParams, Canvas2dContext, Canvas2dResult, LineCap, LineJoin};
use imgg_chart::{Color, Font, FontRole, Graphics, Style};
use std::borrow::{Borrow, BorrowMut};
use std::sync::Arc;

/// How [`Graphics::wedge`] treats the inner radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WedgeMode {
    /// Every wedge is a pie slice reaching the center.
    #[default]
    Pie,
    /// A positive inner radius cuts out the center, giving a ring segment.
    Annulus,
}

/// A chart drawing surface backed by a vector context and the glyph rasterizer.
///
/// Vector primitives go through the [`GraphicContext`]; text is rasterized
/// with the process font and composited straight onto the pixels. The
/// surface covers the `w` x `h` region whose top-left corner is `(x0, y0)`
/// on the underlying image.
pub struct ImageGraphics<C: GraphicContext = Canvas2dContext> {
    ctx: C,
    x0: i32,
    y0: i32,
    w: i32,
    h: i32,
    bg: Color,
    font: Result<Arc<FontResource>, FontUnavailable>,
    wedge_mode: WedgeMode,
}

impl ImageGraphics<Canvas2dContext> {
    /// A fresh `width` x `height` image cleared to `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Canvas2dResult<Self> {
        let ctx = Canvas2dContext::new(width, height)?;
        Ok(Self::with_context(ctx, width as i32, height as i32, background))
    }
}

impl<C: GraphicContext> ImageGraphics<C> {
    /// Take over a whole context of the given size, clearing it to `background`.
    pub fn with_context(mut ctx: C, width: i32, height: i32, background: Color) -> Self {
        ctx.set_line_join(LineJoin::Miter);
        ctx.set_line_cap(LineCap::Square);
        ctx.set_stroke_color(Color::BLACK);
        ctx.set_fill_color(background);
        ctx.clear(background);
        Self::from_parts(ctx, 0, 0, width, height, background)
    }

    /// Draw into the `width` x `height` region at `(x, y)` of an existing
    /// context. The region is cleared to `background` and everything drawn
    /// afterwards is offset by `(x, y)`.
    pub fn add_to(
        mut ctx: C,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        background: Color,
    ) -> Self {
        ctx.set_stroke_color(Color::BLACK);
        ctx.set_fill_color(background);
        ctx.translate(x as f32, y as f32);
        ctx.clear_rect(
            x as f32,
            y as f32,
            width as f32,
            height as f32,
            background,
        );
        Self::from_parts(ctx, x, y, width, height, background)
    }

    fn from_parts(ctx: C, x0: i32, y0: i32, w: i32, h: i32, bg: Color) -> Self {
        Self {
            ctx,
            x0,
            y0,
            w,
            h,
            bg,
            font: default_font(),
            wedge_mode: WedgeMode::default(),
        }
    }

    /// Use `font` for text instead of the process-wide font.
    pub fn with_font(mut self, font: Result<Arc<FontResource>, FontUnavailable>) -> Self {
        self.font = font;
        self
    }

    pub fn with_wedge_mode(mut self, mode: WedgeMode) -> Self {
        self.wedge_mode = mode;
        self
    }

    /// Honor the inner radius of wedges ([`WedgeMode::Annulus`]).
    pub fn with_inner_radius(self, enabled: bool) -> Self {
        self.with_wedge_mode(if enabled {
            WedgeMode::Annulus
        } else {
            WedgeMode::Pie
        })
    }

    pub fn wedge_mode(&self) -> WedgeMode {
        self.wedge_mode
    }

    /// Whether text can be drawn. When this is false every text call is a
    /// logged no-op and the image comes out without labels.
    pub fn font_available(&self) -> bool {
        self.font.is_ok()
    }

    /// The reason text is not drawn, if any.
    pub fn font_error(&self) -> Option<&FontUnavailable> {
        self.font.as_ref().err()
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }

    fn set_style(&mut self, style: &Style) {
        self.ctx.set_stroke_color(style.line_color().with_alpha(255));
        self.ctx.set_line_width(style.line_width.max(1) as f32);
        self.ctx.set_line_dash(style.line_style.dash_pattern());
    }

    /// Select the fill color of `style` and finish the current path with it,
    /// or only stroke when the style has no fill.
    fn finish_shape(&mut self, style: &Style) {
        match style.fill_color() {
            Some(fill) => {
                self.ctx.set_fill_color(fill.with_alpha(255));
                self.ctx.fill_stroke();
            }
            None => self.ctx.stroke(),
        }
    }
}

impl<C: GraphicContext + BorrowMut<Canvas2dContext>> ImageGraphics<C> {
    /// Encode the whole underlying image as PNG.
    pub fn to_png(&self, ppi: Option<f32>) -> Canvas2dResult<Vec<u8>> {
        let canvas: &Canvas2dContext = self.ctx.borrow();
        canvas.to_png(ppi)
    }

    /// Straight-alpha RGBA of a region of the underlying image.
    pub fn image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let canvas: &Canvas2dContext = self.ctx.borrow();
        canvas.get_image_data(x, y, width, height)
    }

    /// Blend `color` into the pixel at absolute image position `(x, y)`,
    /// keeping `alpha / 256` of the existing value. See [`blend`].
    /// Positions outside the image are ignored.
    pub fn paint(&mut self, x: i32, y: i32, color: Color, alpha: u8) {
        let canvas: &mut Canvas2dContext = self.ctx.borrow_mut();
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        if x < 0 || y < 0 || x >= width || y >= height {
            return;
        }
        let i = (y as usize * width as usize + x as usize) * 4;
        let pixel = &mut canvas.data_mut()[i..i + 4];
        let existing = [pixel[0], pixel[1], pixel[2], pixel[3]];
        pixel.copy_from_slice(&blend(existing, [color.r, color.g, color.b], alpha));
    }
}

impl<C: GraphicContext> Graphics for ImageGraphics<C> {
    fn background(&self) -> Color {
        self.bg
    }

    fn dimensions(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    // Placeholders, not measured from the font
    fn font_metrics(&self, _font: &Font) -> (f32, i32, bool) {
        (8.0, 15, true)
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: &Style) {
        self.set_style(style);
        // Centers one pixel wide lines on the pixel grid
        self.ctx.move_to(x0 as f32 + 0.5, y0 as f32 + 0.5);
        self.ctx.line_to(x1 as f32 + 0.5, y1 as f32 + 0.5);
        self.ctx.stroke();
    }

    fn path(&mut self, points: &[(i32, i32)], style: &Style) {
        let Some((&(x, y), rest)) = points.split_first() else {
            return;
        };
        self.set_style(style);
        self.ctx.move_to(x as f32, y as f32);
        for &(x, y) in rest {
            self.ctx.line_to(x as f32, y as f32);
        }
        self.ctx.stroke();
    }

    fn text(&mut self, x: i32, y: i32, text: &str, align: &str, rot: i32, font: &Font) {
        let resource = match &self.font {
            Ok(resource) => resource.clone(),
            Err(err) => {
                log::warn!("Not drawing text {:?}: {}", text, err);
                return;
            }
        };
        let bitmap = match resource.render_text(text, point_size(font.size)) {
            Ok(Some(bitmap)) => bitmap,
            Ok(None) => return,
            Err(err) => {
                log::warn!("{}", err);
                return;
            }
        };

        let degrees = rot as f64;
        let align = Alignment::parse(align);
        let (ax, ay) = anchor_offset(bitmap.width, bitmap.height, align, degrees);
        let bitmap = if rot % 360 == 0 {
            bitmap
        } else {
            rotate(&bitmap, degrees)
        };

        let color = font.resolved_color().with_alpha(255);
        let dx = x.saturating_sub(ax).saturating_add(self.x0);
        let dy = y.saturating_sub(ay).saturating_add(self.y0);
        self.ctx.fill_alpha_mask(&bitmap, dx, dy, color);
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &Style) {
        self.set_style(style);
        let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
        self.ctx.move_to(x, y);
        self.ctx.line_to(x + w, y);
        self.ctx.line_to(x + w, y + h);
        self.ctx.line_to(x, y + h);
        self.ctx.close_path();
        self.finish_shape(style);
    }

    fn wedge(&mut self, x: i32, y: i32, ro: i32, ri: i32, phi: f64, psi: f64, style: &Style) {
        self.set_style(style);
        let ri = match self.wedge_mode {
            WedgeMode::Pie => 0,
            WedgeMode::Annulus => ri.max(0),
        };
        let (x, y, ro, ri) = (x as f32, y as f32, ro as f32, ri as f32);
        let (phi, psi) = (phi as f32, psi as f32);
        let outer = ArcParams::circular(x, y, ro, phi, psi - phi);
        let inner = ArcParams::circular(x, y, ri, psi, phi - psi);

        // Outbound radial line
        if ri > 0.0 {
            let (xi, yi) = inner.point_at(phi);
            self.ctx.move_to(xi, yi);
        } else {
            self.ctx.move_to(x, y);
        }
        let (xo, yo) = outer.point_at(phi);
        self.ctx.line_to(xo, yo);

        self.ctx.arc_to(&outer);

        // Back inwards
        if ri > 0.0 {
            let (xi, yi) = inner.point_at(psi);
            self.ctx.line_to(xi, yi);
            self.ctx.arc_to(&inner);
        } else {
            self.ctx.line_to(x, y);
        }
        self.ctx.close_path();
        self.finish_shape(style);
    }

    fn title(&mut self, text: &str) {
        let font = Font::default_for(FontRole::Title);
        let (_, fh, _) = self.font_metrics(&font);
        self.text(self.w / 2, fh / 2, text, "tc", 0, &font);
    }
}
