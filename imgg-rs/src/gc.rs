//! The vector engine seam used by [`crate::ImageGraphics`].

use crate::text::GlyphBitmap;
use imgg_canvas2d::{ArcParams, Canvas2dContext, CanvasColor, LineCap, LineJoin, RectParams};
use imgg_chart::Color;

/// Path construction and painting operations the chart adapter needs from a
/// 2D vector engine.
///
/// `stroke` and `fill_stroke` consume the current path, so the next `move_to`
/// starts a fresh one.
pub trait GraphicContext {
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    /// Alternating on/off lengths; empty means solid.
    fn set_line_dash(&mut self, dash: &[f32]);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);

    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Arc joined to the current point by a straight segment.
    fn arc_to(&mut self, arc: &ArcParams);
    fn close_path(&mut self);

    fn stroke(&mut self);
    fn fill_stroke(&mut self);

    /// Overwrite the whole surface with `color`.
    fn clear(&mut self, color: Color);
    /// Overwrite a device-space rectangle with `color`.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn translate(&mut self, x: f32, y: f32);

    /// Paint `color` through `mask` with its top-left corner at device pixel (x, y).
    fn fill_alpha_mask(&mut self, mask: &GlyphBitmap, x: i32, y: i32, color: Color);
}

fn canvas_color(c: Color) -> CanvasColor {
    CanvasColor::from_rgba8(c.r, c.g, c.b, c.a)
}

impl GraphicContext for Canvas2dContext {
    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke_style_color(canvas_color(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.set_fill_style_color(canvas_color(color));
    }

    fn set_line_width(&mut self, width: f32) {
        Canvas2dContext::set_line_width(self, width);
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        Canvas2dContext::set_line_dash(self, dash.to_vec());
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        Canvas2dContext::set_line_cap(self, cap);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        Canvas2dContext::set_line_join(self, join);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        Canvas2dContext::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        Canvas2dContext::line_to(self, x, y);
    }

    fn arc_to(&mut self, arc: &ArcParams) {
        self.arc(arc);
    }

    fn close_path(&mut self) {
        Canvas2dContext::close_path(self);
    }

    fn stroke(&mut self) {
        Canvas2dContext::stroke(self);
        self.begin_path();
    }

    fn fill_stroke(&mut self) {
        self.fill();
        Canvas2dContext::stroke(self);
        self.begin_path();
    }

    fn clear(&mut self, color: Color) {
        Canvas2dContext::clear(self, canvas_color(color));
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let rect = RectParams {
            x,
            y,
            width,
            height,
        };
        Canvas2dContext::clear_rect(self, &rect, canvas_color(color));
    }

    fn translate(&mut self, x: f32, y: f32) {
        Canvas2dContext::translate(self, x, y);
    }

    fn fill_alpha_mask(&mut self, mask: &GlyphBitmap, x: i32, y: i32, color: Color) {
        self.save();
        self.set_fill_style_color(canvas_color(color));
        let result =
            Canvas2dContext::fill_alpha_mask(self, &mask.data, mask.width, mask.height, x, y);
        self.restore();
        if let Err(err) = result {
            log::warn!("Failed to composite text mask: {}", err);
        }
    }
}

impl<T: GraphicContext + ?Sized> GraphicContext for &mut T {
    fn set_stroke_color(&mut self, color: Color) {
        (**self).set_stroke_color(color)
    }

    fn set_fill_color(&mut self, color: Color) {
        (**self).set_fill_color(color)
    }

    fn set_line_width(&mut self, width: f32) {
        (**self).set_line_width(width)
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        (**self).set_line_dash(dash)
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        (**self).set_line_cap(cap)
    }

    fn set_line_join(&mut self, join: LineJoin) {
        (**self).set_line_join(join)
    }

    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y)
    }

    fn arc_to(&mut self, arc: &ArcParams) {
        (**self).arc_to(arc)
    }

    fn close_path(&mut self) {
        (**self).close_path()
    }

    fn stroke(&mut self) {
        (**self).stroke()
    }

    fn fill_stroke(&mut self) {
        (**self).fill_stroke()
    }

    fn clear(&mut self, color: Color) {
        (**self).clear(color)
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        (**self).clear_rect(x, y, width, height, color)
    }

    fn translate(&mut self, x: f32, y: f32) {
        (**self).translate(x, y)
    }

    fn fill_alpha_mask(&mut self, mask: &GlyphBitmap, x: i32, y: i32, color: Color) {
        (**self).fill_alpha_mask(mask, x, y, color)
    }
}
