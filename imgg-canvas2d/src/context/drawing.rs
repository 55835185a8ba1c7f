//! Fill, stroke, clear, and paint helper operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::geometry::{CanvasColor, RectParams};
use crate::style::FillStyle;
use tiny_skia::Transform;

// Miter joins longer than this many line widths fall back to bevels
const MITER_LIMIT: f32 = 10.0;

impl Canvas2dContext {
    // --- Drawing operations ---

    /// Fill the current path using the non-zero winding rule.
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill");
        // Clone the path builder so we don't consume it - stroke() may follow
        let path = self.path_builder.clone().finish();

        if let Some(path) = path {
            // Path coordinates are already in device space (pre-transformed)
            let _ = self.with_fill_paint(|ctx, paint| {
                ctx.pixmap.fill_path(
                    &path,
                    paint,
                    tiny_skia::FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            });
        }
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) {
        log::debug!(target: "canvas", "stroke");
        // Clone the path builder so we don't consume it - fill() may have been called or may follow
        let path = self.path_builder.clone().finish();

        if let Some(path) = path {
            // Scale line width and dash pattern by the average axis scale of the CTM,
            // since path coordinates are pre-transformed but stroke width is in user space
            let t = &self.state.transform;
            let scale =
                ((t.sx * t.sx + t.ky * t.ky).sqrt() + (t.kx * t.kx + t.sy * t.sy).sqrt()) / 2.0;
            let scaled_line_width = self.state.line_width * scale;

            let stroke = tiny_skia::Stroke {
                width: scaled_line_width,
                line_cap: self.state.line_cap.into(),
                line_join: self.state.line_join.into(),
                miter_limit: MITER_LIMIT,
                dash: if self.state.line_dash.is_empty() {
                    None
                } else {
                    let scaled_dash: Vec<f32> =
                        self.state.line_dash.iter().map(|d| d * scale).collect();
                    tiny_skia::StrokeDash::new(scaled_dash, 0.0)
                },
            };

            // Path coordinates are already in device space (pre-transformed)
            let _ = self.with_stroke_paint(|ctx, paint| {
                ctx.pixmap
                    .stroke_path(&path, paint, &stroke, Transform::identity(), None);
            });
        }
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", params.x, params.y, params.width, params.height);
        // Use path-based approach for proper transform handling
        self.begin_path();
        self.rect(params);
        self.fill();
    }

    /// Overwrite a device-space rectangle with `color`.
    ///
    /// The current transform is ignored and the color replaces what is
    /// underneath, so a transparent color clears the region.
    pub fn clear_rect(&mut self, params: &RectParams, color: CanvasColor) {
        log::debug!(target: "canvas", "clearRect {} {} {} {}", params.x, params.y, params.width, params.height);
        let Some(rect) =
            tiny_skia::Rect::from_xywh(params.x, params.y, params.width, params.height)
        else {
            return;
        };
        let mut paint = tiny_skia::Paint {
            blend_mode: tiny_skia::BlendMode::Source,
            ..Default::default()
        };
        paint.set_color(color.into());
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Overwrite every pixel with `color`, ignoring the transform.
    pub fn clear(&mut self, color: CanvasColor) {
        log::debug!(target: "canvas", "clear {:?}", color);
        self.pixmap.fill(color.into());
    }

    // --- Private paint helpers ---

    pub(crate) fn with_fill_paint<R>(
        &mut self,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let style = self.state.fill_style.clone();
        self.with_paint_from_style(style, draw)
    }

    pub(crate) fn with_stroke_paint<R>(
        &mut self,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let style = self.state.stroke_style.clone();
        self.with_paint_from_style(style, draw)
    }

    pub(crate) fn with_paint_from_style<R>(
        &mut self,
        style: FillStyle,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };

        match style {
            FillStyle::Color(color) => {
                if color.alpha() <= 0.0 {
                    return None;
                }
                paint.set_color(color);
                Some(draw(self, &paint))
            }
        }
    }
}
