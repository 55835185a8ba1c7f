//! Path building operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::geometry::{ArcParams, RectParams};
use tiny_skia::{PathSegment, Transform};

impl Canvas2dContext {
    /// Begin a new path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
        self.has_current_point = false;
    }

    /// Transform a point by the current transformation matrix.
    /// Path coordinates are transformed when added to the path.
    pub(crate) fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        Self::map_point_with_transform(&self.state.transform, x, y)
    }

    pub(crate) fn map_point_with_transform(transform: &Transform, x: f32, y: f32) -> (f32, f32) {
        (
            transform.sx * x + transform.kx * y + transform.tx,
            transform.ky * x + transform.sy * y + transform.ty,
        )
    }

    /// Append all segments from a finished path to the current path builder,
    /// transforming each point by the given transform.
    ///
    /// When `connect_first_move` is set and a current point exists, the first
    /// `MoveTo` of `path` becomes a `LineTo`.
    pub(crate) fn append_transformed_path(
        &mut self,
        path: &tiny_skia::Path,
        transform: Transform,
        connect_first_move: bool,
    ) {
        let mut saw_first_move = false;

        for segment in path.segments() {
            match segment {
                PathSegment::MoveTo(p) => {
                    let (x, y) = Self::map_point_with_transform(&transform, p.x, p.y);

                    if !saw_first_move && connect_first_move && self.has_current_point {
                        self.path_builder.line_to(x, y);
                    } else {
                        self.path_builder.move_to(x, y);
                        self.subpath_start_x = x;
                        self.subpath_start_y = y;
                    }
                    saw_first_move = true;

                    self.current_x = x;
                    self.current_y = y;
                    self.has_current_point = true;
                }
                PathSegment::LineTo(p) => {
                    let (x, y) = Self::map_point_with_transform(&transform, p.x, p.y);
                    self.path_builder.line_to(x, y);
                    self.current_x = x;
                    self.current_y = y;
                    self.has_current_point = true;
                }
                PathSegment::QuadTo(ctrl, p) => {
                    let (cx, cy) = Self::map_point_with_transform(&transform, ctrl.x, ctrl.y);
                    let (x, y) = Self::map_point_with_transform(&transform, p.x, p.y);
                    self.path_builder.quad_to(cx, cy, x, y);
                    self.current_x = x;
                    self.current_y = y;
                    self.has_current_point = true;
                }
                PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                    let (c1x, c1y) = Self::map_point_with_transform(&transform, ctrl1.x, ctrl1.y);
                    let (c2x, c2y) = Self::map_point_with_transform(&transform, ctrl2.x, ctrl2.y);
                    let (x, y) = Self::map_point_with_transform(&transform, p.x, p.y);
                    self.path_builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
                    self.current_x = x;
                    self.current_y = y;
                    self.has_current_point = true;
                }
                PathSegment::Close => {
                    self.path_builder.close();
                    self.current_x = self.subpath_start_x;
                    self.current_y = self.subpath_start_y;
                    self.has_current_point = true;
                }
            }
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "moveTo {} {}", x, y);
        let (tx, ty) = self.transform_point(x, y);
        self.path_builder.move_to(tx, ty);
        self.current_x = tx;
        self.current_y = ty;
        self.subpath_start_x = tx;
        self.subpath_start_y = ty;
        self.has_current_point = true;
    }

    /// Draw a line to a point. Without a current point this acts as `move_to`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "lineTo {} {}", x, y);
        if !self.has_current_point {
            self.move_to(x, y);
            return;
        }
        let (tx, ty) = self.transform_point(x, y);
        self.path_builder.line_to(tx, ty);
        self.current_x = tx;
        self.current_y = ty;
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        log::debug!(target: "canvas", "closePath");
        if !self.has_current_point {
            return;
        }
        self.path_builder.close();
        self.current_x = self.subpath_start_x;
        self.current_y = self.subpath_start_y;
    }

    /// Add a rectangle to the path.
    pub fn rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "rect {} {} {} {}", params.x, params.y, params.width, params.height);
        let (x0, y0) = self.transform_point(params.x, params.y);
        let (x1, y1) = self.transform_point(params.x + params.width, params.y);
        let (x2, y2) = self.transform_point(params.x + params.width, params.y + params.height);
        let (x3, y3) = self.transform_point(params.x, params.y + params.height);

        self.path_builder.move_to(x0, y0);
        self.path_builder.line_to(x1, y1);
        self.path_builder.line_to(x2, y2);
        self.path_builder.line_to(x3, y3);
        self.path_builder.close();

        self.current_x = x0;
        self.current_y = y0;
        self.subpath_start_x = x0;
        self.subpath_start_y = y0;
        self.has_current_point = true;
    }

    /// Add an arc to the path. A straight segment joins the current point to
    /// the arc start.
    pub fn arc(&mut self, params: &ArcParams) {
        log::debug!(
            target: "canvas",
            "arc {} {} r=({}, {}) start={} sweep={}",
            params.x, params.y, params.radius_x, params.radius_y, params.start_angle, params.sweep
        );
        let mut arc_builder = tiny_skia::PathBuilder::new();
        crate::arc::arc(&mut arc_builder, params);

        if let Some(path) = arc_builder.finish() {
            self.append_transformed_path(&path, self.state.transform, true);
        } else if params.radius_x > 0.0 && params.radius_y > 0.0 {
            // A zero sweep still moves the pen to the arc start
            let (x, y) = params.point_at(params.start_angle);
            self.line_to(x, y);
        }
    }

    /// Whether the current path has a current point.
    pub fn has_current_point(&self) -> bool {
        self.has_current_point
    }

    /// Current point in device space, if any.
    pub fn current_point(&self) -> Option<(f32, f32)> {
        self.has_current_point
            .then_some((self.current_x, self.current_y))
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::ArcParams;
    use crate::Canvas2dContext;
    use std::f32::consts::PI;

    #[test]
    fn test_line_to_without_current_point_moves() {
        let mut ctx = Canvas2dContext::new(10, 10).unwrap();
        assert!(ctx.current_point().is_none());
        ctx.line_to(3.0, 4.0);
        assert_eq!(ctx.current_point(), Some((3.0, 4.0)));
    }

    #[test]
    fn test_translate_applies_to_path_points() {
        let mut ctx = Canvas2dContext::new(10, 10).unwrap();
        ctx.translate(5.0, 2.0);
        ctx.move_to(1.0, 1.0);
        assert_eq!(ctx.current_point(), Some((6.0, 3.0)));
    }

    #[test]
    fn test_arc_connects_and_ends_on_circle() {
        let mut ctx = Canvas2dContext::new(100, 100).unwrap();
        ctx.move_to(50.0, 50.0);
        ctx.line_to(90.0, 50.0);
        ctx.arc(&ArcParams::circular(50.0, 50.0, 40.0, 0.0, PI / 2.0));
        let (x, y) = ctx.current_point().unwrap();
        assert!((x - 50.0).abs() < 1e-3);
        assert!((y - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_close_path_returns_to_subpath_start() {
        let mut ctx = Canvas2dContext::new(10, 10).unwrap();
        ctx.move_to(1.0, 1.0);
        ctx.line_to(8.0, 1.0);
        ctx.line_to(8.0, 8.0);
        ctx.close_path();
        assert_eq!(ctx.current_point(), Some((1.0, 1.0)));
    }
}
