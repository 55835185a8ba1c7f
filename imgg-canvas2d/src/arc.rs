//! Arc operations using bezier curve approximation.
//!
//! tiny-skia does not support arc primitives directly, so we approximate
//! arcs using cubic bezier curves.

use crate::geometry::ArcParams;
use std::f32::consts::{FRAC_PI_2, TAU};
use tiny_skia::PathBuilder;

/// Add an elliptical arc to a fresh path builder.
///
/// The builder receives a `move_to` at the arc start followed by one cubic
/// segment per quarter turn (or less) of the sweep. Callers splice the result
/// into their own path, connecting the start point as they see fit.
pub fn arc(path: &mut PathBuilder, params: &ArcParams) {
    if params.radius_x <= 0.0 || params.radius_y <= 0.0 || !params.sweep.is_finite() {
        return;
    }

    let (start_x, start_y) = params.point_at(params.start_angle);
    path.move_to(start_x, start_y);

    if params.sweep == 0.0 {
        return;
    }

    // Sweeps past a full turn retrace the same circle
    let sweep = params.sweep.clamp(-TAU, TAU);
    let num_segments = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let segment_angle = sweep / num_segments as f32;

    for i in 0..num_segments {
        let angle1 = params.start_angle + i as f32 * segment_angle;
        let angle2 = params.start_angle + (i + 1) as f32 * segment_angle;
        arc_segment(path, params, angle1, angle2);
    }
}

/// Add a single arc segment as a cubic bezier curve.
fn arc_segment(path: &mut PathBuilder, params: &ArcParams, angle1: f32, angle2: f32) {
    // Negative spans give a negative k, which flips the control handles
    let k = 4.0 / 3.0 * ((angle2 - angle1) / 4.0).tan();

    let (x1, y1) = (angle1.cos(), angle1.sin());
    let (x2, y2) = (angle2.cos(), angle2.sin());

    let cp1x = x1 - k * y1;
    let cp1y = y1 + k * x1;
    let cp2x = x2 + k * y2;
    let cp2y = y2 - k * x2;

    let transform_point = |px: f32, py: f32| -> (f32, f32) {
        (params.x + params.radius_x * px, params.y + params.radius_y * py)
    };

    let (ctrl1_x, ctrl1_y) = transform_point(cp1x, cp1y);
    let (ctrl2_x, ctrl2_y) = transform_point(cp2x, cp2y);
    let (end_x, end_y) = transform_point(x2, y2);

    path.cubic_to(ctrl1_x, ctrl1_y, ctrl2_x, ctrl2_y, end_x, end_y);
}
