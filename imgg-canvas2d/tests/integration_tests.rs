//! Integration tests for imgg-canvas2d.

use imgg_canvas2d::{ArcParams, Canvas2dContext, CanvasColor, RectParams};
use rstest::rstest;
use std::f32::consts::PI;

fn pixel(ctx: &Canvas2dContext, x: i32, y: i32) -> Vec<u8> {
    ctx.get_image_data(x, y, 1, 1)
}

/// Test creating a canvas and drawing basic shapes.
#[test]
fn test_draw_rectangle() {
    let mut ctx = Canvas2dContext::new(200, 200).unwrap();

    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&RectParams {
        x: 10.0,
        y: 10.0,
        width: 100.0,
        height: 100.0,
    });

    assert_eq!(pixel(&ctx, 50, 50), vec![255, 0, 0, 255]);
    assert_eq!(pixel(&ctx, 150, 150), vec![0, 0, 0, 0]);
}

/// Test path operations.
#[test]
fn test_path_operations() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();

    ctx.set_fill_style("#00ff00").unwrap();
    ctx.begin_path();
    ctx.move_to(10.0, 10.0);
    ctx.line_to(90.0, 10.0);
    ctx.line_to(90.0, 90.0);
    ctx.line_to(10.0, 90.0);
    ctx.close_path();
    ctx.fill();

    assert_eq!(pixel(&ctx, 50, 50), vec![0, 255, 0, 255]);
}

/// Test stroke operations.
#[test]
fn test_stroke_operations() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();

    ctx.set_stroke_style("#0000ff").unwrap();
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(10.0, 50.0);
    ctx.line_to(90.0, 50.0);
    ctx.stroke();

    assert_eq!(pixel(&ctx, 50, 50), vec![0, 0, 255, 255]);
    assert_eq!(pixel(&ctx, 50, 40)[3], 0);
}

/// Test the translate transform applies to path coordinates.
#[test]
fn test_translate() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();
    ctx.set_fill_style("#000000").unwrap();
    ctx.translate(50.0, 50.0);
    ctx.fill_rect(&RectParams {
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
    });
    ctx.reset_transform();

    assert_eq!(pixel(&ctx, 55, 55), vec![0, 0, 0, 255]);
    assert_eq!(pixel(&ctx, 5, 5)[3], 0);
}

/// Test PNG export.
#[test]
fn test_png_export() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();
    ctx.clear(CanvasColor::WHITE);
    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&RectParams {
        x: 0.0,
        y: 0.0,
        width: 50.0,
        height: 50.0,
    });

    let png_data = ctx.to_png(None).unwrap();
    assert!(!png_data.is_empty());
    // PNG magic bytes
    assert_eq!(&png_data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

/// A closed pie slice made of a line, an arc and a closing segment.
#[test]
fn test_arc_wedge_fill() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();
    ctx.set_fill_style("#0000ff").unwrap();
    ctx.begin_path();
    ctx.move_to(50.0, 50.0);
    ctx.arc(&ArcParams::circular(50.0, 50.0, 40.0, 0.0, PI / 2.0));
    ctx.close_path();
    ctx.fill();

    // Inside the lower-right quadrant
    assert_eq!(pixel(&ctx, 65, 65), vec![0, 0, 255, 255]);
    // Other quadrants stay empty
    assert_eq!(pixel(&ctx, 35, 65)[3], 0);
    assert_eq!(pixel(&ctx, 65, 35)[3], 0);
}

#[rstest]
#[case(vec![50.0, 20.0], 60)]
#[case(vec![20.0, 20.0], 30)]
#[case(vec![50.0, 50.0], 75)]
fn test_dash_gap_positions(#[case] dash: Vec<f32>, #[case] gap_x: i32) {
    let mut ctx = Canvas2dContext::new(200, 10).unwrap();
    ctx.set_line_width(2.0);
    ctx.set_line_dash(dash);
    ctx.begin_path();
    ctx.move_to(0.0, 5.0);
    ctx.line_to(200.0, 5.0);
    ctx.stroke();

    assert_eq!(pixel(&ctx, 5, 5)[3], 255);
    assert_eq!(pixel(&ctx, gap_x, 5)[3], 0);
}

/// Opacity masks composite through the fill color with partial coverage.
#[test]
fn test_alpha_mask_partial_coverage() {
    let mut ctx = Canvas2dContext::new(4, 1).unwrap();
    ctx.clear(CanvasColor::WHITE);
    ctx.set_fill_style_color(CanvasColor::BLACK);
    ctx.fill_alpha_mask(&[0, 128, 255, 0], 4, 1, 0, 0).unwrap();

    let row = ctx.get_image_data(0, 0, 4, 1);
    assert_eq!(&row[0..4], &[255, 255, 255, 255]);
    let mid = row[4];
    assert!(mid > 100 && mid < 150, "half coverage gave {}", mid);
    assert_eq!(&row[8..12], &[0, 0, 0, 255]);
}
