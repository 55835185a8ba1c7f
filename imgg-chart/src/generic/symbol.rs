use crate::graphics::Graphics;
use crate::style::{LineStyle, Style};
use std::f64::consts::PI;

/// Standard symbol size in pixels at `symbol_size` 1.
const SYMBOL_SIZE: f64 = 5.0;

/// Draw the style's symbol centered on (x, y).
///
/// | symbol | shape                    |
/// |--------|--------------------------|
/// | `.`    | small dot                |
/// | `o`    | circle                   |
/// | `@`    | filled circle            |
/// | `#`    | square                   |
/// | `=`    | filled square            |
/// | `+`    | plus                     |
/// | `x`    | cross                    |
/// | `*`    | star (plus and cross)    |
/// | `%`    | triangle                 |
/// | `A`    | filled triangle          |
/// | `W`    | upside-down triangle     |
/// | `V`    | filled upside-down triangle |
/// | `&`    | diamond                  |
/// | `Z`    | filled diamond           |
///
/// Any other character is drawn as centered text.
pub fn generic_symbol<G: Graphics + ?Sized>(g: &mut G, x: i32, y: i32, style: &Style) {
    let f = if style.symbol_size > 0.0 {
        style.symbol_size
    } else {
        1.0
    };
    let n = SYMBOL_SIZE;
    let a = (n * f).round() as i32; // standard half extent
    let b = (n / 2.0 * f).round() as i32; // smaller
    let c = (1.155 * n * f).round() as i32; // triangle: center to apex
    let d = (0.577 * n * f).round() as i32; // triangle: center to base
    let e = (0.866 * n * f).round() as i32; // diagonal

    let color = style.symbol_color().to_string();
    let outline = Style {
        line_color: color.clone(),
        line_width: style.line_width.max(1),
        line_style: LineStyle::Solid,
        fill_color: String::new(),
        ..style.clone()
    };
    let filled = Style {
        fill_color: color,
        ..outline.clone()
    };

    match style.symbol {
        '.' => g.wedge(x, y, (b / 2).max(1), 0, 0.0, 2.0 * PI, &filled),
        'o' => g.path(&circle_points(x, y, a), &outline),
        '@' => g.wedge(x, y, a, 0, 0.0, 2.0 * PI, &filled),
        '#' => g.rect(x - a, y - a, 2 * a, 2 * a, &outline),
        '=' => g.rect(x - a, y - a, 2 * a, 2 * a, &filled),
        '+' => plus(g, x, y, a, &outline),
        'x' | 'X' => cross(g, x, y, e, &outline),
        '*' => {
            plus(g, x, y, a, &outline);
            cross(g, x, y, e, &outline);
        }
        '%' => g.path(&[(x, y - c), (x + a, y + d), (x - a, y + d), (x, y - c)], &outline),
        'A' => fill_triangle(g, x, y - c, y + d, a, &outline),
        'W' => g.path(&[(x, y + c), (x + a, y - d), (x - a, y - d), (x, y + c)], &outline),
        'V' => fill_triangle(g, x, y + c, y - d, a, &outline),
        '&' => g.path(
            &[(x, y - a), (x + a, y), (x, y + a), (x - a, y), (x, y - a)],
            &outline,
        ),
        'Z' => {
            fill_triangle(g, x, y - a, y, a, &outline);
            fill_triangle(g, x, y + a, y, a, &outline);
        }
        other => {
            log::debug!("no shape for symbol {:?}, drawing it as text", other);
            g.text(x, y, &other.to_string(), "cc", 0, &style.font);
        }
    }
}

fn plus<G: Graphics + ?Sized>(g: &mut G, x: i32, y: i32, a: i32, style: &Style) {
    g.line(x - a, y, x + a, y, style);
    g.line(x, y - a, x, y + a, style);
}

fn cross<G: Graphics + ?Sized>(g: &mut G, x: i32, y: i32, e: i32, style: &Style) {
    g.line(x - e, y - e, x + e, y + e, style);
    g.line(x - e, y + e, x + e, y - e, style);
}

/// Closed polygon approximating a circle.
fn circle_points(x: i32, y: i32, r: i32) -> Vec<(i32, i32)> {
    let segments = (4 * r).clamp(8, 64);
    (0..=segments)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / segments as f64;
            (
                x + (r as f64 * t.cos()).round() as i32,
                y + (r as f64 * t.sin()).round() as i32,
            )
        })
        .collect()
}

/// Isosceles triangle with its apex at (x, apex_y) and a base of half width
/// `half_base` on row `base_y`, filled with horizontal lines.
fn fill_triangle<G: Graphics + ?Sized>(
    g: &mut G,
    x: i32,
    apex_y: i32,
    base_y: i32,
    half_base: i32,
    style: &Style,
) {
    let height = (base_y - apex_y).abs();
    let step = if base_y >= apex_y { 1 } else { -1 };
    for i in 0..=height {
        let hw = if height == 0 {
            half_base
        } else {
            (half_base as f64 * i as f64 / height as f64).round() as i32
        };
        let yy = apex_y + step * i;
        g.line(x - hw, yy, x + hw, yy, style);
    }
}
