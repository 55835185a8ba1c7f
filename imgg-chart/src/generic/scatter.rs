use crate::data::{BoxInfo, EPoint};
use crate::graphics::Graphics;
use crate::style::{LineStyle, PlotStyle, Style};

/// Color of error bars when the series has no fill color.
const ERROR_BAR_COLOR: &str = "#404040";

/// A data series: connecting path, error bars, then symbols.
pub fn generic_scatter<G: Graphics + ?Sized>(
    g: &mut G,
    points: &[EPoint],
    plot_style: PlotStyle,
    style: &Style,
) {
    if points.is_empty() {
        return;
    }

    if plot_style.has_lines() {
        let path: Vec<(i32, i32)> = points
            .iter()
            .map(|p| (p.x as i32, p.y as i32))
            .collect();
        g.path(&path, style);
    }

    let error_style = Style {
        line_color: if style.has_fill() {
            style.fill_color.clone()
        } else {
            ERROR_BAR_COLOR.to_string()
        },
        line_width: 1,
        line_style: LineStyle::Solid,
        ..style.clone()
    };
    for p in points {
        if let Some((xl, xh)) = p.x_error() {
            g.line(xl as i32, p.y as i32, xh as i32, p.y as i32, &error_style);
        }
        if let Some((yl, yh)) = p.y_error() {
            g.line(p.x as i32, yl as i32, p.x as i32, yh as i32, &error_style);
        }
    }

    if plot_style.has_points() {
        for p in points {
            g.symbol(p.x as i32, p.y as i32, style);
        }
    }
}

/// Box plots of odd pixel `width` (even widths grow by one).
///
/// Each box spans Q1 to Q3 with a median line, whiskers out to low and
/// high, the average as a symbol and every outlier as a symbol.
pub fn generic_boxes<G: Graphics + ?Sized>(
    g: &mut G,
    boxes: &[BoxInfo],
    width: i32,
    style: &Style,
) {
    let width = if width % 2 == 0 { width + 1 } else { width };
    let hbw = (width - 1) / 2;
    let symbol_style = if style.symbol == '\0' || style.symbol == ' ' {
        Style {
            symbol: '*',
            ..style.clone()
        }
    } else {
        style.clone()
    };

    for b in boxes {
        let x = b.x as i32;
        let (q1, q3) = (b.q1 as i32, b.q3 as i32);
        g.rect(x - hbw, q1, width, q3 - q1, style);
        if let Some(med) = b.med {
            let med = med as i32;
            g.line(x - hbw, med, x + hbw, med, style);
        }
        if let Some(avg) = b.avg {
            g.symbol(x, avg as i32, &symbol_style);
        }
        if let Some(high) = b.high {
            g.line(x, q3, x, high as i32, style);
        }
        if let Some(low) = b.low {
            g.line(x, q1, x, low as i32, style);
        }
        for &y in &b.outliers {
            g.symbol(x, y as i32, &symbol_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::recording::{Call, Recorder};

    fn plus_style() -> Style {
        Style {
            symbol: '+',
            ..Style::default()
        }
    }

    #[test]
    fn test_scatter_order_path_errors_symbols() {
        let mut rec = Recorder::default();
        let points = [
            EPoint::new(10.0, 20.0),
            EPoint {
                delta_y: Some(10.0),
                ..EPoint::new(30.0, 40.0)
            },
        ];
        generic_scatter(&mut rec, &points, PlotStyle::LinesPoints, &plus_style());

        assert_eq!(rec.calls[0], Call::Path(vec![(10, 20), (30, 40)]));
        assert_eq!(rec.calls[1], Call::Line(30, 35, 30, 45));
        assert_eq!(rec.styles[1].line_color, ERROR_BAR_COLOR);
        // Two lines per plus symbol
        assert_eq!(rec.calls.len(), 2 + 4);
    }

    #[test]
    fn test_scatter_points_only_has_no_path() {
        let mut rec = Recorder::default();
        generic_scatter(
            &mut rec,
            &[EPoint::new(1.0, 1.0)],
            PlotStyle::Points,
            &plus_style(),
        );
        assert!(rec.calls.iter().all(|c| matches!(c, Call::Line(..))));
    }

    #[test]
    fn test_scatter_lines_only_has_no_symbols() {
        let mut rec = Recorder::default();
        generic_scatter(
            &mut rec,
            &[EPoint::new(1.0, 1.0), EPoint::new(2.0, 2.0)],
            PlotStyle::Lines,
            &plus_style(),
        );
        assert_eq!(rec.calls, vec![Call::Path(vec![(1, 1), (2, 2)])]);
    }

    #[test]
    fn test_boxes() {
        let mut rec = Recorder::default();
        let b = BoxInfo {
            x: 100.0,
            q1: 200.0,
            q3: 150.0,
            med: Some(170.0),
            high: Some(120.0),
            low: Some(230.0),
            avg: None,
            outliers: vec![],
        };
        generic_boxes(&mut rec, &[b], 10, &Style::default());
        assert_eq!(
            rec.calls,
            vec![
                Call::Rect(95, 200, 11, -50, false),
                Call::Line(95, 170, 105, 170),
                Call::Line(100, 150, 100, 120),
                Call::Line(100, 200, 100, 230),
            ]
        );
    }
}
