use crate::data::{BarInfo, BarLabelPosition, WedgeInfo, WedgeLabelPosition};
use crate::graphics::Graphics;
use crate::style::Style;

/// One rectangle per bar plus its optional label.
pub fn generic_bars<G: Graphics + ?Sized>(g: &mut G, bars: &[BarInfo], style: &Style) {
    for bar in bars {
        g.rect(bar.x, bar.y, bar.width, bar.height, style);
        if bar.label.is_empty() {
            continue;
        }

        let (_, fh, _) = g.font_metrics(&bar.font);
        let gap = if fh > 1 { fh / 2 } else { fh };
        let cx = bar.x + bar.width / 2;
        let cy = bar.y + bar.height / 2;
        let (tx, ty, align) = match bar.label_pos {
            BarLabelPosition::Top => (cx, bar.y - gap, "bc"),
            BarLabelPosition::Bottom => (cx, bar.y + bar.height + gap, "tc"),
            BarLabelPosition::Right => (bar.x + bar.width + gap, cy, "cl"),
            BarLabelPosition::Left => (bar.x - gap, cy, "cr"),
            BarLabelPosition::Inside => (cx, cy, "cc"),
        };
        g.text(tx, ty, &bar.label, align, 0, &bar.font);
    }
}

/// Pie or ring chart centered on (x, y).
///
/// Every wedge is displaced outward along its bisector by its `shift` and
/// labelled at its mid angle. `eccentricity` stretches label positions
/// horizontally.
pub fn generic_rings<G: Graphics + ?Sized>(
    g: &mut G,
    wedges: &[WedgeInfo],
    x: i32,
    y: i32,
    ro: i32,
    ri: i32,
    eccentricity: f64,
) {
    for wedge in wedges {
        let alpha = wedge.mid_angle();
        let (dx, dy) = if wedge.shift != 0 {
            let shift = wedge.shift as f64;
            (
                (shift * alpha.cos()).round() as i32,
                (shift * alpha.sin()).round() as i32,
            )
        } else {
            (0, 0)
        };
        let (cx, cy) = (x + dx, y + dy);
        g.wedge(cx, cy, ro, ri, wedge.phi, wedge.psi, &wedge.style);

        if wedge.label.is_empty() {
            continue;
        }
        let rt = match wedge.label_pos {
            WedgeLabelPosition::Inside if ri > 0 => (ri + ro) / 2,
            WedgeLabelPosition::Inside => ro / 2,
            WedgeLabelPosition::Outside => {
                let (_, fh, _) = g.font_metrics(&wedge.font);
                ro + fh
            }
        };
        let rt = rt as f64;
        let tx = cx + (rt * alpha.cos() * eccentricity).round() as i32;
        let ty = cy + (rt * alpha.sin()).round() as i32;
        g.text(tx, ty, &wedge.label, "cc", 0, &wedge.font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::recording::{Call, Recorder};
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(BarLabelPosition::Top, (25, 93, "bc"))]
    #[case(BarLabelPosition::Bottom, (25, 157, "tc"))]
    #[case(BarLabelPosition::Left, (3, 125, "cr"))]
    #[case(BarLabelPosition::Right, (47, 125, "cl"))]
    #[case(BarLabelPosition::Inside, (25, 125, "cc"))]
    fn test_bar_label_positions(
        #[case] label_pos: BarLabelPosition,
        #[case] expected: (i32, i32, &str),
    ) {
        let bar = BarInfo {
            x: 10,
            y: 100,
            width: 30,
            height: 50,
            label: "42".to_string(),
            label_pos,
            ..BarInfo::default()
        };
        let mut rec = Recorder::default();
        generic_bars(&mut rec, &[bar], &Style::default());
        assert_eq!(rec.calls[0], Call::Rect(10, 100, 30, 50, false));
        let (x, y, align) = expected;
        assert_eq!(
            rec.calls[1],
            Call::Text(x, y, "42".to_string(), align.to_string(), 0)
        );
    }

    #[test]
    fn test_unlabelled_bars_are_rects_only() {
        let mut rec = Recorder::default();
        let bars = vec![BarInfo::default(), BarInfo::default()];
        generic_bars(&mut rec, &bars, &Style::default());
        assert_eq!(rec.calls.len(), 2);
    }

    #[test]
    fn test_rings_shift_and_label() {
        let wedges = [
            WedgeInfo {
                phi: 0.0,
                psi: PI,
                label: "half".to_string(),
                ..WedgeInfo::default()
            },
            WedgeInfo {
                phi: PI,
                psi: 2.0 * PI,
                shift: 10,
                ..WedgeInfo::default()
            },
        ];
        let mut rec = Recorder::default();
        generic_rings(&mut rec, &wedges, 100, 100, 40, 0, 1.0);

        assert_eq!(rec.calls[0], Call::Wedge(100, 100, 40, 0));
        // Mid angle of the first wedge points straight down
        assert_eq!(
            rec.calls[1],
            Call::Text(100, 120, "half".to_string(), "cc".to_string(), 0)
        );
        // Second wedge moves up by its shift
        assert_eq!(rec.calls[2], Call::Wedge(100, 90, 40, 0));
        assert_eq!(rec.calls.len(), 3);
    }

    #[test]
    fn test_ring_label_between_radii() {
        let wedges = [WedgeInfo {
            phi: 0.0,
            psi: 0.0,
            label: "r".to_string(),
            ..WedgeInfo::default()
        }];
        let mut rec = Recorder::default();
        generic_rings(&mut rec, &wedges, 0, 0, 40, 20, 1.5);
        assert_eq!(
            rec.calls[1],
            Call::Text(45, 0, "r".to_string(), "cc".to_string(), 0)
        );
    }
}
