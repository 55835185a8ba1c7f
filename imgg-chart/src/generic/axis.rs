use crate::data::Range;
use crate::graphics::Graphics;
use crate::style::{Font, FontRole, Style};

/// Length of a tick mark on either side of the axis.
fn tick_length(font_height: i32) -> i32 {
    (font_height / 2).clamp(4, 10)
}

/// Horizontal axis on row `y` spanning the range's screen interval.
///
/// Draws the axis line, a tick and label per tick, the axis label below the
/// tick labels, and a tick-only copy of the axis on row `y_mirror` when it
/// differs from `y`.
pub fn generic_x_axis<G: Graphics + ?Sized>(g: &mut G, range: &Range, y: i32, y_mirror: i32) {
    let tick_font = Font::default_for(FontRole::Tick);
    let (_, fh, _) = g.font_metrics(&tick_font);
    let tick_len = tick_length(fh);
    let style = Style::default();
    let (xa, xe) = (range.min_pos, range.max_pos);

    g.line(xa, y, xe, y, &style);
    for tick in &range.ticks {
        let x = range.data_to_screen(tick.pos);
        g.line(x, y - tick_len, x, y + tick_len, &style);
        if !tick.label.is_empty() {
            g.text(x, y + tick_len, &tick.label, "tc", 0, &tick_font);
        }
    }

    if !range.label.is_empty() {
        let label_y = y + 2 * tick_len + (3 * fh) / 2;
        let label_font = Font::default_for(FontRole::Label);
        g.text((xa + xe) / 2, label_y, &range.label, "tc", 0, &label_font);
    }

    if y_mirror != y {
        g.line(xa, y_mirror, xe, y_mirror, &style);
        for tick in &range.ticks {
            let x = range.data_to_screen(tick.pos);
            g.line(x, y_mirror - tick_len, x, y_mirror + tick_len, &style);
        }
    }
}

/// Vertical axis on column `x` spanning the range's screen interval.
///
/// Tick labels sit left of the ticks; the axis label is rotated by 90
/// degrees and placed left of the widest tick label.
pub fn generic_y_axis<G: Graphics + ?Sized>(g: &mut G, range: &Range, x: i32, x_mirror: i32) {
    let tick_font = Font::default_for(FontRole::Tick);
    let (_, fh, _) = g.font_metrics(&tick_font);
    let tick_len = tick_length(fh);
    let style = Style::default();
    let (ya, ye) = (range.min_pos, range.max_pos);

    g.line(x, ya, x, ye, &style);
    let mut widest = 0;
    for tick in &range.ticks {
        let y = range.data_to_screen(tick.pos);
        g.line(x - tick_len, y, x + tick_len, y, &style);
        if !tick.label.is_empty() {
            widest = widest.max(g.text_len(&tick.label, &tick_font));
            g.text(x - tick_len, y, &tick.label, "cr", 0, &tick_font);
        }
    }

    if !range.label.is_empty() {
        let label_x = x - tick_len - widest - fh;
        let label_font = Font::default_for(FontRole::Label);
        g.text(label_x, (ya + ye) / 2, &range.label, "bc", 90, &label_font);
    }

    if x_mirror != x {
        g.line(x_mirror, ya, x_mirror, ye, &style);
        for tick in &range.ticks {
            let y = range.data_to_screen(tick.pos);
            g.line(x_mirror - tick_len, y, x_mirror + tick_len, y, &style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Tick;
    use crate::generic::recording::Recorder;

    fn range(label: &str) -> Range {
        Range {
            min: 0.0,
            max: 10.0,
            min_pos: 50,
            max_pos: 350,
            ticks: vec![
                Tick {
                    pos: 0.0,
                    label: "0".to_string(),
                },
                Tick {
                    pos: 5.0,
                    label: "5".to_string(),
                },
                Tick {
                    pos: 10.0,
                    label: String::new(),
                },
            ],
            label: label.to_string(),
        }
    }

    #[test]
    fn test_x_axis_ticks_and_labels() {
        let mut rec = Recorder::default();
        generic_x_axis(&mut rec, &range("time"), 250, 250);

        // Font height 15 gives 7px ticks
        assert_eq!(
            rec.lines(),
            vec![
                (50, 250, 350, 250),
                (50, 243, 50, 257),
                (200, 243, 200, 257),
                (350, 243, 350, 257),
            ]
        );
        assert_eq!(
            rec.texts(),
            vec![
                (50, 257, "0".to_string(), "tc".to_string(), 0),
                (200, 257, "5".to_string(), "tc".to_string(), 0),
                (200, 286, "time".to_string(), "tc".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_x_axis_mirror() {
        let mut rec = Recorder::default();
        generic_x_axis(&mut rec, &range(""), 250, 20);
        let lines = rec.lines();
        assert_eq!(lines.len(), 8);
        assert!(lines.contains(&(50, 20, 350, 20)));
        // Mirror has no labels
        assert_eq!(rec.texts().len(), 2);
    }

    #[test]
    fn test_y_axis_label_rotated_left_of_ticks() {
        let mut rec = Recorder::default();
        generic_y_axis(&mut rec, &range("value"), 40, 40);
        let texts = rec.texts();
        assert_eq!(texts[0], (33, 50, "0".to_string(), "cr".to_string(), 0));
        // 40 - 7 - 8 (one monospace char) - 15
        assert_eq!(texts[2], (10, 200, "value".to_string(), "bc".to_string(), 90));
    }
}
