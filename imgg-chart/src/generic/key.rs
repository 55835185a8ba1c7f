use crate::data::Key;
use crate::graphics::Graphics;

/// Legend with its top left corner at (x, y).
///
/// Each entry gets one row with a sample (line and/or symbol, per its plot
/// style) followed by its text. The box is sized to the widest text.
pub fn generic_key<G: Graphics + ?Sized>(g: &mut G, x: i32, y: i32, key: &Key) {
    if key.entries.is_empty() {
        return;
    }

    let (fw, fh, _) = g.font_metrics(&key.font);
    let pad = (fw.round() as i32).max(2);
    let sample_w = (4.0 * fw).round() as i32;
    let row_h = fh + fh / 2;
    let text_w = key
        .entries
        .iter()
        .map(|e| g.text_len(&e.text, &key.font))
        .max()
        .unwrap_or(0);

    let w = pad + sample_w + pad + text_w + pad;
    let h = key.entries.len() as i32 * row_h + pad;
    if let Some(border) = &key.border {
        g.rect(x, y, w, h, border);
    }

    for (i, entry) in key.entries.iter().enumerate() {
        let cy = y + pad / 2 + i as i32 * row_h + row_h / 2;
        let sx = x + pad;
        if entry.plot_style.has_lines() {
            g.line(sx, cy, sx + sample_w, cy, &entry.style);
        }
        if entry.plot_style.has_points() {
            g.symbol(sx + sample_w / 2, cy, &entry.style);
        }
        g.text(sx + sample_w + pad, cy, &entry.text, "cl", 0, &key.font);
    }
}
