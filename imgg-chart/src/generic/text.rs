use crate::graphics::Graphics;
use crate::style::Font;

/// Average width of a character in the proportional estimate, in 1/1000 em.
const AVERAGE_CHARACTER_WIDTH: f32 = 520.0;

/// Approximate advance of a character in a Helvetica-like face, in 1/1000 em.
fn character_width(c: char) -> f32 {
    match c {
        ' ' | '!' | '\'' | ',' | '.' | '/' | ':' | ';' | 'I' | '[' | '\\' | ']' | '|' => 278.0,
        'f' | 'i' | 'j' | 'l' | 't' | '(' | ')' | '`' => 250.0,
        'r' => 333.0,
        '"' | '*' | '-' => 350.0,
        '0'..='9' | '$' | '#' | '_' | '?' => 556.0,
        'm' | 'M' => 833.0,
        'w' | 'W' | '%' | '@' => 900.0,
        'a'..='z' => 520.0,
        'A'..='Z' => 667.0,
        c if c.is_whitespace() => 278.0,
        // Above average for anything unknown
        _ => 700.0,
    }
}

/// Width of `text` in pixels derived from the font metrics of `g`.
///
/// Monospaced fonts count characters; proportional ones sum per-character
/// estimates scaled to the reported average advance.
pub fn generic_text_len<G: Graphics + ?Sized>(g: &G, text: &str, font: &Font) -> i32 {
    let (fw, _, mono) = g.font_metrics(font);
    let width = if mono {
        text.chars().count() as f32 * fw
    } else {
        let length: f32 = text.chars().map(character_width).sum();
        length / AVERAGE_CHARACTER_WIDTH * fw
    };
    (width + 0.5) as i32
}
