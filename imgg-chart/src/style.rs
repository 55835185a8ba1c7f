//! Drawing styles and font descriptors attached to primitive calls.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Symbolic stroke pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDotDot,
    LongDash,
    LongDot,
}

impl LineStyle {
    /// Dash lengths in pixels, alternating on and off. Empty means solid.
    pub fn dash_pattern(self) -> &'static [f32] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[50.0, 20.0],
            LineStyle::Dotted => &[20.0, 20.0],
            LineStyle::DashDotDot => &[50.0, 20.0, 20.0, 20.0, 20.0, 20.0],
            LineStyle::LongDash => &[50.0, 50.0],
            LineStyle::LongDot => &[20.0, 50.0],
        }
    }
}

/// Font descriptor: a family name, a size class and an optional color.
///
/// The size class is relative: negative values select the small size, zero
/// the medium one and positive values the large one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub name: String,
    pub size: i32,
    /// CSS color string; empty means the backend default (black).
    pub color: String,
}

/// Chart elements with their own default font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Label,
    Tick,
    Key,
}

impl Font {
    pub fn new(name: &str, size: i32) -> Self {
        Self {
            name: name.to_string(),
            size,
            color: String::new(),
        }
    }

    /// Default font for a chart element.
    pub fn default_for(role: FontRole) -> Self {
        match role {
            FontRole::Title => Font::new("Helvetica", 1),
            FontRole::Label => Font::new("Helvetica", 0),
            FontRole::Tick => Font::new("Helvetica", -1),
            FontRole::Key => Font::new("Helvetica", -1),
        }
    }

    /// The font color, black when unset or unparsable.
    pub fn resolved_color(&self) -> Color {
        if self.color.is_empty() {
            Color::BLACK
        } else {
            Color::parse_or_black(&self.color)
        }
    }
}

/// Style of a primitive: symbol, stroke, fill and font.
///
/// Colors are CSS color strings. An empty `fill_color` means "no fill".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Symbol drawn at data points, see `generic_symbol`.
    pub symbol: char,
    pub symbol_color: String,
    /// Scale factor of the symbol; 1 is the standard size.
    pub symbol_size: f64,
    pub line_style: LineStyle,
    pub line_color: String,
    pub line_width: i32,
    pub font: Font,
    pub fill_color: String,
    pub alpha: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            symbol: 'o',
            symbol_color: "#000000".to_string(),
            symbol_size: 1.0,
            line_style: LineStyle::Solid,
            line_color: "#000000".to_string(),
            line_width: 1,
            font: Font::default(),
            fill_color: String::new(),
            alpha: 0.0,
        }
    }
}

impl Style {
    /// Plain black line style of the given width.
    pub fn line(width: i32) -> Self {
        Self {
            line_width: width,
            ..Self::default()
        }
    }

    pub fn has_fill(&self) -> bool {
        !self.fill_color.is_empty()
    }

    pub fn line_color(&self) -> Color {
        Color::parse_or_black(&self.line_color)
    }

    /// Fill color, if any.
    pub fn fill_color(&self) -> Option<Color> {
        self.has_fill()
            .then(|| Color::parse_or_black(&self.fill_color))
    }

    /// Symbol color, falling back to the line color when unset.
    pub fn symbol_color(&self) -> &str {
        if self.symbol_color.is_empty() {
            &self.line_color
        } else {
            &self.symbol_color
        }
    }
}

/// How a data series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlotStyle {
    #[default]
    Points,
    Lines,
    LinesPoints,
}

impl PlotStyle {
    pub fn has_points(self) -> bool {
        matches!(self, PlotStyle::Points | PlotStyle::LinesPoints)
    }

    pub fn has_lines(self) -> bool {
        matches!(self, PlotStyle::Lines | PlotStyle::LinesPoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LineStyle::Solid, &[])]
    #[case(LineStyle::Dashed, &[50.0, 20.0])]
    #[case(LineStyle::Dotted, &[20.0, 20.0])]
    #[case(LineStyle::DashDotDot, &[50.0, 20.0, 20.0, 20.0, 20.0, 20.0])]
    #[case(LineStyle::LongDash, &[50.0, 50.0])]
    #[case(LineStyle::LongDot, &[20.0, 50.0])]
    fn test_dash_table(#[case] style: LineStyle, #[case] expected: &[f32]) {
        assert_eq!(style.dash_pattern(), expected);
    }

    #[test]
    fn test_style_defaults() {
        let style = Style::default();
        assert_eq!(style.line_width, 1);
        assert_eq!(style.line_style, LineStyle::Solid);
        assert_eq!(style.line_color(), Color::BLACK);
        assert!(!style.has_fill());
        assert_eq!(style.fill_color(), None);
    }

    #[test]
    fn test_symbol_color_falls_back_to_line_color() {
        let style = Style {
            symbol_color: String::new(),
            line_color: "#ff0000".to_string(),
            ..Style::default()
        };
        assert_eq!(style.symbol_color(), "#ff0000");
    }

    #[test]
    fn test_font_color_resolution() {
        assert_eq!(Font::default().resolved_color(), Color::BLACK);
        let font = Font {
            color: "#00ff00".to_string(),
            ..Font::default()
        };
        assert_eq!(font.resolved_color(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_style_from_partial_json() {
        let style: Style =
            serde_json::from_str(r##"{"line_style": "dash-dot-dot", "fill_color": "#ccc"}"##)
                .unwrap();
        assert_eq!(style.line_style, LineStyle::DashDotDot);
        assert_eq!(style.line_width, 1);
        assert_eq!(style.fill_color(), Some(Color::rgb(204, 204, 204)));
    }
}
