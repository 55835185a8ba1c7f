//! Chart inputs handed to the composite drawing operations.
//!
//! All positions here are already in screen coordinates except for the data
//! values of a `Range` and its ticks, which `Range::data_to_screen` maps.

use crate::style::{Font, FontRole, PlotStyle, Style};
use serde::{Deserialize, Serialize};

/// A tick on an axis: a data position and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub pos: f64,
    #[serde(default)]
    pub label: String,
}

/// An axis range with caller supplied ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Data interval.
    pub min: f64,
    pub max: f64,
    /// Screen coordinates of `min` and `max`.
    pub min_pos: i32,
    pub max_pos: i32,
    #[serde(default)]
    pub ticks: Vec<Tick>,
    /// Axis label; empty for none.
    #[serde(default)]
    pub label: String,
}

impl Range {
    /// Linear map from data to screen coordinates.
    pub fn data_to_screen(&self, value: f64) -> i32 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return self.min_pos;
        }
        let t = (value - self.min) / span;
        let pos = self.min_pos as f64 + t * (self.max_pos - self.min_pos) as f64;
        pos.round() as i32
    }
}

/// A data point in screen coordinates with optional error extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EPoint {
    pub x: f64,
    pub y: f64,
    /// Full width of the horizontal error bar.
    pub delta_x: Option<f64>,
    /// Full height of the vertical error bar.
    pub delta_y: Option<f64>,
    /// Offset of the error bar centers from the point.
    pub off_x: f64,
    pub off_y: f64,
}

impl EPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Horizontal error bar as `(x_low, x_high)`.
    pub fn x_error(&self) -> Option<(f64, f64)> {
        self.delta_x.map(|d| {
            let c = self.x + self.off_x;
            (c - d / 2.0, c + d / 2.0)
        })
    }

    /// Vertical error bar as `(y_low, y_high)`.
    pub fn y_error(&self) -> Option<(f64, f64)> {
        self.delta_y.map(|d| {
            let c = self.y + self.off_y;
            (c - d / 2.0, c + d / 2.0)
        })
    }
}

/// Box-plot statistics in screen coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxInfo {
    pub x: f64,
    pub avg: Option<f64>,
    pub med: Option<f64>,
    pub q1: f64,
    pub q3: f64,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub outliers: Vec<f64>,
}

/// One legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub text: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub plot_style: PlotStyle,
}

/// A legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    pub entries: Vec<KeyEntry>,
    pub font: Font,
    /// Border line style; `None` draws no border.
    pub border: Option<Style>,
}

impl Default for Key {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            font: Font::default_for(FontRole::Key),
            border: Some(Style {
                fill_color: "#ffffff".to_string(),
                ..Style::default()
            }),
        }
    }
}

/// Where a bar label goes relative to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarLabelPosition {
    /// Above the bar.
    #[default]
    Top,
    /// Below the bar.
    Bottom,
    Left,
    Right,
    /// Centered inside the bar.
    Inside,
}

/// A bar as a screen rectangle with an optional label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarInfo {
    /// Top left corner.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub label: String,
    pub label_pos: BarLabelPosition,
    pub font: Font,
}

/// Where a wedge label goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WedgeLabelPosition {
    /// Halfway along the radius (or in the ring's middle).
    #[default]
    Inside,
    /// Just outside the outer radius.
    Outside,
}

/// A pie or ring segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WedgeInfo {
    /// Start and end angle in radians, clockwise on screen from 3 o'clock.
    pub phi: f64,
    pub psi: f64,
    pub label: String,
    pub label_pos: WedgeLabelPosition,
    pub style: Style,
    pub font: Font,
    /// Outward displacement in pixels along the bisector.
    pub shift: i32,
}

impl WedgeInfo {
    pub fn mid_angle(&self) -> f64 {
        (self.phi + self.psi) / 2.0
    }
}
