//! Serializable drawing scenes.
//!
//! A scene is a surface size, a background color and an ordered list of
//! drawing commands, one per `Graphics` operation. Scenes let a chart be
//! recorded once and replayed onto any backend.

use crate::color::Color;
use crate::data::{BarInfo, BoxInfo, EPoint, Key, Range, WedgeInfo};
use crate::error::ChartResult;
use crate::graphics::Graphics;
use crate::style::{Font, PlotStyle, Style};
use serde::{Deserialize, Serialize};

/// One drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        #[serde(default)]
        style: Style,
    },
    Path {
        points: Vec<(i32, i32)>,
        #[serde(default)]
        style: Style,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        #[serde(default)]
        align: String,
        #[serde(default)]
        rot: i32,
        #[serde(default)]
        font: Font,
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        #[serde(default)]
        style: Style,
    },
    Wedge {
        x: i32,
        y: i32,
        ro: i32,
        #[serde(default)]
        ri: i32,
        phi: f64,
        psi: f64,
        #[serde(default)]
        style: Style,
    },
    Symbol {
        x: i32,
        y: i32,
        #[serde(default)]
        style: Style,
    },
    Title {
        text: String,
    },
    XAxis {
        range: Range,
        y: i32,
        y_mirror: i32,
    },
    YAxis {
        range: Range,
        x: i32,
        x_mirror: i32,
    },
    Scatter {
        points: Vec<EPoint>,
        #[serde(default)]
        plot_style: PlotStyle,
        #[serde(default)]
        style: Style,
    },
    Boxes {
        boxes: Vec<BoxInfo>,
        width: i32,
        #[serde(default)]
        style: Style,
    },
    Key {
        x: i32,
        y: i32,
        key: Key,
    },
    Bars {
        bars: Vec<BarInfo>,
        #[serde(default)]
        style: Style,
    },
    Rings {
        wedges: Vec<WedgeInfo>,
        x: i32,
        y: i32,
        ro: i32,
        #[serde(default)]
        ri: i32,
    },
}

impl Command {
    /// Issue this command against `g`.
    pub fn apply<G: Graphics + ?Sized>(&self, g: &mut G) {
        match self {
            Command::Line {
                x0,
                y0,
                x1,
                y1,
                style,
            } => g.line(*x0, *y0, *x1, *y1, style),
            Command::Path { points, style } => g.path(points, style),
            Command::Text {
                x,
                y,
                text,
                align,
                rot,
                font,
            } => g.text(*x, *y, text, align, *rot, font),
            Command::Rect { x, y, w, h, style } => g.rect(*x, *y, *w, *h, style),
            Command::Wedge {
                x,
                y,
                ro,
                ri,
                phi,
                psi,
                style,
            } => g.wedge(*x, *y, *ro, *ri, *phi, *psi, style),
            Command::Symbol { x, y, style } => g.symbol(*x, *y, style),
            Command::Title { text } => g.title(text),
            Command::XAxis { range, y, y_mirror } => g.x_axis(range, *y, *y_mirror),
            Command::YAxis { range, x, x_mirror } => g.y_axis(range, *x, *x_mirror),
            Command::Scatter {
                points,
                plot_style,
                style,
            } => g.scatter(points, *plot_style, style),
            Command::Boxes {
                boxes,
                width,
                style,
            } => g.boxes(boxes, *width, style),
            Command::Key { x, y, key } => g.key(*x, *y, key),
            Command::Bars { bars, style } => g.bars(bars, style),
            Command::Rings {
                wedges,
                x,
                y,
                ro,
                ri,
            } => g.rings(wedges, *x, *y, *ro, *ri),
        }
    }
}

fn default_background() -> Color {
    Color::WHITE
}

/// A recorded chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: Color,
    /// Draw wedges as ring segments when they have an inner radius.
    #[serde(default)]
    pub inner_radius: bool,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            inner_radius: false,
            commands: Vec::new(),
        }
    }

    /// Parse a scene from JSON.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Draw the scene: `begin`, every command in order, then `end`.
    pub fn replay<G: Graphics + ?Sized>(&self, g: &mut G) {
        log::debug!(
            "replaying scene {}x{} with {} commands",
            self.width,
            self.height,
            self.commands.len()
        );
        g.begin();
        for command in &self.commands {
            command.apply(g);
        }
        g.end();
    }
}
