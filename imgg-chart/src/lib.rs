//! Chart-side types for the imgg raster backend.
//!
//! This crate holds the parts of a charting library that a rendering backend
//! talks to: the [`Graphics`] drawing-surface trait, the style and data types
//! passed through it, the [`generic`] algorithms that build composite chart
//! elements out of primitive calls, and serializable [`Scene`]s.

mod color;
mod data;
mod error;
pub mod generic;
mod graphics;
mod scene;
mod style;

pub use color::Color;
pub use data::{
    BarInfo, BarLabelPosition, BoxInfo, EPoint, Key, KeyEntry, Range, Tick, WedgeInfo,
    WedgeLabelPosition,
};
pub use error::{ChartError, ChartResult};
pub use graphics::Graphics;
pub use scene::{Command, Scene};
pub use style::{Font, FontRole, LineStyle, PlotStyle, Style};
