//! Vector drawing context for raster chart rendering, built on tiny-skia.
//!
//! This crate provides the small subset of a Canvas 2D style API that a chart
//! backend needs: stroked and filled paths with dash patterns, arcs, rectangle
//! clearing, and compositing of single-channel opacity masks (rasterized text)
//! through the current fill color.
//!
//! # Example
//!
//! ```rust,ignore
//! use imgg_canvas2d::{Canvas2dContext, RectParams};
//!
//! let mut ctx = Canvas2dContext::new(400, 300)?;
//! ctx.set_fill_style("#ff0000")?;
//! ctx.fill_rect(&RectParams { x: 10.0, y: 10.0, width: 100.0, height: 50.0 });
//! let png_data = ctx.to_png(None)?;
//! ```

mod arc;
mod context;
mod drawing_state;
mod error;
mod geometry;
mod style;

// Re-export public API
pub use context::Canvas2dContext;
pub use drawing_state::DrawingState;
pub use error::{Canvas2dError, Canvas2dResult};
pub use geometry::{ArcParams, CanvasColor, RectParams};
pub use style::{FillStyle, LineCap, LineJoin};
