//! Raster backend for charts.
//!
//! [`ImageGraphics`] implements the [`imgg_chart::Graphics`] drawing surface
//! on top of a tiny-skia backed [`imgg_canvas2d::Canvas2dContext`]. Lines,
//! rectangles, polylines and wedges become vector paths; text is rasterized
//! from a TrueType font into opacity bitmaps, rotated when needed, and
//! composited through the text color.
//!
//! Text is fail-open: if the font cannot be loaded, drawing carries on and
//! the image comes out without labels. [`ImageGraphics::font_available`] and
//! [`default_font`] report the failure for callers that would rather stop.
//!
//! ```rust,ignore
//! use imgg_chart::{Color, Graphics, Style};
//! use imgg_rs::ImageGraphics;
//!
//! let mut g = ImageGraphics::new(320, 200, Color::WHITE)?;
//! g.line(10, 10, 300, 10, &Style::default());
//! g.text(160, 100, "Hello", "cc", 0, &Default::default());
//! std::fs::write("hello.png", g.to_png(None)?)?;
//! ```

#[macro_use]
extern crate lazy_static;

mod blend;
mod error;
pub mod font;
mod gc;
mod graphics;
pub mod rotate;
pub mod text;

pub use blend::blend;
pub use error::{FontUnavailable, TextError};
pub use font::{default_font, font_available, FontConfig, FontResource, FontSource};
pub use gc::GraphicContext;
pub use graphics::{ImageGraphics, WedgeMode};
pub use text::GlyphBitmap;

pub use imgg_canvas2d;
pub use imgg_chart;
