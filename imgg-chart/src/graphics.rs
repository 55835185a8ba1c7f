//! The drawing-surface contract that chart layout code renders against.

use crate::color::Color;
use crate::data::{BarInfo, BoxInfo, EPoint, Key, Range, WedgeInfo};
use crate::generic;
use crate::style::{Font, PlotStyle, Style};

/// A drawing surface for charts.
///
/// Implementors provide the primitive operations; the composite ones
/// (symbols, axes, scatter plots, box plots, legends, bars and rings) have
/// default bodies built from the primitives by the algorithms in
/// [`crate::generic`]. All coordinates are integer screen pixels with the
/// origin at the top left and y growing downwards.
pub trait Graphics {
    /// Start of a drawing session.
    fn begin(&mut self) {}

    /// End of a drawing session.
    fn end(&mut self) {}

    /// Background color of the surface.
    fn background(&self) -> Color;

    /// Width and height of the drawable area.
    fn dimensions(&self) -> (i32, i32);

    /// Advance width, line height and whether the font is monospaced.
    fn font_metrics(&self, font: &Font) -> (f32, i32, bool);

    /// Width of `text` in pixels.
    fn text_len(&self, text: &str, font: &Font) -> i32 {
        generic::generic_text_len(self, text, font)
    }

    /// Straight line from (x0, y0) to (x1, y1).
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: &Style);

    /// Open polyline through `points`.
    fn path(&mut self, points: &[(i32, i32)], style: &Style);

    /// Text anchored at (x, y).
    ///
    /// `align` is a vertical (`t`, `c`, `b`) plus horizontal (`l`, `c`, `r`)
    /// code naming the point of the text box placed on the anchor. `rot` is
    /// a counterclockwise rotation in degrees.
    fn text(&mut self, x: i32, y: i32, text: &str, align: &str, rot: i32, font: &Font);

    /// Rectangle with top left corner (x, y), filled when the style has a fill color.
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &Style);

    /// Pie or ring segment centered on (x, y) between angles `phi` and `psi`
    /// (radians, clockwise on screen), with outer radius `ro` and inner
    /// radius `ri`.
    #[allow(clippy::too_many_arguments)]
    fn wedge(&mut self, x: i32, y: i32, ro: i32, ri: i32, phi: f64, psi: f64, style: &Style);

    /// Chart title.
    fn title(&mut self, text: &str);

    fn symbol(&mut self, x: i32, y: i32, style: &Style) {
        generic::generic_symbol(self, x, y, style);
    }

    /// Horizontal axis at screen row `y`, mirrored at `y_mirror`.
    fn x_axis(&mut self, range: &Range, y: i32, y_mirror: i32) {
        generic::generic_x_axis(self, range, y, y_mirror);
    }

    /// Vertical axis at screen column `x`, mirrored at `x_mirror`.
    fn y_axis(&mut self, range: &Range, x: i32, x_mirror: i32) {
        generic::generic_y_axis(self, range, x, x_mirror);
    }

    fn scatter(&mut self, points: &[EPoint], plot_style: PlotStyle, style: &Style) {
        generic::generic_scatter(self, points, plot_style, style);
    }

    fn boxes(&mut self, boxes: &[BoxInfo], width: i32, style: &Style) {
        generic::generic_boxes(self, boxes, width, style);
    }

    fn key(&mut self, x: i32, y: i32, key: &Key) {
        generic::generic_key(self, x, y, key);
    }

    fn bars(&mut self, bars: &[BarInfo], style: &Style) {
        generic::generic_bars(self, bars, style);
    }

    fn rings(&mut self, wedges: &[WedgeInfo], x: i32, y: i32, ro: i32, ri: i32) {
        generic::generic_rings(self, wedges, x, y, ro, ri, 1.0);
    }
}
