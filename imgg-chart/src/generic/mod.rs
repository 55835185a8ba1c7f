//! Composite chart operations expressed through the primitive `Graphics` calls.
//!
//! Backends that have nothing better to offer delegate to these functions.

mod axis;
mod bars;
mod key;
mod scatter;
mod symbol;
mod text;

pub use axis::{generic_x_axis, generic_y_axis};
pub use bars::{generic_bars, generic_rings};
pub use key::generic_key;
pub use scatter::{generic_boxes, generic_scatter};
pub use symbol::generic_symbol;
pub use text::generic_text_len;
