//! Character width classification.

mod width;

pub use width::{WIDE_THRESHOLD, WidthMethod, cells_per_char, is_wide, text_width};
pub(crate) use width::is_line_break;
