//! Final polish of the model response before it reaches the terminal.

pub mod formatter;
pub mod markdown;

pub use formatter::clean;
pub use markdown::{classify, parse, render_plain, Line};
