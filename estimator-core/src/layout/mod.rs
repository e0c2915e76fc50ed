//! Material layout (nesting) calculations.

mod nesting;

pub use nesting::*;
