//! Validation logic for estimate requests.

mod validate;

pub use validate::*;
