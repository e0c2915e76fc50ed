//! Common behaviour of per-category cost breakdowns.

use std::ops::AddAssign;

/// A field-by-field cost breakdown that can be summed.
///
/// Implementations add each field independently; there is no cross-term, so
/// folding a list of breakdowns is associative and commutative.
pub trait CostBreakdown: Default + Copy + AddAssign + PartialEq {
    /// Sum of all cost fields.
    fn total(&self) -> f64;

    /// Check if every field is zero.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
