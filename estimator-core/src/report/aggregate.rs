//! Folding per-item breakdowns into category totals.

use serde::Serialize;

use crate::model::CostBreakdown;

/// Field-by-field sum of a category's breakdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryTotals<B> {
    /// Number of breakdowns folded in.
    pub count: usize,
    pub totals: B,
}

impl<B: CostBreakdown> CategoryTotals<B> {
    /// Fold one breakdown in.
    pub fn add(&mut self, breakdown: B) {
        self.count += 1;
        self.totals += breakdown;
    }

    /// Sum of all cost fields.
    pub fn total(&self) -> f64 {
        self.totals.total()
    }
}

/// Sum breakdowns field by field.
pub fn aggregate<'a, B, I>(breakdowns: I) -> CategoryTotals<B>
where
    B: CostBreakdown + 'a,
    I: IntoIterator<Item = &'a B>,
{
    let mut totals = CategoryTotals::default();
    for breakdown in breakdowns {
        totals.add(*breakdown);
    }
    totals
}
