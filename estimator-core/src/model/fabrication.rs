//! Fabrication job costs as logged by the host.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use super::CostBreakdown;
use crate::parser::fields::lenient_f64;

/// Cost breakdown of a fabrication job.
///
/// Fabrication quotes are priced when they are submitted, so log entries
/// already carry these three totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FabricationCostBreakdown {
    #[serde(deserialize_with = "lenient_f64")]
    pub materials_cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub labor_cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub components_cost: f64,
}

impl FabricationCostBreakdown {
    /// Clamp negative fields to zero.
    pub fn clamped(self) -> Self {
        Self {
            materials_cost: self.materials_cost.max(0.0),
            labor_cost: self.labor_cost.max(0.0),
            components_cost: self.components_cost.max(0.0),
        }
    }
}

impl AddAssign for FabricationCostBreakdown {
    fn add_assign(&mut self, other: Self) {
        self.materials_cost += other.materials_cost;
        self.labor_cost += other.labor_cost;
        self.components_cost += other.components_cost;
    }
}

impl CostBreakdown for FabricationCostBreakdown {
    fn total(&self) -> f64 {
        self.materials_cost + self.labor_cost + self.components_cost
    }
}
