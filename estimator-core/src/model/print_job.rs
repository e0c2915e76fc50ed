//! Print job request and cost breakdown.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use super::CostBreakdown;
use crate::config::TimeUnit;
use crate::parser::fields::{lenient_bool, lenient_f64, lenient_string, lenient_time_unit};

/// A logged or requested print job.
///
/// Every numeric field defaults to 0 when absent or non-numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintJobRequest {
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: f64,
    /// Artwork width (inches, bleed excluded).
    #[serde(deserialize_with = "lenient_f64")]
    pub art_width: f64,
    /// Artwork height (inches, bleed excluded).
    #[serde(deserialize_with = "lenient_f64")]
    pub art_height: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub material_name: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub double_sided: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub complex_shape: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub lamination: bool,
    #[serde(deserialize_with = "lenient_f64")]
    pub design_time: f64,
    #[serde(deserialize_with = "lenient_time_unit")]
    pub design_time_unit: TimeUnit,
    #[serde(deserialize_with = "lenient_f64")]
    pub labor_decals_time: f64,
    #[serde(deserialize_with = "lenient_time_unit")]
    pub labor_decals_time_unit: TimeUnit,
    #[serde(deserialize_with = "lenient_f64")]
    pub labor_finishing_time: f64,
    #[serde(deserialize_with = "lenient_time_unit")]
    pub labor_finishing_time_unit: TimeUnit,
    #[serde(deserialize_with = "lenient_f64")]
    pub labor_installing_time: f64,
    #[serde(deserialize_with = "lenient_time_unit")]
    pub labor_installing_time_unit: TimeUnit,
}

impl PrintJobRequest {
    /// Create a request for `quantity` pieces of `art_width` x `art_height` artwork.
    pub fn new(material_name: impl Into<String>, quantity: f64, art_width: f64, art_height: f64) -> Self {
        Self {
            material_name: material_name.into(),
            quantity,
            art_width,
            art_height,
            ..Default::default()
        }
    }

    /// Design time in hours.
    pub fn design_hours(&self) -> f64 {
        self.design_time_unit.to_hours(self.design_time.max(0.0))
    }

    /// Decal, finishing and installing time in hours.
    pub fn manual_labor_hours(&self) -> f64 {
        self.labor_decals_time_unit.to_hours(self.labor_decals_time.max(0.0))
            + self
                .labor_finishing_time_unit
                .to_hours(self.labor_finishing_time.max(0.0))
            + self
                .labor_installing_time_unit
                .to_hours(self.labor_installing_time.max(0.0))
    }
}

/// Cost breakdown of a print job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintCostBreakdown {
    pub material_cost: f64,
    pub lamination_cost: f64,
    pub ink_cost: f64,
    pub cutting_cost: f64,
    pub equipment_cost: f64,
    pub design_cost: f64,
    pub operator_cost: f64,
}

impl AddAssign for PrintCostBreakdown {
    fn add_assign(&mut self, other: Self) {
        self.material_cost += other.material_cost;
        self.lamination_cost += other.lamination_cost;
        self.ink_cost += other.ink_cost;
        self.cutting_cost += other.cutting_cost;
        self.equipment_cost += other.equipment_cost;
        self.design_cost += other.design_cost;
        self.operator_cost += other.operator_cost;
    }
}

impl CostBreakdown for PrintCostBreakdown {
    fn total(&self) -> f64 {
        self.material_cost
            + self.lamination_cost
            + self.ink_cost
            + self.cutting_cost
            + self.equipment_cost
            + self.design_cost
            + self.operator_cost
    }
}
