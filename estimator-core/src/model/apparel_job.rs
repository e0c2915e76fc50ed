//! Apparel (screen print) job request and cost breakdown.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use super::CostBreakdown;
use crate::config::TimeUnit;
use crate::parser::fields::{
    lenient_bool, lenient_f64, lenient_opt_string, lenient_time_unit, null_as_default,
};

/// An extra print location beyond front and back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintLocation {
    #[serde(deserialize_with = "lenient_f64")]
    pub colors: f64,
}

/// Ink color changes, charged per change rather than per garment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorChange {
    #[serde(deserialize_with = "lenient_bool")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: f64,
}

/// Design labor billed by the hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignLabor {
    #[serde(deserialize_with = "lenient_bool")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient_time_unit")]
    pub unit: TimeUnit,
}

impl DesignLabor {
    /// Billable hours, zero when not enabled.
    pub fn hours(&self) -> f64 {
        if self.enabled {
            self.unit.to_hours(self.quantity.max(0.0))
        } else {
            0.0
        }
    }
}

/// Optional add-ons for an apparel job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdditionalOptions {
    #[serde(deserialize_with = "lenient_bool")]
    pub oversized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub color_change: ColorChange,
    /// Poly, nylon, spandex or mesh garments.
    #[serde(deserialize_with = "lenient_bool")]
    pub poly_nylon: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub metallic_shimmer: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub glow: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub fleece: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub design_labor: DesignLabor,
}

/// A logged or requested apparel job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApparelJobRequest {
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: f64,
    /// Garment description, used as the bill-of-materials line.
    #[serde(deserialize_with = "lenient_opt_string")]
    pub garment: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub garment_unit_cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub front_colors: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub back_colors: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_locations: Vec<PrintLocation>,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_options: AdditionalOptions,
}

impl ApparelJobRequest {
    /// Create a request with front and back color counts.
    pub fn new(quantity: f64, garment_unit_cost: f64, front_colors: f64, back_colors: f64) -> Self {
        Self {
            quantity,
            garment_unit_cost,
            front_colors,
            back_colors,
            ..Default::default()
        }
    }

    /// Colors across front, back and every additional location.
    pub fn total_colors(&self) -> f64 {
        self.front_colors.max(0.0)
            + self.back_colors.max(0.0)
            + self
                .additional_locations
                .iter()
                .map(|loc| loc.colors.max(0.0))
                .sum::<f64>()
    }
}

/// Cost breakdown of an apparel job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApparelCostBreakdown {
    pub garment_total: f64,
    pub total_print_costs: f64,
    pub screen_setup_costs: f64,
    pub additional_options_costs: f64,
}

impl AddAssign for ApparelCostBreakdown {
    fn add_assign(&mut self, other: Self) {
        self.garment_total += other.garment_total;
        self.total_print_costs += other.total_print_costs;
        self.screen_setup_costs += other.screen_setup_costs;
        self.additional_options_costs += other.additional_options_costs;
    }
}

impl CostBreakdown for ApparelCostBreakdown {
    fn total(&self) -> f64 {
        self.garment_total
            + self.total_print_costs
            + self.screen_setup_costs
            + self.additional_options_costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_colors_with_locations() {
        let mut req = ApparelJobRequest::new(12.0, 4.0, 2.0, 1.0);
        req.additional_locations = vec![PrintLocation { colors: 1.0 }, PrintLocation { colors: 2.0 }];
        assert_eq!(req.total_colors(), 6.0);
    }

    #[test]
    fn test_deserialize_nested_options() {
        let json = r#"{
            "quantity": 24,
            "garment": "Gildan 5000 Black",
            "garmentUnitCost": "5.00",
            "frontColors": 2,
            "additionalLocations": [{"colors": "1"}],
            "additionalOptions": {
                "glow": true,
                "colorChange": {"enabled": true, "quantity": 2},
                "designLabor": {"enabled": "yes", "quantity": 45, "unit": "Minutes"}
            }
        }"#;
        let req: ApparelJobRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.garment.as_deref(), Some("Gildan 5000 Black"));
        assert_eq!(req.garment_unit_cost, 5.0);
        assert_eq!(req.back_colors, 0.0);
        assert_eq!(req.total_colors(), 3.0);
        assert!(req.additional_options.glow);
        assert!(!req.additional_options.fleece);
        assert_eq!(req.additional_options.color_change.quantity, 2.0);
        assert_eq!(req.additional_options.design_labor.hours(), 0.75);
    }

    #[test]
    fn test_deserialize_null_groups() {
        let json = r#"{
            "quantity": 24,
            "garmentUnitCost": 5,
            "frontColors": 1,
            "additionalLocations": null,
            "additionalOptions": null
        }"#;
        let req: ApparelJobRequest = serde_json::from_str(json).unwrap();
        assert!(req.additional_locations.is_empty());
        assert_eq!(req.additional_options, AdditionalOptions::default());

        let json = r#"{"quantity": 24, "additionalOptions": {"colorChange": null, "designLabor": null, "glow": "yes"}}"#;
        let req: ApparelJobRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.additional_options.color_change, ColorChange::default());
        assert_eq!(req.additional_options.design_labor.hours(), 0.0);
        assert!(req.additional_options.glow);
    }

    #[test]
    fn test_design_labor_disabled_is_free() {
        let labor = DesignLabor {
            enabled: false,
            quantity: 3.0,
            unit: TimeUnit::Hours,
        };
        assert_eq!(labor.hours(), 0.0);
    }
}
