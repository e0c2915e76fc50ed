//! Print job costing.

use serde::Serialize;

use super::{Estimate, PrintEstimate};
use crate::catalog::{MaterialCatalog, PRINT_CATEGORY};
use crate::config::float_cmp::non_negative;
use crate::config::{PricingConfig, SQ_INCHES_PER_SQ_FOOT};
use crate::error::EstimateError;
use crate::layout::{compute_layout, Footprint, Layout};
use crate::model::{Material, PrintCostBreakdown, PrintJobRequest};
use crate::validation::validate_print_request;

/// Derived quantities that drive print costing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintMetrics {
    /// Printed area in sq ft (bleed included, doubled for double-sided).
    pub area_sqft: f64,
    /// Cut perimeter in inches (bleed excluded).
    pub perimeter_inches: f64,
    pub print_hours: f64,
    pub cut_hours: f64,
    pub rip_hours: f64,
    pub print_compute_hours: f64,
}

impl PrintMetrics {
    /// Hours of printer, cutter, RIP and compute time.
    pub fn machine_hours(&self) -> f64 {
        self.print_hours + self.cut_hours + self.rip_hours + self.print_compute_hours
    }
}

/// Compute area, perimeter and machine time for a request.
pub fn print_metrics(config: &PricingConfig, request: &PrintJobRequest) -> PrintMetrics {
    let quantity = non_negative(request.quantity);
    let art_width = non_negative(request.art_width);
    let art_height = non_negative(request.art_height);
    let footprint = Footprint::with_bleed(art_width, art_height, config.bleed);

    let mut area_sqft = footprint.area() / SQ_INCHES_PER_SQ_FOOT * quantity;
    if request.double_sided {
        area_sqft *= 2.0;
    }
    let perimeter_inches = (art_width * 2.0 + art_height * 2.0) * quantity;

    let mut cut_hours = perimeter_inches / config.cut_inches_per_min / 60.0;
    if request.complex_shape {
        cut_hours *= config.complex_shape_factor;
    }

    PrintMetrics {
        area_sqft,
        perimeter_inches,
        print_hours: area_sqft / config.print_sqft_per_min / 60.0,
        cut_hours,
        rip_hours: area_sqft / config.rip_sqft_per_min / 60.0,
        print_compute_hours: area_sqft / config.print_compute_sqft_per_min / 60.0,
    }
}

/// Price a validated request laid out on `material`.
fn price(
    config: &PricingConfig,
    material: &Material,
    request: &PrintJobRequest,
    layout: &Layout,
) -> PrintCostBreakdown {
    let metrics = print_metrics(config, request);

    let (material_cost, lamination_cost) = match layout {
        Layout::Roll(roll) => {
            let material_cost =
                (roll.linear_feet + config.roll_buffer_feet) * material.cost_per_linear_foot;
            let lamination_cost = if request.lamination {
                roll.linear_feet * config.roll_lamination_per_foot
            } else {
                0.0
            };
            (material_cost, lamination_cost)
        }
        Layout::Sheet(sheet) => {
            let material_cost = (sheet.sheets_needed as f64 * material.unit_cost)
                .max(material.unit_cost * config.min_sheet_fraction);
            let lamination_cost = if request.lamination {
                metrics.area_sqft * config.sheet_lamination_per_sqft
            } else {
                0.0
            };
            (material_cost, lamination_cost)
        }
    };

    let design_allowance_hours = (metrics.area_sqft / 25.0) * config.design_hours_per_25_sqft;
    let machine_hours = metrics.machine_hours();

    PrintCostBreakdown {
        material_cost: non_negative(material_cost),
        lamination_cost: non_negative(lamination_cost),
        ink_cost: non_negative(metrics.area_sqft * config.ink_cost_per_sqft),
        cutting_cost: non_negative(metrics.cut_hours * config.cutting_rate),
        equipment_cost: non_negative(machine_hours * config.equipment_rate),
        design_cost: non_negative(
            design_allowance_hours * config.design_rate + request.design_hours() * config.design_rate,
        ),
        operator_cost: non_negative(
            (machine_hours + request.manual_labor_hours()) * config.operator_rate,
        ),
    }
}

/// Estimate a print job on `material` with the default rates.
pub fn estimate_print_cost(material: &Material, request: &PrintJobRequest) -> PrintEstimate {
    estimate_print_cost_with(&PricingConfig::default(), material, request)
}

/// Estimate a print job on `material`.
pub fn estimate_print_cost_with(
    config: &PricingConfig,
    material: &Material,
    request: &PrintJobRequest,
) -> PrintEstimate {
    let validation = validate_print_request(request, material);
    if !validation.passed {
        return Estimate::zeroed(
            EstimateError::validation(validation.error_message()),
            validation.warnings,
        );
    }

    let layout = match compute_layout(
        material,
        request.art_width,
        request.art_height,
        request.quantity,
        config,
    ) {
        Ok(layout) => layout,
        Err(e) => return Estimate::zeroed(e, validation.warnings),
    };

    let breakdown = price(config, material, request, &layout);
    Estimate::priced(breakdown, Some(layout), validation.warnings)
}

/// Estimate a print job, resolving its material from the catalog with the default rates.
pub fn estimate_print_from_catalog(catalog: &MaterialCatalog, request: &PrintJobRequest) -> PrintEstimate {
    estimate_print_from_catalog_with(&PricingConfig::default(), catalog, request)
}

/// Estimate a print job, resolving its material from the catalog.
pub fn estimate_print_from_catalog_with(
    config: &PricingConfig,
    catalog: &MaterialCatalog,
    request: &PrintJobRequest,
) -> PrintEstimate {
    if request.material_name.trim().is_empty() {
        return Estimate::zeroed(EstimateError::validation("No material selected"), Vec::new());
    }
    match catalog.lookup(&request.material_name, Some(PRINT_CATEGORY)) {
        Some(material) => estimate_print_cost_with(config, material, request),
        None => Estimate::zeroed(
            EstimateError::Lookup {
                name: request.material_name.trim().to_string(),
            },
            Vec::new(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::CostBreakdown;

    fn banner() -> Material {
        Material::roll("Banner 13oz", 60.0, 150.0, 225.0)
    }

    fn coroplast() -> Material {
        Material::sheet("Coroplast 4mm", 48.0, 96.0, 18.0)
    }

    // ==================== print_metrics tests ====================

    #[test]
    fn test_metrics_area_and_perimeter() {
        let request = PrintJobRequest::new("Banner 13oz", 10.0, 10.0, 10.0);
        let m = print_metrics(&PricingConfig::default(), &request);
        assert!(approx_eq(m.area_sqft, 10.25 * 10.25 / 144.0 * 10.0));
        assert!(approx_eq(m.perimeter_inches, 400.0));
        assert!(approx_eq(m.cut_hours, 400.0 / 120.0 / 60.0));
        assert!(approx_eq(m.print_hours, m.area_sqft / 0.83 / 60.0));
        assert!(approx_eq(m.rip_hours, m.area_sqft / 20.52 / 60.0));
        assert!(approx_eq(m.print_compute_hours, m.area_sqft / 6.2 / 60.0));
    }

    #[test]
    fn test_metrics_double_sided_and_complex() {
        let mut request = PrintJobRequest::new("Banner 13oz", 10.0, 10.0, 10.0);
        let single = print_metrics(&PricingConfig::default(), &request);
        request.double_sided = true;
        request.complex_shape = true;
        let double = print_metrics(&PricingConfig::default(), &request);
        assert!(approx_eq(double.area_sqft, single.area_sqft * 2.0));
        assert!(approx_eq(double.perimeter_inches, single.perimeter_inches));
        assert!(approx_eq(double.cut_hours, single.cut_hours * 1.5));
    }

    // ==================== roll estimate tests ====================

    #[test]
    fn test_roll_material_cost() {
        let request = PrintJobRequest::new("Banner 13oz", 10.0, 10.0, 10.0);
        let estimate = estimate_print_cost(&banner(), &request);
        assert!(estimate.is_priced());
        let linear_feet = 20.75 / 12.0;
        assert!(approx_eq(estimate.breakdown.material_cost, (linear_feet + 2.5) * 1.5));
        assert!(approx_eq(estimate.breakdown.material_cost, 6.34375));
        assert_eq!(estimate.breakdown.lamination_cost, 0.0);
    }

    #[test]
    fn test_roll_full_breakdown() {
        let mut request = PrintJobRequest::new("Banner 13oz", 10.0, 10.0, 10.0);
        request.lamination = true;
        request.design_time = 30.0;
        request.design_time_unit = crate::config::TimeUnit::Minutes;
        request.labor_installing_time = 2.0;

        let b = estimate_print_cost(&banner(), &request).breakdown;
        let m = print_metrics(&PricingConfig::default(), &request);
        let linear_feet = 20.75 / 12.0;

        assert!(approx_eq(b.lamination_cost, linear_feet * 1.02));
        assert!(approx_eq(b.ink_cost, m.area_sqft * 0.165));
        assert!(approx_eq(b.cutting_cost, m.cut_hours * 25.0));
        assert!(approx_eq(b.design_cost, (m.area_sqft / 25.0) * 0.0625 * 60.0 + 0.5 * 60.0));
        assert!(approx_eq(b.equipment_cost, m.machine_hours() * 4.95));
        assert!(approx_eq(b.operator_cost, (m.machine_hours() + 2.0) * 28.0));
    }

    #[test]
    fn test_roll_fit_failure_zeroes_breakdown() {
        let request = PrintJobRequest::new("Banner 13oz", 1.0, 70.0, 70.0);
        let estimate = estimate_print_cost(&banner(), &request);
        assert!(!estimate.is_priced());
        assert!(estimate.breakdown.is_zero());
        assert!(estimate.layout.is_none());
        assert!(matches!(estimate.failure, Some(EstimateError::Fit { .. })));
    }

    // ==================== sheet estimate tests ====================

    #[test]
    fn test_sheet_material_cost() {
        let request = PrintJobRequest::new("Coroplast 4mm", 40.0, 12.0, 12.0);
        let estimate = estimate_print_cost(&coroplast(), &request);
        assert_eq!(estimate.layout.map(|l| l.sheets_needed()), Some(2));
        assert!(approx_eq(estimate.breakdown.material_cost, 36.0));
    }

    #[test]
    fn test_sheet_lamination_by_area() {
        let mut request = PrintJobRequest::new("Coroplast 4mm", 40.0, 12.0, 12.0);
        request.lamination = true;
        let estimate = estimate_print_cost(&coroplast(), &request);
        let area = 12.25 * 12.25 / 144.0 * 40.0;
        assert!(approx_eq(estimate.breakdown.lamination_cost, area * 0.2267));
    }

    #[test]
    fn test_sheet_single_piece_charges_full_sheet() {
        let request = PrintJobRequest::new("Coroplast 4mm", 1.0, 6.0, 6.0);
        let estimate = estimate_print_cost(&coroplast(), &request);
        assert!(approx_eq(estimate.breakdown.material_cost, 18.0));
    }

    // ==================== validation tests ====================

    #[test]
    fn test_zero_quantity_is_zeroed() {
        let request = PrintJobRequest::new("Coroplast 4mm", 0.0, 12.0, 12.0);
        let estimate = estimate_print_cost(&coroplast(), &request);
        assert!(estimate.breakdown.is_zero());
        assert!(matches!(estimate.failure, Some(EstimateError::Validation { .. })));
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let mut request = PrintJobRequest::new("Banner 13oz", 37.0, 18.0, 24.0);
        request.double_sided = true;
        request.lamination = true;
        let a = estimate_print_cost(&banner(), &request);
        let b = estimate_print_cost(&banner(), &request);
        assert_eq!(a, b);
    }

    // ==================== catalog estimate tests ====================

    #[test]
    fn test_from_catalog_lookup_failure() {
        let catalog = MaterialCatalog::new();
        let request = PrintJobRequest::new("Unobtainium", 5.0, 12.0, 12.0);
        let estimate = estimate_print_from_catalog(&catalog, &request);
        assert!(estimate.breakdown.is_zero());
        assert_eq!(
            estimate.failure,
            Some(EstimateError::Lookup {
                name: "Unobtainium".to_string()
            })
        );
    }

    #[test]
    fn test_from_catalog_missing_material_name() {
        let catalog = MaterialCatalog::new();
        let request = PrintJobRequest::new("", 5.0, 12.0, 12.0);
        let estimate = estimate_print_from_catalog(&catalog, &request);
        assert!(matches!(estimate.failure, Some(EstimateError::Validation { .. })));
    }

    #[test]
    fn test_from_catalog_uses_print_materials_only() {
        let mut catalog = MaterialCatalog::new();
        catalog.push(coroplast(), &["Fabrication"]);
        let request = PrintJobRequest::new("Coroplast 4mm", 5.0, 12.0, 12.0);
        let estimate = estimate_print_from_catalog(&catalog, &request);
        assert!(matches!(estimate.failure, Some(EstimateError::Lookup { .. })));

        catalog.push(coroplast(), &[PRINT_CATEGORY]);
        let estimate = estimate_print_from_catalog(&catalog, &request);
        assert!(estimate.is_priced());
    }

    #[test]
    fn test_custom_rates() {
        let config = PricingConfig {
            ink_cost_per_sqft: 0.0,
            ..Default::default()
        };
        let request = PrintJobRequest::new("Banner 13oz", 10.0, 10.0, 10.0);
        let estimate = estimate_print_cost_with(&config, &banner(), &request);
        assert_eq!(estimate.breakdown.ink_cost, 0.0);
        assert!(estimate.breakdown.material_cost > 0.0);
    }
}
