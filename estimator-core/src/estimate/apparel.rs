//! Apparel (screen print) job costing.

use super::{ApparelEstimate, Estimate};
use crate::config::float_cmp::non_negative;
use crate::config::PricingConfig;
use crate::error::EstimateError;
use crate::model::{AdditionalOptions, ApparelCostBreakdown, ApparelJobRequest};
use crate::validation::validate_apparel_request;

/// Sum of enabled add-ons for `quantity` garments.
fn additional_options_cost(config: &PricingConfig, options: &AdditionalOptions, quantity: f64) -> f64 {
    let mut cost = 0.0;
    if options.oversized {
        cost += quantity * config.oversized_per_unit;
    }
    if options.color_change.enabled {
        cost += non_negative(options.color_change.quantity) * config.color_change_each;
    }
    if options.poly_nylon {
        cost += quantity * config.poly_nylon_per_unit;
    }
    if options.metallic_shimmer {
        cost += quantity * config.metallic_shimmer_per_unit;
    }
    if options.glow {
        cost += quantity * config.glow_per_unit;
    }
    if options.fleece {
        cost += quantity * config.fleece_per_unit;
    }
    cost += options.design_labor.hours() * config.apparel_design_rate;
    cost
}

/// Estimate an apparel job with the default rates.
pub fn estimate_apparel_cost(request: &ApparelJobRequest) -> ApparelEstimate {
    estimate_apparel_cost_with(&PricingConfig::default(), request)
}

/// Estimate an apparel job.
///
/// `totalPrintCosts` is a flat per-color, per-garment rate, not a tiered
/// price table.
pub fn estimate_apparel_cost_with(config: &PricingConfig, request: &ApparelJobRequest) -> ApparelEstimate {
    let validation = validate_apparel_request(request);
    if !validation.passed {
        return Estimate::zeroed(
            EstimateError::validation(validation.error_message()),
            validation.warnings,
        );
    }

    let quantity = request.quantity;
    let total_colors = request.total_colors();

    let breakdown = ApparelCostBreakdown {
        garment_total: non_negative(quantity * request.garment_unit_cost),
        total_print_costs: non_negative(quantity * total_colors * config.print_per_color_per_unit),
        screen_setup_costs: non_negative(total_colors * config.screen_setup_per_color),
        additional_options_costs: non_negative(additional_options_cost(
            config,
            &request.additional_options,
            quantity,
        )),
    };

    Estimate::priced(breakdown, None, validation.warnings)
}
