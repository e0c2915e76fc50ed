//! Pricing constants and settings for the estimators.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Bleed margin added to both artwork dimensions (inches).
pub const BLEED: f64 = 0.25;

/// Spacing between nested pieces (inches).
pub const SPACING: f64 = 0.25;

/// Inches per linear foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Square inches per square foot.
pub const SQ_INCHES_PER_SQ_FOOT: f64 = 144.0;

/// Extra roll length charged on every roll job (feet).
pub const ROLL_BUFFER_FEET: f64 = 2.5;

/// Minimum fraction of a sheet charged on sheet jobs.
pub const MIN_SHEET_FRACTION: f64 = 0.5;

/// Printer throughput (sq ft per minute).
pub const PRINT_SQFT_PER_MIN: f64 = 0.83;

/// Cutter throughput (linear inches per minute).
pub const CUT_INCHES_PER_MIN: f64 = 120.0;

/// Cut time multiplier for complex (contour) shapes.
pub const COMPLEX_SHAPE_FACTOR: f64 = 1.5;

/// RIP throughput (sq ft per minute).
pub const RIP_SQFT_PER_MIN: f64 = 20.52;

/// Print-compute throughput (sq ft per minute).
pub const PRINT_COMPUTE_SQFT_PER_MIN: f64 = 6.2;

/// Ink cost per sq ft.
pub const INK_COST_PER_SQFT: f64 = 0.165;

/// Cutting labor rate per hour.
pub const CUTTING_RATE: f64 = 25.00;

/// Design time allowance: hours per 25 sq ft of artwork.
pub const DESIGN_HOURS_PER_25_SQFT: f64 = 0.0625;

/// Design labor rate per hour.
pub const DESIGN_RATE: f64 = 60.00;

/// Roll lamination cost per linear foot.
pub const ROLL_LAMINATION_PER_FOOT: f64 = 1.02;

/// Sheet lamination cost per sq ft.
pub const SHEET_LAMINATION_PER_SQFT: f64 = 0.2267;

/// Equipment rate per machine hour.
pub const EQUIPMENT_RATE: f64 = 4.95;

/// Operator rate per hour.
pub const OPERATOR_RATE: f64 = 28.00;

/// Screen setup cost per color.
pub const SCREEN_SETUP_PER_COLOR: f64 = 13.0;

/// Print cost per garment per color.
pub const PRINT_PER_COLOR_PER_UNIT: f64 = 2.0;

/// Oversized garment surcharge per unit.
pub const OVERSIZED_PER_UNIT: f64 = 1.0;

/// Ink color change cost per change.
pub const COLOR_CHANGE_EACH: f64 = 5.0;

/// Poly/nylon/spandex/mesh surcharge per unit.
pub const POLY_NYLON_PER_UNIT: f64 = 0.25;

/// Metallic/shimmer ink surcharge per unit.
pub const METALLIC_SHIMMER_PER_UNIT: f64 = 0.50;

/// Glow ink surcharge per unit.
pub const GLOW_PER_UNIT: f64 = 1.25;

/// Fleece surcharge per unit.
pub const FLEECE_PER_UNIT: f64 = 0.25;

/// Apparel design labor rate per hour.
pub const APPAREL_DESIGN_RATE: f64 = 60.0;

/// Unit of a labor time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    #[default]
    Hours,
    Minutes,
}

impl TimeUnit {
    /// Parse a unit label. Anything other than "Minutes" is hours.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "minutes" | "minute" | "min" | "mins" => TimeUnit::Minutes,
            _ => TimeUnit::Hours,
        }
    }

    /// Convert an amount in this unit to hours.
    pub fn to_hours(&self, amount: f64) -> f64 {
        match self {
            TimeUnit::Hours => amount,
            TimeUnit::Minutes => amount / 60.0,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Hours => write!(f, "Hours"),
            TimeUnit::Minutes => write!(f, "Minutes"),
        }
    }
}

/// Pricing parameters used by the estimators.
///
/// `Default` reproduces the shop's published rates. A rates file only needs
/// to name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingConfig {
    pub bleed: f64,
    pub spacing: f64,
    pub roll_buffer_feet: f64,
    pub min_sheet_fraction: f64,
    pub print_sqft_per_min: f64,
    pub cut_inches_per_min: f64,
    pub complex_shape_factor: f64,
    pub rip_sqft_per_min: f64,
    pub print_compute_sqft_per_min: f64,
    pub ink_cost_per_sqft: f64,
    pub cutting_rate: f64,
    pub design_hours_per_25_sqft: f64,
    pub design_rate: f64,
    pub roll_lamination_per_foot: f64,
    pub sheet_lamination_per_sqft: f64,
    pub equipment_rate: f64,
    pub operator_rate: f64,
    pub screen_setup_per_color: f64,
    pub print_per_color_per_unit: f64,
    pub oversized_per_unit: f64,
    pub color_change_each: f64,
    pub poly_nylon_per_unit: f64,
    pub metallic_shimmer_per_unit: f64,
    pub glow_per_unit: f64,
    pub fleece_per_unit: f64,
    pub apparel_design_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            bleed: BLEED,
            spacing: SPACING,
            roll_buffer_feet: ROLL_BUFFER_FEET,
            min_sheet_fraction: MIN_SHEET_FRACTION,
            print_sqft_per_min: PRINT_SQFT_PER_MIN,
            cut_inches_per_min: CUT_INCHES_PER_MIN,
            complex_shape_factor: COMPLEX_SHAPE_FACTOR,
            rip_sqft_per_min: RIP_SQFT_PER_MIN,
            print_compute_sqft_per_min: PRINT_COMPUTE_SQFT_PER_MIN,
            ink_cost_per_sqft: INK_COST_PER_SQFT,
            cutting_rate: CUTTING_RATE,
            design_hours_per_25_sqft: DESIGN_HOURS_PER_25_SQFT,
            design_rate: DESIGN_RATE,
            roll_lamination_per_foot: ROLL_LAMINATION_PER_FOOT,
            sheet_lamination_per_sqft: SHEET_LAMINATION_PER_SQFT,
            equipment_rate: EQUIPMENT_RATE,
            operator_rate: OPERATOR_RATE,
            screen_setup_per_color: SCREEN_SETUP_PER_COLOR,
            print_per_color_per_unit: PRINT_PER_COLOR_PER_UNIT,
            oversized_per_unit: OVERSIZED_PER_UNIT,
            color_change_each: COLOR_CHANGE_EACH,
            poly_nylon_per_unit: POLY_NYLON_PER_UNIT,
            metallic_shimmer_per_unit: METALLIC_SHIMMER_PER_UNIT,
            glow_per_unit: GLOW_PER_UNIT,
            fleece_per_unit: FLEECE_PER_UNIT,
            apparel_design_rate: APPAREL_DESIGN_RATE,
        }
    }
}

impl PricingConfig {
    /// Parse a (partial) rates override from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a float is finite and strictly positive.
    #[inline]
    pub fn is_positive(a: f64) -> bool {
        a.is_finite() && a > 0.0
    }

    /// Clamp negative and non-finite values to zero.
    #[inline]
    pub fn non_negative(a: f64) -> f64 {
        if is_positive(a) {
            a
        } else {
            0.0
        }
    }
}
