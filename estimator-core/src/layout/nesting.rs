//! Grid nesting of rectangular artwork on sheet and roll stock.
//!
//! Pieces are laid out in a regular grid in a single orientation, with a
//! fixed spacing between neighbours. Both orientations are tried and the
//! one fitting more pieces wins; ties go to portrait.

use serde::Serialize;
use tracing::debug;

use crate::config::{float_cmp::is_positive, PricingConfig, INCHES_PER_FOOT};
use crate::error::{EstimateError, Result};
use crate::model::{Material, MaterialKind};

/// Orientation of the artwork relative to the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Artwork width runs across the stock width.
    Portrait,
    /// Artwork rotated 90 degrees.
    Landscape,
}

/// Artwork dimensions with bleed applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    /// Add `bleed` to both nominal dimensions.
    pub fn with_bleed(art_width: f64, art_height: f64, bleed: f64) -> Self {
        Self {
            width: art_width + bleed,
            height: art_height + bleed,
        }
    }

    /// Footprint area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Layout of a job on roll stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollLayout {
    pub orientation: Orientation,
    /// Pieces across the roll width.
    pub columns: u64,
    /// Rows along the roll.
    pub rows: u64,
    /// Length consumed by one row (inches).
    pub row_footprint: f64,
    /// Total roll length consumed (inches).
    pub linear_inches: f64,
    /// Total roll length consumed (feet).
    pub linear_feet: f64,
}

/// Layout of a job on sheet stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SheetLayout {
    pub orientation: Orientation,
    pub pieces_per_sheet: u64,
    pub sheets_needed: u64,
}

/// Layout result for either stock kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Layout {
    Roll(RollLayout),
    Sheet(SheetLayout),
}

impl Layout {
    /// Roll length in feet, zero for sheets.
    pub fn linear_feet(&self) -> f64 {
        match self {
            Layout::Roll(roll) => roll.linear_feet,
            Layout::Sheet(_) => 0.0,
        }
    }

    /// Whole sheets needed, zero for rolls.
    pub fn sheets_needed(&self) -> u64 {
        match self {
            Layout::Roll(_) => 0,
            Layout::Sheet(sheet) => sheet.sheets_needed,
        }
    }
}

/// How many pieces of length `piece` fit along `span`, with `spacing` between pieces.
#[inline]
fn fit_count(span: f64, piece: f64, spacing: f64) -> u64 {
    if span <= 0.0 || piece <= 0.0 {
        return 0;
    }
    ((span + spacing) / (piece + spacing)).floor() as u64
}

/// Lay out `quantity` pieces across a roll of `roll_width` inches.
///
/// Returns `None` when the footprint is wider than the roll in both
/// orientations.
pub fn layout_roll(roll_width: f64, footprint: Footprint, quantity: f64, spacing: f64) -> Option<RollLayout> {
    let portrait_cols = fit_count(roll_width, footprint.width, spacing);
    let landscape_cols = fit_count(roll_width, footprint.height, spacing);
    if portrait_cols == 0 && landscape_cols == 0 {
        return None;
    }

    let (orientation, columns, row_footprint) = if landscape_cols > portrait_cols {
        (Orientation::Landscape, landscape_cols, footprint.width)
    } else {
        (Orientation::Portrait, portrait_cols, footprint.height)
    };
    let columns = columns.max(1);
    let rows = (quantity / columns as f64).ceil().max(0.0) as u64;
    let linear_inches = if rows == 0 {
        0.0
    } else {
        rows as f64 * row_footprint + (rows - 1) as f64 * spacing
    };

    debug!(
        "Roll layout: {:?}, {} column(s) x {} row(s), {:.3} in",
        orientation, columns, rows, linear_inches
    );

    Some(RollLayout {
        orientation,
        columns,
        rows,
        row_footprint,
        linear_inches,
        linear_feet: linear_inches / INCHES_PER_FOOT,
    })
}

/// Lay out `quantity` pieces on sheets of `sheet_width` x `sheet_height` inches.
///
/// Returns `None` when the footprint exceeds the sheet in both orientations.
pub fn layout_sheet(
    sheet_width: f64,
    sheet_height: f64,
    footprint: Footprint,
    quantity: f64,
    spacing: f64,
) -> Option<SheetLayout> {
    let portrait = fit_count(sheet_width, footprint.width, spacing)
        * fit_count(sheet_height, footprint.height, spacing);
    let landscape = fit_count(sheet_width, footprint.height, spacing)
        * fit_count(sheet_height, footprint.width, spacing);
    if portrait == 0 && landscape == 0 {
        return None;
    }

    let (orientation, pieces_per_sheet) = if landscape > portrait {
        (Orientation::Landscape, landscape)
    } else {
        (Orientation::Portrait, portrait)
    };
    let pieces_per_sheet = pieces_per_sheet.max(1);
    let sheets_needed = (quantity / pieces_per_sheet as f64).ceil().max(0.0) as u64;

    debug!(
        "Sheet layout: {:?}, {} per sheet, {} sheet(s)",
        orientation, pieces_per_sheet, sheets_needed
    );

    Some(SheetLayout {
        orientation,
        pieces_per_sheet,
        sheets_needed,
    })
}

/// Compute the layout of a job on a catalog material.
///
/// The bill of materials sizes stock from the layout an estimate was priced on.
pub fn compute_layout(
    material: &Material,
    art_width: f64,
    art_height: f64,
    quantity: f64,
    config: &PricingConfig,
) -> Result<Layout> {
    if !is_positive(quantity) {
        return Err(EstimateError::validation(format!(
            "quantity must be positive (got {})",
            quantity
        )));
    }
    if !is_positive(art_width) || !is_positive(art_height) {
        return Err(EstimateError::validation(format!(
            "artwork dimensions must be positive (got {} x {})",
            art_width, art_height
        )));
    }

    let footprint = Footprint::with_bleed(art_width, art_height, config.bleed);
    let fit_error = || EstimateError::Fit {
        material: material.name.clone(),
        art_width: footprint.width,
        art_height: footprint.height,
        width: material.width,
        length: material.height_or_length,
    };

    match material.kind {
        MaterialKind::Roll => layout_roll(material.width, footprint, quantity, config.spacing)
            .map(Layout::Roll)
            .ok_or_else(fit_error),
        MaterialKind::Sheet => layout_sheet(
            material.width,
            material.height_or_length,
            footprint,
            quantity,
            config.spacing,
        )
        .map(Layout::Sheet)
        .ok_or_else(fit_error),
    }
}
