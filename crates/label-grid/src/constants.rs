//! Shared constants for label layout
//!
//! This module centralizes default settings and tolerances used throughout
//! the layout process.

// =============================================================================
// Default Page Settings (A4, 3 x 8 labels of 64mm x 32mm)
// =============================================================================

pub const DEFAULT_PAGE_WIDTH: &str = "210mm";
pub const DEFAULT_PAGE_HEIGHT: &str = "297mm";

pub const DEFAULT_TOP_MARGIN: &str = "14mm";
pub const DEFAULT_BOTTOM_MARGIN: &str = "14mm";
pub const DEFAULT_LEFT_MARGIN: &str = "6mm";
pub const DEFAULT_RIGHT_MARGIN: &str = "6mm";

pub const DEFAULT_PAGE_COLUMNS: i64 = 3;
/// Eight rows rather than the nine of the classic A4 3 x 9 sheet: nine 32mm
/// rows need 288mm and the printable height between 14mm margins is 269mm.
pub const DEFAULT_PAGE_ROWS: i64 = 8;

pub const DEFAULT_LABEL_WIDTH: &str = "64mm";
pub const DEFAULT_LABEL_HEIGHT: &str = "32mm";

// =============================================================================
// Geometry
// =============================================================================

/// Tolerance for extent comparisons.
///
/// Cell sizes come from a division, so multiplying back out can land a hair
/// above the printable extent (e.g. `200.0 / 3.0 * 3.0`).
pub const EXTENT_TOLERANCE: f64 = 1e-9;

// =============================================================================
// Preview
// =============================================================================

/// CSS unit used when no configuration field carries a unit
pub const FALLBACK_CSS_UNIT: &str = "mm";
