//! Shared constants for roster pagination
//!
//! All lengths are millimetres on an A4 portrait sheet. The values are
//! estimates of the printed box model, not exact measurements.

// =============================================================================
// Page
// =============================================================================

/// A4 width
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// A4 height
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Combined page margin, subtracted once from each axis
pub const PAGE_MARGIN_MM: f32 = 24.0;

// =============================================================================
// Vertical Blocks
// =============================================================================

/// Document title block, first page only
pub const TITLE_HEIGHT_MM: f32 = 15.0;

/// Spacing below the title block
pub const TITLE_SPACING_MM: f32 = 8.0;

/// Top offset of every page after the first
pub const TOP_OFFSET_MM: f32 = 4.0;

/// Section header, charged once per section per page
pub const SECTION_HEADER_HEIGHT_MM: f32 = 12.0;

// =============================================================================
// Card Grid
// =============================================================================

/// Horizontal gap between cards
pub const CARD_GAP_MM: f32 = 3.0;

/// Vertical gap between card rows
pub const ROW_GAP_MM: f32 = 3.0;

/// Gap after each group of cards
pub const GROUP_GAP_MM: f32 = 4.0;

/// Card photo aspect ratio (height / width), 3:4 portrait
pub const CARD_ASPECT_RATIO: f32 = 4.0 / 3.0;

// =============================================================================
// Size Tiers
// =============================================================================

/// Totals at or below this are `Large`
pub const LARGE_TIER_MAX_MEMBERS: usize = 12;

/// Totals at or below this (and above the large threshold) are `Medium`
pub const MEDIUM_TIER_MAX_MEMBERS: usize = 24;

pub const LARGE_COLUMNS: usize = 4;
pub const MEDIUM_COLUMNS: usize = 5;
pub const SMALL_COLUMNS: usize = 6;

/// Name and job title allowance below the photo
pub const LARGE_LABEL_MM: f32 = 15.0;
pub const MEDIUM_LABEL_MM: f32 = 12.0;
pub const SMALL_LABEL_MM: f32 = 10.0;
