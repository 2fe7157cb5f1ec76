//! Card geometry per size tier
//!
//! Card width is whatever is left of the usable page width after the
//! inter-card gaps, split evenly across the columns. Card height follows
//! the 3:4 photo plus a label allowance that shrinks with the tier.

use crate::constants::CARD_ASPECT_RATIO;
use crate::options::LayoutOptions;
use crate::types::SizeTier;

/// Grid footprint of a single card for one tier, in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub tier: SizeTier,
    /// Cards per row
    pub columns: usize,
    pub card_width_mm: f32,
    pub card_height_mm: f32,
    /// Card height plus the gap below each row
    pub row_pitch_mm: f32,
}

impl Geometry {
    /// Rows needed to hold `cards` cards (partial rows count as whole)
    pub fn rows_for(&self, cards: usize) -> usize {
        cards.div_ceil(self.columns)
    }

    /// Height consumed by `rows` rows, including the gap after each row
    pub fn rows_height_mm(&self, rows: usize) -> f32 {
        rows as f32 * self.row_pitch_mm
    }
}

/// Geometry for a tier with the default A4 constants.
pub fn geometry_for(tier: SizeTier) -> Geometry {
    LayoutOptions::default().geometry_for(tier)
}

impl LayoutOptions {
    /// Geometry for a tier using these options.
    pub fn geometry_for(&self, tier: SizeTier) -> Geometry {
        let spec = self.tier_spec(tier);
        let columns = spec.columns.max(1);

        let gaps_mm = (columns - 1) as f32 * self.card_gap_mm;
        let card_width_mm = (self.page_width_mm - self.margin_mm - gaps_mm) / columns as f32;
        let card_height_mm = card_width_mm * CARD_ASPECT_RATIO + spec.label_height_mm;

        Geometry {
            tier,
            columns,
            card_width_mm,
            card_height_mm,
            row_pitch_mm: card_height_mm + self.row_gap_mm,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
