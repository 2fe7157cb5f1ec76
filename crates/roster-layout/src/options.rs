use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-tier card grid settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TierSpec {
    /// Cards per row
    pub columns: usize,
    /// Allowance for the name and job title below the photo
    pub label_height_mm: f32,
}

/// Layout estimation constants for an A4 roster
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    // Page
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,

    // Vertical blocks
    pub title_height_mm: f32,
    pub title_spacing_mm: f32,
    pub top_offset_mm: f32,
    pub section_header_height_mm: f32,

    // Gaps
    pub card_gap_mm: f32,
    pub row_gap_mm: f32,
    pub group_gap_mm: f32,

    // Tier thresholds (inclusive upper bounds)
    pub large_threshold: usize,
    pub medium_threshold: usize,

    // Tier grids
    pub large: TierSpec,
    pub medium: TierSpec,
    pub small: TierSpec,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            margin_mm: PAGE_MARGIN_MM,
            title_height_mm: TITLE_HEIGHT_MM,
            title_spacing_mm: TITLE_SPACING_MM,
            top_offset_mm: TOP_OFFSET_MM,
            section_header_height_mm: SECTION_HEADER_HEIGHT_MM,
            card_gap_mm: CARD_GAP_MM,
            row_gap_mm: ROW_GAP_MM,
            group_gap_mm: GROUP_GAP_MM,
            large_threshold: LARGE_TIER_MAX_MEMBERS,
            medium_threshold: MEDIUM_TIER_MAX_MEMBERS,
            large: TierSpec {
                columns: LARGE_COLUMNS,
                label_height_mm: LARGE_LABEL_MM,
            },
            medium: TierSpec {
                columns: MEDIUM_COLUMNS,
                label_height_mm: MEDIUM_LABEL_MM,
            },
            small: TierSpec {
                columns: SMALL_COLUMNS,
                label_height_mm: SMALL_LABEL_MM,
            },
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| RosterError::Config(format!("Failed to parse layout options: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            RosterError::Config(format!("Failed to serialize layout options: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn tier_spec(&self, tier: SizeTier) -> &TierSpec {
        match tier {
            SizeTier::Large => &self.large,
            SizeTier::Medium => &self.medium,
            SizeTier::Small => &self.small,
        }
    }

    /// Vertical space available for content on every page
    pub fn available_height_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }

    /// Horizontal space available for the card grid
    pub fn available_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm
    }

    /// Height already consumed when the first page opens (title block)
    pub fn first_page_offset_mm(&self) -> f32 {
        self.title_height_mm + self.title_spacing_mm
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("page_width_mm", self.page_width_mm),
            ("page_height_mm", self.page_height_mm),
            ("margin_mm", self.margin_mm),
            ("title_height_mm", self.title_height_mm),
            ("title_spacing_mm", self.title_spacing_mm),
            ("top_offset_mm", self.top_offset_mm),
            ("section_header_height_mm", self.section_header_height_mm),
            ("card_gap_mm", self.card_gap_mm),
            ("row_gap_mm", self.row_gap_mm),
            ("group_gap_mm", self.group_gap_mm),
            ("large.label_height_mm", self.large.label_height_mm),
            ("medium.label_height_mm", self.medium.label_height_mm),
            ("small.label_height_mm", self.small.label_height_mm),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(RosterError::Config(format!(
                    "{} must be a finite, non-negative length (got {})",
                    name, value
                )));
            }
        }

        if self.page_width_mm <= 0.0 || self.page_height_mm <= 0.0 {
            return Err(RosterError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }

        if self.available_width_mm() <= 0.0 || self.available_height_mm() <= 0.0 {
            return Err(RosterError::Config(
                "Margin leaves no usable area on the page".to_string(),
            ));
        }

        if self.medium_threshold < self.large_threshold {
            return Err(RosterError::Config(format!(
                "medium_threshold ({}) must not be below large_threshold ({})",
                self.medium_threshold, self.large_threshold
            )));
        }

        for tier in [SizeTier::Large, SizeTier::Medium, SizeTier::Small] {
            let spec = self.tier_spec(tier);
            if spec.columns == 0 {
                return Err(RosterError::Config(format!(
                    "The {} tier needs at least one column",
                    tier
                )));
            }
            let gaps = (spec.columns - 1) as f32 * self.card_gap_mm;
            if gaps >= self.available_width_mm() {
                return Err(RosterError::Config(format!(
                    "The {} tier's {} columns leave no width for cards",
                    tier, spec.columns
                )));
            }
        }

        Ok(())
    }
}
