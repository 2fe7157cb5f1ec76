//! Card size classification
//!
//! A single tier is chosen for the whole document from the total member
//! count. It drives both on-screen grid density and print geometry, so
//! callers must classify once and reuse the result.

use crate::options::LayoutOptions;
use crate::types::{Document, SizeTier};

/// Classify a member count with the default thresholds (12 / 24).
pub fn classify(total_members: usize) -> SizeTier {
    LayoutOptions::default().classify(total_members)
}

/// Classify a whole document by its total member count.
pub fn classify_document(document: &Document) -> SizeTier {
    classify(document.total_members())
}

impl LayoutOptions {
    /// Classify a member count against these options' thresholds.
    ///
    /// Boundary values belong to the lower tier: a count equal to
    /// `large_threshold` is still `Large`.
    pub fn classify(&self, total_members: usize) -> SizeTier {
        if total_members <= self.large_threshold {
            SizeTier::Large
        } else if total_members <= self.medium_threshold {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(0), SizeTier::Large);
        assert_eq!(classify(12), SizeTier::Large);
        assert_eq!(classify(13), SizeTier::Medium);
        assert_eq!(classify(24), SizeTier::Medium);
        assert_eq!(classify(25), SizeTier::Small);
        assert_eq!(classify(500), SizeTier::Small);
    }

    #[test]
    fn test_tier_is_monotonic() {
        let mut previous = classify(0);
        for n in 1..100 {
            let tier = classify(n);
            assert!(tier >= previous, "tier went backwards at {}", n);
            previous = tier;
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let options = LayoutOptions {
            large_threshold: 2,
            medium_threshold: 4,
            ..Default::default()
        };
        assert_eq!(options.classify(2), SizeTier::Large);
        assert_eq!(options.classify(3), SizeTier::Medium);
        assert_eq!(options.classify(5), SizeTier::Small);
    }
}
