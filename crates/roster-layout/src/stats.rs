use crate::options::LayoutOptions;
use crate::paginate::plan;
use crate::types::*;

/// Statistics about a paginated roster
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationStatistics {
    /// Members across all sections
    pub total_members: usize,
    pub intern_count: usize,
    /// Sections in the input, including empty ones
    pub sections: usize,
    pub non_empty_sections: usize,
    pub tier: SizeTier,
    pub columns: usize,
    /// Output page count (at least 1)
    pub pages: usize,
    /// Section headers printed across all pages
    pub headers: usize,
    /// Rows forced onto pages that could not hold them
    pub forced_placements: usize,
}

/// Calculate statistics for the roster
pub fn calculate_statistics(
    document: &Document,
    options: &LayoutOptions,
) -> Result<PaginationStatistics> {
    options.validate()?;

    let plan = plan(document, options);
    let headers = plan.pages.iter().map(|p| p.sections.len()).sum();

    Ok(PaginationStatistics {
        total_members: document.total_members(),
        intern_count: document.intern_count(),
        sections: document.sections.len(),
        non_empty_sections: document
            .sections
            .iter()
            .filter(|s| !s.members.is_empty())
            .count(),
        tier: plan.tier,
        columns: plan.geometry.columns,
        pages: plan.pages.len(),
        headers,
        forced_placements: plan.forced_placements,
    })
}
