//! Roster pagination
//!
//! Splits a document into A4 pages with a single greedy pass:
//! 1. Classify the document once and look up the tier geometry
//! 2. Walk sections in order, placing as many whole rows of cards as fit
//! 3. Close the page and continue the section on a new one when no row fits
//!
//! Capacity is estimated from millimetre constants, so a page is "full" as
//! soon as another whole row would not fit, even if the renderer could have
//! squeezed in a few more cards.

use log::{debug, warn};

use crate::layout::Geometry;
use crate::options::LayoutOptions;
use crate::types::*;

/// Full result of a pagination run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintPlan {
    /// Tier used for every page of the document
    pub tier: SizeTier,
    pub geometry: Geometry,
    /// Never empty
    pub pages: Vec<Page>,
    /// Rows placed on a page that could not fit them (pages will overflow)
    pub forced_placements: usize,
}

/// Paginate with the default A4 constants.
pub fn paginate(document: &Document) -> Vec<Page> {
    paginate_with(document, &LayoutOptions::default())
}

/// Paginate with caller-supplied constants.
pub fn paginate_with(document: &Document, options: &LayoutOptions) -> Vec<Page> {
    plan(document, options).pages
}

/// Run the paginator and return the pages together with the layout it used.
///
/// The document is only read; every returned page is an independent value.
pub fn plan(document: &Document, options: &LayoutOptions) -> PrintPlan {
    let tier = options.classify(document.total_members());
    let geometry = options.geometry_for(tier);

    let mut paginator = Paginator::new(&document.title, options, geometry);
    for section in &document.sections {
        if section.members.is_empty() {
            continue;
        }
        paginator.place_section(section);
    }

    let forced_placements = paginator.forced_placements;
    PrintPlan {
        tier,
        geometry,
        pages: paginator.finish(),
        forced_placements,
    }
}

// =============================================================================
// Paginator State
// =============================================================================

struct Paginator<'a> {
    options: &'a LayoutOptions,
    geometry: Geometry,
    title: &'a str,
    pages: Vec<Page>,
    current: Page,
    /// Vertical space already used on `current`
    current_height_mm: f32,
    is_first_page: bool,
    forced_placements: usize,
}

impl<'a> Paginator<'a> {
    fn new(title: &'a str, options: &'a LayoutOptions, geometry: Geometry) -> Self {
        Self {
            options,
            geometry,
            title,
            pages: Vec::new(),
            current: Page::new(title),
            current_height_mm: options.first_page_offset_mm(),
            is_first_page: true,
            forced_placements: 0,
        }
    }

    fn place_section(&mut self, section: &Section) {
        let mut remaining: &[Member] = &section.members;

        while !remaining.is_empty() {
            let header_mm = if self.current.group(&section.title).is_some() {
                0.0
            } else {
                self.options.section_header_height_mm
            };

            let mut take = self.cards_can_fit(header_mm).min(remaining.len());

            if take == 0 {
                // A fresh continuation page is the best we can do; force one
                // row onto it so the walk always makes progress.
                if self.current.is_empty() && !self.is_first_page {
                    take = self.geometry.columns.min(remaining.len());
                    self.forced_placements += 1;
                    warn!(
                        "Section '{}' does not fit on an empty page; forcing {} card(s) onto page {}",
                        section.title,
                        take,
                        self.pages.len() + 1
                    );
                } else {
                    self.close_page();
                    self.open_page();
                    continue;
                }
            }

            let (placed, rest) = remaining.split_at(take);
            self.push_members(&section.title, placed);

            let rows = self.geometry.rows_for(take);
            self.current_height_mm +=
                header_mm + self.geometry.rows_height_mm(rows) + self.options.group_gap_mm;
            remaining = rest;
        }
    }

    /// Whole rows that fit below the current height, in cards
    fn cards_can_fit(&self, header_mm: f32) -> usize {
        let remaining_mm = self.options.available_height_mm()
            - self.current_height_mm
            - header_mm
            - self.options.group_gap_mm;
        let rows = (remaining_mm / self.geometry.row_pitch_mm).floor();

        if rows.is_nan() || rows <= 0.0 {
            0
        } else {
            (rows as usize).saturating_mul(self.geometry.columns)
        }
    }

    fn push_members(&mut self, section_title: &str, members: &[Member]) {
        match self.current.group_mut(section_title) {
            Some(group) => group.members.extend_from_slice(members),
            None => self.current.sections.push(PageGroup {
                title: section_title.to_string(),
                members: members.to_vec(),
            }),
        }
    }

    fn close_page(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let page = std::mem::replace(&mut self.current, Page::new(self.title));
        debug!(
            "Closed page {} with {} member(s) at {:.1}mm",
            self.pages.len() + 1,
            page.member_count(),
            self.current_height_mm
        );
        self.pages.push(page);
    }

    fn open_page(&mut self) {
        self.current = Page::new(self.title);
        self.current_height_mm = self.options.top_offset_mm;
        self.is_first_page = false;
    }

    fn finish(mut self) -> Vec<Page> {
        self.close_page();
        if self.pages.is_empty() {
            self.pages.push(Page::new(self.title));
        }
        self.pages
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn members(n: usize) -> Vec<Member> {
        (0..n)
            .map(|i| Member::new(format!("M{}", i), format!("/p/{}.jpg", i)))
            .collect()
    }

    #[test]
    fn test_cards_can_fit_first_page() {
        let options = LayoutOptions::default();
        let geometry = options.geometry_for(SizeTier::Small);
        let paginator = Paginator::new("T", &options, geometry);

        // 273 - 23 - 12 - 4 = 234mm, 51mm per row -> 4 rows of 6
        assert_eq!(paginator.cards_can_fit(12.0), 24);
    }

    #[test]
    fn test_cards_can_fit_never_negative() {
        let options = LayoutOptions::default();
        let geometry = options.geometry_for(SizeTier::Large);
        let mut paginator = Paginator::new("T", &options, geometry);
        paginator.current_height_mm = 400.0;

        assert_eq!(paginator.cards_can_fit(12.0), 0);
    }

    #[test]
    fn test_open_page_resets_state() {
        let options = LayoutOptions::default();
        let geometry = options.geometry_for(SizeTier::Large);
        let mut paginator = Paginator::new("T", &options, geometry);
        paginator.push_members("A", &members(2));
        paginator.current_height_mm = 200.0;

        paginator.close_page();
        paginator.open_page();

        assert_eq!(paginator.pages.len(), 1);
        assert!(paginator.current.is_empty());
        assert_eq!(paginator.current_height_mm, 4.0);
        assert!(!paginator.is_first_page);
    }

    #[test]
    fn test_close_empty_page_emits_nothing() {
        let options = LayoutOptions::default();
        let geometry = options.geometry_for(SizeTier::Large);
        let mut paginator = Paginator::new("T", &options, geometry);

        paginator.close_page();
        assert!(paginator.pages.is_empty());
    }

    #[test]
    fn test_push_members_merges_same_title() {
        let options = LayoutOptions::default();
        let geometry = options.geometry_for(SizeTier::Large);
        let mut paginator = Paginator::new("T", &options, geometry);
        paginator.push_members("A", &members(2));
        paginator.push_members("A", &members(3));

        assert_eq!(paginator.current.sections.len(), 1);
        assert_eq!(paginator.current.sections[0].members.len(), 5);
    }
}
