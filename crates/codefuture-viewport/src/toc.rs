//! The curriculum table of contents, declared once.
//!
//! Declaration order is load-bearing: it is the tie-break order for the
//! active-section tracker and the render order for the sidebar.

use crate::spy::SectionId;

/// A table-of-contents entry: anchor id plus display label.
#[derive(Debug, Clone, Copy)]
pub struct TocEntry {
    pub id: SectionId,
    pub label: &'static str,
}

/// The nine sections of a curriculum page, in page order.
pub const TOC: [TocEntry; 9] = [
    TocEntry { id: SectionId::new("overview"), label: "Overview" },
    TocEntry { id: SectionId::new("outcomes"), label: "Core outcomes" },
    TocEntry { id: SectionId::new("projects"), label: "Signature projects" },
    TocEntry { id: SectionId::new("outline"), label: "12-week outline" },
    TocEntry { id: SectionId::new("fast8"), label: "Fast 8-week" },
    TocEntry { id: SectionId::new("ops"), label: "Operations" },
    TocEntry { id: SectionId::new("parents"), label: "Parent communication" },
    TocEntry { id: SectionId::new("safety"), label: "Safety & responsible tech" },
    TocEntry { id: SectionId::new("next"), label: "Next steps" },
];

/// Section ids in table-of-contents order.
pub fn section_ids() -> Vec<SectionId> {
    TOC.iter().map(|entry| entry.id).collect()
}

/// The section highlighted before any visibility report has arrived.
pub fn initial_section() -> SectionId {
    TOC[0].id
}
