//! Scroll-spy math: which section is most prominently in view.
//!
//! The navigation highlighter observes the vertical extents of every section
//! against the scroll viewport, offset at the top by the navigation bar's
//! height, and picks the section with the greatest visible height. Pure
//! geometry; the UI layer feeds in rects and applies the result.

use folio::Section;

/// Breathing room added below the nav bar when computing the offset.
pub const NAV_OFFSET_MARGIN: f32 = 12.0;

/// Vertical extent of one rendered section, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f32,
    pub bottom: f32,
}

/// The top offset applied to visibility checks for a given nav bar height.
pub fn nav_offset(nav_height: f32) -> f32 {
    nav_height + NAV_OFFSET_MARGIN
}

/// Visible height of a section inside the offset viewport.
fn visible_height(extent: &SectionExtent, viewport_top: f32, viewport_bottom: f32) -> f32 {
    let top = extent.top.max(viewport_top);
    let bottom = extent.bottom.min(viewport_bottom);
    (bottom - top).max(0.0)
}

/// Picks the section most prominently in view.
///
/// The viewport's top edge is pushed down by `offset` before measuring.
/// Returns None when no section is visible at all. Ties go to the earlier
/// (top-most) section so the result is deterministic while two sections
/// share the viewport equally.
pub fn most_prominent(
    extents: &[SectionExtent],
    viewport_top: f32,
    viewport_bottom: f32,
    offset: f32,
) -> Option<Section> {
    let effective_top = viewport_top + offset;
    let mut best: Option<(Section, f32)> = None;

    for extent in extents {
        let height = visible_height(extent, effective_top, viewport_bottom);
        if height <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_height)) if height <= best_height => {}
            _ => best = Some((extent.section, height)),
        }
    }

    best.map(|(section, _)| section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(section: Section, top: f32, bottom: f32) -> SectionExtent {
        SectionExtent { section, top, bottom }
    }

    #[test]
    fn test_picks_section_with_greatest_visible_height() {
        let extents = [
            extent(Section::About, 0.0, 80.0),
            extent(Section::Projects, 80.0, 500.0),
            extent(Section::Certifications, 500.0, 560.0),
        ];
        // Viewport 0..540, no offset: projects dominates.
        assert_eq!(
            most_prominent(&extents, 0.0, 540.0, 0.0),
            Some(Section::Projects)
        );
    }

    #[test]
    fn test_offset_pushes_top_section_out() {
        let extents = [
            extent(Section::About, 0.0, 60.0),
            extent(Section::Projects, 60.0, 120.0),
        ];
        // With a 60 px offset, About is entirely above the effective top.
        assert_eq!(
            most_prominent(&extents, 0.0, 400.0, 60.0),
            Some(Section::Projects)
        );
    }

    #[test]
    fn test_tie_goes_to_topmost() {
        let extents = [
            extent(Section::Education, 0.0, 100.0),
            extent(Section::Skills, 100.0, 200.0),
        ];
        assert_eq!(
            most_prominent(&extents, 0.0, 200.0, 0.0),
            Some(Section::Education)
        );
    }

    #[test]
    fn test_nothing_visible() {
        let extents = [extent(Section::About, 1000.0, 1200.0)];
        assert_eq!(most_prominent(&extents, 0.0, 500.0, 0.0), None);
        assert_eq!(most_prominent(&[], 0.0, 500.0, 0.0), None);
    }

    #[test]
    fn test_nav_offset_includes_margin() {
        assert_eq!(nav_offset(48.0), 48.0 + NAV_OFFSET_MARGIN);
    }
}
