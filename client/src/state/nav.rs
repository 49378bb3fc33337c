//! Navigation state: the highlighted section and the mobile menu.
//!
//! DESIGN
//! ======
//! The active section is a pure function of the scroll offset and the
//! measured section boxes, so the selection rule is testable without a DOM.
//! `util::scroll` does the measuring and feeds the result into `NavState`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Section highlighted before any scroll event arrives.
pub const INITIAL_SECTION: &str = "hero";

/// A section becomes active this many pixels before its top edge.
pub const ACTIVATION_OFFSET: f64 = 100.0;

/// Height of the sticky header; scroll targets land this far above a section.
pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active_section: String,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self { active_section: INITIAL_SECTION.to_owned(), menu_open: false }
    }
}

impl NavState {
    /// Update from a scroll measurement. Keeps the previous section when
    /// the offset falls outside every section. Returns whether it changed.
    pub fn observe_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        match active_section(scroll_y, sections) {
            Some(id) if self.active_section != id => {
                self.active_section = id.to_owned();
                true
            }
            _ => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section == section_id
    }
}

/// Measured box of a `section[id]` element, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - ACTIVATION_OFFSET;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Pick the section the viewport is in. Later sections win on overlap.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y))
        .map(|s| s.id.as_str())
}

/// Vertical scroll position that brings `section_top` just below the header.
#[must_use]
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - HEADER_OFFSET).max(0.0)
}
