//! Active-section tracking.
//!
//! [`SectionTracker`] holds the ordered section ids and the one considered
//! in view. The host feeds it batches of visibility changes from its
//! viewport observer and asks it for scroll targets; it never touches the
//! document itself.
//!
//! When one batch reports several sections entering the view, the section
//! earliest in the configured order wins, independent of the order the
//! host delivered the entries in.

use crate::config::{DEFAULT_SCROLL_OFFSET, SECTIONS};
use crate::error::TrackerError;

/// One visibility change reported by the viewport observer.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: usize,
    offset: f64,
}

impl SectionTracker {
    pub fn new<I, S>(sections: I, offset: f64) -> Result<Self, TrackerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = validate_sections(sections)?;
        if !offset.is_finite() || offset < 0.0 {
            return Err(TrackerError::InvalidOffset(offset));
        }
        Ok(Self {
            sections,
            active: 0,
            offset,
        })
    }

    /// Replace the section list. The active section is kept when it is
    /// still listed, otherwise the first section becomes active.
    pub fn set_sections<I, S>(&mut self, sections: I) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = validate_sections(sections)?;
        let current = self.active().to_string();
        self.active = sections.iter().position(|s| *s == current).unwrap_or(0);
        self.sections = sections;
        Ok(())
    }

    /// Apply one observation batch. Returns the new active id if it changed.
    pub fn observe(&mut self, entries: &[IntersectionEntry]) -> Option<&str> {
        let winner = entries
            .iter()
            .filter(|e| e.is_intersecting)
            .filter_map(|e| self.index_of(&e.id))
            .min()?;

        if winner == self.active {
            return None;
        }
        self.active = winner;
        tracing::debug!(section = %self.sections[winner], "active section changed");
        Some(&self.sections[winner])
    }

    /// Scroll position for `id`, given a lookup of element tops in page
    /// coordinates. `None` when the element does not exist.
    pub fn scroll_target<F>(&self, id: &str, element_top: F) -> Option<f64>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        element_top(id).map(|top| top - self.offset)
    }

    /// Observer root margin shrinking the viewport by `offset` at top and bottom.
    pub fn root_margin(&self) -> String {
        format!("-{0}px 0px -{0}px 0px", self.offset)
    }

    pub fn active(&self) -> &str {
        &self.sections[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            sections: SECTIONS.iter().map(|s| s.to_string()).collect(),
            active: 0,
            offset: DEFAULT_SCROLL_OFFSET,
        }
    }
}

fn validate_sections<I, S>(sections: I) -> Result<Vec<String>, TrackerError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
    if sections.is_empty() {
        return Err(TrackerError::NoSections);
    }
    for (i, id) in sections.iter().enumerate() {
        if sections[..i].contains(id) {
            return Err(TrackerError::DuplicateSection(id.clone()));
        }
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SectionTracker {
        SectionTracker::new(["hero", "about", "projects"], 100.0).unwrap()
    }

    #[test]
    fn test_defaults_to_first_section() {
        assert_eq!(tracker().active(), "hero");
        assert_eq!(SectionTracker::default().active(), "hero");
        assert_eq!(SectionTracker::default().offset(), DEFAULT_SCROLL_OFFSET);
    }

    #[test]
    fn test_intersecting_entry_becomes_active() {
        let mut t = tracker();
        assert_eq!(t.observe(&[IntersectionEntry::new("about", true)]), Some("about"));
        assert!(t.is_active("about"));
        // Same section again: no change reported.
        assert_eq!(t.observe(&[IntersectionEntry::new("about", true)]), None);
    }

    #[test]
    fn test_leaving_entries_are_ignored() {
        let mut t = tracker();
        t.observe(&[IntersectionEntry::new("projects", true)]);
        assert_eq!(t.observe(&[IntersectionEntry::new("projects", false)]), None);
        assert_eq!(t.active(), "projects");
    }

    #[test]
    fn test_tie_break_prefers_earliest_section() {
        let mut a = tracker();
        let mut b = tracker();
        a.observe(&[
            IntersectionEntry::new("projects", true),
            IntersectionEntry::new("about", true),
        ]);
        b.observe(&[
            IntersectionEntry::new("about", true),
            IntersectionEntry::new("projects", true),
        ]);
        assert_eq!(a.active(), "about");
        assert_eq!(b.active(), "about");
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut t = tracker();
        assert_eq!(t.observe(&[IntersectionEntry::new("footer", true)]), None);
        assert_eq!(t.active(), "hero");
    }

    #[test]
    fn test_scroll_target() {
        let t = tracker();
        let lookup = |id: &str| (id == "about").then_some(900.0);
        assert_eq!(t.scroll_target("about", lookup), Some(800.0));
        assert_eq!(t.scroll_target("missing", lookup), None);
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(tracker().root_margin(), "-100px 0px -100px 0px");
    }

    #[test]
    fn test_set_sections_keeps_active() {
        let mut t = tracker();
        t.observe(&[IntersectionEntry::new("about", true)]);
        t.set_sections(["about", "contact"]).unwrap();
        assert_eq!(t.active(), "about");
        t.set_sections(["skills", "contact"]).unwrap();
        assert_eq!(t.active(), "skills");
    }

    #[test]
    fn test_invalid_configuration() {
        assert_eq!(
            SectionTracker::new(Vec::<String>::new(), 100.0),
            Err(TrackerError::NoSections)
        );
        assert_eq!(
            SectionTracker::new(["a", "a"], 100.0),
            Err(TrackerError::DuplicateSection("a".into()))
        );
        assert!(matches!(
            SectionTracker::new(["a"], -1.0),
            Err(TrackerError::InvalidOffset(_))
        ));
    }
}
