use std::collections::HashMap;
use std::fmt;

/// DOM id of a page section. Identity only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Anchor used by nav links, e.g. `#amenities`.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        SectionId::new(id)
    }
}

/// Where sections sit on the page, in document coordinates.
pub trait Layout {
    /// Top edge of the section, or `None` when the element is not rendered.
    fn section_top(&self, id: &SectionId) -> Option<f64>;
}

impl Layout for HashMap<SectionId, f64> {
    fn section_top(&self, id: &SectionId) -> Option<f64> {
        self.get(id).copied()
    }
}

/// Picks the "current" section out of a fixed ordered list.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLocator {
    sections: Vec<SectionId>,
    trigger_offset: f64,
    top_threshold: f64,
}

impl SectionLocator {
    /// `trigger_offset` is how far below the viewport top a section's top edge
    /// must pass to count as current; below `top_threshold` the first section
    /// always wins.
    pub fn new(sections: Vec<SectionId>, trigger_offset: f64, top_threshold: f64) -> Self {
        Self {
            sections,
            trigger_offset,
            top_threshold,
        }
    }

    /// `None` means no section qualifies and the caller keeps what it has.
    pub fn locate(&self, scroll_offset: f64, layout: &dyn Layout) -> Option<SectionId> {
        if scroll_offset < self.top_threshold {
            return self.sections.first().cloned();
        }

        let trigger_line = scroll_offset + self.trigger_offset;
        self.sections
            .iter()
            .rev()
            .find(|id| {
                layout
                    .section_top(id)
                    .map_or(false, |top| top <= trigger_line)
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> SectionLocator {
        SectionLocator::new(
            ["home", "overview", "amenities", "gallery", "contact"]
                .into_iter()
                .map(SectionId::from)
                .collect(),
            150.0,
            50.0,
        )
    }

    fn layout() -> HashMap<SectionId, f64> {
        [
            ("home", 0.0),
            ("overview", 900.0),
            ("amenities", 1800.0),
            ("gallery", 2700.0),
            ("contact", 3600.0),
        ]
        .into_iter()
        .map(|(id, top)| (SectionId::from(id), top))
        .collect()
    }

    #[test]
    fn near_top_is_always_home() {
        let locator = locator();
        let mut weird = layout();
        // Even if every section claims to start above the viewport.
        for top in weird.values_mut() {
            *top = -500.0;
        }
        for offset in [0.0, 10.0, 49.9] {
            assert_eq!(locator.locate(offset, &weird), Some(SectionId::from("home")));
        }
    }

    #[test]
    fn past_last_trigger_is_last_section() {
        let locator = locator();
        let layout = layout();
        for offset in [3450.0, 3600.0, 5000.0, 100_000.0] {
            assert_eq!(
                locator.locate(offset, &layout),
                Some(SectionId::from("contact"))
            );
        }
    }

    #[test]
    fn section_counts_once_top_crosses_trigger_line() {
        let locator = locator();
        let layout = layout();
        assert_eq!(locator.locate(749.0, &layout), Some(SectionId::from("home")));
        assert_eq!(locator.locate(750.0, &layout), Some(SectionId::from("overview")));
        assert_eq!(locator.locate(1700.0, &layout), Some(SectionId::from("amenities")));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let locator = locator();
        let mut layout = layout();
        layout.remove(&SectionId::from("gallery"));
        assert_eq!(locator.locate(2800.0, &layout), Some(SectionId::from("amenities")));
    }

    #[test]
    fn nothing_crossed_keeps_current() {
        let locator = locator();
        let layout: HashMap<SectionId, f64> = [("home", 400.0), ("overview", 900.0)]
            .into_iter()
            .map(|(id, top)| (SectionId::from(id), top))
            .collect();
        assert_eq!(locator.locate(100.0, &layout), None);
    }

    #[test]
    fn href_is_anchor() {
        assert_eq!(SectionId::from("amenities").href(), "#amenities");
    }
}
