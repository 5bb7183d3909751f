//! Side-navigation highlighting driven by section visibility.
//!
//! Observations are bound to a generation. Re-rendering the results creates
//! new section nodes, so the platform must re-observe; entries reported for an
//! older generation are stale and dropped.

use std::collections::BTreeSet;
use std::fmt;

/// Fraction of a section that must be visible for it to count as in view.
pub const INTERSECTION_THRESHOLD: f64 = 0.4;

pub const HERO_ID: &str = "hero";
pub const RESULTS_SECTION_ID: &str = "results-section";

/// Landmark sections of the dashboard, in page order.
pub const PAGE_SECTIONS: &[&str] = &[
    HERO_ID,
    RESULTS_SECTION_ID,
    "skills-section",
    "roles-section",
    "roadmap-section",
    "insights-section",
    "jobs-section",
    "text-section",
];

const DEFAULT_LINKS: &[(&str, &str)] = &[
    ("#", "Overview"),
    ("#skills-section", "Skills"),
    ("#roles-section", "Role matches"),
    ("#roadmap-section", "Roadmap"),
    ("#insights-section", "Insights"),
    ("#jobs-section", "Jobs"),
    ("#text-section", "Extracted text"),
];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn hero() -> Self {
        Self::new(HERO_ID)
    }

    pub fn results() -> Self {
        Self::new(RESULTS_SECTION_ID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Landmark used for highlighting: the results section shares the hero's link.
    pub fn landmark(&self) -> SectionId {
        if self.0 == RESULTS_SECTION_ID || self.0.is_empty() {
            SectionId::hero()
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    /// The id the link points at: the href without its leading `#`.
    pub fn target_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }

    fn matches(&self, landmark: &SectionId) -> bool {
        let target = self.target_id();
        target == landmark.as_str() || (target.is_empty() && landmark.as_str() == HERO_ID)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn is_intersecting(&self) -> bool {
        self.intersection_ratio >= INTERSECTION_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    links: Vec<NavLink>,
    active: Vec<bool>,
    known: Vec<SectionId>,
    observed: Vec<SectionId>,
    in_view: BTreeSet<SectionId>,
    generation: u64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        let links = DEFAULT_LINKS
            .iter()
            .map(|(href, label)| NavLink {
                href: (*href).to_string(),
                label: (*label).to_string(),
            })
            .collect();
        let known = PAGE_SECTIONS.iter().map(|id| SectionId::new(*id)).collect();
        Self::new(links, known)
    }
}

impl ScrollSpy {
    /// The first link starts out active.
    pub fn new(links: Vec<NavLink>, known: Vec<SectionId>) -> Self {
        let active = (0..links.len()).map(|i| i == 0).collect();
        Self {
            links,
            active,
            known,
            observed: Vec::new(),
            in_view: BTreeSet::new(),
            generation: 0,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn active_hrefs(&self) -> Vec<&str> {
        self.links
            .iter()
            .zip(&self.active)
            .filter(|(_, active)| **active)
            .map(|(link, _)| link.href.as_str())
            .collect()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }

    /// Binds observation to a fresh set of section nodes and returns the new generation.
    pub fn observe(&mut self) -> u64 {
        self.generation += 1;
        self.observed = self.known.clone();
        self.in_view.clear();
        self.generation
    }

    /// Applies one observer batch in entry order. Returns whether any link changed.
    pub fn apply(&mut self, generation: u64, entries: &[IntersectionEntry]) -> bool {
        if generation != self.generation {
            engine_logging::engine_debug!(
                "Dropping {} intersection entries from stale generation {} (current {})",
                entries.len(),
                generation,
                self.generation
            );
            return false;
        }
        let mut changed = false;
        for entry in entries {
            if !self.observed.contains(&entry.target) {
                continue;
            }
            if !entry.is_intersecting() {
                self.in_view.remove(&entry.target);
                continue;
            }
            if !self.in_view.insert(entry.target.clone()) {
                continue;
            }
            changed |= self.highlight(&entry.target.landmark());
        }
        changed
    }

    fn highlight(&mut self, landmark: &SectionId) -> bool {
        let mut changed = false;
        for (link, active) in self.links.iter().zip(self.active.iter_mut()) {
            let next = link.matches(landmark);
            if *active != next {
                *active = next;
                changed = true;
            }
        }
        changed
    }

    /// Section a nav press scrolls to: the linked section, or the hero when unknown.
    pub fn resolve_click(&self, href: &str) -> SectionId {
        let target = href.strip_prefix('#').unwrap_or(href);
        self.known
            .iter()
            .find(|id| id.as_str() == target && !target.is_empty())
            .cloned()
            .unwrap_or_else(SectionId::hero)
    }
}

/// Vertical extent of a section in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

/// Visible fraction of `section` within `viewport`, in `[0, 1]`.
pub fn intersection_ratio(section: Rect, viewport: Viewport) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }
    let top = section.top.max(viewport.scroll_top);
    let bottom = (section.top + section.height).min(viewport.scroll_top + viewport.height);
    ((bottom - top).max(0.0) / section.height).min(1.0)
}

/// Entries for every laid-out section, as an observer would report them.
pub fn entries_for(layout: &[(SectionId, Rect)], viewport: Viewport) -> Vec<IntersectionEntry> {
    layout
        .iter()
        .map(|(id, rect)| IntersectionEntry {
            target: id.clone(),
            intersection_ratio: intersection_ratio(*rect, viewport),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            target: SectionId::new(id),
            intersection_ratio: ratio,
        }
    }

    #[test]
    fn ratio_of_partially_visible_section() {
        let section = Rect {
            top: 1000.0,
            height: 500.0,
        };
        let viewport = Viewport {
            scroll_top: 800.0,
            height: 400.0,
        };
        assert!((intersection_ratio(section, viewport) - 0.4).abs() < f64::EPSILON);
        let far = Viewport {
            scroll_top: 0.0,
            height: 400.0,
        };
        assert_eq!(intersection_ratio(section, far), 0.0);
    }

    #[test]
    fn results_section_highlights_hero_link() {
        let mut spy = ScrollSpy::default();
        let generation = spy.observe();
        assert!(spy.apply(generation, &[entry("skills-section", 0.9)]));
        assert_eq!(spy.active_hrefs(), vec!["#skills-section"]);

        spy.apply(generation, &[entry("skills-section", 0.1)]);
        assert!(spy.apply(generation, &[entry("results-section", 0.5)]));
        assert_eq!(spy.active_hrefs(), vec!["#"]);
    }

    #[test]
    fn below_threshold_does_not_activate() {
        let mut spy = ScrollSpy::default();
        let generation = spy.observe();
        assert!(!spy.apply(generation, &[entry("roadmap-section", 0.39)]));
        assert_eq!(spy.active_hrefs(), vec!["#"]);
    }

    #[test]
    fn last_entry_in_batch_wins() {
        let mut spy = ScrollSpy::default();
        let generation = spy.observe();
        spy.apply(
            generation,
            &[entry("jobs-section", 0.6), entry("text-section", 0.7)],
        );
        assert_eq!(spy.active_hrefs(), vec!["#text-section"]);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut spy = ScrollSpy::default();
        let old = spy.observe();
        let current = spy.observe();
        assert_ne!(old, current);
        assert!(!spy.apply(old, &[entry("jobs-section", 1.0)]));
        assert_eq!(spy.active_hrefs(), vec!["#"]);
    }

    #[test]
    fn unobserved_sections_are_ignored() {
        let mut spy = ScrollSpy::default();
        assert!(!spy.apply(0, &[entry("jobs-section", 1.0)]));
    }

    #[test]
    fn click_resolution_falls_back_to_hero() {
        let spy = ScrollSpy::default();
        assert_eq!(spy.resolve_click("#roles-section"), SectionId::new("roles-section"));
        assert_eq!(spy.resolve_click("#"), SectionId::hero());
        assert_eq!(spy.resolve_click("#nowhere"), SectionId::hero());
    }
}
