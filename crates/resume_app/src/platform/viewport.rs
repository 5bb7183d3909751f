//! Simulated scroll position and section observer.

use resume_core::{entries_for, Msg, Rect, SectionId, Viewport};

use super::ui::constants::VIEWPORT_HEIGHT;
use super::ui::layout::{max_scroll, section_top};

struct Observation {
    generation: u64,
    sections: Vec<SectionId>,
}

/// Tracks where the page is scrolled and reports section visibility for the
/// sections currently under observation.
#[derive(Default)]
pub struct VirtualViewport {
    scroll_top: f64,
    observation: Option<Observation>,
}

impl VirtualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Starts observing `sections`. Reports their initial visibility.
    pub fn observe(
        &mut self,
        generation: u64,
        sections: Vec<SectionId>,
        layout: &[(SectionId, Rect)],
    ) -> Option<Msg> {
        self.observation = Some(Observation {
            generation,
            sections,
        });
        self.report(layout)
    }

    pub fn scroll_to(&mut self, target: &SectionId, layout: &[(SectionId, Rect)]) -> Option<Msg> {
        self.set_scroll(section_top(layout, target), layout)
    }

    pub fn scroll_by(&mut self, delta: f64, layout: &[(SectionId, Rect)]) -> Option<Msg> {
        self.set_scroll(self.scroll_top + delta, layout)
    }

    fn set_scroll(&mut self, scroll_top: f64, layout: &[(SectionId, Rect)]) -> Option<Msg> {
        self.scroll_top = scroll_top.clamp(0.0, max_scroll(layout));
        self.report(layout)
    }

    fn report(&self, layout: &[(SectionId, Rect)]) -> Option<Msg> {
        let observation = self.observation.as_ref()?;
        let observed: Vec<(SectionId, Rect)> = layout
            .iter()
            .filter(|(id, _)| observation.sections.contains(id))
            .cloned()
            .collect();
        let entries = entries_for(
            &observed,
            Viewport {
                scroll_top: self.scroll_top,
                height: VIEWPORT_HEIGHT,
            },
        );
        Some(Msg::SectionsIntersected {
            generation: observation.generation,
            entries,
        })
    }
}
