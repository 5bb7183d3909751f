//! Learning-resource and suitability-visualizer dialogs.
//!
//! Both dialogs share one dismissal rule set: a close control shuts every
//! dialog, and a click on a dialog's own backdrop shuts that dialog only.

use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Learning,
    Visualizer,
}

impl ModalKind {
    pub fn element_id(self) -> &'static str {
        match self {
            ModalKind::Learning => "learning-modal",
            ModalKind::Visualizer => "visualizer-modal",
        }
    }
}

/// What a pointer press landed on, as far as dialogs are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed container itself, outside the dialog content.
    Backdrop(ModalKind),
    /// Anywhere inside a dialog's content box.
    Content(ModalKind),
    Elsewhere,
}

/// A dialog holding an optional session; open iff a session is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal<S> {
    kind: ModalKind,
    session: Option<S>,
}

impl<S> Modal<S> {
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            session: None,
        }
    }

    pub fn open(&mut self, session: S) {
        self.session = Some(session);
    }

    pub fn close(&mut self) -> Option<S> {
        self.session.take()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    /// Closes on a press of this dialog's backdrop. Returns whether it closed.
    pub fn dismiss_on_outside_click(&mut self, target: ClickTarget) -> bool {
        if target == ClickTarget::Backdrop(self.kind) && self.is_open() {
            self.session = None;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningSession {
    pub skill: String,
}

impl LearningSession {
    pub fn prompt(&self) -> String {
        format!("Master \"{}\" with top-tier resources:", self.skill)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerSession {
    pub role: String,
    pub score: f64,
}

impl VisualizerSession {
    /// `round(score * 100)`, kept inside `0..=100` so both slices stay non-negative.
    pub fn percentage(&self) -> u32 {
        suitability_percentage(self.score)
    }

    pub fn title(&self) -> String {
        format!("{} Suitability", self.role)
    }

    pub fn suit_legend(&self) -> String {
        format!("Suit: {}%", self.percentage())
    }

    pub fn not_suit_legend(&self) -> String {
        format!("Not Suit: {}%", 100 - self.percentage())
    }

    /// Two-slice conic split at the percentage boundary.
    pub fn chart_background(&self) -> String {
        let p = self.percentage();
        format!("conic-gradient(var(--primary-charcoal) 0% {p}%, #f1f5f9 {p}% 100%)")
    }
}

pub fn suitability_percentage(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modals {
    pub learning: Modal<LearningSession>,
    pub visualizer: Modal<VisualizerSession>,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            learning: Modal::new(ModalKind::Learning),
            visualizer: Modal::new(ModalKind::Visualizer),
        }
    }
}

impl Modals {
    /// Close controls shut both dialogs.
    pub fn close_all(&mut self) -> bool {
        let learning = self.learning.close().is_some();
        let visualizer = self.visualizer.close().is_some();
        learning || visualizer
    }

    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        let learning = self.learning.dismiss_on_outside_click(target);
        let visualizer = self.visualizer.dismiss_on_outside_click(target);
        learning || visualizer
    }
}

/// Video-platform tutorial search for `skill`.
pub fn free_resources_url(skill: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        encode_query(&format!("{skill} tutorial full course"))
    )
}

/// Search-engine query for paid courses on `skill`.
pub fn paid_resources_url(skill: &str) -> String {
    format!(
        "https://www.google.com/search?q=best+professional+courses+for+{}",
        encode_query(skill)
    )
}

fn encode_query(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
