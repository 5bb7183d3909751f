use crate::render::ResultsView;
use crate::{AccordionId, UploadPanel};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub upload: UploadPanel,
    pub drop_zone_visible: bool,
    pub drop_zone_hover: bool,
    pub preview_visible: bool,
    pub loading_visible: bool,
    pub staged_file_name: Option<String>,
    pub analyze_enabled: bool,
    pub results_visible: bool,
    pub side_nav_visible: bool,
    pub score: ScoreView,
    pub results: Option<ResultsView>,
    pub learning_modal: Option<LearningModalView>,
    pub visualizer_modal: Option<VisualizerModalView>,
    pub nav_links: Vec<NavLinkView>,
    pub expanded_accordions: Vec<AccordionId>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreView {
    pub value: u32,
    /// Readout such as `76%`.
    pub text: String,
    /// Meter fill width, capped at `100%`.
    pub meter_width: String,
    pub animating: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningModalView {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerModalView {
    pub title: String,
    pub percentage: u32,
    pub suit_legend: String,
    pub not_suit_legend: String,
    pub chart_background: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl AppViewModel {
    pub fn is_expanded(&self, id: AccordionId) -> bool {
        self.expanded_accordions.contains(&id)
    }
}
