use std::collections::BTreeSet;

use engine_logging::{engine_debug, engine_info};

use crate::animation::{FrameOutcome, ScoreAnimation};
use crate::modal::Modals;
use crate::render::{render_results, ResultsView};
use crate::scroll_spy::ScrollSpy;
use crate::view_model::{
    AppViewModel, LearningModalView, NavLinkView, ScoreView, VisualizerModalView,
};
use crate::{AnalysisResult, AnimationId, Effect, SectionId, StagedFile};

pub type RequestId = u64;

/// Which part of the upload area is showing. One variant at a time keeps the
/// drop target and the preview mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPanel {
    #[default]
    DropZone,
    Preview,
    Loading,
    /// Results are on screen; the upload area is folded away.
    Collapsed,
}

/// Disclosure blocks under the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccordionId {
    RoleTable,
    ExtractedText,
}

impl AccordionId {
    pub const ALL: [AccordionId; 2] = [AccordionId::RoleTable, AccordionId::ExtractedText];

    pub fn title(self) -> &'static str {
        match self {
            AccordionId::RoleTable => "Detailed Analysis",
            AccordionId::ExtractedText => "Extracted Blueprint",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    staged: Option<StagedFile>,
    upload: UploadPanel,
    drop_hover: bool,
    pending_request: Option<RequestId>,
    next_request_id: RequestId,
    results: Option<ResultsView>,
    results_visible: bool,
    animation: Option<ScoreAnimation>,
    next_animation_id: AnimationId,
    modals: Modals,
    scroll_spy: ScrollSpy,
    expanded: BTreeSet<AccordionId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.upload == UploadPanel::Loading;
        AppViewModel {
            upload: self.upload,
            drop_zone_visible: self.upload == UploadPanel::DropZone,
            drop_zone_hover: self.drop_hover,
            preview_visible: self.upload == UploadPanel::Preview,
            loading_visible: loading,
            staged_file_name: self.staged.as_ref().map(|file| file.name.clone()),
            analyze_enabled: self.staged.is_some() && !loading,
            results_visible: self.results_visible,
            side_nav_visible: self.results_visible,
            score: self.score_view(),
            results: self.results.clone(),
            learning_modal: self.modals.learning.session().map(|session| LearningModalView {
                prompt: session.prompt(),
            }),
            visualizer_modal: self
                .modals
                .visualizer
                .session()
                .map(|session| VisualizerModalView {
                    title: session.title(),
                    percentage: session.percentage(),
                    suit_legend: session.suit_legend(),
                    not_suit_legend: session.not_suit_legend(),
                    chart_background: session.chart_background(),
                }),
            nav_links: self
                .scroll_spy
                .links()
                .iter()
                .enumerate()
                .map(|(index, link)| NavLinkView {
                    href: link.href.clone(),
                    label: link.label.clone(),
                    active: self.scroll_spy.is_active(index),
                })
                .collect(),
            expanded_accordions: self.expanded.iter().copied().collect(),
            dirty: self.dirty,
        }
    }

    fn score_view(&self) -> ScoreView {
        let (value, animating) = self
            .animation
            .as_ref()
            .map(|animation| (animation.displayed(), !animation.is_finished()))
            .unwrap_or((0, false));
        ScoreView {
            value,
            text: format!("{value}%"),
            meter_width: format!("{}%", value.min(100)),
            animating,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn staged_file(&self) -> Option<&StagedFile> {
        self.staged.as_ref()
    }

    pub fn upload_panel(&self) -> UploadPanel {
        self.upload
    }

    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn scroll_spy(&self) -> &ScrollSpy {
        &self.scroll_spy
    }

    pub(crate) fn scroll_spy_mut(&mut self) -> &mut ScrollSpy {
        &mut self.scroll_spy
    }

    pub(crate) fn modals_mut(&mut self) -> &mut Modals {
        &mut self.modals
    }

    pub(crate) fn set_drop_hover(&mut self, hover: bool) {
        if self.drop_hover != hover {
            self.drop_hover = hover;
            self.mark_dirty();
        }
    }

    pub(crate) fn stage_file(&mut self, file: StagedFile) {
        engine_info!("Staged {} ({})", file.name, file.kind);
        self.staged = Some(file);
        self.upload = UploadPanel::Preview;
        self.results_visible = false;
        self.mark_dirty();
    }

    pub(crate) fn clear_file(&mut self) {
        if let Some(file) = self.staged.take() {
            engine_info!("Removed staged file {}", file.name);
        }
        self.upload = UploadPanel::DropZone;
        self.results_visible = false;
        self.mark_dirty();
    }

    /// Moves to the loading state and hands out the request to submit.
    pub(crate) fn begin_request(&mut self) -> Option<(RequestId, StagedFile)> {
        if self.pending_request.is_some() {
            return None;
        }
        let file = self.staged.clone()?;
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_request = Some(request_id);
        self.upload = UploadPanel::Loading;
        self.mark_dirty();
        Some((request_id, file))
    }

    /// Settles the pending request. Returns false for responses nobody is waiting on.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn restore_preview(&mut self) {
        self.upload = if self.staged.is_some() {
            UploadPanel::Preview
        } else {
            UploadPanel::DropZone
        };
        self.mark_dirty();
    }

    /// Replaces the rendered results and restarts the score reveal.
    pub(crate) fn show_results(&mut self, result: &AnalysisResult) -> Vec<Effect> {
        if let Some(previous) = self.animation.as_mut() {
            if !previous.is_finished() {
                engine_debug!("Cancelling score animation {}", previous.id());
                previous.cancel();
            }
        }
        self.next_animation_id += 1;
        let animation = ScoreAnimation::start(self.next_animation_id, result.target_score());
        let animation_id = animation.id();
        let animating = !animation.is_finished();
        self.animation = Some(animation);

        self.results = Some(render_results(result));
        self.upload = UploadPanel::Collapsed;
        self.results_visible = true;
        let generation = self.scroll_spy.observe();
        self.mark_dirty();

        let mut effects = Vec::with_capacity(3);
        if animating {
            effects.push(Effect::ScheduleFrame { animation_id });
        }
        effects.push(Effect::ScrollTo {
            target: SectionId::results(),
        });
        effects.push(Effect::ObserveSections {
            generation,
            sections: self.scroll_spy.observed().to_vec(),
        });
        effects
    }

    /// Advances the reveal if `animation_id` is still current. Returns the
    /// follow-up frame request while the reveal is running.
    pub(crate) fn advance_animation(
        &mut self,
        animation_id: AnimationId,
        now_ms: u64,
    ) -> Option<Effect> {
        let animation = self.animation.as_mut()?;
        if animation.id() != animation_id || animation.is_finished() {
            return None;
        }
        engine_logging::set_frame_time_ms(now_ms);
        let before = animation.displayed();
        let outcome = animation.advance(now_ms);
        if animation.displayed() != before || outcome == FrameOutcome::Finished {
            self.dirty = true;
        }
        match outcome {
            FrameOutcome::Continue => Some(Effect::ScheduleFrame { animation_id }),
            FrameOutcome::Finished => None,
        }
    }

    pub(crate) fn toggle_accordion(&mut self, id: AccordionId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.mark_dirty();
    }
}
