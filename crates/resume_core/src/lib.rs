//! Resume dashboard core: pure state machine, view model and node builders.
mod analysis;
mod animation;
mod dom;
mod effect;
mod file;
mod modal;
mod msg;
mod page;
mod render;
mod scroll_spy;
mod state;
mod update;
mod view_model;

pub use analysis::{
    parse_integer_like, AnalysisResult, DeepIntelligence, JobSuggestion, RoadmapEntry, RoleMatch,
    SkillStatus,
};
pub use animation::{sample, AnimationId, FrameOutcome, ScoreAnimation, SCORE_REVEAL_MS};
pub use dom::{element, escape_attribute, escape_text, text, Element, Node};
pub use effect::Effect;
pub use file::{extension_of, DocumentKind, StagedFile, ValidationError, UNSUPPORTED_FILE_MESSAGE};
pub use modal::{
    free_resources_url, paid_resources_url, suitability_percentage, ClickTarget, LearningSession,
    Modal, ModalKind, Modals, VisualizerSession,
};
pub use msg::{Msg, SelectionSource};
pub use page::{render_document, render_page};
pub use render::{render_results, ResultsView, EXTRACTED_TEXT_FALLBACK, STAGGER_STEP_SECS};
pub use scroll_spy::{
    entries_for, intersection_ratio, IntersectionEntry, NavLink, Rect, ScrollSpy, SectionId,
    Viewport, HERO_ID, INTERSECTION_THRESHOLD, PAGE_SECTIONS, RESULTS_SECTION_ID,
};
pub use state::{AccordionId, AppState, RequestId, UploadPanel};
pub use update::update;
pub use view_model::{
    AppViewModel, LearningModalView, NavLinkView, ScoreView, VisualizerModalView,
};
