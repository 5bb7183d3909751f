use std::path::PathBuf;

use crate::{
    AccordionId, AnalysisResult, AnimationId, ClickTarget, IntersectionEntry, RequestId,
};

/// Where a file selection came from. All sources share one validation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Browse,
    Drop,
    Input,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User pressed the drop target to browse for a file.
    BrowseClicked,
    /// A drag is hovering over the drop target.
    DragOver,
    /// The drag left the drop target without dropping.
    DragLeave,
    /// A file was chosen by browsing, dropping or the file input.
    FileChosen {
        path: PathBuf,
        source: SelectionSource,
    },
    /// User removed the staged file.
    RemoveFileClicked,
    /// User asked for the staged file to be analyzed.
    AnalyzeClicked,
    /// Backend returned a parsed analysis.
    AnalysisSucceeded {
        request_id: RequestId,
        result: AnalysisResult,
    },
    /// Request failed: non-success status, transport failure or bad body.
    AnalysisFailed {
        request_id: RequestId,
        message: String,
    },
    /// Display refresh for the score reveal, with wall-clock time in milliseconds.
    AnimationFrame {
        animation_id: AnimationId,
        now_ms: u64,
    },
    /// A role score or breakdown link was pressed.
    RoleScoreClicked { role: String, score: f64 },
    /// A roadmap card for a missing skill was pressed.
    MissingSkillClicked { skill: String },
    FreeResourcesClicked,
    PaidResourcesClicked,
    /// Any close control.
    CloseModalClicked,
    /// A press anywhere in the window; used for backdrop dismissal.
    WindowClicked(ClickTarget),
    /// Observer batch for the given observation generation.
    SectionsIntersected {
        generation: u64,
        entries: Vec<IntersectionEntry>,
    },
    /// Side-navigation link pressed.
    NavLinkClicked { href: String },
    AccordionToggled(AccordionId),
    /// Fallback for placeholder wiring.
    NoOp,
}
