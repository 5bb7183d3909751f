use crate::{AnimationId, RequestId, SectionId, StagedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenFilePicker,
    /// Clear the platform's file input so the same file can be picked again.
    ResetFileInput,
    /// Blocking user notification.
    Alert { message: String },
    /// Upload `file` to the analysis endpoint.
    SubmitAnalysis {
        request_id: RequestId,
        file: StagedFile,
    },
    /// Deliver `Msg::AnimationFrame` on the next display refresh.
    ScheduleFrame { animation_id: AnimationId },
    /// Smooth-scroll so the target's top edge aligns with the viewport top.
    ScrollTo { target: SectionId },
    /// (Re)bind visibility observation to the freshly rendered sections.
    ObserveSections {
        generation: u64,
        sections: Vec<SectionId>,
    },
    /// Open a URL in a new browsing context.
    OpenExternal { url: String },
}
