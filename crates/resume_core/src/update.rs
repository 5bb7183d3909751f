use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::modal::{free_resources_url, paid_resources_url, LearningSession, VisualizerSession};
use crate::{AppState, Effect, Msg, SelectionSource, StagedFile};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::BrowseClicked => {
            if state.is_loading() {
                Vec::new()
            } else {
                vec![Effect::OpenFilePicker]
            }
        }
        Msg::DragOver => {
            if !state.is_loading() {
                state.set_drop_hover(true);
            }
            Vec::new()
        }
        Msg::DragLeave => {
            state.set_drop_hover(false);
            Vec::new()
        }
        Msg::FileChosen { path, source } => {
            if source == SelectionSource::Drop {
                state.set_drop_hover(false);
            }
            if state.is_loading() {
                engine_warn!("Ignoring file selection while a request is in flight");
                return (state, Vec::new());
            }
            match StagedFile::from_path(path) {
                Ok(file) => {
                    state.stage_file(file);
                    Vec::new()
                }
                Err(err) => {
                    engine_warn!("Rejected file ({:?}): {}", source, err);
                    vec![Effect::Alert {
                        message: err.user_message().to_string(),
                    }]
                }
            }
        }
        Msg::RemoveFileClicked => {
            if state.is_loading() {
                engine_warn!("Ignoring file removal while a request is in flight");
                return (state, Vec::new());
            }
            state.clear_file();
            vec![Effect::ResetFileInput]
        }
        Msg::AnalyzeClicked => match state.begin_request() {
            Some((request_id, file)) => {
                engine_info!("Submitting {} as request {}", file.name, request_id);
                vec![Effect::SubmitAnalysis { request_id, file }]
            }
            None => {
                engine_debug!(
                    "Analyze ignored (staged={}, pending={:?})",
                    state.staged_file().is_some(),
                    state.pending_request()
                );
                Vec::new()
            }
        },
        Msg::AnalysisSucceeded { request_id, result } => {
            if !state.finish_request(request_id) {
                engine_warn!("Dropping response for stale request {}", request_id);
                return (state, Vec::new());
            }
            engine_info!(
                "Request {} succeeded: {} roles, {} skills",
                request_id,
                result.role_matches.len(),
                result.detected_skills.len()
            );
            state.show_results(&result)
        }
        Msg::AnalysisFailed {
            request_id,
            message,
        } => {
            if !state.finish_request(request_id) {
                engine_warn!("Dropping failure for stale request {}", request_id);
                return (state, Vec::new());
            }
            engine_warn!("Request {} failed: {}", request_id, message);
            state.restore_preview();
            vec![Effect::Alert {
                message: format!("Error: {message}"),
            }]
        }
        Msg::AnimationFrame {
            animation_id,
            now_ms,
        } => state
            .advance_animation(animation_id, now_ms)
            .into_iter()
            .collect(),
        Msg::RoleScoreClicked { role, score } => {
            state
                .modals_mut()
                .visualizer
                .open(VisualizerSession { role, score });
            state.mark_dirty();
            Vec::new()
        }
        Msg::MissingSkillClicked { skill } => {
            state.modals_mut().learning.open(LearningSession { skill });
            state.mark_dirty();
            Vec::new()
        }
        Msg::FreeResourcesClicked => open_resource(&mut state, free_resources_url),
        Msg::PaidResourcesClicked => open_resource(&mut state, paid_resources_url),
        Msg::CloseModalClicked => {
            if state.modals_mut().close_all() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::WindowClicked(target) => {
            if state.modals_mut().handle_click(target) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SectionsIntersected {
            generation,
            entries,
        } => {
            if state.scroll_spy_mut().apply(generation, &entries) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NavLinkClicked { href } => vec![Effect::ScrollTo {
            target: state.scroll_spy().resolve_click(&href),
        }],
        Msg::AccordionToggled(id) => {
            state.toggle_accordion(id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Opens the resource page for the learning session's skill and closes the dialog.
fn open_resource(state: &mut AppState, build_url: fn(&str) -> String) -> Vec<Effect> {
    match state.modals_mut().learning.close() {
        Some(session) => {
            state.mark_dirty();
            vec![Effect::OpenExternal {
                url: build_url(&session.skill),
            }]
        }
        None => Vec::new(),
    }
}
