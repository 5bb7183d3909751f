use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use resume_core::{
    update, AnalysisResult, AppState, DocumentKind, Effect, Msg, SelectionSource, UploadPanel,
    UNSUPPORTED_FILE_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn choose(state: AppState, path: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FileChosen {
            path: PathBuf::from(path),
            source: SelectionSource::Browse,
        },
    )
}

fn submitted_request(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SubmitAnalysis { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("analyze should submit a request")
}

#[test]
fn valid_file_shows_preview() {
    init_logging();
    let (mut state, effects) = choose(AppState::new(), "/home/me/resume.pdf");
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.upload, UploadPanel::Preview);
    assert!(view.preview_visible);
    assert!(!view.drop_zone_visible);
    assert!(!view.results_visible);
    assert!(!view.side_nav_visible);
    assert_eq!(view.staged_file_name.as_deref(), Some("resume.pdf"));
    assert!(view.analyze_enabled);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn extension_match_is_case_insensitive() {
    init_logging();
    let (state, effects) = choose(AppState::new(), "CV.Final.DOCX");

    assert!(effects.is_empty());
    let staged = state.staged_file().expect("file staged");
    assert_eq!(staged.kind, DocumentKind::Docx);
    assert_eq!(staged.name, "CV.Final.DOCX");
}

#[test]
fn bare_name_is_matched_as_extension() {
    init_logging();
    let (state, effects) = choose(AppState::new(), "txt");

    assert!(effects.is_empty());
    assert_eq!(state.staged_file().map(|file| file.kind), Some(DocumentKind::Txt));
    assert!(state.view().preview_visible);
}

#[test]
fn unsupported_file_is_rejected() {
    init_logging();
    let (state, effects) = choose(AppState::new(), "image.png");
    let view = state.view();

    assert_eq!(
        effects,
        vec![Effect::Alert {
            message: UNSUPPORTED_FILE_MESSAGE.to_string(),
        }]
    );
    assert!(view.drop_zone_visible);
    assert!(!view.preview_visible);
    assert_eq!(view.staged_file_name, None);
}

#[test]
fn rejection_keeps_previously_staged_file() {
    init_logging();
    let (state, _) = choose(AppState::new(), "notes.txt");
    let (state, effects) = choose(state, "archive.pdf.zip");

    assert_eq!(effects.len(), 1);
    assert_eq!(state.staged_file().map(|f| f.name.as_str()), Some("notes.txt"));
    assert!(state.view().preview_visible);
}

#[test]
fn dropped_file_clears_hover() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DragOver);
    assert!(state.view().drop_zone_hover);

    let (state, _) = update(
        state,
        Msg::FileChosen {
            path: PathBuf::from("resume.txt"),
            source: SelectionSource::Drop,
        },
    );
    assert!(!state.view().drop_zone_hover);
    assert!(state.view().preview_visible);
}

#[test]
fn remove_restores_drop_zone_and_disables_analyze() {
    init_logging();
    let (state, _) = choose(AppState::new(), "resume.pdf");
    let (state, effects) = update(state, Msg::RemoveFileClicked);
    let view = state.view();

    assert_eq!(effects, vec![Effect::ResetFileInput]);
    assert!(view.drop_zone_visible);
    assert!(!view.preview_visible);
    assert!(!view.side_nav_visible);
    assert_eq!(state.staged_file(), None);

    let (state, effects) = update(state, Msg::AnalyzeClicked);
    assert!(effects.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn analyze_enters_loading_and_ignores_repeats() {
    init_logging();
    let (state, _) = choose(AppState::new(), "resume.pdf");
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    let request_id = submitted_request(&effects);
    let view = state.view();

    assert!(view.loading_visible);
    assert!(!view.preview_visible);
    assert!(!view.analyze_enabled);
    assert_eq!(state.pending_request(), Some(request_id));

    let (state, effects) = update(state, Msg::AnalyzeClicked);
    assert!(effects.is_empty());
    assert_eq!(state.pending_request(), Some(request_id));

    let (state, effects) = choose(state, "other.pdf");
    assert!(effects.is_empty());
    assert_eq!(state.staged_file().map(|f| f.name.as_str()), Some("resume.pdf"));
}

#[test]
fn failure_restores_preview_for_retry() {
    init_logging();
    let (state, _) = choose(AppState::new(), "resume.pdf");
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    let request_id = submitted_request(&effects);

    let (state, effects) = update(
        state,
        Msg::AnalysisFailed {
            request_id,
            message: "corrupt file".to_string(),
        },
    );
    let view = state.view();

    assert_eq!(
        effects,
        vec![Effect::Alert {
            message: "Error: corrupt file".to_string(),
        }]
    );
    assert!(view.preview_visible);
    assert!(!view.loading_visible);
    assert!(!view.results_visible);
    assert_eq!(view.staged_file_name.as_deref(), Some("resume.pdf"));

    let (_, effects) = update(state, Msg::AnalyzeClicked);
    let retry_id = submitted_request(&effects);
    assert!(retry_id > request_id);
}

#[test]
fn stale_responses_are_dropped() {
    init_logging();
    let (state, _) = choose(AppState::new(), "resume.pdf");
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    let request_id = submitted_request(&effects);

    let (state, effects) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: request_id + 7,
            result: AnalysisResult::default(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.is_loading());
    assert!(!state.results_visible());
}

#[test]
fn selecting_new_file_hides_previous_results() {
    init_logging();
    let (state, _) = choose(AppState::new(), "resume.pdf");
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    let request_id = submitted_request(&effects);
    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id,
            result: AnalysisResult::default(),
        },
    );
    assert!(state.view().side_nav_visible);
    assert_eq!(state.upload_panel(), UploadPanel::Collapsed);

    let (state, _) = choose(state, "second.txt");
    let view = state.view();
    assert!(!view.results_visible);
    assert!(!view.side_nav_visible);
    assert!(view.preview_visible);
}
