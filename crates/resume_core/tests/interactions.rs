use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use resume_core::{
    entries_for, render_page, update, AccordionId, AnalysisResult, AppState, ClickTarget, Effect,
    IntersectionEntry, ModalKind, Msg, Rect, SectionId, SelectionSource, Viewport,
};
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

/// Runs a full analysis and returns the state plus the observation generation.
fn analyzed(payload: serde_json::Value) -> (AppState, u64) {
    let (state, _) = update(
        AppState::new(),
        Msg::FileChosen {
            path: PathBuf::from("resume.pdf"),
            source: SelectionSource::Browse,
        },
    );
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    let request_id = match effects.as_slice() {
        [Effect::SubmitAnalysis { request_id, .. }] => *request_id,
        other => panic!("unexpected effects: {other:?}"),
    };
    let result: AnalysisResult = serde_json::from_value(payload).expect("valid payload");
    let (state, effects) = update(state, Msg::AnalysisSucceeded { request_id, result });
    let generation = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ObserveSections { generation, .. } => Some(*generation),
            _ => None,
        })
        .expect("sections observed after render");
    (state, generation)
}

fn active_links(state: &AppState) -> Vec<String> {
    state
        .view()
        .nav_links
        .into_iter()
        .filter(|link| link.active)
        .map(|link| link.href)
        .collect()
}

fn entry(id: &str, ratio: f64) -> IntersectionEntry {
    IntersectionEntry {
        target: SectionId::new(id),
        intersection_ratio: ratio,
    }
}

#[test]
fn missing_skill_opens_learning_modal_and_links_out() {
    init_logging();
    let (state, _) = analyzed(json!({
        "skill_roadmap": [{"skill": "Kubernetes", "status": "missing"}]
    }));

    let page = render_page(&state.view());
    let card = page.find_by_class("missing")[0];
    let click = card.on_click.clone().expect("missing card is clickable");

    let (state, _) = update(state, click);
    let modal = state.view().learning_modal.expect("learning modal open");
    assert!(modal.prompt.contains("Kubernetes"));

    let page = render_page(&state.view());
    let container = page.find_by_id("learning-modal").expect("modal container");
    assert!(!container.has_class("hidden"));

    let (state, effects) = update(state, Msg::FreeResourcesClicked);
    assert_eq!(
        effects,
        vec![Effect::OpenExternal {
            url: "https://www.youtube.com/results?search_query=Kubernetes+tutorial+full+course"
                .to_string(),
        }]
    );
    assert_eq!(state.view().learning_modal, None);
}

#[test]
fn paid_resources_encode_skill() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::MissingSkillClicked {
            skill: "C++ & Rust".to_string(),
        },
    );
    let (_, effects) = update(state, Msg::PaidResourcesClicked);

    assert_eq!(
        effects,
        vec![Effect::OpenExternal {
            url: "https://www.google.com/search?q=best+professional+courses+for+C%2B%2B+%26+Rust"
                .to_string(),
        }]
    );
}

#[test]
fn role_score_opens_visualizer() {
    init_logging();
    let (state, _) = analyzed(json!({
        "role_matches": [{"role": "Data Engineer", "score": 0.64, "description": "pipelines"}]
    }));
    let page = render_page(&state.view());
    let score = page
        .find_all(&|el| el.has_class("score") && el.on_click.is_some())
        .into_iter()
        .next()
        .expect("clickable score");

    let (state, _) = update(state, score.on_click.clone().expect("click handler"));
    let modal = state.view().visualizer_modal.expect("visualizer open");

    assert_eq!(modal.title, "Data Engineer Suitability");
    assert_eq!(modal.percentage, 64);
    assert_eq!(modal.suit_legend, "Suit: 64%");
    assert_eq!(modal.not_suit_legend, "Not Suit: 36%");
    assert!(modal.chart_background.contains("0% 64%"));
}

#[test]
fn legend_halves_sum_to_hundred() {
    init_logging();
    for step in 0..=100 {
        let score = f64::from(step) / 100.0;
        let (state, _) = update(
            AppState::new(),
            Msg::RoleScoreClicked {
                role: "Any".to_string(),
                score,
            },
        );
        let modal = state.view().visualizer_modal.expect("visualizer open");
        let suit: u32 = modal
            .suit_legend
            .trim_start_matches("Suit: ")
            .trim_end_matches('%')
            .parse()
            .unwrap();
        let not_suit: u32 = modal
            .not_suit_legend
            .trim_start_matches("Not Suit: ")
            .trim_end_matches('%')
            .parse()
            .unwrap();
        assert_eq!(suit + not_suit, 100, "score {score}");
    }
}

#[test]
fn modal_dismissal_rules() {
    init_logging();
    let open_both = || {
        let (state, _) = update(
            AppState::new(),
            Msg::MissingSkillClicked {
                skill: "Go".to_string(),
            },
        );
        let (state, _) = update(
            state,
            Msg::RoleScoreClicked {
                role: "SRE".to_string(),
                score: 0.3,
            },
        );
        state
    };

    let (state, _) = update(
        open_both(),
        Msg::WindowClicked(ClickTarget::Content(ModalKind::Learning)),
    );
    assert!(state.view().learning_modal.is_some());

    let (state, _) = update(
        state,
        Msg::WindowClicked(ClickTarget::Backdrop(ModalKind::Learning)),
    );
    assert!(state.view().learning_modal.is_none());
    assert!(state.view().visualizer_modal.is_some());

    let (state, _) = update(open_both(), Msg::CloseModalClicked);
    assert!(state.view().learning_modal.is_none());
    assert!(state.view().visualizer_modal.is_none());

    let (mut state, _) = update(AppState::new(), Msg::CloseModalClicked);
    assert!(!state.consume_dirty());
}

#[test]
fn results_section_shares_overview_link() {
    init_logging();
    let (state, generation) = analyzed(json!({"ats_score": 10}));
    assert_eq!(active_links(&state), vec!["#".to_string()]);

    let (state, _) = update(
        state,
        Msg::SectionsIntersected {
            generation,
            entries: vec![entry("skills-section", 0.9)],
        },
    );
    assert_eq!(active_links(&state), vec!["#skills-section".to_string()]);

    let (state, _) = update(
        state,
        Msg::SectionsIntersected {
            generation,
            entries: vec![entry("skills-section", 0.1), entry("results-section", 0.45)],
        },
    );
    assert_eq!(active_links(&state), vec!["#".to_string()]);
}

#[test]
fn below_threshold_does_not_highlight() {
    init_logging();
    let (state, generation) = analyzed(json!({}));
    let (state, _) = update(
        state,
        Msg::SectionsIntersected {
            generation,
            entries: vec![entry("jobs-section", 0.39)],
        },
    );
    assert_eq!(active_links(&state), vec!["#".to_string()]);
}

#[test]
fn stale_generation_entries_are_ignored() {
    init_logging();
    let (mut state, generation) = analyzed(json!({}));
    state.consume_dirty();
    let (mut state, _) = update(
        state,
        Msg::SectionsIntersected {
            generation: generation - 1,
            entries: vec![entry("roles-section", 1.0)],
        },
    );
    assert_eq!(active_links(&state), vec!["#".to_string()]);
    assert!(!state.consume_dirty());
}

#[test]
fn viewport_geometry_drives_highlight() {
    init_logging();
    let (state, generation) = analyzed(json!({}));
    let layout = vec![
        (SectionId::hero(), Rect { top: 0.0, height: 600.0 }),
        (SectionId::results(), Rect { top: 600.0, height: 400.0 }),
        (SectionId::new("skills-section"), Rect { top: 1000.0, height: 500.0 }),
    ];
    let entries = entries_for(
        &layout,
        Viewport {
            scroll_top: 1000.0,
            height: 500.0,
        },
    );
    let (state, _) = update(
        state,
        Msg::SectionsIntersected {
            generation,
            entries,
        },
    );
    assert_eq!(active_links(&state), vec!["#skills-section".to_string()]);
}

#[test]
fn nav_click_scrolls_to_section_or_hero() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::NavLinkClicked {
            href: "#roadmap-section".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ScrollTo {
            target: SectionId::new("roadmap-section"),
        }]
    );

    let (_, effects) = update(
        state,
        Msg::NavLinkClicked {
            href: "#".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ScrollTo {
            target: SectionId::hero(),
        }]
    );
}

#[test]
fn accordion_toggles_independently() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::AccordionToggled(AccordionId::ExtractedText),
    );
    let view = state.view();
    assert!(view.is_expanded(AccordionId::ExtractedText));
    assert!(!view.is_expanded(AccordionId::RoleTable));

    let page = render_page(&view);
    let active = page.find_all(&|el| el.has_class("accordion-content") && el.has_class("active"));
    assert_eq!(active.len(), 1);

    let (state, _) = update(state, Msg::AccordionToggled(AccordionId::ExtractedText));
    assert!(state.view().expanded_accordions.is_empty());
}
