use resume_core::{
    AccordionId, AppViewModel, Rect, ResultsView, SectionId, HERO_ID, RESULTS_SECTION_ID,
};

use super::constants::*;

/// Stacks the page sections top to bottom the way the browser would lay them
/// out. Hidden results take no space.
pub fn page_layout(view: &AppViewModel) -> Vec<(SectionId, Rect)> {
    let mut layout = vec![(
        SectionId::new(HERO_ID),
        Rect {
            top: 0.0,
            height: HERO_HEIGHT,
        },
    )];
    let Some(results) = view.results.as_ref().filter(|_| view.results_visible) else {
        return layout;
    };

    let mut top = HERO_HEIGHT;
    let mut push = |id: &str, height: f64| {
        layout.push((SectionId::new(id), Rect { top, height }));
        top += height;
    };
    push(RESULTS_SECTION_ID, RESULTS_HEADER_HEIGHT);
    for (id, items) in section_items(view, results) {
        push(id, (items as f64 * ITEM_HEIGHT).max(SECTION_MIN_HEIGHT));
    }
    layout
}

fn section_items(view: &AppViewModel, results: &ResultsView) -> [(&'static str, usize); 6] {
    let role_rows = if view.is_expanded(AccordionId::RoleTable) {
        results.role_rows.len()
    } else {
        0
    };
    let text_lines = if view.is_expanded(AccordionId::ExtractedText) {
        results.extracted_text.lines().count()
    } else {
        0
    };
    [
        ("skills-section", results.skills.len()),
        ("roles-section", results.role_cards.len() * 3 + role_rows),
        ("roadmap-section", results.roadmap.len() * 2),
        (
            "insights-section",
            results.projects.len() + results.experience.len() + 2,
        ),
        ("jobs-section", results.suggestions.len() * 2 + 1),
        ("text-section", text_lines + 1),
    ]
}

/// Top of the section with `id`, or the page top when it is not laid out.
pub fn section_top(layout: &[(SectionId, Rect)], id: &SectionId) -> f64 {
    layout
        .iter()
        .find(|(section, _)| section == id)
        .map(|(_, rect)| rect.top)
        .unwrap_or(0.0)
}

/// Lowest scroll position that still fills the viewport.
pub fn max_scroll(layout: &[(SectionId, Rect)]) -> f64 {
    let bottom = layout
        .iter()
        .map(|(_, rect)| rect.top + rect.height)
        .fold(0.0, f64::max);
    (bottom - VIEWPORT_HEIGHT).max(0.0)
}
