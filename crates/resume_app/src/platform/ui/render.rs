use std::fmt::Write as _;

use resume_core::{render_page, AccordionId, AppViewModel, Element, Node, UploadPanel};

const BAR_WIDTH: usize = 30;

/// Text rendition of the dashboard. Lists are read back from the same node
/// tree the HTML export uses, so both show the same content.
pub fn render(view: &AppViewModel) -> String {
    let page = render_page(view);
    let mut out = String::new();

    let _ = writeln!(out, "{}", upload_line(view));
    if view.results_visible {
        render_results(&mut out, view, &page);
    }
    if let Some(modal) = &view.learning_modal {
        let _ = writeln!(out, "\n[ Learning Path ] {}", modal.prompt);
        let _ = writeln!(out, "  `free` for tutorials, `paid` for courses, `close` to dismiss");
    }
    if let Some(modal) = &view.visualizer_modal {
        let filled = modal.percentage as usize * BAR_WIDTH / 100;
        let _ = writeln!(out, "\n[ {} ]", modal.title);
        let _ = writeln!(
            out,
            "  [{}{}]",
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled)
        );
        let _ = writeln!(out, "  {}  |  {}", modal.suit_legend, modal.not_suit_legend);
    }
    out
}

fn upload_line(view: &AppViewModel) -> String {
    let file = view.staged_file_name.as_deref().unwrap_or("");
    match view.upload {
        UploadPanel::DropZone if view.drop_zone_hover => {
            "Drop zone: release to stage the file".to_string()
        }
        UploadPanel::DropZone => {
            "Drop your resume here or `select <path>` (PDF, DOCX, TXT)".to_string()
        }
        UploadPanel::Preview => format!("Staged: {file}  (`analyze` or `remove`)"),
        UploadPanel::Loading => format!("Analyzing {file}..."),
        UploadPanel::Collapsed => format!("Results for {file}"),
    }
}

fn render_results(out: &mut String, view: &AppViewModel, page: &Node) {
    let width = view.score.value.min(100) as usize * BAR_WIDTH / 100;
    let _ = writeln!(
        out,
        "\nATS Compatibility {:>4} [{}{}]",
        view.score.text,
        "=".repeat(width),
        " ".repeat(BAR_WIDTH - width)
    );

    let nav: Vec<String> = view
        .nav_links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let marker = if link.active { "*" } else { " " };
            format!("{marker}{} {}", i + 1, link.label)
        })
        .collect();
    let _ = writeln!(out, "Nav: {}", nav.join(" | "));

    let skills = texts(page, "skill-tag");
    let _ = writeln!(out, "\nSkills: {}", skills.join(", "));

    let _ = writeln!(out, "\nRole matches:");
    for (i, card) in page.find_by_class("match-card").into_iter().enumerate() {
        let score = child_text(card, "score");
        let role = child_text(card, "role-name");
        let _ = writeln!(out, "  {}. {role} {score}", i + 1);
    }
    if view.is_expanded(AccordionId::RoleTable) {
        if let Some(table) = page.find_by_id("analysis-table") {
            let table = Node::from(table.clone());
            // First row is the header.
            for row in table.find_all(&|el| el.tag == "tr").into_iter().skip(1) {
                let cells: Vec<String> = row.children.iter().map(Node::text_content).collect();
                let _ = writeln!(out, "     {}", cells.join(" | "));
            }
        }
    }

    let _ = writeln!(out, "\nRoadmap:");
    let mut missing = 0;
    for card in page.find_by_class("roadmap-card") {
        let skill = child_tag_text(card, "h4");
        if card.has_class("missing") {
            missing += 1;
            let _ = writeln!(out, "  ! {skill}  (learn {missing})");
        } else if card.has_class("learned") {
            let _ = writeln!(out, "  + {skill}");
        } else {
            let _ = writeln!(out, "    {skill}");
        }
    }

    for (title, id) in [("Projects", "projects-list"), ("Experience", "experience-list")] {
        if let Some(list) = page.find_by_id(id) {
            let _ = writeln!(out, "\n{title}:");
            for item in &list.children {
                let _ = writeln!(out, "  - {}", item.text_content());
            }
        }
    }

    let _ = writeln!(out, "\nLive opportunities:");
    for query in texts(page, "search-query") {
        let _ = writeln!(out, "  {query}");
    }
    for link in page.find_by_class("job-link") {
        let label = Node::from(link.clone()).text_content();
        let _ = writeln!(
            out,
            "  {} <{}>",
            label.trim_end_matches("Apply →").trim(),
            link.attribute("href").unwrap_or("")
        );
    }

    if view.is_expanded(AccordionId::ExtractedText) {
        if let Some(results) = &view.results {
            let _ = writeln!(out, "\nExtracted text:\n{}", results.extracted_text);
        }
    }
}

fn texts(page: &Node, class: &str) -> Vec<String> {
    page.find_by_class(class)
        .into_iter()
        .map(|el| Node::from(el.clone()).text_content())
        .collect()
}

fn child_text(parent: &Element, class: &str) -> String {
    Node::from(parent.clone())
        .find_by_class(class)
        .first()
        .map(|el| Node::from((*el).clone()).text_content())
        .unwrap_or_default()
}

fn child_tag_text(parent: &Element, tag: &str) -> String {
    Node::from(parent.clone())
        .find_all(&|el| el.tag == tag)
        .first()
        .map(|el| Node::from((*el).clone()).text_content())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::render;
    use resume_core::{update, AnalysisResult, AppState, Msg, RoleMatch, SelectionSource};

    #[test]
    fn idle_view_prompts_for_a_file() {
        let text = render(&AppState::new().view());
        assert!(text.starts_with("Drop your resume here"));
        assert!(!text.contains("ATS Compatibility"));
    }

    #[test]
    fn results_list_roles_with_indices() {
        let (state, _) = update(
            AppState::new(),
            Msg::FileChosen {
                path: "cv.txt".into(),
                source: SelectionSource::Input,
            },
        );
        let (state, effects) = update(state, Msg::AnalyzeClicked);
        let request_id = match &effects[..] {
            [resume_core::Effect::SubmitAnalysis { request_id, .. }] => *request_id,
            other => panic!("unexpected {other:?}"),
        };
        let result = AnalysisResult {
            detected_skills: vec!["Rust".into(), "SQL".into()],
            role_matches: vec![RoleMatch {
                role: "Backend Engineer".into(),
                score: 0.82,
                description: "APIs".into(),
            }],
            ..AnalysisResult::default()
        };
        let (state, _) = update(state, Msg::AnalysisSucceeded { request_id, result });

        let text = render(&state.view());
        assert!(text.contains("Results for cv.txt"));
        assert!(text.contains("Skills: Rust, SQL"));
        assert!(text.contains("1. Backend Engineer 82%"));
        assert!(text.contains("*1 Overview"));
    }
}
