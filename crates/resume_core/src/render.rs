//! Builds the result panels from an analysis response.
//!
//! Every call produces fresh containers, so rendering the same response twice
//! yields the same output rather than appending to the previous one.

use crate::analysis::{AnalysisResult, JobSuggestion, RoadmapEntry, RoleMatch, SkillStatus};
use crate::dom::{element, Node};
use crate::modal::suitability_percentage;
use crate::Msg;

pub const EXTRACTED_TEXT_FALLBACK: &str = "No text extracted.";

/// Seconds of reveal delay added per card index.
pub const STAGGER_STEP_SECS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsView {
    pub skills: Vec<Node>,
    pub projects: Vec<Node>,
    pub experience: Vec<Node>,
    pub suggestions: Vec<Node>,
    pub search_query: Option<String>,
    pub role_cards: Vec<Node>,
    pub role_rows: Vec<Node>,
    pub roadmap: Vec<Node>,
    pub extracted_text: String,
}

pub fn render_results(result: &AnalysisResult) -> ResultsView {
    ResultsView {
        skills: result.detected_skills.iter().map(|s| skill_tag(s)).collect(),
        projects: list_items(&result.deep_intelligence.projects),
        experience: list_items(&result.deep_intelligence.experience),
        suggestions: result.job_suggestions.iter().map(job_link).collect(),
        search_query: result
            .deep_intelligence
            .super_query
            .clone()
            .filter(|q| !q.trim().is_empty()),
        role_cards: result
            .role_matches
            .iter()
            .enumerate()
            .map(|(index, role)| role_card(index, role))
            .collect(),
        role_rows: result.role_matches.iter().map(role_row).collect(),
        roadmap: result
            .skill_roadmap
            .iter()
            .enumerate()
            .map(|(index, entry)| roadmap_card(index, entry))
            .collect(),
        extracted_text: result
            .extracted_text
            .clone()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| EXTRACTED_TEXT_FALLBACK.to_string()),
    }
}

fn skill_tag(skill: &str) -> Node {
    element("span").class("skill-tag").text(skill).into()
}

fn list_items(items: &[String]) -> Vec<Node> {
    items
        .iter()
        .map(|item| Node::from(element("li").text(item.as_str())))
        .collect()
}

fn job_link(job: &JobSuggestion) -> Node {
    element("a")
        .class("job-link")
        .attr("href", job.url.as_str())
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .child(
            element("div")
                .child(element("strong").text(job.title.as_str()))
                .child(element("span").text(format!("{} • {}", job.company, job.platform))),
        )
        .child(element("strong").text("Apply →"))
        .into()
}

fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * STAGGER_STEP_SECS)
}

fn open_visualizer(role: &RoleMatch) -> Msg {
    Msg::RoleScoreClicked {
        role: role.role.clone(),
        score: role.score,
    }
}

fn role_card(index: usize, role: &RoleMatch) -> Node {
    let percent = suitability_percentage(role.score);
    element("div")
        .class("match-card")
        .class("animate-in")
        .style("animation-delay", stagger_delay(index))
        .child(element("h3").text("AI Suitability"))
        .child(
            element("div")
                .class("score")
                .class("clickable")
                .text(format!("{percent}%"))
                .on_click(open_visualizer(role)),
        )
        .child(element("div").class("role-name").text(role.role.as_str()))
        .child(
            element("small")
                .class("breakdown-link")
                .text("Visual breakdown →")
                .on_click(open_visualizer(role)),
        )
        .into()
}

fn role_row(role: &RoleMatch) -> Node {
    let percent = suitability_percentage(role.score);
    element("tr")
        .child(element("td").text(role.role.as_str()))
        .child(
            element("td")
                .class("score")
                .class("clickable")
                .text(format!("{percent}%"))
                .on_click(open_visualizer(role)),
        )
        .child(element("td").class("description").text(role.description.as_str()))
        .into()
}

fn roadmap_card(index: usize, entry: &RoadmapEntry) -> Node {
    let card = element("div")
        .class("roadmap-card")
        .class("animate-in")
        .style("animation-delay", stagger_delay(index));
    match entry.status {
        SkillStatus::Learned => card
            .class("learned")
            .child(element("span").class("status-badge").text("✓ Mastered"))
            .child(element("h4").text(entry.skill.as_str()))
            .into(),
        SkillStatus::Missing => card
            .class("missing")
            .child(element("span").class("status-badge").text("! Missing"))
            .child(element("h4").text(entry.skill.as_str()))
            .child(element("small").class("learn-link").text("Tap to learn →"))
            .on_click(Msg::MissingSkillClicked {
                skill: entry.skill.clone(),
            })
            .into(),
        SkillStatus::Unknown => card.child(element("h4").text(entry.skill.as_str())).into(),
    }
}
