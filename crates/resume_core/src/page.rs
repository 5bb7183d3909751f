//! Full-page node tree for the dashboard, driven entirely by the view model.

use crate::dom::{element, text, Element, Node};
use crate::render::ResultsView;
use crate::view_model::{AppViewModel, LearningModalView, VisualizerModalView};
use crate::{AccordionId, ClickTarget, ModalKind, Msg, HERO_ID, RESULTS_SECTION_ID};

// Plain text: no `<`, `>` or `&`, so escaping leaves it intact.
const STYLESHEET: &str = "\
:root { --primary-charcoal: #0f172a; --accent-blue: #2563eb; --text-muted: #64748b; }
body { font-family: system-ui, sans-serif; margin: 0; color: var(--primary-charcoal); }
.hidden { display: none !important; }
.hero { padding: 3rem 2rem; text-align: center; }
#drop-zone { border: 2px dashed #e2e8f0; padding: 2rem; cursor: pointer; }
#drop-zone.drag-over { border-color: #0f172a; background: #f8fafc; }
#side-nav { position: fixed; right: 1rem; top: 40%; display: flex; flex-direction: column; }
.side-link.active { font-weight: 800; }
#ats-meter { background: #f1f5f9; height: 8px; }
#ats-meter-fill { background: var(--primary-charcoal); height: 8px; }
.skill-tag { display: inline-block; padding: 0.2rem 0.6rem; margin: 0.2rem; border-radius: 999px; background: #f1f5f9; }
.match-card, .roadmap-card { display: inline-block; padding: 1rem; margin: 0.5rem; border-radius: 12px; border: 1px solid #e2e8f0; }
.roadmap-card.missing { cursor: pointer; }
.score.clickable { cursor: pointer; color: var(--accent-blue); font-weight: 800; }
.accordion-content { display: none; }
.accordion-content.active { display: block; }
.modal { position: fixed; inset: 0; background: rgba(15, 23, 42, 0.5); }
.modal-content { background: white; max-width: 420px; margin: 10% auto; padding: 2rem; border-radius: 16px; }
#pie-chart { width: 160px; height: 160px; border-radius: 50%; }
";

/// Complete HTML document for the current view.
pub fn render_document(view: &AppViewModel, generated_at: &str) -> String {
    let head = element("head")
        .child(element("meta").attr("charset", "UTF-8"))
        .child(
            element("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(element("title").text("Resume Analysis"))
        .child(element("style").text(STYLESHEET));
    let body = element("body")
        .child(render_page(view))
        .child(element("footer").text(format!("Generated {generated_at}")));

    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">");
    Node::from(head).write_html(&mut out);
    Node::from(body).write_html(&mut out);
    out.push_str("</html>\n");
    out
}

pub fn render_page(view: &AppViewModel) -> Node {
    element("div")
        .class("page")
        .child(hero(view))
        .child(side_nav(view))
        .child(results_section(view))
        .child(learning_modal(view.learning_modal.as_ref()))
        .child(visualizer_modal(view.visualizer_modal.as_ref()))
        .into()
}

fn hero(view: &AppViewModel) -> Element {
    element("header")
        .id(HERO_ID)
        .class("hero")
        .child(element("h1").class("hero-title").text("AI Resume Analyzer"))
        .child(
            element("p")
                .class("hero-subtitle")
                .text("Elevate your career with precision AI matching"),
        )
        .child(drop_zone(view))
        .child(file_preview(view))
        .child(
            element("div")
                .id("loading-state")
                .class_if(!view.loading_visible, "hidden")
                .child(element("div").class("spinner"))
                .child(element("p").text("Analyzing your resume...")),
        )
}

fn drop_zone(view: &AppViewModel) -> Element {
    element("div")
        .id("drop-zone")
        .class_if(!view.drop_zone_visible, "hidden")
        .class_if(view.drop_zone_hover, "drag-over")
        .on_click(Msg::BrowseClicked)
        .child(
            element("input")
                .id("file-input")
                .attr("type", "file")
                .attr("accept", ".pdf,.docx,.txt")
                .class("hidden"),
        )
        .child(element("p").text("Drop your resume here or click to browse"))
        .child(element("small").text("Supported formats: PDF, DOCX, TXT"))
}

fn file_preview(view: &AppViewModel) -> Element {
    let mut analyze = element("button")
        .id("analyze-btn")
        .text("Analyze Resume")
        .on_click(Msg::AnalyzeClicked);
    if !view.analyze_enabled {
        analyze = analyze.attr("disabled", "disabled");
    }
    element("div")
        .id("file-preview")
        .class_if(!view.preview_visible, "hidden")
        .child(
            element("span")
                .class("file-name")
                .text(view.staged_file_name.clone().unwrap_or_default()),
        )
        .child(
            element("button")
                .id("remove-file")
                .text("Remove")
                .on_click(Msg::RemoveFileClicked),
        )
        .child(analyze)
}

fn side_nav(view: &AppViewModel) -> Element {
    element("nav")
        .id("side-nav")
        .class_if(!view.side_nav_visible, "hidden")
        .children(view.nav_links.iter().map(|link| {
            Node::from(
                element("a")
                    .class("side-link")
                    .class_if(link.active, "active")
                    .attr("href", link.href.as_str())
                    .attr("title", link.label.as_str())
                    .on_click(Msg::NavLinkClicked {
                        href: link.href.clone(),
                    }),
            )
        }))
}

fn results_section(view: &AppViewModel) -> Element {
    let empty = ResultsView::default();
    let results = view.results.as_ref().unwrap_or(&empty);
    element("section")
        .id(RESULTS_SECTION_ID)
        .class_if(!view.results_visible, "hidden")
        .child(
            element("div")
                .class("ats-card")
                .child(element("h3").text("ATS Compatibility"))
                .child(element("span").id("ats-score-value").text(view.score.text.as_str()))
                .child(
                    element("div").id("ats-meter").child(
                        element("div")
                            .id("ats-meter-fill")
                            .style("width", view.score.meter_width.as_str()),
                    ),
                ),
        )
        .child(
            section("skills-section", "Detected Skills")
                .child(element("div").id("skills-list").children(results.skills.clone())),
        )
        .child(
            section("roles-section", "Strategic Job Matches")
                .child(element("div").id("results-grid").children(results.role_cards.clone()))
                .child(accordion(
                    view,
                    AccordionId::RoleTable,
                    element("table")
                        .id("analysis-table")
                        .child(
                            element("thead").child(
                                element("tr")
                                    .child(element("th").text("Role"))
                                    .child(element("th").text("Match"))
                                    .child(element("th").text("Why")),
                            ),
                        )
                        .child(element("tbody").children(results.role_rows.clone())),
                )),
        )
        .child(
            section("roadmap-section", "Skill Roadmap")
                .child(element("div").id("skill-roadmap").children(results.roadmap.clone())),
        )
        .child(
            section("insights-section", "Deep Intelligence")
                .child(element("h3").text("Projects"))
                .child(element("ul").id("projects-list").children(results.projects.clone()))
                .child(element("h3").text("Experience"))
                .child(
                    element("ul")
                        .id("experience-list")
                        .children(results.experience.clone()),
                ),
        )
        .child(jobs_section(results))
        .child(section("text-section", "Extracted Text").child(accordion(
            view,
            AccordionId::ExtractedText,
            element("pre")
                .id("extracted-text-view")
                .text(results.extracted_text.as_str()),
        )))
}

fn jobs_section(results: &ResultsView) -> Element {
    let mut jobs = section("jobs-section", "Live Opportunities");
    if let Some(query) = &results.search_query {
        jobs = jobs.child(
            element("p")
                .class("search-query")
                .text(format!("Search query: {query}")),
        );
    }
    jobs.child(
        element("div")
            .id("suggestions-list")
            .children(results.suggestions.clone()),
    )
}

fn section(id: &'static str, title: &'static str) -> Element {
    element("section").id(id).child(element("h2").text(title))
}

fn accordion(view: &AppViewModel, id: AccordionId, content: Element) -> Element {
    element("div")
        .class("accordion")
        .child(
            element("div")
                .class("accordion-header")
                .text(id.title())
                .on_click(Msg::AccordionToggled(id)),
        )
        .child(
            element("div")
                .class("accordion-content")
                .class_if(view.is_expanded(id), "active")
                .child(content),
        )
}

fn modal_shell(kind: ModalKind, open: bool) -> (Element, Element) {
    let container = element("div")
        .id(kind.element_id())
        .class("modal")
        .class_if(!open, "hidden")
        .on_click(Msg::WindowClicked(ClickTarget::Backdrop(kind)));
    let content = element("div")
        .class("modal-content")
        .on_click(Msg::WindowClicked(ClickTarget::Content(kind)))
        .child(
            element("span")
                .class("close-modal")
                .text("×")
                .on_click(Msg::CloseModalClicked),
        );
    (container, content)
}

fn learning_modal(view: Option<&LearningModalView>) -> Element {
    let (container, content) = modal_shell(ModalKind::Learning, view.is_some());
    let prompt = view.map(|v| v.prompt.clone()).unwrap_or_default();
    container.child(
        content
            .child(element("h3").text("Learning Path"))
            .child(element("p").id("modal-skill-name").text(prompt))
            .child(
                element("button")
                    .id("btn-free")
                    .text("Free resources")
                    .on_click(Msg::FreeResourcesClicked),
            )
            .child(
                element("button")
                    .id("btn-paid")
                    .text("Paid courses")
                    .on_click(Msg::PaidResourcesClicked),
            ),
    )
}

fn visualizer_modal(view: Option<&VisualizerModalView>) -> Element {
    let (container, content) = modal_shell(ModalKind::Visualizer, view.is_some());
    let (title, suit, not_suit, background) = match view {
        Some(v) => (
            v.title.clone(),
            v.suit_legend.clone(),
            v.not_suit_legend.clone(),
            v.chart_background.clone(),
        ),
        None => Default::default(),
    };
    let mut chart = element("div").id("pie-chart");
    if !background.is_empty() {
        chart = chart.style("background", background);
    }
    container.child(
        content
            .child(element("h3").id("visualizer-role-name").text(title))
            .child(chart)
            .child(
                element("div")
                    .class("legend")
                    .child(element("span").id("legend-suit-text").text(suit))
                    .child(element("span").id("legend-not-suit-text").child(text(not_suit))),
            ),
    )
}
