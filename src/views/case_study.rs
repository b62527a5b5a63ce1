//! Per-project detail page. Projects without a write-up get a summary page.

use pulldown_cmark::{html::push_html, Options, Parser};

use crate::cards::{render_cards, render_pills, Card};
use crate::models::case_study::CaseStudy;
use crate::models::project::ProjectSummary;
use crate::render::html_escape;

use super::section_title;

pub fn render(project: &ProjectSummary, study: Option<&CaseStudy>, page_path: &str) -> String {
    match study {
        Some(study) => render_study(project, study, page_path),
        None => render_summary(project),
    }
}

fn render_header(title: &str, summary: &str, pills: &[String], repository: Option<&str>) -> String {
    let repo = repository
        .map(|href| {
            format!(
                r#"<a class="btn btn-dark" href="{}" target="_blank" rel="noreferrer">GitHub Repo</a>"#,
                html_escape(href)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="panel study-header">
    <div>
        <h1>{}</h1>
        <p class="lead">{}</p>
        {}
    </div>
    <div class="actions">{}<a class="btn" href="/projects">← Back to Projects</a></div>
</div>"#,
        html_escape(title),
        html_escape(summary),
        render_pills(pills),
        repo
    )
}

fn render_study(project: &ProjectSummary, study: &CaseStudy, page_path: &str) -> String {
    let mut html = String::from(r#"<section class="container narrow stack">"#);
    html.push_str(&render_header(
        &study.headline,
        &study.summary,
        &study.tools,
        study.repository.as_deref().or(project.external_link.as_deref()),
    ));

    html.push_str(r#"<article class="panel prose">"#);
    html.push_str(&markdown_to_html(&study.body));
    html.push_str("</article>");

    if !study.figure_groups.is_empty() {
        html.push_str(r#"<div class="panel">"#);
        html.push_str(&section_title("Visual Analysis"));
        let mut keyed = study.figures();
        for group in &study.figure_groups {
            let cards: Vec<Card> = keyed
                .by_ref()
                .take(group.figures.len())
                .map(|(key, fig)| Card::from_figure(&key, fig, page_path))
                .collect();
            html.push_str(&format!(
                r#"<div class="figure-group"><p class="tile-heading">{}</p>{}</div>"#,
                html_escape(&group.title),
                render_cards(&cards, "grid grid-3")
            ));
        }
        html.push_str("</div>");
    }

    html.push_str(r#"<footer class="page-footer"><a href="/">← Back to Home</a></footer></section>"#);
    html
}

fn render_summary(project: &ProjectSummary) -> String {
    let mut html = String::from(r#"<section class="container narrow stack">"#);
    html.push_str(&render_header(
        &project.title,
        &project.one_liner,
        &project.tags,
        project.external_link.as_deref(),
    ));
    html.push_str(r#"<div class="panel"><p class="note">A detailed write-up for this project is on its way.</p></div>"#);
    html.push_str(r#"<footer class="page-footer"><a href="/">← Back to Home</a></footer></section>"#);
    html
}

pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 2);
    push_html(&mut out, parser);
    out
}
