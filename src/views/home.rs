//! Home page: profile hero, skills, featured projects, certificates and
//! badges, book takeaways.

use crate::cards::{render_cards, render_pills, Card};
use crate::content::Registry;
use crate::render::html_escape;

use super::section_title;

pub fn render(registry: &Registry, page_path: &str) -> String {
    let mut html = String::new();
    html.push_str(&render_hero(registry));
    html.push_str(r#"<section class="container stack">"#);
    html.push_str(&render_skills(registry));
    html.push_str(&render_featured(registry));
    html.push_str(&render_credentials(registry, page_path));
    html.push_str(&render_books(registry, page_path));
    html.push_str("</section>");

    let p = &registry.profile;
    html.push_str(&format!(
        r#"<footer class="container page-footer">{} · {} · {}</footer>"#,
        html_escape(&p.location),
        html_escape(&p.email),
        html_escape(&p.phone)
    ));
    html
}

fn render_hero(registry: &Registry) -> String {
    let p = &registry.profile;

    let links: String = p
        .links
        .iter()
        .enumerate()
        .map(|(i, l)| {
            format!(
                r#"<a class="btn{}" href="{}" target="_blank" rel="noreferrer">{}</a>"#,
                if i == 0 { " btn-dark" } else { "" },
                html_escape(&l.href),
                html_escape(&l.label)
            )
        })
        .collect();

    format!(
        r#"<section class="container hero">
    <div class="banner">
        <p class="eyebrow">{headline}</p>
        <h1>{name}</h1>
        <p class="tagline">{tagline}</p>
        {pills}
    </div>
    <div class="profile-card">
        <div class="profile-row">
            <div class="profile-id">
                <img class="avatar" src="{avatar}" alt="{name}" width="80" height="80">
                <div>
                    <p class="role">{role}</p>
                    <p class="location">{location}</p>
                </div>
            </div>
            <div class="profile-links">{links}</div>
        </div>
        <p class="about">{about}<br><strong>{focus}</strong></p>
    </div>
</section>"#,
        headline = html_escape(&p.headline),
        name = html_escape(&p.name),
        tagline = html_escape(&p.tagline),
        pills = render_pills(&p.hero_pills),
        avatar = html_escape(&p.avatar),
        role = html_escape(&p.role),
        location = html_escape(&p.location),
        links = links,
        about = html_escape(&p.about),
        focus = html_escape(&p.focus),
    )
}

fn render_skills(registry: &Registry) -> String {
    let s = &registry.skills;
    let mut html = String::from(r#"<div class="panel">"#);
    html.push_str(&section_title("Skills"));
    html.push_str(r#"<div class="grid grid-3">"#);
    for g in &s.groups {
        html.push_str(&format!(
            r#"<div class="tile"><h3>{}</h3><p>{}</p><p><strong>Tools: {}</strong></p></div>"#,
            html_escape(&g.title),
            html_escape(&g.summary),
            html_escape(&g.tools)
        ));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        r#"<div class="tile tile-plain"><h3>Professional &amp; Business Skills</h3>{}<p class="note">{}</p></div>"#,
        render_pills(&s.professional),
        html_escape(&s.reading_note)
    ));
    html.push_str("</div>");
    html
}

fn render_featured(registry: &Registry) -> String {
    let cards: Vec<Card> = registry
        .featured_cards()
        .into_iter()
        .map(Card::from_project_cover)
        .collect();

    let mut html = String::from(r#"<div class="panel">"#);
    html.push_str(&section_title("Featured Projects"));
    html.push_str(&render_cards(&cards, "grid grid-3"));
    html.push_str(r#"<div class="actions"><a class="btn btn-dark" href="/projects">View All Projects →</a></div>"#);
    html.push_str("</div>");
    html
}

fn render_credentials(registry: &Registry, page_path: &str) -> String {
    let certs: Vec<Card> = registry
        .certificates()
        .into_iter()
        .map(|m| Card::from_media(m, page_path))
        .collect();
    let badges: Vec<Card> = registry
        .badges()
        .into_iter()
        .map(|m| Card::from_media(m, page_path))
        .collect();

    let mut html = String::from(r#"<div class="panel">"#);
    html.push_str(&section_title("Certifications & Badges"));
    html.push_str(&render_cards(&certs, "grid grid-2"));
    if !badges.is_empty() {
        html.push_str(r#"<div class="tile badges"><p class="tile-heading">Badges</p>"#);
        html.push_str(&render_cards(&badges, "badge-row"));
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_books(registry: &Registry, page_path: &str) -> String {
    let books: Vec<Card> = registry
        .books()
        .into_iter()
        .map(|m| Card::from_media(m, page_path))
        .collect();
    if books.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="panel">"#);
    html.push_str(&section_title("Professional Growth"));
    html.push_str(r#"<p class="lead">Books I actively apply for communication, leadership, and execution.</p>"#);
    html.push_str(&render_cards(&books, "grid grid-3"));
    html.push_str("</div>");
    html
}
