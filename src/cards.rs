//! Projection from content records to card markup.

use crate::models::case_study::Figure;
use crate::models::media::{MediaItem, MediaKind};
use crate::models::project::ProjectSummary;
use crate::render::{html_escape, urlencoding_simple};

/// What happens when a card is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigate { href: String },
    Zoom { href: String, image_ref: String, alt: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Certificate,
    Badge,
    Book,
    ProjectCover,
    ProjectListing,
    Figure,
}

impl CardStyle {
    fn class(&self) -> &'static str {
        match self {
            CardStyle::Certificate => "card card-certificate",
            CardStyle::Badge => "card card-badge",
            CardStyle::Book => "card card-book",
            CardStyle::ProjectCover => "card card-project",
            CardStyle::ProjectListing => "card card-listing",
            CardStyle::Figure => "card card-figure",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    pub style: CardStyle,
    pub title: String,
    pub meta: Option<String>,
    pub label: Option<String>,
    pub body: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub footnote: Option<String>,
    pub action: Activation,
}

impl Card {
    /// `page_path` is the page the card lives on; zoom links point back at it.
    pub fn from_media(item: &MediaItem, page_path: &str) -> Self {
        let style = match item.kind {
            MediaKind::Certificate => CardStyle::Certificate,
            MediaKind::Badge => CardStyle::Badge,
            MediaKind::Book => CardStyle::Book,
        };
        let key = item.key();
        Card {
            style,
            title: item.title.clone(),
            meta: item.meta_line(),
            label: None,
            body: item.takeaway.clone(),
            tags: Vec::new(),
            image: Some(item.image_ref.clone()),
            footnote: (item.kind == MediaKind::Certificate).then(|| "Click to zoom".to_string()),
            action: Activation::Zoom {
                href: zoom_href(page_path, &key),
                image_ref: item.image_ref.clone(),
                alt: item.title.clone(),
            },
        }
    }

    /// Home page card: the project's highlight copy and cover, falling back
    /// to the index text when it has none.
    pub fn from_project_cover(project: &ProjectSummary) -> Self {
        let (title, body, tags, image) = match &project.highlight {
            Some(h) => (h.title.clone(), h.blurb.clone(), h.tags.clone(), Some(h.cover.clone())),
            None => (project.title.clone(), project.one_liner.clone(), project.tags.clone(), None),
        };
        Card {
            style: CardStyle::ProjectCover,
            title,
            meta: None,
            label: None,
            body: Some(body),
            tags,
            image,
            footnote: Some("Open case study →".to_string()),
            action: Activation::Navigate { href: project.href() },
        }
    }

    /// Projects index card: tier label and the external link, no image.
    pub fn from_project_listing(project: &ProjectSummary) -> Self {
        Card {
            style: CardStyle::ProjectListing,
            title: project.title.clone(),
            meta: None,
            label: Some(project.tier.label().to_string()),
            body: Some(project.one_liner.clone()),
            tags: project.tags.clone(),
            image: None,
            footnote: project.external_link.as_ref().map(|l| format!("GitHub: {}", l)),
            action: Activation::Navigate { href: project.href() },
        }
    }

    pub fn from_figure(key: &str, figure: &Figure, page_path: &str) -> Self {
        Card {
            style: CardStyle::Figure,
            title: figure.caption.clone(),
            meta: None,
            label: None,
            body: None,
            tags: Vec::new(),
            image: Some(figure.image_ref.clone()),
            footnote: None,
            action: Activation::Zoom {
                href: zoom_href(page_path, key),
                image_ref: figure.image_ref.clone(),
                alt: figure.caption.clone(),
            },
        }
    }
}

pub(crate) fn zoom_href(page_path: &str, key: &str) -> String {
    format!("{}?zoom={}", page_path, urlencoding_simple(key))
}

pub fn render_pills(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="pills">"#);
    for tag in tags {
        html.push_str(&format!(r#"<span class="pill">{}</span>"#, html_escape(tag)));
    }
    html.push_str("</div>");
    html
}

pub fn render_card(card: &Card) -> String {
    let mut inner = String::new();

    if let Some(image) = &card.image {
        inner.push_str(&format!(
            r#"<div class="card-image"><img src="{}" alt="{}" loading="lazy"></div>"#,
            html_escape(image),
            html_escape(&card.title)
        ));
    }

    inner.push_str(r#"<div class="card-body">"#);
    match &card.label {
        Some(label) => inner.push_str(&format!(
            r#"<div class="card-head"><h3 class="card-title">{}</h3><span class="tier-label">{}</span></div>"#,
            html_escape(&card.title),
            html_escape(label)
        )),
        None => inner.push_str(&format!(
            r#"<h3 class="card-title">{}</h3>"#,
            html_escape(&card.title)
        )),
    }
    if let Some(meta) = &card.meta {
        inner.push_str(&format!(r#"<p class="card-meta">{}</p>"#, html_escape(meta)));
    }
    if let Some(body) = &card.body {
        if card.style == CardStyle::Book {
            inner.push_str(&format!(
                r#"<p class="card-text"><strong>Applied takeaway:</strong> {}</p>"#,
                html_escape(body)
            ));
        } else {
            inner.push_str(&format!(r#"<p class="card-text">{}</p>"#, html_escape(body)));
        }
    }
    inner.push_str(&render_pills(&card.tags));
    if let Some(note) = &card.footnote {
        inner.push_str(&format!(r#"<p class="card-note">{}</p>"#, html_escape(note)));
    }
    inner.push_str("</div>");

    match &card.action {
        Activation::Navigate { href } => format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            card.style.class(),
            html_escape(href),
            inner
        ),
        Activation::Zoom { href, image_ref, alt } => format!(
            r#"<a class="{} zoom-link" href="{}" data-zoom-src="{}" data-zoom-alt="{}">{}</a>"#,
            card.style.class(),
            html_escape(href),
            html_escape(image_ref),
            html_escape(alt),
            inner
        ),
    }
}

pub fn render_cards(cards: &[Card], grid_class: &str) -> String {
    let mut html = format!(r#"<div class="{}">"#, grid_class);
    for card in cards {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>");
    html
}
