use log::debug;
use rocket::response::content::{RawHtml, RawText, RawXml};
use rocket::State;
use serde_json::json;

use crate::content::Registry;
use crate::lightbox::{Lightbox, LightboxState};
use crate::render;
use crate::seo;
use crate::settings::SiteSettings;

// ── Homepage ───────────────────────────────────────────

#[get("/?<zoom>")]
pub fn homepage(
    settings: &State<SiteSettings>,
    registry: &State<Registry>,
    zoom: Option<&str>,
) -> RawHtml<String> {
    let mut lightbox = Lightbox::new();
    if let Some(key) = zoom {
        match registry.find_media(key) {
            Some(item) => {
                lightbox.open(&item.image_ref, &item.title);
            }
            None => debug!("zoom key '{}' matches no media item", key),
        }
    }

    let context = json!({
        "path": "/",
        "zoom": zoom.filter(|_| lightbox.state().is_open()),
        "seo": seo::build_meta(settings, None, None, "/"),
    });

    RawHtml(render::render_page(
        settings,
        registry,
        "home",
        &context,
        lightbox.state(),
    ))
}

// ── Projects ───────────────────────────────────────────

#[get("/projects")]
pub fn projects_index(settings: &State<SiteSettings>, registry: &State<Registry>) -> RawHtml<String> {
    let context = json!({
        "path": "/projects",
        "seo": seo::build_meta(
            settings,
            Some("Projects"),
            Some("Featured and additional data science, analytics and ML projects."),
            "/projects",
        ),
    });

    RawHtml(render::render_page(
        settings,
        registry,
        "projects",
        &context,
        &LightboxState::Closed,
    ))
}

#[get("/projects/<slug>?<zoom>")]
pub fn project_single(
    settings: &State<SiteSettings>,
    registry: &State<Registry>,
    slug: &str,
    zoom: Option<&str>,
) -> Option<RawHtml<String>> {
    let project = registry.find_project(slug)?;
    let study = registry.find_case_study(slug);
    let path = project.href();

    let mut lightbox = Lightbox::new();
    if let Some(key) = zoom {
        match study.and_then(|s| s.find_figure(key)) {
            Some(fig) => {
                lightbox.open(&fig.image_ref, &fig.caption);
            }
            None => debug!("zoom key '{}' matches no figure on {}", key, path),
        }
    }

    let description = study
        .map(|s| s.summary.as_str())
        .unwrap_or(project.one_liner.as_str());

    let context = json!({
        "path": &path,
        "slug": project.slug,
        "zoom": zoom.filter(|_| lightbox.state().is_open()),
        "seo": seo::build_meta(settings, Some(&project.title), Some(description), &path),
    });

    Some(RawHtml(render::render_page(
        settings,
        registry,
        "case_study",
        &context,
        lightbox.state(),
    )))
}

// ── Sitemap / Robots ───────────────────────────────────

#[get("/sitemap.xml")]
pub fn sitemap(settings: &State<SiteSettings>, registry: &State<Registry>) -> Option<RawXml<String>> {
    seo::sitemap::generate_sitemap(settings, registry).map(RawXml)
}

#[get("/robots.txt")]
pub fn robots(settings: &State<SiteSettings>) -> RawText<String> {
    RawText(seo::sitemap::generate_robots(settings))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, projects_index, project_single, sitemap, robots]
}
