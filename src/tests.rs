#![cfg(test)]

use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

use crate::boot;
use crate::build_rocket;
use crate::cards::{render_card, Activation, Card};
use crate::content::Registry;
use crate::lightbox::LightboxState;
use crate::models::media::{MediaItem, MediaKind};
use crate::models::project::{Highlight, ProjectSummary, Tier};
use crate::seo;
use crate::settings::SiteSettings;
use crate::views;

fn client() -> Client {
    Client::tracked(build_rocket(SiteSettings::default(), Registry::builtin()))
        .expect("valid rocket instance")
}

/// Registry with only the given projects and media; profile and skills
/// come from the built-in content.
fn registry_with(projects: Vec<ProjectSummary>, media: Vec<MediaItem>) -> Registry {
    let base = Registry::builtin();
    Registry::new(base.profile, base.skills, media, projects, Vec::new())
}

// ═══════════════════════════════════════════════════════════
// Content registry
// ═══════════════════════════════════════════════════════════

#[test]
fn builtin_registry_is_valid() {
    let registry = Registry::builtin();
    assert_eq!(registry.validate(), Vec::<String>::new());
}

#[test]
fn builtin_registry_counts() {
    let registry = Registry::builtin();
    assert_eq!(registry.certificates().len(), 6);
    assert_eq!(registry.badges().len(), 1);
    assert_eq!(registry.books().len(), 7);
    assert_eq!(registry.projects().len(), 8);
    assert_eq!(registry.featured_cards().len(), 3);
    assert!(registry.find_case_study("tesla").is_some());
}

#[test]
fn filter_by_tier_keeps_order_and_excludes_others() {
    let registry = registry_with(
        vec![
            ProjectSummary::new("Tesla", "tesla", Tier::Featured, "forecasting", &["Python"]),
            ProjectSummary::new("ANPR", "anpr", Tier::Additional, "plates", &["PyTorch"]),
        ],
        Vec::new(),
    );
    let featured = registry.projects_by_tier(Tier::Featured);
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].slug, "tesla");
    let additional = registry.projects_by_tier(Tier::Additional);
    assert_eq!(additional.len(), 1);
    assert_eq!(additional[0].slug, "anpr");
    assert!(registry.validate().is_empty());
}

#[test]
fn builtin_slugs_are_unique() {
    let registry = Registry::builtin();
    let mut slugs: Vec<&str> = registry.projects().iter().map(|p| p.slug.as_str()).collect();
    let total = slugs.len();
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), total);
}

#[test]
fn validate_reports_duplicate_slug() {
    let registry = registry_with(
        vec![
            ProjectSummary::new("One", "same", Tier::Featured, "a", &[]),
            ProjectSummary::new("Two", "same", Tier::Additional, "b", &[]),
        ],
        Vec::new(),
    );
    let problems = registry.validate();
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("duplicate project slug 'same'"));
}

#[test]
fn validate_reports_empty_image_and_bad_link() {
    let registry = registry_with(
        vec![ProjectSummary::new("One", "one", Tier::Featured, "a", &[]).with_link("ftp://example.com/x")],
        vec![MediaItem::badge("No Image", None, "")],
    );
    let problems = registry.validate();
    assert!(problems.iter().any(|p| p.contains("'No Image' has no image")));
    assert!(problems.iter().any(|p| p.contains("unsupported scheme 'ftp'")));
}

#[test]
fn find_media_by_key() {
    let registry = Registry::builtin();
    let item = registry.find_media("sql-intermediate").expect("certificate exists");
    assert_eq!(item.kind, MediaKind::Certificate);
    assert_eq!(item.image_ref, "/images/certificate/SQLin.jpg");
    assert!(registry.find_media("nope").is_none());
}

#[test]
fn media_meta_lines() {
    let cert = MediaItem::certificate("C", "IBM / Coursera", "2025", "/c.jpg");
    assert_eq!(cert.meta_line().as_deref(), Some("IBM / Coursera • 2025"));
    let badge = MediaItem::badge("B", None, "/b.jpg");
    assert_eq!(badge.meta_line(), None);
    let book = MediaItem::book("Atomic Habits", Some("James Clear"), "/a.jpg", "systems");
    assert_eq!(book.meta_line().as_deref(), Some("James Clear"));
}

#[test]
fn case_study_figure_keys_are_sequential() {
    let registry = Registry::builtin();
    let study = registry.find_case_study("tesla").unwrap();
    let keys: Vec<String> = study.figures().map(|(k, _)| k).collect();
    assert_eq!(keys.first().map(String::as_str), Some("fig-1"));
    assert_eq!(keys.len(), 13);
    assert_eq!(study.find_figure("fig-1").unwrap().caption, "ARIMA Forecast");
    assert!(study.find_figure("fig-99").is_none());
}

// ═══════════════════════════════════════════════════════════
// Boot check
// ═══════════════════════════════════════════════════════════

fn settings_with_assets(dir: &std::path::Path) -> SiteSettings {
    SiteSettings {
        asset_dir: dir.to_string_lossy().into_owned(),
        ..SiteSettings::default()
    }
}

#[test]
fn boot_check_counts_registry_problems_as_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_with(
        vec![
            ProjectSummary::new("One", "same", Tier::Featured, "a", &[]),
            ProjectSummary::new("Two", "same", Tier::Additional, "b", &[]),
        ],
        Vec::new(),
    );
    let report = boot::check(&settings_with_assets(tmp.path()), &registry);
    assert_eq!(report.errors, 1);
}

#[test]
fn boot_check_builtin_content_has_no_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let report = boot::check(&settings_with_assets(tmp.path()), &Registry::builtin());
    assert_eq!(report.errors, 0);
    // Every referenced image is missing from the empty directory
    assert!(report.warnings > 0);
}

#[test]
fn boot_check_warns_on_relative_site_url() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_with(Vec::new(), Vec::new());
    let good = boot::check(&settings_with_assets(tmp.path()), &registry);
    let bad_settings = SiteSettings {
        site_url: "not a url".to_string(),
        ..settings_with_assets(tmp.path())
    };
    let bad = boot::check(&bad_settings, &registry);
    assert_eq!(bad.errors, 0);
    assert_eq!(bad.warnings, good.warnings + 1);
}

#[test]
fn boot_check_creates_missing_asset_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("public").join("images");
    let registry = registry_with(Vec::new(), Vec::new());
    let report = boot::check(&settings_with_assets(&assets), &registry);
    assert!(assets.is_dir());
    assert!(report.warnings >= 1);
    assert_eq!(report.errors, 0);

    // Second run finds the directory in place
    let again = boot::check(&settings_with_assets(&assets), &registry);
    assert_eq!(again.warnings, report.warnings - 1);
}

#[test]
fn boot_check_finds_present_images() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("badges")).unwrap();
    std::fs::write(tmp.path().join("badges").join("b.jpg"), b"").unwrap();
    let settings = settings_with_assets(tmp.path());

    let present = registry_with(Vec::new(), vec![MediaItem::badge("B", None, "/images/badges/b.jpg")]);
    let missing = registry_with(Vec::new(), vec![MediaItem::badge("B", None, "/images/badges/gone.jpg")]);
    let with_image = boot::check(&settings, &present);
    let without_image = boot::check(&settings, &missing);
    assert_eq!(without_image.warnings, with_image.warnings + 1);
}

// ═══════════════════════════════════════════════════════════
// Cards
// ═══════════════════════════════════════════════════════════

#[test]
fn home_card_uses_highlight_copy() {
    let project = ProjectSummary::new("Index Title", "p", Tier::Featured, "index text", &["Index"])
        .with_highlight(Highlight::new("/images/p/cover.png", "Home Title", "home blurb", &["Home Tag"]));
    let card = Card::from_project_cover(&project);
    assert_eq!(card.title, "Home Title");
    assert_eq!(card.body.as_deref(), Some("home blurb"));
    assert_eq!(card.tags, vec!["Home Tag".to_string()]);
    assert_eq!(card.image.as_deref(), Some("/images/p/cover.png"));
    assert_eq!(card.action, Activation::Navigate { href: "/projects/p".to_string() });

    let listing = Card::from_project_listing(&project);
    assert_eq!(listing.title, "Index Title");
    assert_eq!(listing.body.as_deref(), Some("index text"));
}

#[test]
fn project_card_escapes_and_keeps_tag_order() {
    let project = ProjectSummary::new(
        "A <b>bold</b> & brave project",
        "brave",
        Tier::Featured,
        "one \"liner\"",
        &["Zeta", "Alpha", "<script>"],
    );
    let html = render_card(&Card::from_project_listing(&project));
    assert!(html.contains("A &lt;b&gt;bold&lt;/b&gt; &amp; brave project"));
    assert!(html.contains("one &quot;liner&quot;"));
    assert!(!html.contains("<script>"));
    let zeta = html.find(">Zeta<").unwrap();
    let alpha = html.find(">Alpha<").unwrap();
    let script = html.find(">&lt;script&gt;<").unwrap();
    assert!(zeta < alpha && alpha < script);
    assert!(html.contains(r#"href="/projects/brave""#));
    assert!(html.contains(">Featured<"));
}

#[test]
fn media_card_opens_lightbox() {
    let item = MediaItem::certificate("SQL (Intermediate)", "HackerRank", "Issued Oct 2025", "/images/certificate/SQLin.jpg");
    let card = Card::from_media(&item, "/");
    assert_eq!(
        card.action,
        Activation::Zoom {
            href: "/?zoom=sql-intermediate".to_string(),
            image_ref: "/images/certificate/SQLin.jpg".to_string(),
            alt: "SQL (Intermediate)".to_string(),
        }
    );
    let html = render_card(&card);
    assert!(html.contains("zoom-link"));
    assert!(html.contains(r#"data-zoom-src="/images/certificate/SQLin.jpg""#));
    assert!(html.contains("HackerRank • Issued Oct 2025"));
    assert!(html.contains("Click to zoom"));
}

#[test]
fn book_card_shows_takeaway() {
    let item = MediaItem::book("The Servant", None, "/images/books/servant.jpg", "Leadership = service");
    let html = render_card(&Card::from_media(&item, "/"));
    assert!(html.contains("Applied takeaway:"));
    assert!(html.contains("Leadership = service"));
}

// ═══════════════════════════════════════════════════════════
// Overlay
// ═══════════════════════════════════════════════════════════

#[test]
fn overlay_hidden_when_closed() {
    assert_eq!(views::lightbox::render_overlay(&LightboxState::Closed, "/", ""), "");
}

#[test]
fn overlay_backdrop_is_not_an_ancestor_of_content() {
    let state = LightboxState::Open {
        image_ref: "/images/a.jpg".to_string(),
        alt_text: "A & B".to_string(),
    };
    let html = views::lightbox::render_overlay(&state, "/", "a");
    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains(r#"src="/images/a.jpg""#));
    assert!(html.contains("A &amp; B"));
    // The backdrop link closes before the content box opens
    let backdrop_end = html.find(r#"tabindex="-1"></a>"#).unwrap();
    let content = html.find(r#"class="lb-content""#).unwrap();
    assert!(backdrop_end < content);
    assert!(html.contains(r#"class="lb-close" href="/""#));
}

#[test]
fn overlay_links_follow_transitions() {
    let state = LightboxState::Open {
        image_ref: "/images/fig.png".to_string(),
        alt_text: "Fig".to_string(),
    };
    let html = views::lightbox::render_overlay(&state, "/projects/tesla", "fig-2");
    assert!(html.contains(r#"class="lb-backdrop" href="/projects/tesla""#));
    assert!(html.contains(r#"class="lb-close" href="/projects/tesla""#));
    // A click on the content box keeps the same image open
    assert!(html.contains(r#"class="lb-title" href="/projects/tesla?zoom=fig-2""#));
}

// ═══════════════════════════════════════════════════════════
// Settings / SEO
// ═══════════════════════════════════════════════════════════

#[test]
fn settings_partial_toml_keeps_defaults() {
    let s = SiteSettings::parse("site_url = \"https://example.com/\"\nopen_graph = false\n").unwrap();
    assert_eq!(s.base_url(), "https://example.com");
    assert!(!s.open_graph);
    assert!(s.sitemap_enabled);
    assert_eq!(s.asset_dir, "public/images");
}

#[test]
fn settings_invalid_toml_is_an_error() {
    assert!(SiteSettings::parse("site_name = [").is_err());
}

#[test]
fn settings_missing_file_yields_defaults() {
    let s = SiteSettings::load("does/not/exist/Site.toml").unwrap();
    assert_eq!(s.site_name, SiteSettings::default().site_name);
}

#[test]
fn meta_uses_title_template() {
    let settings = SiteSettings::default();
    let meta = seo::build_meta(&settings, Some("Projects"), None, "/projects");
    assert!(meta.contains("<title>Projects | Misbah Shaikh</title>"));
    assert!(meta.contains(r#"<link rel="canonical" href="http://localhost:8000/projects">"#));
    assert!(meta.contains("og:title"));
}

#[test]
fn sitemap_lists_every_project() {
    let settings = SiteSettings::default();
    let registry = Registry::builtin();
    let xml = seo::sitemap::generate_sitemap(&settings, &registry).unwrap();
    for p in registry.projects() {
        assert!(xml.contains(&format!("http://localhost:8000/projects/{}<", p.slug)));
    }

    let disabled = SiteSettings { sitemap_enabled: false, ..SiteSettings::default() };
    assert!(seo::sitemap::generate_sitemap(&disabled, &registry).is_none());
    assert!(!seo::sitemap::generate_robots(&disabled).contains("Sitemap:"));
}

#[test]
fn markdown_renders_tables() {
    let html = views::case_study::markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

// ═══════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════

#[test]
fn home_renders_without_overlay() {
    let client = client();
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.content_type(), Some(ContentType::HTML));
    let body = res.into_string().unwrap();
    assert!(body.contains("Misbah Shaikh"));
    assert!(body.contains("Certifications &amp; Badges"));
    assert!(body.contains(r#"href="/?zoom=sql-intermediate""#));
    assert!(!body.contains(r#"id="lightbox""#));
}

#[test]
fn home_featured_cards_use_home_copy() {
    let client = client();
    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("Global Startup Ecosystem Analytics Platform"));
    assert!(body.contains("Freight Fraud Detection &amp; Risk Analytics System"));
    assert!(body.contains(">Time Series Forecasting<"));
    assert!(body.contains(r#"src="/images/projects/startup-ecosystem/cover.png""#));
    assert!(body.contains(r#"href="/projects/startup-ecosystem""#));

    let index = client.get("/projects").dispatch().into_string().unwrap();
    assert!(index.contains("Global Startup Ecosystem: Funding &amp; Growth Analysis"));
    assert!(!index.contains("Global Startup Ecosystem Analytics Platform"));
}

#[test]
fn home_zoom_opens_overlay() {
    let client = client();
    let body = client.get("/?zoom=sql-intermediate").dispatch().into_string().unwrap();
    assert!(body.contains(r#"id="lightbox""#));
    assert!(body.contains(r#"class="lb-image" src="/images/certificate/SQLin.jpg" alt="SQL (Intermediate)""#));
    assert!(body.contains(r#"<a class="lb-title" href="/?zoom=sql-intermediate">SQL (Intermediate)</a>"#));
}

fn attr_after<'a>(body: &'a str, marker: &str) -> &'a str {
    let start = body.find(marker).expect("marker present") + marker.len();
    let end = body[start..].find('"').expect("closing quote");
    &body[start..start + end]
}

#[test]
fn following_backdrop_link_closes_overlay() {
    let client = client();
    let body = client.get("/?zoom=sql-intermediate").dispatch().into_string().unwrap();
    let backdrop = attr_after(&body, r#"class="lb-backdrop" href=""#).to_string();
    let dismiss = attr_after(&body, r#"class="lb-close" href=""#).to_string();
    assert_eq!(backdrop, "/");
    assert_eq!(dismiss, "/");

    let res = client.get(backdrop).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let after = res.into_string().unwrap();
    assert!(!after.contains(r#"id="lightbox""#));
    assert!(after.contains(r#"<body class="page-home">"#));
}

#[test]
fn following_title_link_keeps_overlay_open() {
    let client = client();
    let body = client.get("/projects/tesla?zoom=fig-1").dispatch().into_string().unwrap();
    let permalink = attr_after(&body, r#"class="lb-title" href=""#).to_string();
    assert_eq!(permalink, "/projects/tesla?zoom=fig-1");

    let again = client.get(permalink).dispatch().into_string().unwrap();
    assert!(again.contains(r#"id="lightbox""#));
    assert!(again.contains(">ARIMA Forecast</a>"));
}

#[test]
fn home_zoom_on_book() {
    let client = client();
    let body = client.get("/?zoom=atomic-habits").dispatch().into_string().unwrap();
    assert!(body.contains(r#"src="/images/books/atomic.jpg" alt="Atomic Habits""#));
}

#[test]
fn home_unknown_zoom_stays_closed() {
    let client = client();
    let res = client.get("/?zoom=nothing-here").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert!(!res.into_string().unwrap().contains(r#"id="lightbox""#));
}

#[test]
fn projects_index_lists_featured_first() {
    let client = client();
    let res = client.get("/projects").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    for p in Registry::builtin().projects() {
        assert!(body.contains(&format!(r#"href="/projects/{}""#, p.slug)));
    }
    let featured = body.find("Featured Projects").unwrap();
    let additional = body.find("Additional Projects").unwrap();
    assert!(featured < additional);
    let tesla = body.find(r#"href="/projects/tesla""#).unwrap();
    let anpr = body.find(r#"href="/projects/anpr""#).unwrap();
    assert!(featured < tesla && tesla < additional && additional < anpr);
}

#[test]
fn case_study_page() {
    let client = client();
    let res = client.get("/projects/tesla").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("Tesla Stock Forecasting &amp; Time Series Analysis"));
    assert!(body.contains("Visual Analysis"));
    assert!(body.contains("<table>"));
    assert!(body.contains(r#"href="/projects/tesla?zoom=fig-1""#));
    assert!(!body.contains(r#"id="lightbox""#));
}

#[test]
fn case_study_figure_zoom() {
    let client = client();
    let body = client.get("/projects/tesla?zoom=fig-1").dispatch().into_string().unwrap();
    assert!(body.contains(r#"id="lightbox""#));
    assert!(body.contains("Forcast - ARIMA.png"));
    assert!(body.contains(r#"<a class="lb-title" href="/projects/tesla?zoom=fig-1">ARIMA Forecast</a>"#));
    assert!(body.contains(r#"class="lb-close" href="/projects/tesla""#));
}

#[test]
fn project_without_case_study_renders_summary() {
    let client = client();
    let res = client.get("/projects/anpr").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("Automatic Number Plate Recognition (ANPR)"));
    assert!(body.contains("Faster R-CNN"));
}

#[test]
fn unknown_project_is_404() {
    let client = client();
    let res = client.get("/projects/nope").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn sitemap_and_robots_routes() {
    let client = client();
    let res = client.get("/sitemap.xml").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert!(res.into_string().unwrap().contains("<urlset"));

    let robots = client.get("/robots.txt").dispatch().into_string().unwrap();
    assert!(robots.contains("Sitemap: http://localhost:8000/sitemap.xml"));
}

#[test]
fn pages_are_not_cached() {
    let client = client();
    let res = client.get("/projects").dispatch();
    assert_eq!(res.headers().get_one("Cache-Control"), Some("no-cache"));
}
