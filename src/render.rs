use serde_json::Value;

use crate::content::Registry;
use crate::lightbox::LightboxState;
use crate::settings::SiteSettings;
use crate::views;

/// Renders a full page: the view named by `template_type` wrapped in the
/// site shell, with the lightbox overlay when the state is open.
///
/// Context keys: `seo` (meta tags), `path` (page path, used for zoom and
/// close links), `zoom` (key of the open image), `slug` (case-study pages).
pub fn render_page(
    settings: &SiteSettings,
    registry: &Registry,
    template_type: &str,
    context: &Value,
    lightbox: &LightboxState,
) -> String {
    let path = context.get("path").and_then(|v| v.as_str()).unwrap_or("/");

    let body_html = match template_type {
        "home" => views::home::render(registry, path),
        "projects" => views::projects::render(registry),
        "case_study" => {
            let slug = context.get("slug").and_then(|v| v.as_str()).unwrap_or("");
            match registry.find_project(slug) {
                Some(project) => {
                    views::case_study::render(project, registry.find_case_study(slug), path)
                }
                None => render_404(),
            }
        }
        _ => render_404(),
    };

    let seo_meta = context.get("seo").and_then(|s| s.as_str()).unwrap_or("");
    let zoom_key = context.get("zoom").and_then(|v| v.as_str()).unwrap_or("");
    let overlay = views::lightbox::render_overlay(lightbox, path, zoom_key);
    let lightbox_js = if settings.lightbox_script {
        format!("<script>{}</script>", LIGHTBOX_JS)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {seo_meta}
    <style>
        {base_css}
    </style>
</head>
<body class="page-{template_type}{locked}">
    <main>
    {body_html}
    </main>
    <p class="container copyright">&copy; {year} {site_name}</p>
    {overlay}
    {lightbox_js}
</body>
</html>"#,
        seo_meta = seo_meta,
        base_css = DEFAULT_CSS,
        template_type = template_type,
        locked = if lightbox.is_open() { " lb-locked" } else { "" },
        body_html = body_html,
        year = chrono::Utc::now().format("%Y"),
        site_name = html_escape(&settings.site_name),
        overlay = overlay,
        lightbox_js = lightbox_js,
    )
}

pub fn render_404() -> String {
    r#"<div class="container error-page">
    <h1>404</h1>
    <p>Page not found.</p>
    <a href="/">← Back to home</a>
</div>"#
        .to_string()
}

pub fn urlencoding_simple(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(b as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", b));
            }
        }
    }
    result
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Client-side mirror of `lightbox::transition`. Zoom links open in place,
/// the backdrop, Close and Escape close, clicks inside the content box stop
/// propagating. Without script the same links round-trip through `?zoom=`.
const LIGHTBOX_JS: &str = r#"
(function() {
    var overlay = document.getElementById('lightbox');
    var img, titleEl;

    function bind() {
        img = overlay.querySelector('.lb-image');
        titleEl = overlay.querySelector('.lb-title');
        overlay.querySelector('.lb-backdrop').addEventListener('click', function(e) { e.preventDefault(); close(); });
        overlay.querySelector('.lb-close').addEventListener('click', function(e) { e.preventDefault(); close(); });
        overlay.querySelector('.lb-content').addEventListener('click', function(e) { e.stopPropagation(); });
    }

    function createOverlay() {
        overlay = document.createElement('div');
        overlay.id = 'lightbox';
        overlay.className = 'lightbox-overlay';
        overlay.setAttribute('role', 'dialog');
        overlay.setAttribute('aria-modal', 'true');
        overlay.innerHTML =
            '<a class="lb-backdrop" href="' + location.pathname + '" aria-label="Close" tabindex="-1"></a>' +
            '<div class="lb-content">' +
                '<div class="lb-header"><a class="lb-title"></a>' +
                '<a class="lb-close" href="' + location.pathname + '" role="button">Close</a></div>' +
                '<div class="lb-frame"><img class="lb-image" src="" alt=""></div>' +
            '</div>';
        document.body.appendChild(overlay);
        bind();
    }

    function open(src, alt) {
        if (!src) return;
        if (!overlay) createOverlay();
        img.src = src;
        img.alt = alt || '';
        titleEl.textContent = alt || '';
        overlay.setAttribute('aria-label', alt || '');
        overlay.classList.add('active');
        document.body.classList.add('lb-locked');
    }

    function close() {
        if (!overlay) return;
        overlay.classList.remove('active');
        document.body.classList.remove('lb-locked');
        if (location.search.indexOf('zoom=') !== -1 && window.history.replaceState) {
            window.history.replaceState(null, '', location.pathname);
        }
    }

    if (overlay) bind();

    document.querySelectorAll('.zoom-link').forEach(function(link) {
        link.addEventListener('click', function(e) {
            e.preventDefault();
            open(link.dataset.zoomSrc, link.dataset.zoomAlt);
        });
    });

    document.addEventListener('keydown', function(e) {
        if (e.key === 'Escape' && overlay && overlay.classList.contains('active')) close();
    });
})();
"#;

const DEFAULT_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    font-size: 15px;
    color: #111827;
    background: #f9fafb;
    line-height: 1.6;
}
body.lb-locked { overflow: hidden; }

a { color: inherit; }
img { max-width: 100%; }

.container { max-width: 72rem; margin: 0 auto; padding: 0 24px; }
.container.narrow { max-width: 64rem; }
.stack { display: grid; gap: 32px; padding-top: 40px; padding-bottom: 40px; }

/* ── Hero ── */
.hero { padding-top: 40px; }
.banner {
    border-radius: 16px 16px 0 0;
    background: linear-gradient(90deg, #0f172a, #1e293b, #0f172a);
    padding: 40px;
    color: #fff;
}
.eyebrow { font-size: 12px; color: rgba(226, 232, 240, 0.9); }
.banner h1 { font-size: 36px; margin-top: 8px; letter-spacing: -0.02em; }
.tagline { margin-top: 8px; color: rgba(226, 232, 240, 0.9); max-width: 48rem; }
.banner .pills { margin-top: 20px; }
.profile-card {
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 0 0 16px 16px;
    padding: 24px;
}
.profile-row { display: flex; flex-wrap: wrap; gap: 20px; align-items: center; justify-content: space-between; }
.profile-id { display: flex; gap: 16px; align-items: center; }
.avatar { border-radius: 50%; object-fit: cover; }
.role { font-weight: 500; font-size: 14px; }
.location { font-size: 12px; color: #4b5563; }
.profile-links { display: flex; gap: 12px; flex-wrap: wrap; }
.about { margin-top: 16px; font-size: 14px; color: #374151; }

/* ── Panels ── */
.panel {
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 16px;
    padding: 24px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.section-title { display: flex; align-items: flex-end; gap: 16px; margin-bottom: 20px; }
.section-title h2 { font-size: 18px; font-weight: 600; }
.section-title .rule { height: 1px; flex: 1; background: #e5e7eb; }
.intro { padding-top: 40px; }
.intro h1 { font-size: 30px; }
.lead { margin-top: 8px; font-size: 14px; color: #374151; max-width: 48rem; }
.note { margin-top: 12px; font-size: 12px; color: #4b5563; }
.actions { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 20px; }

.grid { display: grid; gap: 16px; }
@media (min-width: 768px) {
    .grid-2 { grid-template-columns: repeat(2, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
}
.tile { border: 1px solid #e5e7eb; border-radius: 16px; background: #f9fafb; padding: 20px; }
.tile h3 { font-size: 14px; font-weight: 600; }
.tile p { margin-top: 8px; font-size: 14px; color: #374151; }
.tile-plain { background: #fff; margin-top: 24px; }
.tile-heading { font-size: 14px; font-weight: 600; margin-bottom: 12px; }
.badges { margin-top: 32px; }
.badge-row { display: flex; flex-wrap: wrap; gap: 20px; }

/* ── Pills & buttons ── */
.pills { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 12px; }
.pill {
    display: inline-flex;
    border: 1px solid #e5e7eb;
    border-radius: 9999px;
    background: #fff;
    padding: 4px 12px;
    font-size: 12px;
    color: #374151;
}
.btn {
    display: inline-flex;
    border: 1px solid #e5e7eb;
    border-radius: 12px;
    background: #fff;
    padding: 8px 16px;
    font-size: 14px;
    font-weight: 500;
    text-decoration: none;
}
.btn-dark { background: #111827; color: #fff; border-color: #111827; }

/* ── Cards ── */
.card {
    display: block;
    border: 1px solid #e5e7eb;
    border-radius: 16px;
    background: #fff;
    overflow: hidden;
    text-decoration: none;
    color: inherit;
}
.card:hover { background: #f9fafb; }
.card:hover .card-title { text-decoration: underline; }
.card-body { padding: 16px; }
.card-head { display: flex; justify-content: space-between; gap: 16px; align-items: flex-start; }
.card-title { font-size: 14px; font-weight: 600; }
.card-meta { margin-top: 4px; font-size: 12px; color: #4b5563; }
.card-text { margin-top: 8px; font-size: 14px; color: #374151; }
.card-note { margin-top: 12px; font-size: 12px; color: #6b7280; word-break: break-all; }
.tier-label { border: 1px solid #e5e7eb; border-radius: 9999px; padding: 2px 8px; font-size: 11px; color: #4b5563; }
.card-image { position: relative; width: 100%; background: #fff; }
.card-image img { display: block; width: 100%; height: 100%; object-fit: cover; }
.card-project .card-image { height: 160px; }
.card-certificate .card-image { aspect-ratio: 16 / 10; padding: 12px; }
.card-certificate .card-image img { object-fit: contain; }
.card-figure .card-image { height: 220px; padding: 8px; }
.card-figure .card-image img { object-fit: contain; }
.card-figure .card-title { font-size: 12px; font-weight: 400; text-align: center; color: #4b5563; }
.card-badge { border: none; background: none; text-align: center; }
.card-badge .card-image { width: 160px; height: 160px; border-radius: 50%; overflow: hidden; border: 1px solid #e5e7eb; margin: 0 auto; }
.card-badge .card-title { font-size: 12px; font-weight: 500; }
.card-book { padding: 16px; }
.card-book .card-image { float: left; width: 64px; height: 64px; border-radius: 50%; overflow: hidden; border: 1px solid #e5e7eb; margin-right: 16px; }
.card-book .card-body { padding: 0; }
.figure-group + .figure-group { margin-top: 32px; }

/* ── Case study prose ── */
.study-header { display: flex; flex-wrap: wrap; gap: 16px; justify-content: space-between; }
.study-header h1 { font-size: 24px; }
.prose h2 { font-size: 16px; font-weight: 600; margin: 24px 0 12px; }
.prose h2:first-child { margin-top: 0; }
.prose h3 { font-size: 14px; font-weight: 600; margin: 16px 0 8px; }
.prose p, .prose li { font-size: 14px; color: #374151; }
.prose p + p { margin-top: 8px; }
.prose ul { padding-left: 20px; margin: 8px 0; }
.prose table { width: 100%; border-collapse: collapse; font-size: 14px; margin-top: 16px; }
.prose th, .prose td { text-align: left; padding: 8px 0; border-bottom: 1px solid #e5e7eb; }

.page-footer { padding-bottom: 40px; font-size: 14px; color: #4b5563; }
.copyright { padding-bottom: 24px; font-size: 12px; color: #9ca3af; }
.error-page { text-align: center; padding: 80px 24px; }

/* ── Lightbox ── */
.lightbox-overlay {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: none;
    align-items: center;
    justify-content: center;
    padding: 16px;
}
.lightbox-overlay.active { display: flex; }
.lb-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.7); }
.lb-content {
    position: relative;
    z-index: 1;
    width: 100%;
    max-width: 64rem;
    border-radius: 16px;
    background: #fff;
    overflow: hidden;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
}
.lb-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #e5e7eb; padding: 12px; }
.lb-title { font-size: 14px; font-weight: 600; text-decoration: none; }
.lb-close { border: 1px solid #e5e7eb; border-radius: 8px; padding: 4px 12px; font-size: 14px; text-decoration: none; }
.lb-frame { height: 75vh; padding: 16px; display: flex; align-items: center; justify-content: center; }
.lb-image { max-height: 100%; object-fit: contain; }
"#;
