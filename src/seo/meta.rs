use crate::settings::SiteSettings;

use super::html_escape;

/// Build meta tags HTML string for a page
pub fn build_meta(
    settings: &SiteSettings,
    title: Option<&str>,
    description: Option<&str>,
    path: &str,
) -> String {
    let site_name = &settings.site_name;

    let page_title = match title {
        Some(t) => settings
            .title_template
            .replace("{{title}}", t)
            .replace("{{site_name}}", site_name),
        None => site_name.clone(),
    };

    let page_desc = description.unwrap_or(&settings.default_description);
    let canonical = format!("{}{}", settings.base_url(), path);

    let mut meta = String::new();

    meta.push_str(&format!(
        r#"<title>{}</title>
<meta name="description" content="{}">
<link rel="canonical" href="{}">"#,
        html_escape(&page_title),
        html_escape(page_desc),
        html_escape(&canonical),
    ));

    if settings.open_graph {
        meta.push_str(&format!(
            r#"
<meta property="og:title" content="{}">
<meta property="og:description" content="{}">
<meta property="og:url" content="{}">
<meta property="og:site_name" content="{}">
<meta property="og:type" content="website">"#,
            html_escape(&page_title),
            html_escape(page_desc),
            html_escape(&canonical),
            html_escape(site_name),
        ));
    }

    meta
}
