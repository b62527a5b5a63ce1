use crate::content::Registry;
use crate::settings::SiteSettings;

/// Generate sitemap.xml content.
/// Returns None if the sitemap is disabled.
pub fn generate_sitemap(settings: &SiteSettings, registry: &Registry) -> Option<String> {
    if !settings.sitemap_enabled {
        return None;
    }

    let site_url = settings.base_url();
    let lastmod = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    xml.push_str(&format!(
        "  <url><loc>{}/</loc><lastmod>{}</lastmod><priority>1.0</priority></url>\n",
        site_url, lastmod
    ));
    xml.push_str(&format!(
        "  <url><loc>{}/projects</loc><lastmod>{}</lastmod><priority>0.8</priority></url>\n",
        site_url, lastmod
    ));

    for project in registry.projects() {
        // Projects with a write-up rank above summary-only pages
        let priority = if registry.find_case_study(&project.slug).is_some() {
            "0.7"
        } else {
            "0.5"
        };
        xml.push_str(&format!(
            "  <url><loc>{}{}</loc><lastmod>{}</lastmod><priority>{}</priority></url>\n",
            site_url,
            project.href(),
            lastmod,
            priority
        ));
    }

    xml.push_str("</urlset>");
    Some(xml)
}

/// Generate robots.txt content with dynamic sitemap URL.
pub fn generate_robots(settings: &SiteSettings) -> String {
    let mut content = settings.robots_txt.clone();
    if settings.sitemap_enabled {
        content.push_str(&format!("\nSitemap: {}/sitemap.xml", settings.base_url()));
    }
    content
}
