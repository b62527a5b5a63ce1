use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Site-level configuration read from `Site.toml`. Every key is optional.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_url: String,
    pub title_template: String,
    pub default_description: String,
    pub open_graph: bool,
    pub sitemap_enabled: bool,
    pub robots_txt: String,
    pub asset_dir: String,
    pub lightbox_script: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_name: "Misbah Shaikh".to_string(),
            site_url: "http://localhost:8000".to_string(),
            title_template: "{{title}} | {{site_name}}".to_string(),
            default_description: "Data science and ML engineering portfolio.".to_string(),
            open_graph: true,
            sitemap_enabled: true,
            robots_txt: "User-agent: *\nAllow: /".to_string(),
            asset_dir: "public/images".to_string(),
            lightbox_script: true,
        }
    }
}

impl SiteSettings {
    pub fn parse(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| format!("invalid site settings: {}", e))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &str) -> Result<Self, String> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
        Self::parse(&raw).map_err(|e| format!("{}: {}", path, e))
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}
