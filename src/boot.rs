use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::content::Registry;
use crate::settings::SiteSettings;

#[derive(Debug, Default)]
pub struct BootReport {
    pub errors: u32,
    pub warnings: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Loads site settings, creates the asset directory if missing and
/// aborts if the settings or the content registry are invalid.
pub fn run(site_config: &str, registry: &Registry) -> SiteSettings {
    info!("Boot check starting...");

    let settings = match SiteSettings::load(site_config) {
        Ok(s) => s,
        Err(e) => {
            error!("  {}", e);
            error!("Boot check FAILED: unreadable site settings. Aborting.");
            process::exit(1);
        }
    };
    if !Path::new(site_config).exists() {
        warn!("  {} not found, using default site settings", site_config);
    }

    let report = check(&settings, registry);

    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
    settings
}

pub fn check(settings: &SiteSettings, registry: &Registry) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Asset directory ─────────────────────────────
    let assets = Path::new(&settings.asset_dir);
    if !assets.exists() {
        match fs::create_dir_all(assets) {
            Ok(_) => {
                info!("  Created directory: {}", settings.asset_dir);
                warn!("  Asset directory was empty; images will show as broken");
                report.warnings += 1;
            }
            Err(e) => {
                warn!("  Could not create {}: {} (images will 404)", settings.asset_dir, e);
                report.warnings += 1;
            }
        }
    }

    // ── 2. Content registry ────────────────────────────
    for problem in registry.validate() {
        error!("  Content: {}", problem);
        report.errors += 1;
    }

    // ── 3. Referenced images ───────────────────────────
    if assets.is_dir() {
        let refs = registry
            .media()
            .iter()
            .map(|m| m.image_ref.as_str())
            .chain(
                registry
                    .projects()
                    .iter()
                    .filter_map(|p| p.highlight.as_ref().map(|h| h.cover.as_str())),
            )
            .chain(
                registry
                    .case_studies()
                    .iter()
                    .flat_map(|cs| cs.figures().map(|(_, f)| f.image_ref.as_str()).collect::<Vec<_>>()),
            );
        for image_ref in refs {
            let rel = image_ref.trim_start_matches("/images/");
            if !assets.join(rel).exists() {
                warn!("  Missing image: {}", image_ref);
                report.warnings += 1;
            }
        }
    }

    // ── 4. Site URL ────────────────────────────────────
    if url::Url::parse(&settings.site_url).is_err() {
        warn!("  site_url '{}' is not an absolute URL (canonical links will be wrong)", settings.site_url);
        report.warnings += 1;
    }

    // ── 5. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default config");
        report.warnings += 1;
    }

    report
}
