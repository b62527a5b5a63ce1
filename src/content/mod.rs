//! Read-only content registry.
//! Built once at launch and handed to Rocket as managed state.

mod builtin;

use std::collections::HashSet;

use crate::models::case_study::CaseStudy;
use crate::models::media::{MediaItem, MediaKind};
use crate::models::profile::{Profile, Skills};
use crate::models::project::{ProjectSummary, Tier};

#[derive(Debug, Clone)]
pub struct Registry {
    pub profile: Profile,
    pub skills: Skills,
    media: Vec<MediaItem>,
    projects: Vec<ProjectSummary>,
    case_studies: Vec<CaseStudy>,
}

impl Registry {
    pub fn new(
        profile: Profile,
        skills: Skills,
        media: Vec<MediaItem>,
        projects: Vec<ProjectSummary>,
        case_studies: Vec<CaseStudy>,
    ) -> Self {
        Registry {
            profile,
            skills,
            media,
            projects,
            case_studies,
        }
    }

    /// The site's hand-authored content.
    pub fn builtin() -> Self {
        builtin::registry()
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    fn media_of(&self, kind: MediaKind) -> Vec<&MediaItem> {
        self.media.iter().filter(|m| m.kind == kind).collect()
    }

    pub fn certificates(&self) -> Vec<&MediaItem> {
        self.media_of(MediaKind::Certificate)
    }

    pub fn badges(&self) -> Vec<&MediaItem> {
        self.media_of(MediaKind::Badge)
    }

    pub fn books(&self) -> Vec<&MediaItem> {
        self.media_of(MediaKind::Book)
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn projects_by_tier(&self, tier: Tier) -> Vec<&ProjectSummary> {
        self.projects.iter().filter(|p| p.tier == tier).collect()
    }

    /// Featured projects that carry a home-page highlight.
    pub fn featured_cards(&self) -> Vec<&ProjectSummary> {
        self.projects
            .iter()
            .filter(|p| p.tier == Tier::Featured && p.highlight.is_some())
            .collect()
    }

    pub fn find_project(&self, slug: &str) -> Option<&ProjectSummary> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn find_media(&self, key: &str) -> Option<&MediaItem> {
        self.media.iter().find(|m| m.key() == key)
    }

    pub fn find_case_study(&self, slug: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|c| c.slug == slug)
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    /// Every invariant violation in the registry. Empty means healthy.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut keys = HashSet::new();
        for item in &self.media {
            if item.title.trim().is_empty() {
                problems.push(format!("{} with image '{}' has no title", item.kind.label(), item.image_ref));
            }
            if item.image_ref.trim().is_empty() {
                problems.push(format!("{} '{}' has no image", item.kind.label(), item.title));
            }
            if !keys.insert(item.key()) {
                problems.push(format!("duplicate media key '{}'", item.key()));
            }
        }

        let mut slugs = HashSet::new();
        for p in &self.projects {
            if p.title.trim().is_empty() {
                problems.push(format!("project '{}' has no title", p.slug));
            }
            if p.slug.trim().is_empty() {
                problems.push(format!("project '{}' has no slug", p.title));
            } else if !slugs.insert(p.slug.as_str()) {
                problems.push(format!("duplicate project slug '{}'", p.slug));
            }
            if let Some(link) = &p.external_link {
                if let Err(e) = check_external_link(link) {
                    problems.push(format!("project '{}': {}", p.slug, e));
                }
            }
        }

        for cs in &self.case_studies {
            if self.find_project(&cs.slug).is_none() {
                problems.push(format!("case study '{}' has no matching project", cs.slug));
            }
            if let Some(link) = &cs.repository {
                if let Err(e) = check_external_link(link) {
                    problems.push(format!("case study '{}': {}", cs.slug, e));
                }
            }
            for (key, fig) in cs.figures() {
                if fig.image_ref.trim().is_empty() {
                    problems.push(format!("case study '{}' {} has no image", cs.slug, key));
                }
            }
        }

        problems
    }
}

fn check_external_link(link: &str) -> Result<(), String> {
    let parsed = url::Url::parse(link).map_err(|e| format!("bad link '{}': {}", link, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("link '{}' uses unsupported scheme '{}'", link, other)),
    }
}
