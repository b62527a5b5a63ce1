#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Featured,
    Additional,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Featured => "Featured",
            Tier::Additional => "Additional",
        }
    }
}

/// Home-page presentation of a featured project. The home page pitches a
/// project with its own title, blurb and tags, separate from the index row.
#[derive(Debug, Clone)]
pub struct Highlight {
    pub cover: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
}

impl Highlight {
    pub fn new(cover: &str, title: &str, blurb: &str, tags: &[&str]) -> Self {
        Highlight {
            cover: cover.to_string(),
            title: title.to_string(),
            blurb: blurb.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub title: String,
    pub slug: String,
    pub tier: Tier,
    pub one_liner: String,
    pub tags: Vec<String>,
    pub external_link: Option<String>,
    pub highlight: Option<Highlight>,
}

impl ProjectSummary {
    pub fn new(title: &str, slug: &str, tier: Tier, one_liner: &str, tags: &[&str]) -> Self {
        ProjectSummary {
            title: title.to_string(),
            slug: slug.to_string(),
            tier,
            one_liner: one_liner.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            external_link: None,
            highlight: None,
        }
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.external_link = Some(link.to_string());
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}
