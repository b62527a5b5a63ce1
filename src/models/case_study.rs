#[derive(Debug, Clone)]
pub struct Figure {
    pub image_ref: String,
    pub caption: String,
}

#[derive(Debug, Clone)]
pub struct FigureGroup {
    pub title: String,
    pub figures: Vec<Figure>,
}

/// Long-form write-up attached to a project by slug.
#[derive(Debug, Clone)]
pub struct CaseStudy {
    pub slug: String,
    pub headline: String,
    pub summary: String,
    pub tools: Vec<String>,
    pub repository: Option<String>,
    /// Markdown; rendered with pulldown-cmark.
    pub body: String,
    pub figure_groups: Vec<FigureGroup>,
}

impl CaseStudy {
    /// Figures in document order paired with their `fig-<n>` keys.
    pub fn figures(&self) -> impl Iterator<Item = (String, &Figure)> {
        self.figure_groups
            .iter()
            .flat_map(|g| g.figures.iter())
            .enumerate()
            .map(|(i, f)| (format!("fig-{}", i + 1), f))
    }

    pub fn find_figure(&self, key: &str) -> Option<&Figure> {
        self.figures().find(|(k, _)| k == key).map(|(_, f)| f)
    }
}
