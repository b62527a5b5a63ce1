#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Certificate,
    Badge,
    Book,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Certificate => "certificate",
            MediaKind::Badge => "badge",
            MediaKind::Book => "book",
        }
    }
}

/// A certificate, badge or book: something with a title and an image
/// that can be enlarged in the lightbox.
#[derive(Debug, Clone)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub title: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub takeaway: Option<String>,
    pub image_ref: String,
}

impl MediaItem {
    pub fn certificate(title: &str, issuer: &str, date: &str, image_ref: &str) -> Self {
        MediaItem {
            kind: MediaKind::Certificate,
            title: title.to_string(),
            issuer: Some(issuer.to_string()),
            date: Some(date.to_string()),
            author: None,
            takeaway: None,
            image_ref: image_ref.to_string(),
        }
    }

    pub fn badge(title: &str, issuer: Option<&str>, image_ref: &str) -> Self {
        MediaItem {
            kind: MediaKind::Badge,
            title: title.to_string(),
            issuer: issuer.map(str::to_string),
            date: None,
            author: None,
            takeaway: None,
            image_ref: image_ref.to_string(),
        }
    }

    pub fn book(title: &str, author: Option<&str>, image_ref: &str, takeaway: &str) -> Self {
        MediaItem {
            kind: MediaKind::Book,
            title: title.to_string(),
            issuer: None,
            date: None,
            author: author.map(str::to_string),
            takeaway: Some(takeaway.to_string()),
            image_ref: image_ref.to_string(),
        }
    }

    /// URL-safe locator used by `?zoom=<key>`.
    pub fn key(&self) -> String {
        slug::slugify(&self.title)
    }

    /// Secondary line under the title, if the record has anything to show.
    pub fn meta_line(&self) -> Option<String> {
        match self.kind {
            MediaKind::Certificate => {
                let parts: Vec<&str> = [self.issuer.as_deref(), self.date.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(|s| !s.is_empty())
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(" • "))
                }
            }
            MediaKind::Badge => self.issuer.clone().filter(|s| !s.is_empty()),
            MediaKind::Book => self.author.clone().filter(|s| !s.is_empty()),
        }
    }
}
