pub mod case_study;
pub mod home;
pub mod lightbox;
pub mod projects;

/// Heading with a trailing rule, used by every section.
pub(crate) fn section_title(title: &str) -> String {
    format!(
        r#"<div class="section-title"><h2>{}</h2><div class="rule"></div></div>"#,
        crate::render::html_escape(title)
    )
}
