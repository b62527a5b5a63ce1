use crate::cards::zoom_href;
use crate::lightbox::{ClickTarget, Lightbox, LightboxState};
use crate::render::html_escape;

/// Link target for a state: the bare page when closed, the zoom URL when open.
fn href_for(state: &LightboxState, page_path: &str, zoom_key: &str) -> String {
    match state {
        LightboxState::Closed => page_path.to_string(),
        LightboxState::Open { .. } => zoom_href(page_path, zoom_key),
    }
}

/// Overlay markup for the current state; empty when closed.
///
/// Every link in the overlay points at the state the controller reaches for
/// that interaction. The backdrop is laid out *behind* the content box as its
/// sibling, so a click on the content box never reaches it.
pub fn render_overlay(state: &LightboxState, page_path: &str, zoom_key: &str) -> String {
    let (image_ref, alt_text) = match state {
        LightboxState::Closed => return String::new(),
        LightboxState::Open { image_ref, alt_text } => (image_ref, alt_text),
    };

    let lightbox = Lightbox::from(state.clone());
    let backdrop = href_for(&lightbox.peek_click(ClickTarget::Backdrop), page_path, zoom_key);
    let permalink = href_for(&lightbox.peek_click(ClickTarget::Content), page_path, zoom_key);
    let mut dismissed = Lightbox::from(state.clone());
    let dismiss = href_for(dismissed.close(), page_path, zoom_key);

    let alt = html_escape(alt_text);

    format!(
        r#"<div id="lightbox" class="lightbox-overlay active" role="dialog" aria-modal="true" aria-label="{alt}">
    <a class="lb-backdrop" href="{backdrop}" aria-label="Close" tabindex="-1"></a>
    <div class="lb-content">
        <div class="lb-header">
            <a class="lb-title" href="{permalink}">{alt}</a>
            <a class="lb-close" href="{dismiss}" role="button">Close</a>
        </div>
        <div class="lb-frame"><img class="lb-image" src="{src}" alt="{alt}"></div>
    </div>
</div>"#,
        alt = alt,
        backdrop = html_escape(&backdrop),
        permalink = html_escape(&permalink),
        dismiss = html_escape(&dismiss),
        src = html_escape(image_ref),
    )
}
