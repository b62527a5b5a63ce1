//! Page-scoped image zoom state.
//!
//! One `Lightbox` lives for one page view. Cards dispatch `Open` and the
//! render path reads `state()` right after. The overlay's links are the
//! states reached by `Close` (the dismiss control) and by clicks on the
//! backdrop or the content box.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { image_ref: String, alt_text: String },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }
}

/// Where inside the open overlay a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    Open { image_ref: String, alt_text: String },
    Close,
    Click(ClickTarget),
}

impl LightboxEvent {
    pub fn open(image_ref: &str, alt_text: &str) -> Self {
        LightboxEvent::Open {
            image_ref: image_ref.to_string(),
            alt_text: alt_text.to_string(),
        }
    }
}

/// Pure transition function.
pub fn transition(state: LightboxState, event: LightboxEvent) -> LightboxState {
    match event {
        // An empty locator would show a broken overlay: ignore it.
        LightboxEvent::Open { image_ref, .. } if image_ref.trim().is_empty() => state,
        LightboxEvent::Open { image_ref, alt_text } => LightboxState::Open { image_ref, alt_text },
        LightboxEvent::Close | LightboxEvent::Click(ClickTarget::Backdrop) => LightboxState::Closed,
        LightboxEvent::Click(ClickTarget::Content) => state,
    }
}

#[derive(Debug, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl From<LightboxState> for Lightbox {
    fn from(state: LightboxState) -> Self {
        Lightbox { state }
    }
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn dispatch(&mut self, event: LightboxEvent) -> &LightboxState {
        let current = std::mem::take(&mut self.state);
        self.state = transition(current, event);
        &self.state
    }

    pub fn open(&mut self, image_ref: &str, alt_text: &str) -> &LightboxState {
        self.dispatch(LightboxEvent::open(image_ref, alt_text))
    }

    /// Dismiss control.
    pub fn close(&mut self) -> &LightboxState {
        self.dispatch(LightboxEvent::Close)
    }

    /// The state a click on `target` would lead to, without applying it.
    pub fn peek_click(&self, target: ClickTarget) -> LightboxState {
        transition(self.state.clone(), LightboxEvent::Click(target))
    }
}
