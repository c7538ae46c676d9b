//! Removal toast state for the downloads page

/// Open/closed state of the removal toast and its undo affordance
#[derive(Debug, Clone, Default)]
pub struct ToastManager {
    open: bool,
    undo_hidden: bool,
    text: String,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the undo affordance is suppressed for the current toast
    pub fn is_undo_hidden(&self) -> bool {
        self.undo_hidden
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Opens the toast. `hide_undo` suppresses the undo affordance,
    /// used when none of the removed items can be restored.
    pub fn show<S: Into<String>>(&mut self, text: S, hide_undo: bool) {
        self.text = text.into();
        self.undo_hidden = hide_undo;
        self.open = true;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }

    /// A click landed on the page. The toast closes unless the click
    /// was inside the toast itself.
    pub fn on_page_click(&mut self, inside_toast: bool) {
        if !inside_toast {
            self.open = false;
        }
    }
}
