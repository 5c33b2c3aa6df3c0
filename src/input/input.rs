use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// A focusable widget. The widget owns its editing state only; the form
/// values it edits live in [`crate::form::FormState`].
pub trait Input {
    fn base(&self) -> &InputBase;
    fn base_mut(&mut self) -> &mut InputBase;

    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn label(&self) -> &str {
        &self.base().label
    }

    fn is_focused(&self) -> bool {
        self.base().focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base_mut().focused = focused;
    }

    /// Keys the widget keeps for itself even though a global binding exists.
    fn captures_key(&self, _code: KeyCode, _modifiers: KeyModifiers) -> bool {
        false
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self, theme: &Theme) -> Vec<Span>;

    /// Column of the terminal cursor inside the rendered content, `None` to hide it.
    fn cursor_offset_in_content(&self) -> Option<usize>;

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}

#[derive(Debug, Clone, Default)]
pub struct InputBase {
    pub label: String,
    pub focused: bool,
    pub placeholder: Option<String>,
}

impl InputBase {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focused: false,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
