use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

pub struct CheckboxInput {
    base: InputBase,
    checked: bool,
}

impl CheckboxInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(label),
            checked: false,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Input for CheckboxInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.checked.to_string()
    }

    fn set_value(&mut self, value: String) {
        self.checked = matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes");
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(' ') => {
                self.checked = !self.checked;
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        if self.checked {
            vec![Span::styled("[x]", theme.checked)]
        } else {
            vec![Span::styled("[ ]", theme.unchecked)]
        }
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        Some(1)
    }
}
