use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

pub struct ButtonInput {
    base: InputBase,
    text: String,
}

impl ButtonInput {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            base: InputBase::new(label.clone()),
            text: label,
        }
    }
}

impl Input for ButtonInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        String::new()
    }

    fn set_value(&mut self, _value: String) {}

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let style = if self.base.focused {
            theme.button_focused
        } else {
            theme.button
        };
        vec![Span::styled(format!("[ {} ]", self.text), style)]
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        None
    }
}
