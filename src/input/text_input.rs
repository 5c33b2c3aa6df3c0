use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthChar;

pub struct TextInput {
    base: InputBase,
    chars: Vec<char>,
    cursor: usize,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(label),
            chars: Vec::new(),
            cursor: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn word_start_before(&self, from: usize) -> usize {
        let mut pos = from;
        while pos > 0 && Self::is_separator(self.chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(self.chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_after(&self, from: usize) -> usize {
        let mut pos = from;
        while pos < self.chars.len() && Self::is_separator(self.chars[pos]) {
            pos += 1;
        }
        while pos < self.chars.len() && !Self::is_separator(self.chars[pos]) {
            pos += 1;
        }
        pos
    }
}

impl Input for TextInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.chars.iter().collect()
    }

    fn set_value(&mut self, value: String) {
        self.chars = value.chars().collect();
        self.cursor = self.chars.len();
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char(ch) if !ctrl => self.insert(ch),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left if ctrl => self.cursor = self.word_start_before(self.cursor),
            KeyCode::Right if ctrl => self.cursor = self.word_end_after(self.cursor),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Enter => return KeyResult::Submit,
            _ => return KeyResult::NotHandled,
        }
        KeyResult::Handled
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        if self.chars.is_empty() {
            if let Some(placeholder) = &self.base.placeholder {
                return vec![Span::styled(placeholder.clone(), theme.placeholder)];
            }
        }
        vec![Span::new(self.value())]
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        Some(
            self.chars[..self.cursor]
                .iter()
                .map(|ch| ch.width().unwrap_or(0))
                .sum(),
        )
    }

    fn delete_word(&mut self) {
        let start = self.word_start_before(self.cursor);
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    fn delete_word_forward(&mut self) {
        let end = self.word_end_after(self.cursor);
        self.chars.drain(self.cursor..end);
    }
}
