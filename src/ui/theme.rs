use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub title_shake: Style,
    pub label: Style,
    pub label_focused: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub checked: Style,
    pub unchecked: Style,
    pub button: Style,
    pub button_focused: Style,
    pub success: Style,
    pub processing: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().with_bold().with_underline(),
            title_shake: Style::new().with_color(Color::Red).with_bold(),
            label: Style::new(),
            label_focused: Style::new().with_color(Color::Cyan).with_bold(),
            hint: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red),
            placeholder: Style::new().with_color(Color::DarkGrey),
            checked: Style::new().with_color(Color::Green),
            unchecked: Style::new().with_color(Color::DarkGrey),
            button: Style::new().with_dim(),
            button_focused: Style::new()
                .with_color(Color::Black)
                .with_background(Color::Cyan)
                .with_bold(),
            success: Style::new().with_color(Color::Green).with_bold(),
            processing: Style::new().with_color(Color::Yellow),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
