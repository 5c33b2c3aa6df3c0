use crate::ui::span::Span;
use crate::ui::style::Style;

const DOTS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % DOTS.len();
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn glyph(&self) -> char {
        DOTS[self.frame % DOTS.len()]
    }

    pub fn span(&self, style: Style) -> Span {
        Span::styled(self.glyph().to_string(), style)
    }
}

#[cfg(test)]
mod tests {
    use super::Spinner;

    #[test]
    fn tick_cycles_through_frames() {
        let mut spinner = Spinner::new();
        let first = spinner.glyph();
        spinner.tick();
        assert_ne!(spinner.glyph(), first);
        for _ in 0..9 {
            spinner.tick();
        }
        assert_eq!(spinner.glyph(), first);
    }
}
