use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use chrono::{Datelike, NaiveDate};

pub const ISO_DATE: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Year,
    Month,
    Day,
}

impl Segment {
    const ORDER: [Segment; 3] = [Segment::Year, Segment::Month, Segment::Day];

    fn length(self) -> usize {
        match self {
            Segment::Year => 4,
            Segment::Month | Segment::Day => 2,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Segment::Year => "yyyy",
            Segment::Month => "mm",
            Segment::Day => "dd",
        }
    }

    fn range(self) -> (u32, u32) {
        match self {
            Segment::Year => (1900, 9999),
            Segment::Month => (1, 12),
            Segment::Day => (1, 31),
        }
    }
}

/// Segmented `yyyy-mm-dd` editor.
///
/// The value is empty until all three segments form a real calendar date.
/// `max` is advisory: stepping with Up/Down never passes it, typed digits may.
pub struct DateInput {
    base: InputBase,
    segments: [String; 3],
    active: usize,
    max: Option<NaiveDate>,
}

impl DateInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(label),
            segments: Default::default(),
            active: 0,
            max: None,
        }
    }

    pub fn with_max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    pub fn max(&self) -> Option<NaiveDate> {
        self.max
    }

    pub fn date(&self) -> Option<NaiveDate> {
        if !self.is_filled() {
            return None;
        }
        let year = self.segments[0].parse().ok()?;
        let month = self.segments[1].parse().ok()?;
        let day = self.segments[2].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn is_filled(&self) -> bool {
        Segment::ORDER
            .iter()
            .zip(&self.segments)
            .all(|(segment, value)| value.len() == segment.length())
    }

    fn segment(&self) -> Segment {
        Segment::ORDER[self.active]
    }

    fn insert_digit(&mut self, digit: char) {
        let segment = self.segment();
        let value = &mut self.segments[self.active];
        if value.len() >= segment.length() {
            value.clear();
        }
        value.push(digit);
        if value.len() == segment.length() && self.active + 1 < Segment::ORDER.len() {
            self.active += 1;
        }
    }

    fn backspace(&mut self) {
        if self.segments[self.active].is_empty() && self.active > 0 {
            self.active -= 1;
        }
        self.segments[self.active].pop();
    }

    fn step(&mut self, delta: i32) {
        if self.segments.iter().all(String::is_empty) {
            if let Some(seed) = self.max.or_else(|| NaiveDate::from_ymd_opt(2000, 1, 1)) {
                self.fill_from(seed);
            }
            return;
        }

        let segment = self.segment();
        let (min, max) = segment.range();
        let current: i64 = self.segments[self.active].parse().unwrap_or(min as i64 - 1);
        let next = if current < min as i64 {
            if delta > 0 { min } else { max }
        } else {
            let raw = current + delta as i64;
            if raw < min as i64 {
                max
            } else if raw > max as i64 {
                min
            } else {
                raw as u32
            }
        };
        self.segments[self.active] = format!("{:0width$}", next, width = segment.length());

        self.normalize_day();
        if let (Some(date), Some(max)) = (self.date(), self.max) {
            if date > max {
                self.fill_from(max);
            }
        }
    }

    fn normalize_day(&mut self) {
        if !self.is_filled() || self.date().is_some() {
            return;
        }
        let (Ok(year), Ok(month)) = (self.segments[0].parse::<i32>(), self.segments[1].parse::<u32>())
        else {
            return;
        };
        if let Some(last) = (28..=31)
            .rev()
            .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        {
            self.segments[2] = format!("{last:02}");
        }
    }

    fn fill_from(&mut self, date: NaiveDate) {
        self.segments = [
            format!("{:04}", date.year()),
            format!("{:02}", date.month()),
            format!("{:02}", date.day()),
        ];
    }

    fn clear(&mut self) {
        self.segments = Default::default();
        self.active = 0;
    }
}

impl Input for DateInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.date()
            .map(|date| date.format(ISO_DATE).to_string())
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: String) {
        match NaiveDate::parse_from_str(&value, ISO_DATE) {
            Ok(date) => {
                self.fill_from(date);
                self.active = 0;
            }
            Err(_) => self.clear(),
        }
    }

    fn captures_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        modifiers == KeyModifiers::NONE && matches!(code, KeyCode::Up | KeyCode::Down)
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => self.insert_digit(ch),
            KeyCode::Char('-' | '/' | '.') | KeyCode::Right => {
                self.active = (self.active + 1).min(Segment::ORDER.len() - 1);
            }
            KeyCode::Left => self.active = self.active.saturating_sub(1),
            KeyCode::Home => self.active = 0,
            KeyCode::End => self.active = Segment::ORDER.len() - 1,
            KeyCode::Up => self.step(1),
            KeyCode::Down => self.step(-1),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.segments[self.active].clear(),
            KeyCode::Enter => return KeyResult::Submit,
            _ => return KeyResult::NotHandled,
        }
        KeyResult::Handled
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::new();
        for (idx, segment) in Segment::ORDER.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("-", theme.placeholder));
            }
            let typed = &self.segments[idx];
            spans.push(Span::new(typed.clone()));
            spans.push(Span::styled(
                segment.placeholder()[typed.len().min(segment.length())..].to_string(),
                theme.placeholder,
            ));
        }

        if self.is_filled() && self.date().is_none() {
            spans.push(Span::styled("  not a calendar date", theme.error));
        } else if let Some(max) = self.max {
            spans.push(Span::styled(
                format!("  (max {})", max.format(ISO_DATE)),
                theme.hint,
            ));
        }
        spans
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        let before: usize = Segment::ORDER[..self.active]
            .iter()
            .map(|segment| segment.length() + 1)
            .sum();
        let within = self.segments[self.active]
            .len()
            .min(self.segment().length() - 1);
        Some(before + within)
    }
}

#[cfg(test)]
mod tests {
    use super::DateInput;
    use crate::input::Input;
    use crate::terminal::{KeyCode, KeyModifiers};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn press(input: &mut DateInput, code: KeyCode) {
        input.handle_key(code, KeyModifiers::NONE);
    }

    fn type_digits(input: &mut DateInput, digits: &str) {
        for ch in digits.chars() {
            press(input, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typed_digits_fill_segments_in_order() {
        let mut input = DateInput::new("Birth Date");
        type_digits(&mut input, "1990");
        assert_eq!(input.value(), "");
        type_digits(&mut input, "0401");
        assert_eq!(input.value(), "1990-04-01");
    }

    #[test]
    fn impossible_dates_have_no_value() {
        let mut input = DateInput::new("Birth Date");
        type_digits(&mut input, "20230230");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn typed_dates_may_exceed_the_advisory_max() {
        let mut input = DateInput::new("Birth Date").with_max(date(2026, 10, 18));
        type_digits(&mut input, "20300101");
        assert_eq!(input.value(), "2030-01-01");
    }

    #[test]
    fn stepping_is_clamped_to_max() {
        let mut input = DateInput::new("Birth Date").with_max(date(2026, 10, 18));
        press(&mut input, KeyCode::Up);
        assert_eq!(input.value(), "2026-10-18");

        press(&mut input, KeyCode::Up);
        assert_eq!(input.value(), "2026-10-18");

        press(&mut input, KeyCode::Down);
        assert_eq!(input.value(), "2025-10-18");
    }

    #[test]
    fn stepping_the_month_keeps_a_real_day() {
        let mut input = DateInput::new("Birth Date");
        input.set_value("2001-01-31".into());
        press(&mut input, KeyCode::Right);
        press(&mut input, KeyCode::Up);
        assert_eq!(input.value(), "2001-02-28");
    }

    #[test]
    fn backspace_walks_back_across_segments() {
        let mut input = DateInput::new("Birth Date");
        type_digits(&mut input, "199004");
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        type_digits(&mut input, "512");
        press(&mut input, KeyCode::Char('-'));
        type_digits(&mut input, "24");
        assert_eq!(input.value(), "1995-12-24");
    }

    #[test]
    fn set_value_round_trips_and_clears() {
        let mut input = DateInput::new("Birth Date");
        input.set_value("1815-12-10".into());
        assert_eq!(input.value(), "1815-12-10");
        input.set_value(String::new());
        assert_eq!(input.value(), "");
    }
}
