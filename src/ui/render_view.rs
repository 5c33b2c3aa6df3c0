use crate::core::form_engine::{FormEngine, Slot};
use crate::core::state::AppState;
use crate::form::{FieldId, FormState, Hobby, Phase};
use crate::input::Input;
use crate::ui::frame::{Frame, Line};
use crate::ui::span::Span;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;

pub const TITLE: &str = "Registration Form";
pub const SECTION: &str = "Personal Information";
pub const PROCESSING: &str = "Processing...";
pub const SUCCESS: &str = "Form submitted successfully!";
pub const HINT: &str = "Tab/Shift+Tab move, Space toggles, Enter or Ctrl+S submits, Esc exits";

/// Borrowed snapshot of everything one frame needs.
pub struct RenderView<'a> {
    pub form: &'a FormState,
    pub engine: &'a FormEngine,
    pub shaking: bool,
    pub spinner: &'a Spinner,
}

impl<'a> RenderView<'a> {
    pub fn from_state(state: &'a AppState, spinner: &'a Spinner) -> Self {
        Self {
            form: &state.form,
            engine: &state.engine,
            shaking: state.shaking,
            spinner,
        }
    }

    pub fn build(&self, theme: &Theme) -> Frame {
        let mut frame = Frame::new();

        let title_style = if self.shaking {
            theme.title_shake
        } else {
            theme.title
        };
        let title = if self.shaking {
            format!("~ {TITLE} ~")
        } else {
            TITLE.to_string()
        };
        frame.push_line(Line::from_spans([Span::styled(title, title_style)]));
        frame.push_line(Line::from_spans([Span::styled(SECTION, theme.hint)]));
        frame.blank_line();

        let visible: Vec<(Slot, &dyn Input)> = self
            .engine
            .widgets()
            .filter(|(slot, _)| slot.is_visible(self.form))
            .collect();

        for (idx, (slot, widget)) in visible.iter().enumerate() {
            if *slot == Slot::Hobby(Hobby::ALL[0]) {
                frame.push_line(Line::from_spans([Span::styled(
                    FieldId::Hobbies.label(),
                    theme.label,
                )]));
            }
            if *slot == Slot::Submit {
                frame.blank_line();
            }

            self.push_widget(&mut frame, *slot, *widget, theme);

            let Some(field) = slot.field() else {
                continue;
            };
            let closes_group = visible
                .get(idx + 1)
                .is_none_or(|(next, _)| next.field() != Some(field));
            if closes_group {
                if let Some(message) = self.form.visible_error(field) {
                    frame.push_line(Line::from_spans([Span::styled(
                        format!("  ! {message}"),
                        theme.error,
                    )]));
                }
            }
        }

        if let Some(notice) = self.notice(theme) {
            frame.push_line(notice);
        }
        frame.blank_line();
        frame.push_line(Line::from_spans([Span::styled(HINT, theme.hint)]));
        frame
    }

    fn push_widget(&self, frame: &mut Frame, slot: Slot, widget: &dyn Input, theme: &Theme) {
        let label_style = if widget.is_focused() {
            theme.label_focused
        } else {
            theme.label
        };

        let mut line = Line::new();
        match slot {
            Slot::Hobby(_) => {
                line.push(Span::new("  "));
                line.extend_content(widget, theme);
                line.push(Span::styled(format!(" {}", widget.label()), label_style));
            }
            Slot::OtherHobby => {
                line.push(Span::styled(format!("      {}: ", widget.label()), label_style));
            }
            Slot::Text(_) => {
                line.push(Span::styled(format!("{}: ", widget.label()), label_style));
            }
            Slot::Submit => {}
        }

        let prefix = match slot {
            Slot::Hobby(_) => 2,
            _ => line.width(),
        };
        if !matches!(slot, Slot::Hobby(_)) {
            line.extend_content(widget, theme);
        }

        if widget.is_focused() {
            if let Some(offset) = widget.cursor_offset_in_content() {
                frame.set_cursor((prefix + offset) as u16, frame.row());
            }
        }
        frame.push_line(line);
    }

    fn notice(&self, theme: &Theme) -> Option<Line> {
        match self.form.phase() {
            Phase::Submitting => Some(Line::from_spans([
                self.spinner.span(theme.processing),
                Span::styled(format!(" {PROCESSING}"), theme.processing),
            ])),
            Phase::Success => Some(Line::from_spans([Span::styled(SUCCESS, theme.success)])),
            Phase::Failed(message) => Some(Line::from_spans([Span::styled(
                format!("Submission failed: {message}"),
                theme.error,
            )])),
            Phase::Editing | Phase::Invalid => None,
        }
    }
}

trait LineExt {
    fn extend_content(&mut self, widget: &dyn Input, theme: &Theme);
}

impl LineExt for Line {
    fn extend_content(&mut self, widget: &dyn Input, theme: &Theme) {
        for span in widget.render_content(theme) {
            self.push(span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderView, PROCESSING, SUCCESS, TITLE};
    use crate::core::state::AppState;
    use crate::form::validators::{HOBBY_REQUIRED, LAST_NAME_REQUIRED};
    use crate::form::{FieldId, Hobby, TextField};
    use crate::submit::Receipt;
    use crate::ui::spinner::Spinner;
    use crate::ui::theme::Theme;
    use chrono::{Local, NaiveDate};

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2026, 10, 18).expect("date"))
    }

    fn render(state: &AppState) -> String {
        let spinner = Spinner::new();
        RenderView::from_state(state, &spinner)
            .build(&Theme::default())
            .plain_text()
    }

    #[test]
    fn fresh_form_shows_no_errors() {
        let text = render(&state());
        assert!(text.starts_with(TITLE));
        assert!(text.contains("First Name: Enter your first name"));
        assert!(text.contains("  [ ] Drawing"));
        assert!(text.contains("[ Submit ]"));
        assert!(!text.contains("! "));
        assert!(!text.contains("Other hobby"));
    }

    #[test]
    fn touched_errors_render_under_their_field() {
        let mut state = state();
        state.form.touch(FieldId::LastName);
        state.form.touch(FieldId::Hobbies);
        let text = render(&state);
        let lines: Vec<&str> = text.lines().collect();

        let last_name = lines
            .iter()
            .position(|line| line.starts_with("Last Name:"))
            .expect("last name row");
        assert_eq!(lines[last_name + 1], format!("  ! {LAST_NAME_REQUIRED}"));

        let other = lines
            .iter()
            .position(|line| line.ends_with("] Other"))
            .expect("other row");
        assert_eq!(lines[other + 1], format!("  ! {HOBBY_REQUIRED}"));
    }

    #[test]
    fn other_hobby_row_appears_when_checked() {
        let mut state = state();
        state.form.set_hobby(Hobby::Other, true);
        assert!(render(&state).contains("Other hobby: Specify other hobby"));
    }

    #[test]
    fn cursor_follows_the_focused_text_field() {
        let state = state();
        let spinner = Spinner::new();
        let frame = RenderView::from_state(&state, &spinner).build(&Theme::default());
        assert_eq!(frame.cursor(), Some(("First Name: ".len() as u16, 3)));
    }

    #[test]
    fn phase_notices() {
        let mut state = state();
        state.form.edit_text(TextField::FirstName, "Ada");
        state.form.edit_text(TextField::LastName, "Lovelace");
        state.form.edit_text(TextField::BirthDate, "1990-04-01");
        state.form.edit_text(TextField::Email, "ada@example.org");
        state.form.edit_text(TextField::Note, "hi");
        state.form.set_hobby(Hobby::Dancing, true);

        state.form.submit();
        assert!(render(&state).contains(PROCESSING));

        state.form.finish_submission(Ok(Receipt {
            submitted_at: Local::now(),
        }));
        assert!(render(&state).contains(SUCCESS));
    }
}
