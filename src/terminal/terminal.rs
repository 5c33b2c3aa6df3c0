use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
use crate::ui::frame::Line;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{
    Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

pub struct Terminal {
    stdout: Stdout,
    size: Size,
    cursor: Pos,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let (x, y) = cursor::position()?;
        Ok(Self {
            stdout: io::stdout(),
            size: Size { width, height },
            cursor: Pos { x, y },
        })
    }

    pub fn writer_mut(&mut self) -> &mut Stdout {
        &mut self.stdout
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn set_line_wrap(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(self.stdout, terminal::EnableLineWrap)
        } else {
            execute!(self.stdout, terminal::DisableLineWrap)
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn cursor_position(&self) -> Pos {
        self.cursor
    }

    pub fn refresh_cursor_position(&mut self) -> io::Result<()> {
        let (x, y) = cursor::position()?;
        self.cursor = Pos { x, y };
        Ok(())
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    self.size = Size { width, height };
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show)
    }

    pub fn clear_from_cursor_down(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )
    }

    pub fn queue_show_cursor(&mut self) -> io::Result<()> {
        queue!(self.stdout, cursor::Show)
    }

    pub fn queue_hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.stdout, cursor::Hide)
    }

    pub fn queue_move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y))?;
        self.cursor = Pos { x, y };
        Ok(())
    }

    pub fn queue_clear_line(&mut self) -> io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::CurrentLine)
        )
    }

    pub fn render_line(&mut self, line: &Line) -> io::Result<()> {
        for span in line.spans() {
            let style = span.style();

            if let Some(fg) = style.color() {
                write!(self.stdout, "{}", SetForegroundColor(map_color(fg)))?;
            }
            if let Some(bg) = style.background() {
                write!(self.stdout, "{}", SetBackgroundColor(map_color(bg)))?;
            }
            if style.bold() {
                write!(self.stdout, "{}", SetAttribute(Attribute::Bold))?;
            }
            if style.dim() {
                write!(self.stdout, "{}", SetAttribute(Attribute::Dim))?;
            }
            if style.underline() {
                write!(self.stdout, "{}", SetAttribute(Attribute::Underlined))?;
            }

            write!(self.stdout, "{}", span.text())?;

            if !style.is_plain() {
                write!(self.stdout, "{}", SetAttribute(Attribute::Reset))?;
                write!(self.stdout, "{}", ResetColor)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Black => crossterm::style::Color::Black,
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Magenta => crossterm::style::Color::Magenta,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    use crossterm::event::KeyCode as Ct;
    match code {
        Ct::Char(ch) => KeyCode::Char(ch),
        Ct::Backspace => KeyCode::Backspace,
        Ct::Enter => KeyCode::Enter,
        Ct::Esc => KeyCode::Esc,
        Ct::Left => KeyCode::Left,
        Ct::Right => KeyCode::Right,
        Ct::Up => KeyCode::Up,
        Ct::Down => KeyCode::Down,
        Ct::Home => KeyCode::Home,
        Ct::End => KeyCode::End,
        Ct::Tab => KeyCode::Tab,
        Ct::BackTab => KeyCode::BackTab,
        Ct::Delete => KeyCode::Delete,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    use crossterm::event::KeyModifiers as Ct;
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(Ct::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(Ct::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(Ct::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}

#[cfg(test)]
mod tests {
    use super::map_key_event;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crossterm::event::{KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyModifiers as CtMods};

    #[test]
    fn ctrl_chords_keep_their_modifier() {
        let mapped = map_key_event(CtKeyEvent::new(CtKeyCode::Char('s'), CtMods::CONTROL));
        assert_eq!(mapped, KeyEvent::ctrl('s'));
    }

    #[test]
    fn shift_tab_maps_to_back_tab() {
        let mapped = map_key_event(CtKeyEvent::new(CtKeyCode::BackTab, CtMods::SHIFT));
        assert_eq!(mapped, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    #[test]
    fn unsupported_keys_collapse_to_other() {
        let mapped = map_key_event(CtKeyEvent::new(CtKeyCode::F(5), CtMods::NONE));
        assert_eq!(mapped.code, KeyCode::Other);
    }
}
