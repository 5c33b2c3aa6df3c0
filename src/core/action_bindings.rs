use crate::core::event::Action;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

pub struct ActionBindings {
    bindings: HashMap<KeyBinding, Action>,
}

impl ActionBindings {
    pub fn new() -> Self {
        let mut manager = Self {
            bindings: HashMap::new(),
        };
        manager.setup_default_bindings();
        manager
    }

    fn setup_default_bindings(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Action::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Action::Cancel);
        self.bind(KeyBinding::ctrl(KeyCode::Char('s')), Action::Submit);

        self.bind(KeyBinding::key(KeyCode::Tab), Action::NextInput);
        self.bind(KeyBinding::key(KeyCode::Down), Action::NextInput);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevInput,
        );
        self.bind(KeyBinding::key(KeyCode::BackTab), Action::PrevInput);
        self.bind(KeyBinding::key(KeyCode::Up), Action::PrevInput);

        self.bind(KeyBinding::ctrl(KeyCode::Backspace), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Char('w')), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Delete), Action::DeleteWordForward);
    }

    pub fn bind(&mut self, key: KeyBinding, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn handle_key(&self, key_event: &KeyEvent) -> Option<Action> {
        self.bindings
            .get(&KeyBinding::from_key_event(key_event))
            .cloned()
    }
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ActionBindings;
    use crate::core::event::Action;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn submit_and_exit_chords() {
        let bindings = ActionBindings::new();
        assert_eq!(bindings.handle_key(&KeyEvent::ctrl('s')), Some(Action::Submit));
        assert_eq!(bindings.handle_key(&KeyEvent::ctrl('c')), Some(Action::Exit));
        assert_eq!(
            bindings.handle_key(&KeyEvent::plain(KeyCode::Esc)),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn plain_characters_fall_through_to_the_widget() {
        let bindings = ActionBindings::new();
        assert_eq!(bindings.handle_key(&KeyEvent::plain(KeyCode::Char('s'))), None);
        assert_eq!(bindings.handle_key(&KeyEvent::plain(KeyCode::Char(' '))), None);
        assert_eq!(bindings.handle_key(&KeyEvent::plain(KeyCode::Enter)), None);
    }

    #[test]
    fn shift_tab_moves_back() {
        let bindings = ActionBindings::new();
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(bindings.handle_key(&back_tab), Some(Action::PrevInput));
    }
}
