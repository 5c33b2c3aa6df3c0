use crate::core::form_event::FormEvent;
use crate::form::{FieldId, FormState, Hobby, TextField};
use crate::input::{ButtonInput, CheckboxInput, DateInput, Input, KeyResult, TextInput};
use crate::terminal::KeyEvent;
use chrono::NaiveDate;

/// A focusable position in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Text(TextField),
    Hobby(Hobby),
    OtherHobby,
    Submit,
}

impl Slot {
    /// The error slot a widget reports into; touching the widget touches it.
    pub fn field(self) -> Option<FieldId> {
        match self {
            Slot::Text(field) => Some(field.into()),
            Slot::Hobby(_) | Slot::OtherHobby => Some(FieldId::Hobbies),
            Slot::Submit => None,
        }
    }

    pub fn is_visible(self, form: &FormState) -> bool {
        match self {
            Slot::OtherHobby => form.values().has_hobby(Hobby::Other),
            _ => true,
        }
    }
}

/// Owns the widgets and the focus cursor, and keeps [`FormState`] in step
/// with whatever the widgets edit.
pub struct FormEngine {
    widgets: Vec<(Slot, Box<dyn Input>)>,
    focus_index: usize,
}

impl FormEngine {
    pub fn new(today: NaiveDate) -> Self {
        let mut widgets: Vec<(Slot, Box<dyn Input>)> = Vec::new();
        widgets.push((
            Slot::Text(TextField::FirstName),
            Box::new(TextInput::new("First Name").with_placeholder("Enter your first name")),
        ));
        widgets.push((
            Slot::Text(TextField::LastName),
            Box::new(TextInput::new("Last Name").with_placeholder("Enter your last name")),
        ));
        widgets.push((
            Slot::Text(TextField::BirthDate),
            Box::new(DateInput::new("Birth Date").with_max(today)),
        ));
        for hobby in Hobby::ALL {
            widgets.push((Slot::Hobby(hobby), Box::new(CheckboxInput::new(hobby.as_str()))));
            if hobby == Hobby::Other {
                widgets.push((
                    Slot::OtherHobby,
                    Box::new(TextInput::new("Other hobby").with_placeholder("Specify other hobby")),
                ));
            }
        }
        widgets.push((
            Slot::Text(TextField::Email),
            Box::new(TextInput::new("Email").with_placeholder("Enter your email address")),
        ));
        widgets.push((
            Slot::Text(TextField::Note),
            Box::new(TextInput::new("Note").with_placeholder("Add any additional information")),
        ));
        widgets.push((Slot::Submit, Box::new(ButtonInput::new("Submit"))));

        let mut engine = Self {
            widgets,
            focus_index: 0,
        };
        engine.widgets[0].1.set_focused(true);
        engine
    }

    pub fn widgets(&self) -> impl Iterator<Item = (Slot, &dyn Input)> {
        self.widgets
            .iter()
            .map(|(slot, widget)| (*slot, widget.as_ref() as &dyn Input))
    }

    pub fn widget(&self, slot: Slot) -> Option<&dyn Input> {
        self.widgets
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, widget)| widget.as_ref())
    }

    pub fn focused_slot(&self) -> Slot {
        self.widgets[self.focus_index].0
    }

    pub fn focused_input(&self) -> &dyn Input {
        self.widgets[self.focus_index].1.as_ref()
    }

    pub fn focused_captures(&self, key: &KeyEvent) -> bool {
        self.focused_input().captures_key(key.code, key.modifiers)
    }

    pub fn move_focus(&mut self, form: &mut FormState, direction: isize) -> Vec<FormEvent> {
        let len = self.widgets.len() as isize;
        let mut next = self.focus_index as isize;
        for _ in 0..len {
            next = (next + direction).rem_euclid(len);
            if self.widgets[next as usize].0.is_visible(form) {
                break;
            }
        }
        self.set_focus(form, next as usize, true)
    }

    /// Moves focus to the first widget of `field` without touching the one left behind.
    pub fn focus_field(&mut self, form: &mut FormState, field: FieldId) -> Vec<FormEvent> {
        let Some(index) = self
            .widgets
            .iter()
            .position(|(slot, _)| slot.field() == Some(field) && slot.is_visible(form))
        else {
            return vec![];
        };
        self.set_focus(form, index, false)
    }

    pub fn focus_first(&mut self, form: &mut FormState) -> Vec<FormEvent> {
        self.set_focus(form, 0, false)
    }

    pub fn handle_key(&mut self, form: &mut FormState, key: KeyEvent) -> Vec<FormEvent> {
        if form.is_submitting() {
            return vec![];
        }
        self.update_focused(form, |input| {
            Some(input.handle_key(key.code, key.modifiers))
        })
    }

    pub fn handle_delete_word(&mut self, form: &mut FormState, forward: bool) -> Vec<FormEvent> {
        if form.is_submitting() {
            return vec![];
        }
        self.update_focused(form, |input| {
            if forward {
                input.delete_word_forward();
            } else {
                input.delete_word();
            }
            None
        })
    }

    /// Overwrites every widget with the values held by `form`.
    pub fn sync_from(&mut self, form: &FormState) {
        for (slot, widget) in &mut self.widgets {
            if let Some(value) = slot_value(*slot, form) {
                widget.set_value(value);
            }
        }
    }

    fn set_focus(&mut self, form: &mut FormState, index: usize, touch: bool) -> Vec<FormEvent> {
        let from = self.focused_slot();
        if index == self.focus_index {
            return vec![];
        }

        if touch {
            if let Some(field) = from.field() {
                form.touch(field);
            }
        }

        self.widgets[self.focus_index].1.set_focused(false);
        self.widgets[index].1.set_focused(true);
        self.focus_index = index;

        vec![FormEvent::FocusChanged {
            from,
            to: self.focused_slot(),
        }]
    }

    fn update_focused<F>(&mut self, form: &mut FormState, update: F) -> Vec<FormEvent>
    where
        F: FnOnce(&mut dyn Input) -> Option<KeyResult>,
    {
        let slot = self.focused_slot();
        let input = self.widgets[self.focus_index].1.as_mut();

        let before = input.value();
        let result = update(&mut *input);
        let after = input.value();

        let mut events = Vec::new();
        if before != after {
            if apply_to_form(slot, &after, form) {
                events.push(FormEvent::InputChanged {
                    slot,
                    value: after,
                });
            } else if let Some(value) = slot_value(slot, form) {
                // the form refused the edit; put the widget back
                input.set_value(value);
            }
            if matches!(slot, Slot::Hobby(Hobby::Other)) {
                self.sync_slot(Slot::OtherHobby, form);
            }
        }

        if matches!(result, Some(KeyResult::Submit)) {
            events.push(FormEvent::SubmitRequested);
        }
        events
    }

    fn sync_slot(&mut self, slot: Slot, form: &FormState) {
        let Some(value) = slot_value(slot, form) else {
            return;
        };
        if let Some((_, widget)) = self.widgets.iter_mut().find(|(s, _)| *s == slot) {
            widget.set_value(value);
        }
    }
}

fn apply_to_form(slot: Slot, value: &str, form: &mut FormState) -> bool {
    match slot {
        Slot::Text(field) => form.edit_text(field, value),
        Slot::Hobby(hobby) => form.set_hobby(hobby, value == "true"),
        Slot::OtherHobby => form.edit_other_hobby(value),
        Slot::Submit => false,
    }
}

fn slot_value(slot: Slot, form: &FormState) -> Option<String> {
    let values = form.values();
    match slot {
        Slot::Text(field) => Some(values.text(field).to_string()),
        Slot::Hobby(hobby) => Some(values.has_hobby(hobby).to_string()),
        Slot::OtherHobby => Some(values.other_hobby.clone()),
        Slot::Submit => None,
    }
}
