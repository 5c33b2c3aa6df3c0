use crate::core::form_engine::Slot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged { slot: Slot, value: String },
    FocusChanged { from: Slot, to: Slot },
    SubmitRequested,
}
