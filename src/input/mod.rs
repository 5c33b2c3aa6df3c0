pub mod button_input;
pub mod checkbox_input;
pub mod date_input;
pub mod input;
pub mod text_input;

pub use button_input::ButtonInput;
pub use checkbox_input::CheckboxInput;
pub use date_input::DateInput;
pub use input::{Input, InputBase, KeyResult};
pub use text_input::TextInput;
