pub mod errors;
pub mod field;
pub mod state;
pub mod validators;
pub mod values;

pub use errors::{FieldErrors, TouchedFlags};
pub use field::{FieldId, Hobby, TextField};
pub use state::{FormState, Phase, SubmitAttempt};
pub use values::{FormValues, Registration};
