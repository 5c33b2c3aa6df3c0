use crate::submit::Receipt;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Exit,
    Cancel,
    Submit,
    NextInput,
    PrevInput,
    DeleteWord,
    DeleteWordForward,
    InputKey(KeyEvent),
    StopShake,
    SubmissionFinished(Result<Receipt, String>),
}
