pub mod config;
pub mod core;
pub mod error;
pub mod form;
pub mod input;
pub mod logging;
pub mod submit;
pub mod terminal;
pub mod ui;

pub use core::app;
pub use core::event;
pub use core::event_queue;
pub use core::form_engine;
pub use core::reducer;
pub use core::state;

pub use terminal::input_event;
pub use terminal::terminal_event;

pub use ui::frame;
pub use ui::theme;
