pub mod frame;
pub mod render_view;
pub mod renderer;
pub mod span;
pub mod spinner;
pub mod style;
pub mod theme;
