//! egui screens for the prize draw.

pub mod app_shell;
pub mod constants;
pub mod draw_screen;
pub mod entry_screen;
pub mod machine;
