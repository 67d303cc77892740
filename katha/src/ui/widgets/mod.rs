//! TUI widgets for the story dashboard

pub mod card;
pub mod status_bar;

pub use card::StoryCardWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
