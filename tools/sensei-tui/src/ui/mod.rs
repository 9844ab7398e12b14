//! UI module for TUI rendering.

pub mod chat;
pub mod console;
pub mod editor;
pub mod explanation;
pub mod layout;
pub mod theme;
pub mod toast;

pub use layout::render;
pub use theme::Palette;
