pub mod color_theme;
pub mod date_range;
pub mod error;
pub mod events;
pub mod hotkey;
pub mod interval;
pub mod traffic;
