pub mod use_color_theme;
pub mod use_echart;
pub mod use_hotkeys;
pub mod use_interval;
pub mod use_theme;
