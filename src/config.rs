/// Configuration constants for the widgets
pub struct Config;

impl Config {
    /// localStorage key for the selected color theme
    pub const COLOR_THEME_KEY: &'static str = "color-theme";

    /// localStorage key for the light/dark preference
    pub const THEME_MODE_KEY: &'static str = "theme-mode";

    /// Window event fired whenever the page palette or light/dark mode changes
    pub const THEME_CHANGE_EVENT: &'static str = "dashboard:themechange";

    /// Delay before charts redraw after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Time of day appended to the lower bound of a `set_date` payload
    pub const DAY_START: &'static str = "00:00:00";

    /// Time of day appended to the upper bound of a `set_date` payload
    pub const DAY_END: &'static str = "23:59:59";

    /// Width of the single-stat sparkline in pixels
    pub const SPARKLINE_WIDTH: f64 = 72.0;

    /// Height of the single-stat sparkline in pixels
    pub const SPARKLINE_HEIGHT: f64 = 32.0;

    /// Height of the full-size chart bodies in pixels
    pub const CHART_HEIGHT_PX: u32 = 250;
}
