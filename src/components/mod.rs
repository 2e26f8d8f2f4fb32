pub mod card;
pub mod chart;
pub mod color_selector;
pub mod date_range_picker;
pub mod device_chart;
pub mod duration_chart;
pub mod interval_select;
pub mod popular_chart;
pub mod requests_chart;
pub mod single_stat;
pub mod status_chart;
pub mod theme_toggle;
pub mod visits_chart;

pub use color_selector::ColorSelector;
pub use date_range_picker::DateRangePicker;
pub use device_chart::DeviceChart;
pub use duration_chart::DurationChart;
pub use popular_chart::PopularChart;
pub use requests_chart::RequestsChart;
pub use single_stat::SingleStat;
pub use status_chart::StatusChart;
pub use theme_toggle::ThemeToggle;
pub use visits_chart::VisitsChart;
