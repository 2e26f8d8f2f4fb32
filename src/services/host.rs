use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use web_sys::js_sys::Function;
use yew::prelude::*;

use super::dispatch::{console_dispatcher, js_dispatcher};
use crate::components::{
    color_selector::ColorSelector,
    date_range_picker::{DateRangePicker, DateRangePickerProps},
    device_chart::{DeviceChart, DeviceChartProps},
    duration_chart::{DurationChart, DurationChartProps},
    popular_chart::{PopularChart, PopularChartProps},
    requests_chart::{RequestsChart, RequestsChartProps},
    single_stat::{SingleStat, SingleStatProps},
    status_chart::{StatusChart, StatusChartProps},
    theme_toggle::ThemeToggle,
    visits_chart::{VisitsChart, VisitsChartProps},
};
use crate::models::{
    date_range::DateRange,
    error::AppError,
    events::HostEvent,
    traffic::{DeviceVisits, HitPoint, PathDuration, RequestPoint, SourceVisits, StatusPoint, VisitPoint},
};

/// Widgets the host page can mount by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    ColorSelector,
    ThemeToggle,
    DateRangePicker,
    VisitsChart,
    RequestsChart,
    StatusChart,
    DeviceChart,
    PopularChart,
    DurationChart,
    SingleStat,
}

impl FromStr for WidgetKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ColorSelector" => Ok(Self::ColorSelector),
            "ThemeToggle" => Ok(Self::ThemeToggle),
            "DateRangePicker" => Ok(Self::DateRangePicker),
            "VisitsChart" => Ok(Self::VisitsChart),
            "RequestsChart" => Ok(Self::RequestsChart),
            "StatusChart" => Ok(Self::StatusChart),
            "DeviceChart" => Ok(Self::DeviceChart),
            "PopularChart" => Ok(Self::PopularChart),
            "DurationChart" | "ResChart" => Ok(Self::DurationChart),
            "SingleStat" => Ok(Self::SingleStat),
            other => Err(AppError::UnknownWidget(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerProps {
    pub date_range: DateRange,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesProps<T> {
    #[serde(default = "Vec::new")]
    pub chart_data: Vec<T>,
    pub date_range: DateRange,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitledSeriesProps<T> {
    #[serde(default = "Vec::new")]
    pub chart_data: Vec<T>,
    pub chart_title: String,
    pub date_range: DateRange,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatProps {
    pub stat_data: f64,
    pub stat_unit: String,
    pub stat_title: String,
    #[serde(default)]
    pub chart_data: Vec<HitPoint>,
    pub date_range: DateRange,
}

/// A widget together with the props the host serialized for it
#[derive(Debug)]
pub enum WidgetMount {
    ColorSelector,
    ThemeToggle,
    DateRangePicker(PickerProps),
    VisitsChart(SeriesProps<VisitPoint>),
    RequestsChart(SeriesProps<RequestPoint>),
    StatusChart(SeriesProps<StatusPoint>),
    DeviceChart(SeriesProps<DeviceVisits>),
    PopularChart(TitledSeriesProps<SourceVisits>),
    DurationChart(TitledSeriesProps<PathDuration>),
    SingleStat(StatProps),
}

fn props<T: DeserializeOwned>(json: &str) -> Result<T, AppError> {
    Ok(serde_json::from_str(json)?)
}

impl WidgetMount {
    /// Parses host props for `widget`. Widgets without props ignore `props_json`.
    pub fn parse(widget: &str, props_json: &str) -> Result<Self, AppError> {
        Ok(match widget.parse::<WidgetKind>()? {
            WidgetKind::ColorSelector => Self::ColorSelector,
            WidgetKind::ThemeToggle => Self::ThemeToggle,
            WidgetKind::DateRangePicker => Self::DateRangePicker(props(props_json)?),
            WidgetKind::VisitsChart => Self::VisitsChart(props(props_json)?),
            WidgetKind::RequestsChart => Self::RequestsChart(props(props_json)?),
            WidgetKind::StatusChart => Self::StatusChart(props(props_json)?),
            WidgetKind::DeviceChart => Self::DeviceChart(props(props_json)?),
            WidgetKind::PopularChart => Self::PopularChart(props(props_json)?),
            WidgetKind::DurationChart => Self::DurationChart(props(props_json)?),
            WidgetKind::SingleStat => Self::SingleStat(props(props_json)?),
        })
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::ColorSelector => WidgetKind::ColorSelector,
            Self::ThemeToggle => WidgetKind::ThemeToggle,
            Self::DateRangePicker(_) => WidgetKind::DateRangePicker,
            Self::VisitsChart(_) => WidgetKind::VisitsChart,
            Self::RequestsChart(_) => WidgetKind::RequestsChart,
            Self::StatusChart(_) => WidgetKind::StatusChart,
            Self::DeviceChart(_) => WidgetKind::DeviceChart,
            Self::PopularChart(_) => WidgetKind::PopularChart,
            Self::DurationChart(_) => WidgetKind::DurationChart,
            Self::SingleStat(_) => WidgetKind::SingleStat,
        }
    }

    /// Renders the widget into `root`, reporting interactions through `push_event`.
    pub fn render(self, root: Element, push_event: Callback<HostEvent>) {
        match self {
            Self::ColorSelector => {
                yew::Renderer::<ColorSelector>::with_root(root).render();
            }
            Self::ThemeToggle => {
                yew::Renderer::<ThemeToggle>::with_root(root).render();
            }
            Self::DateRangePicker(p) => {
                let props = DateRangePickerProps {
                    date_range: p.date_range,
                    push_event,
                };
                yew::Renderer::<DateRangePicker>::with_root_and_props(root, props).render();
            }
            Self::VisitsChart(p) => {
                let props = VisitsChartProps {
                    chart_data: Rc::new(p.chart_data),
                    date_range: p.date_range,
                    push_event,
                };
                yew::Renderer::<VisitsChart>::with_root_and_props(root, props).render();
            }
            Self::RequestsChart(p) => {
                let props = RequestsChartProps {
                    chart_data: Rc::new(p.chart_data),
                    date_range: p.date_range,
                    push_event,
                };
                yew::Renderer::<RequestsChart>::with_root_and_props(root, props).render();
            }
            Self::StatusChart(p) => {
                let props = StatusChartProps {
                    chart_data: Rc::new(p.chart_data),
                    date_range: p.date_range,
                    push_event,
                };
                yew::Renderer::<StatusChart>::with_root_and_props(root, props).render();
            }
            Self::DeviceChart(p) => {
                let props = DeviceChartProps {
                    chart_data: Rc::new(p.chart_data),
                    date_range: p.date_range,
                };
                yew::Renderer::<DeviceChart>::with_root_and_props(root, props).render();
            }
            Self::PopularChart(p) => {
                let props = PopularChartProps {
                    chart_data: Rc::new(p.chart_data),
                    chart_title: p.chart_title.into(),
                    date_range: p.date_range,
                };
                yew::Renderer::<PopularChart>::with_root_and_props(root, props).render();
            }
            Self::DurationChart(p) => {
                let props = DurationChartProps {
                    chart_data: Rc::new(p.chart_data),
                    chart_title: p.chart_title.into(),
                    date_range: p.date_range,
                };
                yew::Renderer::<DurationChart>::with_root_and_props(root, props).render();
            }
            Self::SingleStat(p) => {
                let props = SingleStatProps {
                    stat_data: p.stat_data,
                    stat_unit: p.stat_unit.into(),
                    stat_title: p.stat_title.into(),
                    chart_data: Rc::new(p.chart_data),
                    date_range: p.date_range,
                };
                yew::Renderer::<SingleStat>::with_root_and_props(root, props).render();
            }
        }
    }
}

/// Mounts `widget` into `element` with JSON `props`.
///
/// `push_event(name, payload)` receives `set_date` / `set_interval` events.
/// Without it, events are only logged to the console.
#[wasm_bindgen(js_name = mountWidget)]
pub fn mount_widget(
    element: Element,
    widget: &str,
    props_json: &str,
    push_event: Option<Function>,
) -> Result<(), JsValue> {
    let mount =
        WidgetMount::parse(widget, props_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let push_event = push_event.map_or_else(console_dispatcher, js_dispatcher);

    mount.render(element, push_event);
    Ok(())
}
