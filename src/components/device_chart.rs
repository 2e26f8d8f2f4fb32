use charming::{
    Chart as CharmingChart,
    component::Title,
    element::{Label, TextStyle, Tooltip, Trigger},
    series::Pie,
};
use std::rc::Rc;
use yew::prelude::*;

use super::card::Card;
use super::chart::{chart_container, series_colors};
use crate::hooks::use_echart::use_echart;
use crate::models::{
    date_range::DateRange,
    traffic::{DeviceVisits, total_visits},
};
use crate::utils::{format::n_formatter, palette::ChartPalette};

const CHART_ID: &str = "device-chart";

#[derive(Properties, PartialEq)]
pub struct DeviceChartProps {
    pub chart_data: Rc<Vec<DeviceVisits>>,
    pub date_range: DateRange,
}

/// Doughnut of visits split by device type, total in the middle
#[function_component(DeviceChart)]
pub fn device_chart(props: &DeviceChartProps) -> Html {
    let container_ref = use_echart(CHART_ID.into(), props.chart_data.clone(), |devices, palette| {
        build_device_chart(devices, palette)
    });

    html! {
        <Card
            title="Device Usage"
            date_range={props.date_range}
            footer={AttrValue::from("Showing total visits split by device type")}
            class="card-square"
        >
            {chart_container(container_ref, &CHART_ID.into())}
        </Card>
    }
}

/// `--chart-N` slot for a device; unknown devices take the remaining slots in turn
pub fn device_color_index(device: &str, position: usize) -> usize {
    match device {
        "desktop" => 1,
        "tablet" => 2,
        "mobile" => 3,
        _ => 4 + position % 2,
    }
}

pub fn build_device_chart(devices: &[DeviceVisits], palette: &ChartPalette) -> CharmingChart {
    let colors: Vec<usize> = devices
        .iter()
        .enumerate()
        .map(|(position, d)| device_color_index(&d.device, position))
        .collect();
    let data: Vec<(f64, &str)> = devices
        .iter()
        .map(|d| (d.visits as f64, d.device.as_str()))
        .collect();

    CharmingChart::new()
        .color(series_colors(palette, &colors))
        .title(
            Title::new()
                .text(n_formatter(total_visits(devices) as f64, 1))
                .subtext("Visits")
                .left("center")
                .top("center")
                .text_style(TextStyle::new().font_size(28).color(palette.text))
                .subtext_style(TextStyle::new().color(palette.axis)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(
            Pie::new()
                .name("Visits")
                .radius(vec!["55%", "75%"])
                .avoid_label_overlap(false)
                .label(Label::new().show(false))
                .data(data),
        )
}
