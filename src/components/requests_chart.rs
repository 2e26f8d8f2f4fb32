use charming::{Chart as CharmingChart, series::Bar};
use std::rc::Rc;
use yew::prelude::*;

use super::card::Card;
use super::chart::{axis_tooltip, chart_container, grid, series_colors, time_axis, value_axis};
use super::interval_select::IntervalSelect;
use crate::hooks::{use_echart::use_echart, use_interval::use_interval_dispatch};
use crate::models::{
    date_range::DateRange,
    events::HostEvent,
    traffic::{RequestPoint, SeriesTable, requests_table},
};
use crate::utils::palette::ChartPalette;

const CHART_ID: &str = "requests-chart";

#[derive(Properties, PartialEq)]
pub struct RequestsChartProps {
    pub chart_data: Rc<Vec<RequestPoint>>,
    pub date_range: DateRange,
    #[prop_or_default]
    pub push_event: Callback<HostEvent>,
}

#[function_component(RequestsChart)]
pub fn requests_chart(props: &RequestsChartProps) -> Html {
    let (interval, on_interval) = use_interval_dispatch(props.push_event.clone());
    let table = use_memo((props.chart_data.clone(), interval), |(points, interval)| {
        requests_table(points, *interval)
    });
    let container_ref = use_echart(CHART_ID.into(), table, |table, palette| {
        build_requests_chart(table, palette)
    });

    html! {
        <Card
            title="Total requests"
            description="Showing total requests for"
            date_range={props.date_range}
            actions={html! { <IntervalSelect {interval} on_change={on_interval} /> }}
        >
            {chart_container(container_ref, &CHART_ID.into())}
        </Card>
    }
}

pub fn build_requests_chart(table: &SeriesTable, palette: &ChartPalette) -> CharmingChart {
    let hits = table.column("hits").unwrap_or_default().to_vec();

    CharmingChart::new()
        .color(series_colors(palette, &[1]))
        .tooltip(axis_tooltip())
        .grid(grid())
        .x_axis(time_axis(table, palette, true))
        .y_axis(value_axis(palette))
        .series(Bar::new().name("Total requests").data(hits).bar_width("70%"))
}
