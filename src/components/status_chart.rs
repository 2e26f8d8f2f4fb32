use charming::{
    Chart as CharmingChart,
    element::{AreaStyle, Emphasis, EmphasisFocus},
    series::Line,
};
use std::rc::Rc;
use yew::prelude::*;

use super::card::Card;
use super::chart::{axis_tooltip, chart_container, grid, legend, series_colors, time_axis, value_axis};
use super::interval_select::IntervalSelect;
use crate::hooks::{use_echart::use_echart, use_interval::use_interval_dispatch};
use crate::models::{
    date_range::DateRange,
    events::HostEvent,
    traffic::{SeriesTable, StatusPoint, status_table},
};
use crate::utils::palette::ChartPalette;

const CHART_ID: &str = "status-chart";

/// Card description; the date range follows it
pub const DESCRIPTION: &str = "Showing HTTP statuses for the";

/// Column, legend label and `--chart-N` color of each status class
const STATUS_SERIES: [(&str, &str, usize); 4] = [
    ("oks", "200s", 5),
    ("redirs", "300s", 4),
    ("errors", "400s", 2),
    ("fails", "500s", 1),
];

#[derive(Properties, PartialEq)]
pub struct StatusChartProps {
    pub chart_data: Rc<Vec<StatusPoint>>,
    pub date_range: DateRange,
    #[prop_or_default]
    pub push_event: Callback<HostEvent>,
}

/// Responses per status class per interval bucket
#[function_component(StatusChart)]
pub fn status_chart(props: &StatusChartProps) -> Html {
    let (interval, on_interval) = use_interval_dispatch(props.push_event.clone());
    let table = use_memo((props.chart_data.clone(), interval), |(points, interval)| {
        status_table(points, *interval)
    });
    let container_ref = use_echart(CHART_ID.into(), table, |table, palette| {
        build_status_chart(table, palette)
    });

    html! {
        <Card
            title="HTTP Statuses"
            description={DESCRIPTION}
            date_range={props.date_range}
            actions={html! { <IntervalSelect {interval} on_change={on_interval} /> }}
        >
            {chart_container(container_ref, &CHART_ID.into())}
        </Card>
    }
}

pub fn build_status_chart(table: &SeriesTable, palette: &ChartPalette) -> CharmingChart {
    let colors: Vec<usize> = STATUS_SERIES.iter().map(|(_, _, color)| *color).collect();

    let mut chart = CharmingChart::new()
        .color(series_colors(palette, &colors))
        .tooltip(axis_tooltip())
        .legend(legend(palette))
        .grid(grid())
        .x_axis(time_axis(table, palette, false))
        .y_axis(value_axis(palette));

    for (column, name, _) in STATUS_SERIES {
        let values = table.column(column).unwrap_or_default().to_vec();
        chart = chart.series(
            Line::new()
                .name(name)
                .area_style(AreaStyle::new().opacity(0.4))
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(values),
        );
    }

    chart
}
