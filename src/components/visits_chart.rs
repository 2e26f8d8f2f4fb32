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
    traffic::{SeriesTable, VisitPoint, visits_table},
};
use crate::utils::palette::ChartPalette;

const CHART_ID: &str = "visits-chart";

#[derive(Properties, PartialEq)]
pub struct VisitsChartProps {
    pub chart_data: Rc<Vec<VisitPoint>>,
    pub date_range: DateRange,
    #[prop_or_default]
    pub push_event: Callback<HostEvent>,
}

/// Total and unique visits per interval bucket
#[function_component(VisitsChart)]
pub fn visits_chart(props: &VisitsChartProps) -> Html {
    let (interval, on_interval) = use_interval_dispatch(props.push_event.clone());
    let table = use_memo((props.chart_data.clone(), interval), |(points, interval)| {
        visits_table(points, *interval)
    });
    let container_ref = use_echart(CHART_ID.into(), table, |table, palette| {
        build_visits_chart(table, palette)
    });

    html! {
        <Card
            title="Total visits"
            description="Showing total visits for"
            date_range={props.date_range}
            actions={html! { <IntervalSelect {interval} on_change={on_interval} /> }}
        >
            {chart_container(container_ref, &CHART_ID.into())}
        </Card>
    }
}

pub fn build_visits_chart(table: &SeriesTable, palette: &ChartPalette) -> CharmingChart {
    let mut chart = CharmingChart::new()
        .color(series_colors(palette, &[1, 2]))
        .tooltip(axis_tooltip())
        .legend(legend(palette))
        .grid(grid())
        .x_axis(time_axis(table, palette, false))
        .y_axis(value_axis(palette));

    for (column, name) in [("total", "Total"), ("unique", "Unique")] {
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
