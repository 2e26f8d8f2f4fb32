use charming::Chart as CharmingChart;
use std::rc::Rc;
use yew::prelude::*;

use super::card::Card;
use super::chart::{chart_container, ranked_bar_chart};
use crate::hooks::use_echart::use_echart;
use crate::models::{
    date_range::DateRange,
    traffic::{PathDuration, ranked_rows},
};
use crate::utils::{format::slugify, palette::ChartPalette};

#[derive(Properties, PartialEq)]
pub struct DurationChartProps {
    pub chart_data: Rc<Vec<PathDuration>>,
    pub chart_title: AttrValue,
    pub date_range: DateRange,
}

/// Request duration per path
#[function_component(DurationChart)]
pub fn duration_chart(props: &DurationChartProps) -> Html {
    let chart_id = AttrValue::from(format!("duration-{}", slugify(&props.chart_title)));
    let container_ref = use_echart(chart_id.clone(), props.chart_data.clone(), |rows, palette| {
        build_duration_chart(rows, palette)
    });

    html! {
        <Card
            title={props.chart_title.clone()}
            date_range={props.date_range}
            footer={AttrValue::from(format!("Request duration for {}", props.chart_title.to_lowercase()))}
            class="card-square"
        >
            {chart_container(container_ref, &chart_id)}
        </Card>
    }
}

pub fn build_duration_chart(rows: &[PathDuration], palette: &ChartPalette) -> CharmingChart {
    let (labels, values) = ranked_rows(rows.iter().map(|r| (r.path.as_str(), r.duration)));
    ranked_bar_chart("Duration", labels, values, palette)
}
