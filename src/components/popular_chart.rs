use charming::Chart as CharmingChart;
use std::rc::Rc;
use yew::prelude::*;

use super::card::Card;
use super::chart::{chart_container, ranked_bar_chart};
use crate::hooks::use_echart::use_echart;
use crate::models::{
    date_range::DateRange,
    traffic::{SourceVisits, ranked_rows},
};
use crate::utils::{format::slugify, palette::ChartPalette};

#[derive(Properties, PartialEq)]
pub struct PopularChartProps {
    pub chart_data: Rc<Vec<SourceVisits>>,
    /// Card heading, e.g. "Top sources"; several instances can share a page
    pub chart_title: AttrValue,
    pub date_range: DateRange,
}

/// Visits per source (or path), highest first
#[function_component(PopularChart)]
pub fn popular_chart(props: &PopularChartProps) -> Html {
    let chart_id = AttrValue::from(format!("popular-{}", slugify(&props.chart_title)));
    let container_ref = use_echart(chart_id.clone(), props.chart_data.clone(), |rows, palette| {
        build_popular_chart(rows, palette)
    });

    html! {
        <Card
            title={props.chart_title.clone()}
            date_range={props.date_range}
            footer={AttrValue::from(format!("Showing total visits for {}", props.chart_title.to_lowercase()))}
            class="card-square"
        >
            {chart_container(container_ref, &chart_id)}
        </Card>
    }
}

pub fn build_popular_chart(rows: &[SourceVisits], palette: &ChartPalette) -> CharmingChart {
    let (labels, values) = ranked_rows(rows.iter().map(|r| (r.source.as_str(), r.visits as f64)));
    ranked_bar_chart("Visits", labels, values, palette)
}
