use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, JsFunction, Label,
        LabelPosition, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::Bar,
};
use yew::prelude::*;

use crate::config::Config;
use crate::models::traffic::SeriesTable;
use crate::utils::palette::ChartPalette;

/// Markup every chart widget renders its canvas into
pub fn chart_container(container_ref: NodeRef, chart_id: &AttrValue) -> Html {
    html! {
        <div
            class="chart-container"
            style={format!("min-height: {}px", Config::CHART_HEIGHT_PX)}
            ref={container_ref}
        >
            <div id={chart_id.clone()} class="chart-canvas" />
        </div>
    }
}

/// Series colors in drawing order, picked by `--chart-N` index
pub fn series_colors(palette: &ChartPalette, chart_indices: &[usize]) -> Vec<Color> {
    chart_indices
        .iter()
        .map(|n| Color::from(palette.chart(*n)))
        .collect()
}

pub fn grid() -> Grid {
    Grid::new()
        .left("2%")
        .right("2%")
        .top("6%")
        .bottom("14%")
        .contain_label(true)
}

pub fn legend(palette: &ChartPalette) -> Legend {
    Legend::new()
        .bottom("0%")
        .text_style(TextStyle::new().color(palette.axis))
}

pub fn axis_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

/// Bucket axis of a time-series chart. Categories carry the full bucket label
/// so the axis tooltip can tell hourly buckets apart; ticks show the short form.
pub fn time_axis(table: &SeriesTable, palette: &ChartPalette, boundary_gap: bool) -> Axis {
    Axis::new()
        .type_(AxisType::Category)
        .boundary_gap(boundary_gap)
        .data(table.labels.clone())
        .axis_label(
            AxisLabel::new()
                .color(palette.axis)
                .formatter(tick_formatter(&table.ticks)),
        )
}

/// Maps a category index to its short tick, falling back to the category itself
fn tick_formatter(ticks: &[String]) -> JsFunction {
    let ticks = serde_json::to_string(ticks).unwrap_or_else(|_| "[]".to_string());
    JsFunction::new_with_args(
        "value, index",
        &format!("const ticks = {ticks}; return ticks[index] ?? value;"),
    )
}

pub fn value_axis(palette: &ChartPalette) -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .axis_label(AxisLabel::new().color(palette.axis))
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(palette.grid)
                    .type_(LineStyleType::Dashed),
            ),
        )
}

/// Horizontal bars with the row name drawn inside each bar, first row on top
pub fn ranked_bar_chart(
    series_name: &str,
    labels: Vec<String>,
    values: Vec<f64>,
    palette: &ChartPalette,
) -> CharmingChart {
    CharmingChart::new()
        .color(series_colors(palette, &[3]))
        .tooltip(axis_tooltip())
        .grid(
            Grid::new()
                .left("1%")
                .right("4%")
                .top("2%")
                .bottom("2%")
                .contain_label(false),
        )
        .x_axis(Axis::new().type_(AxisType::Value).show(false))
        .y_axis(Axis::new().type_(AxisType::Category).data(labels).show(false))
        .series(
            Bar::new()
                .name(series_name)
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::InsideLeft)
                        .formatter("{b}"),
                )
                .data(values),
        )
}
