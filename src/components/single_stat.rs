use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_interval::use_shared_interval;
use crate::models::{
    date_range::DateRange,
    traffic::HitPoint,
};
use crate::utils::format::format_stat;

/// Geometry of one sparkline bar in SVG user units
#[derive(Clone, Debug, PartialEq)]
pub struct SparkBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays out one bar per value across `width`, scaled so the largest value fills `height`.
/// Zero values keep a one-unit stub so the bucket stays visible.
pub fn sparkline_bars(values: &[u64], width: f64, height: f64, gap: f64) -> Vec<SparkBar> {
    if values.is_empty() {
        return vec![];
    }

    let count = values.len() as f64;
    let bar_width = ((width - gap * (count - 1.0)) / count).max(1.0);
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let bar_height = (value as f64 / max * height).max(1.0);
            SparkBar {
                x: i as f64 * (bar_width + gap),
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SingleStatProps {
    pub stat_data: f64,
    /// `time` for millisecond durations, otherwise the counted thing, e.g. `visits`
    pub stat_unit: AttrValue,
    pub stat_title: AttrValue,
    pub chart_data: Rc<Vec<HitPoint>>,
    pub date_range: DateRange,
}

/// Headline number with a small bar sparkline; the latest bucket is highlighted
#[function_component(SingleStat)]
pub fn single_stat(props: &SingleStatProps) -> Html {
    let interval = use_shared_interval().interval;
    let bars = use_memo(props.chart_data.clone(), |points| {
        let hits: Vec<u64> = points.iter().map(|p| p.hits).collect();
        sparkline_bars(&hits, Config::SPARKLINE_WIDTH, Config::SPARKLINE_HEIGHT, 2.0)
    });
    let last = bars.len().saturating_sub(1);

    html! {
        <div class="card single-stat">
            <div class="card-header compact">
                <div class="card-heading">
                    <h3 class="card-title">{props.stat_title.clone()}</h3>
                    <p class="card-description">{props.date_range.display()}</p>
                </div>
            </div>
            <div class="card-content single-stat-body">
                <div class="stat-value">
                    {format_stat(props.stat_data, &props.stat_unit)}
                    <span class="stat-unit">{format!("{}/period", props.stat_unit)}</span>
                </div>
                <svg
                    class="sparkline"
                    width={Config::SPARKLINE_WIDTH.to_string()}
                    height={Config::SPARKLINE_HEIGHT.to_string()}
                    viewBox={format!("0 0 {} {}", Config::SPARKLINE_WIDTH, Config::SPARKLINE_HEIGHT)}
                    aria-hidden="true"
                >
                    {
                        bars.iter().zip(props.chart_data.iter()).enumerate().map(|(i, (bar, point))| {
                            let opacity = if i == last { "0.8" } else { "0.2" };
                            let label = interval.format_bucket_tooltip(&point.date);
                            html! {
                                <rect
                                    x={format!("{:.2}", bar.x)}
                                    y={format!("{:.2}", bar.y)}
                                    width={format!("{:.2}", bar.width)}
                                    height={format!("{:.2}", bar.height)}
                                    rx="2"
                                    fill="var(--chart-bar, currentColor)"
                                    fill-opacity={opacity}
                                >
                                    <title>{format!("{label}: {}", point.hits)}</title>
                                </rect>
                            }
                        }).collect::<Html>()
                    }
                </svg>
            </div>
        </div>
    }
}
