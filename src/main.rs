use chrono::NaiveDate;
use std::rc::Rc;
use yew::prelude::*;

use analytics_widgets::components::{
    ColorSelector, DateRangePicker, DeviceChart, DurationChart, PopularChart, RequestsChart,
    SingleStat, StatusChart, ThemeToggle, VisitsChart,
};
use analytics_widgets::models::{
    date_range::{DatePreset, DateRange, today},
    events::HostEvent,
    traffic::{DeviceVisits, HitPoint, PathDuration, RequestPoint, SourceVisits, StatusPoint, VisitPoint},
};

/// Deterministic pseudo-traffic so the demo looks alive without a backend
fn wave(day: usize, base: u64, spread: u64) -> u64 {
    base + (day as u64 * 37 + 11) % spread
}

fn days_in(range: DateRange) -> Vec<NaiveDate> {
    range.start().iter_days().take_while(|d| *d <= range.end()).take(90).collect()
}

fn visits(days: &[NaiveDate]) -> Vec<VisitPoint> {
    days.iter()
        .enumerate()
        .map(|(i, d)| {
            let total = wave(i, 400, 250);
            VisitPoint {
                date: d.to_string(),
                total,
                unique: total * 3 / 5,
            }
        })
        .collect()
}

fn requests(days: &[NaiveDate]) -> Vec<RequestPoint> {
    days.iter()
        .enumerate()
        .map(|(i, d)| RequestPoint {
            date: d.to_string(),
            hits: wave(i, 2_000, 900),
        })
        .collect()
}

fn statuses(days: &[NaiveDate]) -> Vec<StatusPoint> {
    days.iter()
        .enumerate()
        .map(|(i, d)| StatusPoint {
            date: d.to_string(),
            oks: wave(i, 1_700, 600),
            redirs: wave(i, 150, 90),
            errors: wave(i, 40, 35),
            fails: wave(i, 2, 9),
        })
        .collect()
}

fn hits(days: &[NaiveDate]) -> Vec<HitPoint> {
    days.iter()
        .rev()
        .take(12)
        .rev()
        .enumerate()
        .map(|(i, d)| HitPoint {
            date: d.to_string(),
            hits: wave(i, 30, 70),
        })
        .collect()
}

fn devices() -> Vec<DeviceVisits> {
    [("desktop", 5_420), ("mobile", 3_180), ("tablet", 610)]
        .into_iter()
        .map(|(device, visits)| DeviceVisits {
            device: device.to_string(),
            visits,
        })
        .collect()
}

fn sources() -> Vec<SourceVisits> {
    [("google.com", 2_310), ("github.com", 1_204), ("news.ycombinator.com", 880), ("direct", 640)]
        .into_iter()
        .map(|(source, visits)| SourceVisits {
            source: source.to_string(),
            visits,
        })
        .collect()
}

fn durations() -> Vec<PathDuration> {
    [("/api/search", 412.0), ("/dashboard", 230.5), ("/", 88.2), ("/login", 61.0)]
        .into_iter()
        .map(|(path, duration)| PathDuration {
            path: path.to_string(),
            duration,
        })
        .collect()
}

#[function_component(App)]
fn app() -> Html {
    let range = use_state(|| DatePreset::Last30Days.resolve(today()));

    // Stand-in for the host: log every event and apply date changes locally
    let push_event = {
        let range = range.clone();
        Callback::from(move |event: HostEvent| {
            gloo::console::log!(format!("{} {}", event.name(), event.payload()));
            if let HostEvent::SetDate(chosen) = event {
                range.set(chosen);
            }
        })
    };

    let date_range = *range;
    let days = days_in(date_range);
    let visit_data = visits(&days);
    let total: u64 = visit_data.iter().map(|v| v.total).sum();
    let last_day = days.last().copied().unwrap_or_else(today);
    let spark = hits(&days);

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Traffic"}</h1>
                <div class="header-actions">
                    <DateRangePicker {date_range} push_event={push_event.clone()} />
                    <ColorSelector />
                    <ThemeToggle />
                </div>
            </header>

            <main class="app-main">
                <section class="stat-grid">
                    <SingleStat
                        stat_data={total as f64}
                        stat_unit="visits"
                        stat_title="Visits"
                        chart_data={Rc::new(spark.clone())}
                        {date_range}
                    />
                    <SingleStat
                        stat_data={182.4}
                        stat_unit="time"
                        stat_title="Avg. response"
                        chart_data={Rc::new(spark)}
                        date_range={DateRange::single_day(last_day)}
                    />
                </section>

                <section class="chart-grid wide">
                    <VisitsChart chart_data={Rc::new(visit_data)} {date_range} push_event={push_event.clone()} />
                    <RequestsChart chart_data={Rc::new(requests(&days))} {date_range} push_event={push_event.clone()} />
                    <StatusChart chart_data={Rc::new(statuses(&days))} {date_range} push_event={push_event} />
                </section>

                <section class="chart-grid">
                    <DeviceChart chart_data={Rc::new(devices())} {date_range} />
                    <PopularChart chart_data={Rc::new(sources())} chart_title="Top sources" {date_range} />
                    <DurationChart chart_data={Rc::new(durations())} chart_title="Slowest paths" {date_range} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
