#[cfg(test)]
mod tests {
    use analytics_widgets::components::{
        device_chart::{build_device_chart, device_color_index},
        duration_chart::build_duration_chart,
        popular_chart::build_popular_chart,
        requests_chart::build_requests_chart,
        single_stat::sparkline_bars,
        status_chart::{DESCRIPTION as STATUS_DESCRIPTION, build_status_chart},
        visits_chart::build_visits_chart,
    };
    use analytics_widgets::hooks::{use_interval::interval_change, use_theme::ThemeMode};
    use analytics_widgets::models::{
        color_theme::{COLOR_THEMES, ColorTheme},
        date_range::{DatePreset, DateRange, earliest_date, parse_host_datetime, resolve_preset},
        error::AppError,
        events::HostEvent,
        hotkey::Hotkey,
        interval::Interval,
        traffic::{
            DeviceVisits, PathDuration, RequestPoint, SourceVisits, StatusPoint, VisitPoint,
            ranked_rows, requests_table, status_table, total_visits, visits_table,
        },
    };
    use analytics_widgets::services::host::{WidgetKind, WidgetMount};
    use analytics_widgets::utils::{
        format::{format_stat, n_formatter, slugify},
        palette::{ChartPalette, css_color},
        shared::SharedStore,
    };
    use chrono::{Datelike, Days, NaiveDate};
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Callback;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: NaiveDate, to: NaiveDate) -> DateRange {
        DateRange::new(from, to)
    }

    // Every day from 2023-01-01 through 2025-12-31, covering a leap year
    fn sample_days() -> Vec<NaiveDate> {
        day(2023, 1, 1)
            .iter_days()
            .take_while(|d| *d <= day(2025, 12, 31))
            .collect()
    }

    fn sample_statuses() -> Vec<StatusPoint> {
        vec![
            StatusPoint {
                date: "2024-03-05".to_string(),
                oks: 120,
                redirs: 8,
                errors: 3,
                fails: 1,
            },
            StatusPoint {
                date: "2024-03-06".to_string(),
                oks: 140,
                redirs: 5,
                errors: 0,
                fails: 0,
            },
        ]
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::InvalidDate("tomorrow".to_string()).to_string(),
            "Invalid date: tomorrow"
        );
        assert_eq!(
            AppError::UnknownPreset("next_week".to_string()).to_string(),
            "Unknown preset: next_week"
        );
        assert_eq!(
            AppError::UnknownWidget("PieChart".to_string()).to_string(),
            "Unknown widget: PieChart"
        );
        assert_eq!(
            AppError::RenderError("no container".to_string()).to_string(),
            "Render error: no container"
        );
    }

    #[test]
    fn test_app_error_from_json() {
        let json_error = serde_json::from_str::<VisitPoint>("{").unwrap_err();
        let error = AppError::from(json_error);
        assert!(matches!(error, AppError::InvalidProps(_)));
        assert!(error.to_string().starts_with("Invalid props: "));
    }

    // ===== Date Preset Tests =====

    #[test]
    fn test_every_preset_yields_ordered_range() {
        for today in sample_days() {
            for preset in DatePreset::ALL {
                let resolved = preset.resolve(today);
                assert!(
                    resolved.start() <= resolved.end(),
                    "{preset} on {today} gave {resolved:?}"
                );
                assert!(resolved.end() <= today, "{preset} on {today} ends in the future");
            }
        }
    }

    #[test]
    fn test_rolling_presets() {
        let today = day(2024, 3, 12);

        assert_eq!(DatePreset::Today.resolve(today), DateRange::single_day(today));
        assert_eq!(
            DatePreset::Yesterday.resolve(today),
            DateRange::single_day(day(2024, 3, 11))
        );
        assert_eq!(
            DatePreset::LastWeek.resolve(today),
            range(day(2024, 3, 5), today)
        );
        assert_eq!(
            DatePreset::Last30Days.resolve(today),
            range(day(2024, 2, 11), today)
        );
        assert_eq!(
            DatePreset::Last90Days.resolve(today),
            range(day(2023, 12, 13), today)
        );
        // 2024 is a leap year, so 365 days back lands on the 13th
        assert_eq!(
            DatePreset::Last12Months.resolve(today),
            range(day(2023, 3, 13), today)
        );
        assert_eq!(
            DatePreset::PreviousWeek.resolve(today),
            range(day(2024, 2, 27), day(2024, 3, 5))
        );
    }

    #[test]
    fn test_previous_month() {
        assert_eq!(
            DatePreset::PreviousMonth.resolve(day(2024, 3, 10)),
            range(day(2024, 2, 1), day(2024, 2, 29))
        );
        assert_eq!(
            DatePreset::PreviousMonth.resolve(day(2024, 1, 1)),
            range(day(2023, 12, 1), day(2023, 12, 31))
        );
        assert_eq!(
            DatePreset::PreviousMonth.resolve(day(2023, 3, 31)),
            range(day(2023, 2, 1), day(2023, 2, 28))
        );
    }

    #[test]
    fn test_previous_quarter() {
        // First quarter rolls back into the previous year
        assert_eq!(
            DatePreset::PreviousQuarter.resolve(day(2024, 2, 15)),
            range(day(2023, 10, 1), day(2023, 12, 31))
        );
        assert_eq!(
            DatePreset::PreviousQuarter.resolve(day(2024, 5, 20)),
            range(day(2024, 1, 1), day(2024, 3, 31))
        );
        assert_eq!(
            DatePreset::PreviousQuarter.resolve(day(2024, 9, 30)),
            range(day(2024, 4, 1), day(2024, 6, 30))
        );
        assert_eq!(
            DatePreset::PreviousQuarter.resolve(day(2024, 10, 1)),
            range(day(2024, 7, 1), day(2024, 9, 30))
        );
    }

    #[test]
    fn test_previous_year() {
        assert_eq!(
            DatePreset::PreviousYear.resolve(day(2024, 6, 1)),
            range(day(2023, 1, 1), day(2023, 12, 31))
        );
        assert_eq!(
            DatePreset::PreviousYear.resolve(day(2025, 1, 1)),
            range(day(2024, 1, 1), day(2024, 12, 31))
        );
    }

    #[test]
    fn test_previous_periods_stay_out_of_current_period() {
        for today in sample_days() {
            let month = DatePreset::PreviousMonth.resolve(today);
            assert!(
                month.end() < day(today.year(), today.month(), 1),
                "previous_month on {today}"
            );
            assert_eq!(month.start().day(), 1);

            let quarter = DatePreset::PreviousQuarter.resolve(today);
            let quarter_start = day(today.year(), today.month0() / 3 * 3 + 1, 1);
            assert!(quarter.end() < quarter_start, "previous_quarter on {today}");
            assert_eq!(quarter.end() + Days::new(1), quarter_start);

            let year = DatePreset::PreviousYear.resolve(today);
            assert_eq!(year.end().year(), today.year() - 1);
        }
    }

    #[test]
    fn test_all_time_starts_at_epoch() {
        let today = day(2024, 3, 12);
        let all = DatePreset::AllTime.resolve(today);
        assert_eq!(all.start(), day(1970, 1, 1));
        assert_eq!(all.start(), earliest_date());
        assert_eq!(all.end(), today);
    }

    #[test]
    fn test_resolve_preset_by_name() {
        let today = day(2024, 3, 12);
        assert_eq!(
            resolve_preset("last_12_month", today),
            DatePreset::Last12Months.resolve(today)
        );
        assert_eq!(
            resolve_preset("previous_quarter", today),
            DatePreset::PreviousQuarter.resolve(today)
        );
    }

    #[test]
    fn test_unknown_preset_collapses_to_today() {
        let today = day(2024, 3, 12);
        assert_eq!(resolve_preset("next_week", today), DateRange::single_day(today));
        assert_eq!(resolve_preset("", today), DateRange::single_day(today));
        assert!(matches!(
            "next_week".parse::<DatePreset>(),
            Err(AppError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_preset_identifiers_round_trip() {
        for preset in DatePreset::ALL {
            assert_eq!(preset.as_str().parse::<DatePreset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_menu_groups_skip_shortcut_only_presets() {
        let listed: Vec<DatePreset> = DatePreset::MENU_GROUPS.iter().flat_map(|g| g.iter().copied()).collect();
        assert_eq!(listed.len(), 9);
        assert!(!listed.contains(&DatePreset::PreviousWeek));
        assert!(!listed.contains(&DatePreset::PreviousYear));
        assert_eq!(DatePreset::MENU_GROUPS[3], &[DatePreset::AllTime]);
    }

    // ===== DateRange Tests =====

    #[test]
    fn test_date_range_swaps_reversed_bounds() {
        let reversed = DateRange::new(day(2024, 3, 12), day(2024, 3, 5));
        assert_eq!(reversed.start(), day(2024, 3, 5));
        assert_eq!(reversed.end(), day(2024, 3, 12));
    }

    #[test]
    fn test_date_range_display() {
        let week = range(day(2024, 3, 5), day(2024, 3, 12));
        assert_eq!(week.display(), "05 Mar, 2024 - 12 Mar, 2024");
        assert_eq!(week.to_string(), week.display());
    }

    #[test]
    fn test_date_range_deserialization() {
        let json = r#"{"from": "2024-03-12 23:59:59", "to": "2024-03-05"}"#;
        let parsed: DateRange = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, range(day(2024, 3, 5), day(2024, 3, 12)));

        let bad = serde_json::from_str::<DateRange>(r#"{"from": "soon", "to": "2024-03-05"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_parse_host_datetime_forms() {
        let at = parse_host_datetime("2024-03-05 14:30:00").unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2024-03-05 14:30");

        let at = parse_host_datetime("2024-03-05T14:30:00.250").unwrap();
        assert_eq!(at.format("%H:%M:%S").to_string(), "14:30:00");

        let at = parse_host_datetime("2024-03-05 09:15").unwrap();
        assert_eq!(at.format("%H:%M").to_string(), "09:15");

        let at = parse_host_datetime(" 2024-03-05 ").unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-05 00:00:00");

        // Midday keeps the calendar day under any local offset
        let at = parse_host_datetime("2024-03-05T12:00:00Z").unwrap();
        assert_eq!(at.date(), day(2024, 3, 5));

        assert!(matches!(
            parse_host_datetime("05/03/2024"),
            Err(AppError::InvalidDate(_))
        ));
    }

    // ===== Host Event Tests =====

    #[test]
    fn test_set_date_payload() {
        let event = HostEvent::SetDate(range(day(2024, 3, 5), day(2024, 3, 12)));
        assert_eq!(event.name(), "set_date");
        assert_eq!(
            event.payload(),
            json!({"value": {"from": "2024-03-05 00:00:00", "to": "2024-03-12 23:59:59"}})
        );
    }

    #[test]
    fn test_set_date_payload_single_day() {
        let event = HostEvent::SetDate(DatePreset::Yesterday.resolve(day(2024, 1, 1)));
        assert_eq!(
            event.payload(),
            json!({"value": {"from": "2023-12-31 00:00:00", "to": "2023-12-31 23:59:59"}})
        );
    }

    #[test]
    fn test_set_interval_payload() {
        let event = HostEvent::SetInterval(Interval::Month);
        assert_eq!(event.name(), "set_interval");
        assert_eq!(event.payload(), json!({"value": {"interval": "month"}}));
    }

    // ===== Hotkey Tests =====

    #[test]
    fn test_hotkey_parse() {
        let plain = Hotkey::parse("t").unwrap();
        assert!(plain.is_plain());
        assert_eq!(plain.key, "t");

        let chord = Hotkey::parse("Ctrl+M").unwrap();
        assert!(chord.ctrl && !chord.alt && !chord.shift && !chord.meta);
        assert_eq!(chord.key, "m");
        assert_eq!(chord.to_string(), "ctrl+m");

        assert_eq!(Hotkey::parse("minus").unwrap().key, "-");
        assert_eq!(Hotkey::parse("equal").unwrap().key, "=");
        assert_eq!(Hotkey::parse("=").unwrap().key, "=");
    }

    #[test]
    fn test_hotkey_parse_rejects_bad_input() {
        assert!(matches!(Hotkey::parse(""), Err(AppError::InvalidHotkey(_))));
        assert!(matches!(Hotkey::parse("ctrl+"), Err(AppError::InvalidHotkey(_))));
        assert!(matches!(Hotkey::parse("hyper+t"), Err(AppError::InvalidHotkey(_))));
    }

    #[test]
    fn test_hotkey_from_event_parts() {
        let pressed = Hotkey::from_event_parts("T", true, false, false, false);
        assert_eq!(pressed, Hotkey::parse("ctrl+t").unwrap());
    }

    #[test]
    fn test_preset_hotkeys() {
        let lookup = |chord: &str| DatePreset::from_hotkey(&Hotkey::parse(chord).unwrap());

        assert_eq!(lookup("t"), Some(DatePreset::Today));
        assert_eq!(lookup("ctrl+t"), Some(DatePreset::Yesterday));
        assert_eq!(lookup("w"), Some(DatePreset::LastWeek));
        assert_eq!(lookup("m"), Some(DatePreset::Last30Days));
        assert_eq!(lookup("q"), Some(DatePreset::Last90Days));
        assert_eq!(lookup("y"), Some(DatePreset::Last12Months));
        assert_eq!(lookup("ctrl+w"), Some(DatePreset::PreviousWeek));
        assert_eq!(lookup("ctrl+m"), Some(DatePreset::PreviousMonth));
        assert_eq!(lookup("ctrl+q"), Some(DatePreset::PreviousQuarter));
        assert_eq!(lookup("ctrl+y"), Some(DatePreset::PreviousYear));
        assert_eq!(lookup("a"), Some(DatePreset::AllTime));
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup("alt+t"), None);
    }

    // ===== Interval Tests =====

    #[test]
    fn test_interval_parse() {
        assert_eq!("hour".parse::<Interval>().unwrap(), Interval::Hour);
        assert_eq!(" Month ".parse::<Interval>().unwrap(), Interval::Month);
        assert_eq!(Interval::default(), Interval::Day);
        assert!(matches!(
            "week".parse::<Interval>(),
            Err(AppError::UnknownInterval(_))
        ));
    }

    #[test]
    fn test_interval_labels() {
        let at = parse_host_datetime("2024-03-05 15:00:00").unwrap();

        assert_eq!(Interval::Hour.tick_label(&at), "Mar 5");
        assert_eq!(Interval::Day.tick_label(&at), "Mar 5");
        assert_eq!(Interval::Month.tick_label(&at), "Mar 2024");

        assert_eq!(Interval::Hour.tooltip_label(&at), "Mar 5, 2024, 3 PM");
        assert_eq!(Interval::Day.tooltip_label(&at), "Mar 5, 2024");
        assert_eq!(Interval::Month.tooltip_label(&at), "Mar 2024");

        assert_eq!(Interval::Hour.label(), "Per hour");
    }

    #[test]
    fn test_interval_format_bucket_passes_through_garbage() {
        assert_eq!(Interval::Day.format_bucket("2024-03-05"), "Mar 5");
        assert_eq!(Interval::Month.format_bucket("2024-03-05"), "Mar 2024");
        assert_eq!(Interval::Day.format_bucket("week 12"), "week 12");

        assert_eq!(
            Interval::Hour.format_bucket_tooltip("2024-03-05 13:00:00"),
            "Mar 5, 2024, 1 PM"
        );
        assert_eq!(Interval::Hour.format_bucket_tooltip("week 12"), "week 12");
    }

    #[test]
    fn test_interval_serde() {
        assert_eq!(serde_json::to_string(&Interval::Hour).unwrap(), "\"hour\"");
        let parsed: Interval = serde_json::from_str("\"month\"").unwrap();
        assert_eq!(parsed, Interval::Month);
    }

    // ===== Shared Store Tests =====

    #[test]
    fn test_shared_store_notifies_on_every_set() {
        let store = SharedStore::new(Interval::Day);
        let calls = Rc::new(Cell::new(0));
        let _subscription = {
            let calls = calls.clone();
            store.subscribe(Callback::from(move |_: Interval| calls.set(calls.get() + 1)))
        };

        store.set(Interval::Day);
        store.set(Interval::Day);
        assert_eq!(calls.get(), 2);
        assert_eq!(store.get(), Interval::Day);
    }

    #[test]
    fn test_interval_change_reports_every_selection() {
        let store = SharedStore::new(Interval::Day);
        let pushed = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let store = store.clone();
            let pushed = pushed.clone();
            interval_change(
                Callback::from(move |value| store.set(value)),
                Callback::from(move |event: HostEvent| pushed.borrow_mut().push(event)),
            )
        };

        on_change.emit(Interval::Hour);
        on_change.emit(Interval::Hour);

        assert_eq!(store.get(), Interval::Hour);
        assert_eq!(
            *pushed.borrow(),
            vec![
                HostEvent::SetInterval(Interval::Hour),
                HostEvent::SetInterval(Interval::Hour)
            ]
        );
    }

    #[test]
    fn test_shared_store_last_write_wins() {
        let store = SharedStore::new(Interval::Day);
        let seen = Rc::new(Cell::new(Interval::Day));
        let _subscription = {
            let seen = seen.clone();
            store.subscribe(Callback::from(move |value: Interval| seen.set(value)))
        };

        store.set(Interval::Hour);
        store.set(Interval::Month);
        assert_eq!(store.get(), Interval::Month);
        assert_eq!(seen.get(), Interval::Month);
    }

    #[test]
    fn test_shared_store_unsubscribes_on_drop() {
        let store = SharedStore::new(Interval::Day);
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = calls.clone();
            store.subscribe(Callback::from(move |_: Interval| calls.set(calls.get() + 1)))
        };
        let other = store.subscribe(Callback::from(|_: Interval| ()));
        assert_eq!(store.subscriber_count(), 2);

        drop(subscription);
        assert_eq!(store.subscriber_count(), 1);

        store.set(Interval::Hour);
        assert_eq!(calls.get(), 0);

        drop(other);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_shared_store_clones_share_state() {
        let store = SharedStore::new(Interval::Day);
        let sibling = store.clone();
        sibling.set(Interval::Hour);
        assert_eq!(store.get(), Interval::Hour);
    }

    // ===== Traffic Model Tests =====

    #[test]
    fn test_traffic_deserialization_aliases() {
        let visit: VisitPoint =
            serde_json::from_str(r#"{"date": "2024-03-05", "total_visits": 10, "unique_visits": 4}"#)
                .unwrap();
        assert_eq!(visit.total, 10);
        assert_eq!(visit.unique, 4);

        let request: RequestPoint =
            serde_json::from_str(r#"{"date": "2024-03-05", "requests": 7}"#).unwrap();
        assert_eq!(request.hits, 7);

        let status: StatusPoint =
            serde_json::from_str(r#"{"date": "2024-03-05", "oks": 1, "erorrs": 3}"#).unwrap();
        assert_eq!(status.errors, 3);
        assert_eq!(status.redirs, 0);
        assert_eq!(status.fails, 0);
    }

    #[test]
    fn test_series_tables() {
        let visits = vec![VisitPoint {
            date: "2024-03-05".to_string(),
            total: 12,
            unique: 7,
        }];
        let table = visits_table(&visits, Interval::Month);
        assert_eq!(table.labels, vec!["Mar 2024"]);
        assert_eq!(table.ticks, vec!["Mar 2024"]);
        assert_eq!(table.column("total"), Some(&[12.0][..]));
        assert_eq!(table.column("unique"), Some(&[7.0][..]));
        assert_eq!(table.column("missing"), None);

        let requests = requests_table(&[], Interval::Day);
        assert!(requests.labels.is_empty());
        assert!(requests.ticks.is_empty());

        let statuses = status_table(&sample_statuses(), Interval::Day);
        assert_eq!(statuses.labels, vec!["Mar 5, 2024", "Mar 6, 2024"]);
        assert_eq!(statuses.ticks, vec!["Mar 5", "Mar 6"]);
        assert_eq!(statuses.column("fails"), Some(&[1.0, 0.0][..]));
    }

    #[test]
    fn test_hourly_buckets_stay_distinct() {
        let visits: Vec<VisitPoint> = ["01:00:00", "02:00:00", "03:00:00"]
            .into_iter()
            .map(|time| VisitPoint {
                date: format!("2024-03-05 {time}"),
                total: 10,
                unique: 5,
            })
            .collect();
        let table = visits_table(&visits, Interval::Hour);

        assert_eq!(
            table.labels,
            vec!["Mar 5, 2024, 1 AM", "Mar 5, 2024, 2 AM", "Mar 5, 2024, 3 AM"]
        );
        assert_eq!(table.ticks, vec!["Mar 5", "Mar 5", "Mar 5"]);

        let option = build_visits_chart(&table, &ChartPalette::fallback(false)).to_string();
        for label in &table.labels {
            assert!(option.contains(label.as_str()), "chart lost bucket {label}");
        }
    }

    #[test]
    fn test_ranked_rows_keep_first_row_on_top() {
        let (labels, values) = ranked_rows(vec![("google.com", 30.0), ("github.com", 20.0)].into_iter());
        assert_eq!(labels, vec!["github.com", "google.com"]);
        assert_eq!(values, vec![20.0, 30.0]);
    }

    #[test]
    fn test_total_visits() {
        let devices = vec![
            DeviceVisits {
                device: "desktop".to_string(),
                visits: 700,
            },
            DeviceVisits {
                device: "mobile".to_string(),
                visits: 300,
            },
        ];
        assert_eq!(total_visits(&devices), 1000);
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_n_formatter() {
        assert_eq!(n_formatter(0.0, 2), "0");
        assert_eq!(n_formatter(0.4, 2), "0");
        assert_eq!(n_formatter(12.0, 2), "12");
        assert_eq!(n_formatter(1000.0, 2), "1k");
        assert_eq!(n_formatter(1234.0, 2), "1.23k");
        assert_eq!(n_formatter(1500.0, 1), "1.5k");
        assert_eq!(n_formatter(2_500_000.0, 2), "2.5M");
        assert_eq!(n_formatter(3e9, 0), "3G");
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(1500.0, "time"), "1.50s");
        assert_eq!(format_stat(90_000.0, "time"), "1.50m");
        assert_eq!(format_stat(1234.0, "visits"), "1.23k");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Top sources"), "top-sources");
        assert_eq!(slugify("  Slowest  paths! "), "slowest-paths");
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color("12 76% 61%").as_deref(), Some("hsl(12, 76%, 61%)"));
        assert_eq!(css_color("#2662d9").as_deref(), Some("#2662d9"));
        assert_eq!(
            css_color("hsl(220 70% 50%)").as_deref(),
            Some("hsl(220 70% 50%)")
        );
        assert_eq!(css_color("red"), None);
        assert_eq!(css_color("   "), None);
    }

    #[test]
    fn test_palette_wraps_chart_slots() {
        let palette = ChartPalette::fallback(false);
        assert_eq!(palette.chart(1), palette.series[0]);
        assert_eq!(palette.chart(6), palette.series[0]);
        assert_ne!(
            ChartPalette::fallback(true).series,
            ChartPalette::fallback(false).series
        );
    }

    // ===== Color Theme Tests =====

    #[test]
    fn test_color_theme_lookup() {
        assert_eq!(COLOR_THEMES.len(), 12);
        assert_eq!(ColorTheme::default_theme().name, "blue");
        assert_eq!(ColorTheme::find("rose").unwrap().css_class, "theme-rose");
        assert!(ColorTheme::find("pink").is_none());
        assert!(matches!(
            ColorTheme::parse("pink"),
            Err(AppError::UnknownTheme(_))
        ));
        assert_eq!(ColorTheme::all_css_classes().count(), 12);
    }

    #[test]
    fn test_color_theme_from_stored_value() {
        assert_eq!(ColorTheme::from_stored("zinc").map(|t| t.name), Some("zinc"));
        assert_eq!(ColorTheme::from_stored(" violet\n").map(|t| t.name), Some("violet"));
        // Value written JSON-quoted by older builds
        assert_eq!(ColorTheme::from_stored("\"rose\"").map(|t| t.name), Some("rose"));
        assert!(ColorTheme::from_stored("pink").is_none());
        assert!(ColorTheme::from_stored("").is_none());
    }

    #[test]
    fn test_color_theme_shortcuts() {
        assert_eq!(ColorTheme::find("zinc").unwrap().shortcut(), "1");
        assert_eq!(ColorTheme::find("blue").unwrap().shortcut(), "0");
        assert_eq!(ColorTheme::find("yellow").unwrap().shortcut(), "-");
        assert_eq!(ColorTheme::find("violet").unwrap().shortcut(), "=");

        let lookup = |chord: &str| ColorTheme::from_hotkey(&Hotkey::parse(chord).unwrap()).map(|t| t.name);
        assert_eq!(lookup("1"), Some("zinc"));
        assert_eq!(lookup("minus"), Some("yellow"));
        assert_eq!(lookup("="), Some("violet"));
        assert_eq!(lookup("ctrl+1"), None);
        assert_eq!(lookup("t"), None);
    }

    #[test]
    fn test_theme_mode() {
        assert_eq!(ThemeMode::System.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::System.resolve(false), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.resolve(true), ThemeMode::Light);

        assert_eq!(ThemeMode::System.toggled(false), ThemeMode::Dark);
        assert_eq!(ThemeMode::System.toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled(false), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(true), ThemeMode::Dark);
    }

    // ===== Chart Tests =====

    #[test]
    fn test_visits_chart_series() {
        let points = vec![VisitPoint {
            date: "2024-03-05".to_string(),
            total: 40,
            unique: 25,
        }];
        let chart = build_visits_chart(&visits_table(&points, Interval::Day), &ChartPalette::fallback(false));
        let option = chart.to_string();
        assert!(option.contains("Total"));
        assert!(option.contains("Unique"));
        assert!(option.contains("Mar 5"));
    }

    #[test]
    fn test_requests_and_status_chart_series() {
        let palette = ChartPalette::fallback(true);
        let requests = vec![RequestPoint {
            date: "2024-03-05".to_string(),
            hits: 99,
        }];
        let option = build_requests_chart(&requests_table(&requests, Interval::Day), &palette).to_string();
        assert!(option.contains("Total requests"));

        let option = build_status_chart(&status_table(&sample_statuses(), Interval::Day), &palette).to_string();
        assert_eq!(STATUS_DESCRIPTION, "Showing HTTP statuses for the");
        for name in ["200s", "300s", "400s", "500s"] {
            assert!(option.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_ranked_charts_build_with_empty_data() {
        let palette = ChartPalette::fallback(false);
        let sources: Vec<SourceVisits> = vec![];
        let paths: Vec<PathDuration> = vec![];
        assert!(build_popular_chart(&sources, &palette).to_string().contains("Visits"));
        assert!(build_duration_chart(&paths, &palette).to_string().contains("Duration"));
    }

    #[test]
    fn test_device_chart() {
        assert_eq!(device_color_index("desktop", 2), 1);
        assert_eq!(device_color_index("tablet", 0), 2);
        assert_eq!(device_color_index("mobile", 1), 3);
        assert_eq!(device_color_index("console", 0), 4);
        assert_eq!(device_color_index("tv", 1), 5);

        let devices = vec![
            DeviceVisits {
                device: "desktop".to_string(),
                visits: 1200,
            },
            DeviceVisits {
                device: "mobile".to_string(),
                visits: 300,
            },
        ];
        let option = build_device_chart(&devices, &ChartPalette::fallback(false)).to_string();
        assert!(option.contains("1.5k"));
        assert!(option.contains("desktop"));
    }

    #[test]
    fn test_sparkline_bars() {
        assert!(sparkline_bars(&[], 72.0, 32.0, 2.0).is_empty());

        let bars = sparkline_bars(&[1, 2, 4], 10.0, 8.0, 1.0);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[2].height, 8.0);
        assert_eq!(bars[2].y, 0.0);
        assert_eq!(bars[1].height, 4.0);
        assert_eq!(bars[0].y, 6.0);
        assert!((bars[2].x + bars[2].width - 10.0).abs() < 1e-9);

        // Zero buckets keep a visible stub
        let flat = sparkline_bars(&[0, 0], 10.0, 8.0, 1.0);
        assert!(flat.iter().all(|bar| bar.height == 1.0 && bar.y == 7.0));
    }

    // ===== Host Mount Tests =====

    #[test]
    fn test_widget_kind_names() {
        assert_eq!("VisitsChart".parse::<WidgetKind>().unwrap(), WidgetKind::VisitsChart);
        assert_eq!("ResChart".parse::<WidgetKind>().unwrap(), WidgetKind::DurationChart);
        assert!(matches!(
            "PieChart".parse::<WidgetKind>(),
            Err(AppError::UnknownWidget(_))
        ));
    }

    #[test]
    fn test_widget_mount_parse() {
        let props = r#"{
            "chartData": [{"path": "/api/search", "duration": 412.5}],
            "chartTitle": "Slowest paths",
            "dateRange": {"from": "2024-03-05", "to": "2024-03-12"}
        }"#;
        let mount = WidgetMount::parse("ResChart", props).unwrap();
        assert_eq!(mount.kind(), WidgetKind::DurationChart);
        let WidgetMount::DurationChart(parsed) = mount else {
            panic!("expected a duration chart");
        };
        assert_eq!(parsed.chart_title, "Slowest paths");
        assert_eq!(parsed.chart_data[0].duration, 412.5);
        assert_eq!(parsed.date_range, range(day(2024, 3, 5), day(2024, 3, 12)));
    }

    #[test]
    fn test_widget_mount_defaults_missing_chart_data() {
        let props = r#"{"dateRange": {"from": "2024-03-05", "to": "2024-03-12"}}"#;
        let WidgetMount::VisitsChart(parsed) = WidgetMount::parse("VisitsChart", props).unwrap() else {
            panic!("expected a visits chart");
        };
        assert!(parsed.chart_data.is_empty());
    }

    #[test]
    fn test_widget_mount_single_stat() {
        let props = r#"{
            "statData": 182.4,
            "statUnit": "time",
            "statTitle": "Avg. response",
            "chartData": [{"date": "2024-03-05", "hits": 3}],
            "dateRange": {"from": "2024-03-05", "to": "2024-03-05"}
        }"#;
        let WidgetMount::SingleStat(parsed) = WidgetMount::parse("SingleStat", props).unwrap() else {
            panic!("expected a single stat");
        };
        assert_eq!(parsed.stat_unit, "time");
        assert_eq!(parsed.chart_data.len(), 1);
    }

    #[test]
    fn test_widget_mount_errors() {
        assert!(matches!(
            WidgetMount::parse("PieChart", "{}"),
            Err(AppError::UnknownWidget(_))
        ));
        assert!(matches!(
            WidgetMount::parse("VisitsChart", "{not json"),
            Err(AppError::InvalidProps(_))
        ));
        assert!(matches!(
            WidgetMount::parse("DateRangePicker", "{}"),
            Err(AppError::InvalidProps(_))
        ));
        // Widgets without props ignore whatever the host passes
        assert_eq!(
            WidgetMount::parse("ThemeToggle", "").unwrap().kind(),
            WidgetKind::ThemeToggle
        );
    }
}
