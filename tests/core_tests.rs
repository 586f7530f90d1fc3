use chrono::NaiveDate;
use crewlog::chart::{ChartSpec, build_trend};
use crewlog::config::Config;
use crewlog::core::aggregate::daily_totals;
use crewlog::core::holiday::HolidayCalendar;
use crewlog::core::registry::{AddOutcome, WorkTypeRegistry};
use crewlog::core::store::ProjectLedger;
use crewlog::errors::AppError;
use crewlog::models::{LaborEvent, Shift};
use std::path::Path;

mod common;
use common::temp_out;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn ev(date: &str, vendor: &str, count: u32) -> LaborEvent {
    LaborEvent {
        date: d(date),
        vendor: vendor.to_string(),
        work_type: "鋼筋".to_string(),
        shift: Shift::Morning,
        count,
        remark: String::new(),
    }
}

/// Calendar seeded with the built-in holiday table.
fn default_calendar() -> HolidayCalendar {
    HolidayCalendar::new(Config::default().public_holidays)
}

#[test]
fn test_weekend_is_holiday() {
    let cal = default_calendar();

    // 2024-05-04 is a Saturday, 2024-05-05 a Sunday
    assert!(cal.is_holiday(d("2024-05-04")));
    assert!(cal.is_holiday(d("2024-05-05")));
    // 2024-05-03 is a Friday and not listed
    assert!(!cal.is_holiday(d("2024-05-03")));
}

#[test]
fn test_listed_holiday_on_weekday() {
    let cal = default_calendar();

    // Labor Day 2024 falls on a Wednesday
    assert!(cal.is_holiday(d("2024-05-01")));
    assert!(!cal.is_holiday(d("2024-04-30")));
}

#[test]
fn test_weekday_outside_table_is_working_day() {
    let cal = default_calendar();

    // 2026-05-01 is a Friday; the table only covers 2024 and early 2025
    assert!(!cal.is_holiday(d("2026-05-01")));
}

#[test]
fn test_holidays_in_range() {
    let cal = default_calendar();

    let found = cal.holidays_in_range(d("2024-04-29"), d("2024-05-05"));
    let expected: Vec<NaiveDate> =
        vec![d("2024-05-01"), d("2024-05-04"), d("2024-05-05")];
    assert_eq!(found.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_holidays_in_range_single_day() {
    let cal = default_calendar();

    // Saturday: in by weekday
    let sat = cal.holidays_in_range(d("2024-05-04"), d("2024-05-04"));
    assert_eq!(sat.into_iter().collect::<Vec<_>>(), vec![d("2024-05-04")]);

    // Listed Wednesday: in by table
    let listed = cal.holidays_in_range(d("2024-05-01"), d("2024-05-01"));
    assert_eq!(listed.into_iter().collect::<Vec<_>>(), vec![d("2024-05-01")]);

    // Plain Friday: out
    let fri = cal.holidays_in_range(d("2024-05-03"), d("2024-05-03"));
    assert!(fri.is_empty());
}

#[test]
fn test_holidays_in_range_inverted_is_empty() {
    let cal = default_calendar();

    let found = cal.holidays_in_range(d("2024-05-05"), d("2024-04-29"));
    assert!(found.is_empty());
}

#[test]
fn test_daily_totals_merges_and_sorts() {
    // Deliberately out of date order
    let events = vec![
        ev("2024-05-02", "B社", 3),
        ev("2024-05-01", "A社", 4),
        ev("2024-05-01", "C社", 6),
    ];

    let totals = daily_totals(&events);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].date, d("2024-05-01"));
    assert_eq!(totals[0].total, 10);
    assert_eq!(totals[1].date, d("2024-05-02"));
    assert_eq!(totals[1].total, 3);
}

#[test]
fn test_daily_totals_empty() {
    assert!(daily_totals(&[]).is_empty());
}

#[test]
fn test_daily_totals_sum_past_u32_max() {
    // Two events valid on their own whose one-day sum no longer fits in u32
    let events = vec![
        ev("2024-05-03", "A社", u32::MAX),
        ev("2024-05-03", "B社", 1),
    ];

    let totals = daily_totals(&events);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total, u64::from(u32::MAX) + 1);
}

#[test]
fn test_append_rejects_empty_vendor() {
    let mut ledger = ProjectLedger::initialize(3);

    let result = ledger.append_event("proj_1", ev("2024-05-03", "", 5));
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(ledger.get("proj_1").expect("slot exists").events().is_empty());
}

#[test]
fn test_append_rejects_zero_count() {
    let mut ledger = ProjectLedger::initialize(3);

    let result = ledger.append_event("proj_1", ev("2024-05-03", "A社", 0));
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(ledger.get("proj_1").expect("slot exists").events().is_empty());
}

#[test]
fn test_unknown_project_id() {
    let ledger = ProjectLedger::initialize(3);

    let result = ledger.get("proj_9");
    assert!(matches!(result, Err(AppError::ProjectNotFound(_))));
}

#[test]
fn test_display_label_placeholder() {
    let mut ledger = ProjectLedger::initialize(3);

    let before = ledger.get("proj_1").expect("slot exists").display_label();
    assert_eq!(before, "新專案 (proj_1)");

    ledger.rename("proj_1", "市政大樓新建工程").expect("rename");
    let after = ledger.get("proj_1").expect("slot exists").display_label();
    assert_eq!(after, "市政大樓新建工程");
}

#[test]
fn test_same_day_rows_keep_insertion_order() {
    let mut ledger = ProjectLedger::initialize(1);
    ledger
        .append_event("proj_1", ev("2024-05-03", "A社", 5))
        .expect("append");
    ledger
        .append_event("proj_1", ev("2024-05-03", "B社", 3))
        .expect("append");

    let sorted = ledger.sorted_events("proj_1").expect("slot exists");
    assert_eq!(sorted[0].vendor, "A社");
    assert_eq!(sorted[1].vendor, "B社");
}

#[test]
fn test_registry_add_outcomes() {
    let mut registry = WorkTypeRegistry::new(Config::default().work_types);
    assert_eq!(registry.list().len(), 6);

    // Duplicate of a seed entry changes nothing
    assert_eq!(registry.add("鋼筋"), AddOutcome::AlreadyExists);
    assert_eq!(registry.list().len(), 6);

    // A new label grows the list by exactly one, once
    assert_eq!(registry.add("油漆"), AddOutcome::Added);
    assert_eq!(registry.list().len(), 7);
    assert_eq!(registry.add("油漆"), AddOutcome::AlreadyExists);
    assert_eq!(registry.list().len(), 7);

    // The empty string is a no-op
    assert_eq!(registry.add(""), AddOutcome::Blank);
    assert_eq!(registry.list().len(), 7);

    // Seed order preserved, new label appended at the end
    let list = registry.list();
    assert_eq!(list.first().map(String::as_str), Some("鋼筋"));
    assert_eq!(list.last().map(String::as_str), Some("油漆"));
}

#[test]
fn test_default_config_seed() {
    let cfg = Config::default();

    assert_eq!(cfg.project_slots, 3);
    assert_eq!(cfg.work_types.len(), 6);
    assert_eq!(cfg.public_holidays.len(), 19);
    assert!(cfg.public_holidays.contains(&d("2024-10-10")));
}

#[test]
fn test_write_default_roundtrip() {
    let path = temp_out("core_cfg_roundtrip", "yml");

    Config::write_default(Path::new(&path)).expect("write defaults");
    let loaded = Config::load_from(Path::new(&path)).expect("load written config");

    assert_eq!(loaded.project_slots, 3);
    assert_eq!(loaded.work_types, Config::default().work_types);
    assert_eq!(loaded.public_holidays.len(), 19);
    assert!(loaded.public_holidays.contains(&d("2024-10-10")));
}

#[test]
fn test_chart_no_data() {
    let cal = default_calendar();

    let spec = build_trend(&[], "新專案 (proj_1)", &cal);
    match spec {
        ChartSpec::NoData { message } => assert!(message.contains("尚無資料")),
        ChartSpec::Ready { .. } => panic!("expected no-data spec"),
    }
}

#[test]
fn test_chart_band_coordinates() {
    let cal = default_calendar();

    // Single point on a Saturday: one band centered on that day
    let totals = daily_totals(&[ev("2024-05-04", "A社", 3)]);
    let spec = build_trend(&totals, "新專案 (proj_1)", &cal);

    match spec {
        ChartSpec::Ready { figure } => {
            assert_eq!(figure.layout.shapes.len(), 1);
            let band = &figure.layout.shapes[0];
            assert_eq!(band.x0, "2024-05-03 12:00:00");
            assert_eq!(band.x1, "2024-05-04 12:00:00");
            assert_eq!(band.kind, "rect");
            assert_eq!(band.yref, "paper");
        }
        ChartSpec::NoData { .. } => panic!("expected ready spec"),
    }
}

#[test]
fn test_chart_bands_cover_gap_days() {
    let cal = default_calendar();

    // Events on Friday and Monday; the weekend between them has no data
    // but still gets two bands
    let events = vec![ev("2024-05-03", "A社", 5), ev("2024-05-06", "B社", 2)];
    let spec = build_trend(&daily_totals(&events), "新專案 (proj_1)", &cal);

    match spec {
        ChartSpec::Ready { figure } => {
            assert_eq!(figure.data[0].x.len(), 2);
            assert_eq!(figure.layout.shapes.len(), 2);
        }
        ChartSpec::NoData { .. } => panic!("expected ready spec"),
    }
}

#[test]
fn test_chart_end_to_end() {
    let cal = default_calendar();
    let mut ledger = ProjectLedger::initialize(3);

    ledger
        .append_event("proj_1", ev("2024-05-03", "A社", 5))
        .expect("append");
    ledger
        .append_event("proj_1", ev("2024-05-04", "B社", 3))
        .expect("append");
    ledger.rename("proj_1", "市政大樓新建工程").expect("rename");

    let label = ledger.get("proj_1").expect("slot exists").display_label();
    let totals = daily_totals(&ledger.sorted_events("proj_1").expect("slot exists"));

    let spec = build_trend(&totals, &label, &cal);
    match spec {
        ChartSpec::Ready { figure } => {
            assert_eq!(figure.data.len(), 1);
            let trace = &figure.data[0];
            assert_eq!(trace.x, vec!["2024-05-03", "2024-05-04"]);
            assert_eq!(trace.y, vec![5, 3]);
            assert_eq!(trace.text, vec!["5", "3"]);
            assert_eq!(trace.mode, "lines+markers+text");

            // Only the Saturday is a holiday inside the plotted range
            assert_eq!(figure.layout.shapes.len(), 1);
            assert!(figure.layout.title.contains("市政大樓新建工程"));
            assert!(figure.layout.title.contains("每日施工人數趨勢"));
        }
        ChartSpec::NoData { .. } => panic!("expected ready spec"),
    }
}

#[test]
fn test_chart_spec_deterministic() {
    let cal = default_calendar();
    let events = vec![
        ev("2024-05-03", "A社", 5),
        ev("2024-05-04", "B社", 3),
        ev("2024-05-04", "C社", 2),
    ];
    let totals = daily_totals(&events);

    let first = serde_json::to_string(&build_trend(&totals, "X", &cal)).expect("serialize");
    let second = serde_json::to_string(&build_trend(&totals, "X", &cal)).expect("serialize");
    assert_eq!(first, second);
}
