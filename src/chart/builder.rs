use crate::chart::spec::{Axis, ChartSpec, Figure, Layout, Shape, Trace};
use crate::core::holiday::HolidayCalendar;
use crate::models::DailyTotal;
use chrono::{Duration, NaiveTime};

const BAND_FILL: &str = "LightSalmon";
const BAND_OPACITY: f64 = 0.35;

pub const NO_DATA_MESSAGE: &str = "尚無資料，請先新增施工紀錄";

/// Builds the daily-headcount trend spec for one project.
///
/// `series` must already be aggregated and date-sorted, as produced by
/// `daily_totals`. Every holiday between the first and last plotted date
/// gets a shaded band, including days without any recorded event.
pub fn build_trend(series: &[DailyTotal], label: &str, calendar: &HolidayCalendar) -> ChartSpec {
    if series.is_empty() {
        return ChartSpec::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        };
    }

    let first = series[0].date;
    let last = series[series.len() - 1].date;

    let trace = Trace {
        name: "每日人數".to_string(),
        mode: "lines+markers+text".to_string(),
        x: series
            .iter()
            .map(|p| p.date.format("%Y-%m-%d").to_string())
            .collect(),
        y: series.iter().map(|p| p.total).collect(),
        text: series.iter().map(|p| p.total.to_string()).collect(),
        textposition: "top center".to_string(),
    };

    let shapes = calendar
        .holidays_in_range(first, last)
        .into_iter()
        .map(|day| {
            // Band centered on the holiday: midnight minus and plus 12 hours.
            let midnight = day.and_time(NaiveTime::MIN);
            Shape {
                kind: "rect".to_string(),
                xref: "x".to_string(),
                yref: "paper".to_string(),
                x0: (midnight - Duration::hours(12))
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                x1: (midnight + Duration::hours(12))
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                y0: 0.0,
                y1: 1.0,
                fillcolor: BAND_FILL.to_string(),
                opacity: BAND_OPACITY,
                layer: "below".to_string(),
                line_width: 0,
            }
        })
        .collect();

    ChartSpec::Ready {
        figure: Figure {
            data: vec![trace],
            layout: Layout {
                title: format!("{} 每日施工人數趨勢", label),
                xaxis: Axis {
                    title: "日期".to_string(),
                    showgrid: true,
                },
                yaxis: Axis {
                    title: "人數".to_string(),
                    showgrid: true,
                },
                shapes,
            },
        },
    }
}
