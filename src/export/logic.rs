// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{EventRow, TotalRow};
use crate::export::notify_export_success;
use crate::models::{DailyTotal, LaborEvent};
use crate::ui::messages::info;

use serde::Serialize;
use std::fs;
use std::path::Path;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes raw event rows, one per recorded entry, in the order given.
    pub fn export_events(
        events: &[LaborEvent],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
        write_rows(&rows, format, path)
    }

    /// Writes one row per calendar date with the summed headcount.
    pub fn export_totals(
        totals: &[DailyTotal],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows: Vec<TotalRow> = totals.iter().map(TotalRow::from).collect();
        write_rows(&rows, format, path)
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => write_csv(rows, path),
        ExportFormat::Json => write_json(rows, path),
    }
}

/// CSV export. The header row comes from the serde renames on the row type.
fn write_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// JSON export, pretty-printed.
fn write_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}
