// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{TripExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(trips: &[TripExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(trips)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", trips.len(), path);
    Ok(())
}

/// Export CSV (header row derived from the serde field names).
pub(crate) fn export_csv(trips: &[TripExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    // serialize() only emits the header alongside the first record
    if trips.is_empty() {
        wtr.write_record(TripExport::COLUMNS)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for item in trips {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", trips.len(), path);
    Ok(())
}
