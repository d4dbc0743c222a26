// src/export/logic.rs

use crate::data::DataLoader;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::confirm_overwrite;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TripExport;
use crate::models::Selection;
use crate::ui::messages::{Tone, render};
use crate::ui::prompt::Console;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// High-level export of a filtered trip table.
pub struct ExportLogic;

impl ExportLogic {
    /// Load `selection` and write the matching trips to `file`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is only replaced with `force` or after confirmation
    ///   on `console`
    /// - an empty selection still yields a valid file (CSV header / `[]`)
    pub fn export<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        loader: &DataLoader,
        selection: &Selection,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        confirm_overwrite(console, path, force)?;

        let table = loader.load(selection)?;
        if table.is_empty() {
            console.say(render(
                Tone::Warning,
                format!("No trips match {selection}; the file will hold no rows."),
            ))?;
        }

        let rows: Vec<TripExport> = table.trips().iter().map(TripExport::from).collect();
        info!(format = format.as_str(), rows = rows.len(), path = %path.display(), "exporting trips");

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
