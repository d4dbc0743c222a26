// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{Tone, render};
use crate::ui::prompt::Console;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

const OVERWRITE_QUESTION: &str = "Overwrite? [y/N]: ";

/// Decide whether the export may write `path`.
///
/// A new file, or `force`, goes ahead without asking. Otherwise only
/// `y`/`yes` on the console allows the overwrite; closed input keeps the file.
pub(crate) fn confirm_overwrite<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    console.say(render(
        Tone::Warning,
        format!("The file '{}' already exists.", path.display()),
    ))?;

    match console.ask(OVERWRITE_QUESTION)?.as_deref() {
        Some("y" | "yes") => {
            debug!(path = %path.display(), "overwrite confirmed");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "export cancelled: '{}' not overwritten",
            path.display()
        ))),
    }
}
