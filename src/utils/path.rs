//! Path utilities: expand ~ and resolve dataset files against the data dir.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Join `file` onto `base` unless `file` is already absolute.
pub fn resolve_in(base: &Path, file: &str) -> PathBuf {
    let p = expand_tilde(file);
    if p.is_absolute() { p } else { base.join(p) }
}
