use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the configuration directory and writes the default
/// configuration file (kept as is unless `force`).
pub fn handle(force: bool) -> AppResult<()> {
    let existed = Config::config_file().exists();
    let path = Config::init(force)?;

    if existed && !force {
        info(format!(
            "Configuration already present: {} (use --force to reset)",
            path.display()
        ));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
