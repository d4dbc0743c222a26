use crate::config::Config;
use crate::data::DataLoader;
use crate::errors::AppResult;
use crate::models::City;
use crate::utils::colors::{CYAN, RESET, YELLOW, color_for_presence, colorize_optional};
use std::fs;

/// Handle the `info` subcommand: where each city's dataset is expected.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let loader = DataLoader::from_config(cfg);

    println!();
    println!(
        "{}• Data directory:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        loader.data_dir().display(),
        RESET
    );

    for city in City::ALL {
        let path = loader.path_for(city);
        let meta = fs::metadata(&path).ok();
        let exists = meta.is_some();

        let size = meta
            .map(|m| format!("{:.2} MB", m.len() as f64 / (1024.0 * 1024.0)))
            .unwrap_or_else(|| "--".to_string());

        println!("{}• {}:{}", CYAN, city, RESET);
        println!("    file:    {}", path.display());
        println!(
            "    present: {}{}{}",
            color_for_presence(exists),
            if exists { "yes" } else { "no" },
            RESET
        );
        println!("    size:    {}", colorize_optional(&size));
    }

    println!();
    Ok(())
}
