use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::DataLoader;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::report::{ReportStyle, Reporter};
use std::io::{self, Write};

/// Handle the `stats` subcommand: one selection, no prompts, no viewer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { selection } = cmd {
        let selection = selection.selection();
        let loader = DataLoader::from_config(cfg);
        let mut table = loader.load(&selection)?;

        header(&selection);
        println!("Trips: {}", table.len());

        let style = ReportStyle::from_config(cfg);
        let mut out = io::stdout().lock();
        Reporter::new(&mut out, &style).run_all(&mut table)?;
        out.flush()?;
    }
    Ok(())
}
