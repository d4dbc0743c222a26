use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::DataLoader;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::prompt::Console;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        selection,
        format,
        file,
        force,
    } = cmd
    {
        let loader = DataLoader::from_config(cfg);
        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout());
        ExportLogic::export(
            &mut console,
            &loader,
            &selection.selection(),
            *format,
            file,
            *force,
        )?;
    }
    Ok(())
}
