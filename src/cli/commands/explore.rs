use crate::config::Config;
use crate::core::Session;
use crate::data::DataLoader;
use crate::errors::AppResult;
use crate::ui::prompt::Console;
use crate::ui::report::ReportStyle;
use std::io;

/// Handle the default interactive explorer
pub fn handle(cfg: &Config) -> AppResult<()> {
    let loader = DataLoader::from_config(cfg);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let console = Console::new(stdin.lock(), stdout.lock());
    Session::new(console, &loader, ReportStyle::from_config(cfg)).run()
}
