//! The interactive session: prompt → load → report → browse → restart?

use crate::core::viewer::RawDataViewer;
use crate::data::DataLoader;
use crate::errors::AppResult;
use crate::ui::filters::prompt_selection;
use crate::ui::prompt::Console;
use crate::ui::report::{ReportStyle, Reporter};
use std::io::{BufRead, Write};
use tracing::info;

const RESTART_QUESTION: &str = "\nWould you like to restart? (Enter yes or no)\n";

pub struct Session<'a, R, W> {
    console: Console<R, W>,
    loader: &'a DataLoader,
    style: ReportStyle,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(console: Console<R, W>, loader: &'a DataLoader, style: ReportStyle) -> Self {
        Self {
            console,
            loader,
            style,
        }
    }

    /// Run one full iteration. Returns whether the user asked to restart.
    pub fn run_once(&mut self) -> AppResult<bool> {
        let selection = prompt_selection(&mut self.console, &self.style.separator)?;
        info!(%selection, "selection confirmed");

        let mut table = self.loader.load(&selection)?;

        Reporter::new(self.console.out(), &self.style).run_all(&mut table)?;
        RawDataViewer::new(&table).run(&mut self.console)?;

        let answer = self.console.ask(RESTART_QUESTION)?;
        Ok(answer.as_deref() == Some("yes"))
    }

    /// Iterate until the user declines to restart.
    pub fn run(&mut self) -> AppResult<()> {
        let mut iterations = 1;
        while self.run_once()? {
            iterations += 1;
            info!(iterations, "session restarted");
        }
        Ok(())
    }
}
