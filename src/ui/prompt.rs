//! Line-oriented terminal I/O for the interactive session.

use crate::errors::{AppError, AppResult};
use crate::models::normalize;
use std::fmt;
use std::io::{BufRead, Write};

/// A question/answer channel over any reader and writer.
///
/// The session runs on locked stdin/stdout; tests drive it with in-memory
/// buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used by the reporters and the raw data viewer.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say<T: fmt::Display>(&mut self, msg: T) -> AppResult<()> {
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    /// Print `question`, read one line and return it normalized.
    /// `None` when the input is exhausted.
    pub fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(normalize(&line)))
    }

    /// Like [`ask`](Self::ask), but a closed input is an error.
    pub fn ask_required(&mut self, question: &str) -> AppResult<String> {
        self.ask(question)?.ok_or(AppError::InputClosed)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
