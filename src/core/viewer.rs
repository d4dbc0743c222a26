//! Paginated raw data viewer.

use crate::errors::AppResult;
use crate::models::{Trip, TripTable};
use crate::ui::prompt::Console;
use crate::utils::formatting::format_seconds;
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};

pub const PAGE_SIZE: usize = 5;

const FIRST_PAGE_QUESTION: &str =
    "\nWould you like to see the first 5 lines of raw data? (Enter yes or no) ";
const NEXT_PAGE_QUESTION: &str =
    "\nWould you like to see 5 more lines of raw data? (Enter yes or no) ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerOutcome {
    /// Every row was shown (or there was nothing to show).
    Exhausted,
    /// The user answered "no".
    Declined,
}

pub struct RawDataViewer<'a> {
    table: &'a TripTable,
    cursor: usize,
}

impl<'a> RawDataViewer<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self { table, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.table.len()
    }

    /// Next page of at most [`PAGE_SIZE`] trips; advances the cursor.
    pub fn next_page(&mut self) -> &'a [Trip] {
        let trips = self.table.trips();
        let start = self.cursor.min(trips.len());
        let end = (start + PAGE_SIZE).min(trips.len());
        self.cursor += PAGE_SIZE;
        &trips[start..end]
    }

    /// Ask for pages until the data runs out or the user says "no".
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> AppResult<ViewerOutcome> {
        while !self.is_exhausted() {
            let question = if self.cursor == 0 {
                FIRST_PAGE_QUESTION
            } else {
                NEXT_PAGE_QUESTION
            };

            match console.ask_required(question)?.as_str() {
                "yes" => {
                    let page = self.next_page();
                    console.say(render_page(self.table, page).trim_end())?;
                }
                "no" => {
                    console.say("Awesome, you've reached the end of the program!")?;
                    return Ok(ViewerOutcome::Declined);
                }
                _ => console.say("Sorry, that input wasn't valid (Please enter yes or no)")?,
            }
        }

        console.say("You've reached the end of the raw data.")?;
        Ok(ViewerOutcome::Exhausted)
    }
}

/// Render trips with every column the table currently carries.
pub fn render_page(table: &TripTable, trips: &[Trip]) -> String {
    let schema = table.schema;

    let mut columns = vec![Column::right(""), Column::left("Start Time")];
    if schema.has_end_time {
        columns.push(Column::left("End Time"));
    }
    columns.push(Column::right("Trip Duration"));
    columns.push(Column::left("Start Station"));
    columns.push(Column::left("End Station"));
    columns.push(Column::left("User Type"));
    if schema.has_gender {
        columns.push(Column::left("Gender"));
    }
    if schema.has_birth_year {
        columns.push(Column::right("Birth Year"));
    }
    columns.push(Column::left("month"));
    columns.push(Column::left("day_of_week"));
    columns.push(Column::right("hour"));
    if table.has_route() {
        columns.push(Column::left("Start-End Combo"));
    }

    let mut out = Table::new(columns);
    for t in trips {
        let mut row = vec![t.index.to_string(), t.start_time_str()];
        if schema.has_end_time {
            row.push(t.end_time.clone().unwrap_or_default());
        }
        row.push(format_seconds(t.duration));
        row.push(t.start_station.clone().unwrap_or_default());
        row.push(t.end_station.clone().unwrap_or_default());
        row.push(t.user_type.clone().unwrap_or_default());
        if schema.has_gender {
            row.push(t.gender.clone().unwrap_or_default());
        }
        if schema.has_birth_year {
            row.push(t.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        row.push(t.month_name().to_string());
        row.push(t.day_name().to_string());
        row.push(t.hour.to_string());
        if table.has_route() {
            row.push(t.route.clone().unwrap_or_default());
        }
        out.add_row(row);
    }

    out.render()
}
