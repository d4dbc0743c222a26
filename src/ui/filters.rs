//! The filter prompt: city, month and day, each re-asked until valid.

use super::prompt::Console;
use crate::errors::AppResult;
use crate::models::{City, DayFilter, MonthFilter, Selection};
use crate::utils::title_case;
use std::io::{BufRead, Write};
use tracing::debug;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

fn choice_list(choices: &[&str]) -> String {
    choices
        .iter()
        .map(|c| title_case(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ask `question` until `parse` accepts the answer.
fn choose<R, W, T>(
    console: &mut Console<R, W>,
    question: &str,
    rejection: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> AppResult<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask_required(question)?;
        match parse(&answer) {
            Some(value) => {
                console.say(format!("Perfect! Let's analyze: {}", title_case(&answer)))?;
                return Ok(value);
            }
            None => {
                debug!(answer = %answer, "rejected filter input");
                console.say(rejection)?;
            }
        }
    }
}

/// Run the three prompts and return the confirmed selection.
pub fn prompt_selection<R, W>(console: &mut Console<R, W>, separator: &str) -> AppResult<Selection>
where
    R: BufRead,
    W: Write,
{
    console.say(GREETING)?;

    let cities: Vec<&str> = City::ALL.iter().map(|c| c.name()).collect();
    let city = choose(
        console,
        &format!(
            "Which city should we analyze? (Pick one of the following: {}) : ",
            choice_list(&cities)
        ),
        "Sorry we don't have data on that city, please select one of the cities listed in the previous prompt.",
        City::from_input,
    )?;

    let month = choose(
        console,
        &format!(
            "Which month should we analyze? (Pick one of the following: {}) : ",
            choice_list(&MonthFilter::choices())
        ),
        "Sorry we don't have data on that month, please select one of the months listed in the previous prompt.",
        MonthFilter::from_input,
    )?;

    let day = choose(
        console,
        &format!(
            "Which day should we analyze? (Pick one of the following: {}) : ",
            choice_list(&DayFilter::choices())
        ),
        "Sorry, we don't have data to support that entry. Please select one of the options listed.",
        DayFilter::from_input,
    )?;

    console.say(separator)?;
    Ok(Selection::new(city, month, day))
}
