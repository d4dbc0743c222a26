use super::mode;
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::utils::date::{month_name, weekday_name};
use chrono::Weekday;

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TimeStats {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

pub fn time_stats(table: &TripTable) -> AppResult<TimeStats> {
    let trips = table.trips();
    let empty = || AppError::EmptyTable("time statistics");

    let (month, _) = mode(trips.iter().map(|t| t.month)).ok_or_else(empty)?;
    let (weekday, _) = mode(trips.iter().map(|t| t.weekday)).ok_or_else(empty)?;
    let (hour, _) = mode(trips.iter().map(|t| t.hour)).ok_or_else(empty)?;

    Ok(TimeStats {
        month,
        weekday,
        hour,
    })
}
