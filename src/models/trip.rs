use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_name, parse_start_time, weekday_name};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// One raw CSV row, as found in the city datasets.
///
/// `End Time`, `Gender` and `Birth Year` are not shipped for every city;
/// whether the column exists is tracked by [`Schema`](super::Schema),
/// a `None` here only means the cell was blank.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station", default)]
    pub start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    pub end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A loaded trip with the fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub index: usize,              // ⇔ position in the source file (0-based)
    pub start_time: NaiveDateTime, // ⇔ "Start Time"
    pub end_time: Option<String>,  // ⇔ "End Time", kept verbatim
    pub duration: f64,             // ⇔ "Trip Duration" (seconds)
    pub start_station: Option<String>, // ⇔ "Start Station"
    pub end_station: Option<String>,   // ⇔ "End Station"
    pub user_type: Option<String>, // ⇔ "User Type"
    pub gender: Option<String>,    // ⇔ "Gender"
    pub birth_year: Option<i32>,   // ⇔ "Birth Year"

    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
    pub route: Option<String>, // filled by the station reporter
}

impl Trip {
    /// Parse the start time and derive month / weekday / hour.
    /// Fails if the start time cannot be parsed.
    pub fn from_record(index: usize, rec: TripRecord) -> AppResult<Self> {
        let start_time =
            parse_start_time(&rec.start_time).ok_or_else(|| AppError::InvalidStartTime {
                row: index,
                value: rec.start_time.clone(),
            })?;

        Ok(Self {
            index,
            start_time,
            end_time: rec.end_time,
            duration: rec.trip_duration,
            start_station: non_blank(rec.start_station),
            end_station: non_blank(rec.end_station),
            user_type: non_blank(rec.user_type),
            gender: non_blank(rec.gender),
            birth_year: rec.birth_year.map(|y| y as i32),
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            route: None,
        })
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
