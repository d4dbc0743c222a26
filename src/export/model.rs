// src/export/model.rs

use crate::models::Trip;
use serde::Serialize;

/// Flat export row: source columns plus the derived ones.
#[derive(Serialize, Clone, Debug)]
pub struct TripExport {
    pub index: usize,
    pub start_time: String,
    pub end_time: Option<String>,
    pub trip_duration: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: &'static str,
    pub day_of_week: &'static str,
    pub hour: u32,
}

impl TripExport {
    /// Field names in serialization order, used as the CSV header.
    pub const COLUMNS: [&'static str; 12] = [
        "index",
        "start_time",
        "end_time",
        "trip_duration",
        "start_station",
        "end_station",
        "user_type",
        "gender",
        "birth_year",
        "month",
        "day_of_week",
        "hour",
    ];
}

impl From<&Trip> for TripExport {
    fn from(t: &Trip) -> Self {
        Self {
            index: t.index,
            start_time: t.start_time_str(),
            end_time: t.end_time.clone(),
            trip_duration: t.duration,
            start_station: t.start_station.clone(),
            end_station: t.end_station.clone(),
            user_type: t.user_type.clone(),
            gender: t.gender.clone(),
            birth_year: t.birth_year,
            month: t.month_name(),
            day_of_week: t.day_name(),
            hour: t.hour,
        }
    }
}
