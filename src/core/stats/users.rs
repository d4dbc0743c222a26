use super::{mode, value_counts};
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics. `None` means the dataset has no such column.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYears>,
}

pub fn user_stats(table: &TripTable) -> AppResult<UserStats> {
    let trips = table.trips();

    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));

    let genders = table
        .schema
        .has_gender
        .then(|| value_counts(trips.iter().filter_map(|t| t.gender.clone())));

    let birth_years = if table.schema.has_birth_year {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        let empty = || AppError::EmptyTable("birth year statistics");

        let earliest = years.iter().copied().min().ok_or_else(empty)?;
        let most_recent = years.iter().copied().max().ok_or_else(empty)?;
        let (most_common, _) = mode(years.iter().copied()).ok_or_else(empty)?;

        Some(BirthYears {
            earliest,
            most_recent,
            most_common,
        })
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}
