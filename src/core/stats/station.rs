use super::mode;
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::utils::formatting::percent;

/// Separator between start and end station in a route label.
pub const ROUTE_SEPARATOR: &str = " → ";

/// A most-frequent value with its count and share of all trips.
#[derive(Debug, Clone, PartialEq)]
pub struct Popular {
    pub name: String,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start: Popular,
    pub end: Popular,
    pub route: Popular,
    pub total: usize,
}

fn popular<'a, I>(values: I, total: usize) -> AppResult<Popular>
where
    I: IntoIterator<Item = &'a str>,
{
    let (name, count) = mode(values).ok_or(AppError::EmptyTable("station statistics"))?;
    Ok(Popular {
        name: name.to_string(),
        count,
        percent: percent(count, total),
    })
}

/// Most popular start station, end station and route.
///
/// Blank stations are not counted, but shares are taken over all trips.
/// Adds the route column to `table` as a side effect.
pub fn station_stats(table: &mut TripTable) -> AppResult<StationStats> {
    let total = table.len();

    let start = popular(
        table.trips().iter().filter_map(|t| t.start_station.as_deref()),
        total,
    )?;
    let end = popular(
        table.trips().iter().filter_map(|t| t.end_station.as_deref()),
        total,
    )?;

    table.add_route_column();
    let route = popular(
        table.trips().iter().filter_map(|t| t.route.as_deref()),
        total,
    )?;

    Ok(StationStats {
        start,
        end,
        route,
        total,
    })
}
