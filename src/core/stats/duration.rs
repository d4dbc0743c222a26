use crate::errors::{AppError, AppResult};
use crate::models::TripTable;

/// Total and mean travel time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
    pub trips: usize,
}

pub fn duration_stats(table: &TripTable) -> AppResult<DurationStats> {
    if table.is_empty() {
        return Err(AppError::EmptyTable("trip duration statistics"));
    }

    let total: f64 = table.trips().iter().map(|t| t.duration).sum();
    let trips = table.len();

    Ok(DurationStats {
        total,
        mean: total / trips as f64,
        trips,
    })
}
