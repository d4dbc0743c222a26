pub mod city;
pub mod filter;
pub mod table;
pub mod trip;

pub use city::City;
pub use filter::{DayFilter, MonthFilter, Selection};
pub use table::{Schema, TripTable};
pub use trip::{Trip, TripRecord};

/// Normalize free-text input: trim surrounding whitespace, lowercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
