use super::{City, Selection, Trip};
use crate::core::stats::station::ROUTE_SEPARATOR;

/// Which optional columns the source dataset carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut schema = Schema::default();
        for h in headers {
            match h {
                "End Time" => schema.has_end_time = true,
                "Gender" => schema.has_gender = true,
                "Birth Year" => schema.has_birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// The in-memory trip table a session works on.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub schema: Schema,
    trips: Vec<Trip>,
    has_route: bool,
}

impl TripTable {
    pub fn new(city: City, schema: Schema, trips: Vec<Trip>) -> Self {
        Self {
            city,
            schema,
            trips,
            has_route: false,
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only the trips whose derived month / day match `selection`.
    /// Source order is preserved.
    pub fn filter(mut self, selection: &Selection) -> Self {
        self.trips.retain(|t| selection.matches(t.month, t.weekday));
        self
    }

    /// Derive the "start → end" route label for every trip.
    /// Trips missing either station get no route.
    pub fn add_route_column(&mut self) {
        for t in &mut self.trips {
            t.route = match (&t.start_station, &t.end_station) {
                (Some(start), Some(end)) => Some(format!("{start}{ROUTE_SEPARATOR}{end}")),
                _ => None,
            };
        }
        self.has_route = true;
    }

    pub fn has_route(&self) -> bool {
        self.has_route
    }
}
