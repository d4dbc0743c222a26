use super::normalize;
use crate::utils::title_case;
use serde::Serialize;
use std::fmt;

/// The three cities a dataset is shipped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Canonical lowercase name, as typed by the user.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Key used in the `datasets` section of the configuration file.
    pub fn config_key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new_york_city",
            City::Washington => "washington",
        }
    }

    /// Helper: parse user input (any case, surrounding whitespace allowed)
    pub fn from_input(input: &str) -> Option<Self> {
        let n = normalize(input);
        City::ALL.into_iter().find(|c| c.name() == n)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&title_case(self.name()))
    }
}
