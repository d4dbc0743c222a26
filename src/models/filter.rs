//! Month / day filters and the validated selection triple.

use super::{City, normalize};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_from_name, month_name, weekday_from_name, weekday_name};
use crate::utils::title_case;
use chrono::Weekday;
use std::fmt;

/// Months offered by the filter prompt (January–June).
pub const FILTER_MONTHS: [u32; 6] = [1, 2, 3, 4, 5, 6];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let n = normalize(input);
        if n == "all" {
            return Some(MonthFilter::All);
        }
        month_from_name(&n)
            .filter(|m| FILTER_MONTHS.contains(m))
            .map(MonthFilter::Month)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Month(m) => month_name(*m),
        }
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }

    /// Accepted answers, in prompt order.
    pub fn choices() -> Vec<&'static str> {
        std::iter::once("all")
            .chain(FILTER_MONTHS.iter().map(|m| month_name(*m)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let n = normalize(input);
        if n == "all" {
            return Some(DayFilter::All);
        }
        weekday_from_name(&n).map(DayFilter::Day)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Day(d) => weekday_name(*d),
        }
    }

    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == day,
        }
    }

    pub fn choices() -> Vec<&'static str> {
        std::iter::once("all")
            .chain(WEEKDAYS.iter().map(|d| weekday_name(*d)))
            .collect()
    }
}

/// A confirmed (city, month, day) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Build a selection from raw strings (command-line flags).
    pub fn parse(city: &str, month: &str, day: &str) -> AppResult<Self> {
        let city = City::from_input(city).ok_or_else(|| AppError::InvalidCity(city.into()))?;
        let month =
            MonthFilter::from_input(month).ok_or_else(|| AppError::InvalidMonth(month.into()))?;
        let day = DayFilter::from_input(day).ok_or_else(|| AppError::InvalidDay(day.into()))?;
        Ok(Self { city, month, day })
    }

    pub fn matches(&self, month: u32, day: Weekday) -> bool {
        self.month.matches(month) && self.day.matches(day)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (month: {}, day: {})",
            self.city,
            title_case(self.month.name()),
            title_case(self.day.name())
        )
    }
}
