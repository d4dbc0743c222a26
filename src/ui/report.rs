//! The four statistics reporters: compute, then print in the fixed format.

use crate::config::Config;
use crate::core::stats::duration::{DurationStats, duration_stats};
use crate::core::stats::station::{Popular, StationStats, station_stats};
use crate::core::stats::time::{TimeStats, time_stats};
use crate::core::stats::users::{UserStats, user_stats};
use crate::errors::AppResult;
use crate::models::TripTable;
use crate::utils::formatting::format_seconds;
use crate::utils::title_case;
use std::io::Write;
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Layout knobs taken from the configuration.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub separator: String,
    pub show_timing: bool,
}

impl ReportStyle {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            separator: cfg.separator(),
            show_timing: cfg.show_timing,
        }
    }
}

pub struct Reporter<'a, W: Write> {
    out: &'a mut W,
    style: &'a ReportStyle,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: &'a mut W, style: &'a ReportStyle) -> Self {
        Self { out, style }
    }

    /// Time, station, duration and user statistics, in that order.
    pub fn run_all(&mut self, table: &mut TripTable) -> AppResult<()> {
        self.time(table)?;
        self.stations(table)?;
        self.durations(table)?;
        self.users(table)
    }

    pub fn time(&mut self, table: &TripTable) -> AppResult<()> {
        writeln!(self.out, "\nCalculating The Most Frequent Times of Travel...\n")?;
        let started = Instant::now();

        let stats = time_stats(table)?;
        print_time_stats(&mut *self.out, &stats)?;

        self.finish(started)
    }

    pub fn stations(&mut self, table: &mut TripTable) -> AppResult<()> {
        writeln!(self.out, "\nCalculating The Most Popular Stations and Trip...\n")?;
        let started = Instant::now();

        let stats = station_stats(table)?;
        print_station_stats(&mut *self.out, &stats, &self.style.separator)?;

        self.finish(started)
    }

    pub fn durations(&mut self, table: &TripTable) -> AppResult<()> {
        writeln!(self.out, "\nCalculating Trip Duration...\n")?;
        let started = Instant::now();

        let stats = duration_stats(table)?;
        print_duration_stats(&mut *self.out, &stats)?;

        self.finish(started)
    }

    pub fn users(&mut self, table: &TripTable) -> AppResult<()> {
        writeln!(self.out, "\nCalculating User Stats...\n")?;
        let started = Instant::now();

        let stats = user_stats(table)?;
        print_user_stats(&mut *self.out, &stats, &self.style.separator)?;

        self.finish(started)
    }

    fn finish(&mut self, started: Instant) -> AppResult<()> {
        if self.style.show_timing {
            writeln!(
                self.out,
                "\nThis took {} seconds.",
                started.elapsed().as_secs_f64()
            )?;
        }
        writeln!(self.out, "{}", self.style.separator)?;
        Ok(())
    }
}

pub fn print_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> AppResult<()> {
    writeln!(
        out,
        "The most popular month is: {}",
        title_case(stats.month_name())
    )?;
    writeln!(
        out,
        "The most popular day of the week is: {}",
        title_case(stats.day_name())
    )?;
    writeln!(out, "The most popular start hour is: {}:00", stats.hour)?;
    Ok(())
}

fn print_popular<W: Write>(out: &mut W, label: &str, p: &Popular, sep: &str) -> AppResult<()> {
    writeln!(out, "{}: {}", label, p.name)?;
    writeln!(out, "  Count: {} ({:.2}%)", p.count, p.percent)?;
    writeln!(out, "{}", sep)?;
    Ok(())
}

pub fn print_station_stats<W: Write>(out: &mut W, stats: &StationStats, sep: &str) -> AppResult<()> {
    print_popular(out, "Most popular start station", &stats.start, sep)?;
    print_popular(out, "Most popular end station", &stats.end, sep)?;
    print_popular(out, "Most popular trip (Start → End)", &stats.route, sep)?;
    Ok(())
}

pub fn print_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> AppResult<()> {
    writeln!(out, "Total travel time: {} seconds", format_seconds(stats.total))?;
    writeln!(out, "Average travel time: {:.2} seconds", stats.mean)?;
    Ok(())
}

fn print_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> AppResult<()> {
    let width = counts.iter().map(|(v, _)| v.width()).max().unwrap_or(0);
    for (value, count) in counts {
        let pad = " ".repeat(width.saturating_sub(value.width()));
        writeln!(out, "  {}{}  {}", value, pad, count)?;
    }
    Ok(())
}

pub fn print_user_stats<W: Write>(out: &mut W, stats: &UserStats, sep: &str) -> AppResult<()> {
    writeln!(out, "Counts of user types:")?;
    print_counts(out, &stats.user_types)?;
    writeln!(out, "{}", sep)?;

    match &stats.genders {
        Some(genders) => {
            writeln!(out, "Counts of gender:")?;
            print_counts(out, genders)?;
        }
        None => writeln!(out, "Sorry, gender data not available.")?,
    }
    writeln!(out, "{}", sep)?;

    match &stats.birth_years {
        Some(years) => {
            writeln!(out, "Earliest birth year: {}", years.earliest)?;
            writeln!(out, "Most recent birth year: {}", years.most_recent)?;
            writeln!(out, "Most common birth year: {}", years.most_common)?;
        }
        None => writeln!(out, "Sorry, birth year data not available.")?,
    }
    writeln!(out, "{}", sep)?;
    Ok(())
}
