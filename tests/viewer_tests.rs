mod common;
use common::{CHICAGO_CSV, console, generated_csv, output_of};
use rbikeshare::core::stats::station::station_stats;
use rbikeshare::core::{PAGE_SIZE, RawDataViewer, ViewerOutcome};
use rbikeshare::data::read_trips;
use rbikeshare::errors::AppError;
use rbikeshare::models::{City, TripTable};

const FIRST_Q: &str = "Would you like to see the first 5 lines of raw data?";
const MORE_Q: &str = "Would you like to see 5 more lines of raw data?";
const END_OF_DATA: &str = "You've reached the end of the raw data.";
const END_OF_PROGRAM: &str = "Awesome, you've reached the end of the program!";

fn table_of(rows: usize) -> TripTable {
    read_trips(City::NewYorkCity, generated_csv(rows).as_bytes()).expect("generated fixture")
}

/// Number of data lines printed (rows whose first cell is an index).
fn data_lines(out: &str) -> usize {
    out.lines()
        .filter(|l| l.trim_start().chars().next().is_some_and(|c| c.is_ascii_digit()))
        .filter(|l| l.contains("2017-01-"))
        .count()
}

#[test]
fn ceil_n_over_five_yes_answers_exhaust_the_table() {
    let table = table_of(12);
    let mut c = console("yes\nyes\nyes\n");
    let outcome = RawDataViewer::new(&table).run(&mut c).expect("viewer");
    assert_eq!(outcome, ViewerOutcome::Exhausted);

    let out = output_of(c);
    assert_eq!(out.matches(FIRST_Q).count(), 1);
    assert_eq!(out.matches(MORE_Q).count(), 2);
    assert_eq!(data_lines(&out), 12);
    assert!(out.trim_end().ends_with(END_OF_DATA));
}

#[test]
fn exactly_five_rows_need_a_single_yes() {
    let table = table_of(5);
    let mut viewer = RawDataViewer::new(&table);
    let mut c = console("yes\n");

    let outcome = viewer.run(&mut c).expect("viewer");
    assert_eq!(outcome, ViewerOutcome::Exhausted);
    assert_eq!(viewer.cursor(), PAGE_SIZE);

    let out = output_of(c);
    assert_eq!(out.matches(FIRST_Q).count(), 1);
    assert!(!out.contains(MORE_Q));
    assert_eq!(data_lines(&out), 5);
    assert!(out.contains(END_OF_DATA));
}

#[test]
fn empty_table_asks_nothing() {
    let table = table_of(0);
    let mut c = console("");
    let outcome = RawDataViewer::new(&table).run(&mut c).expect("viewer");
    assert_eq!(outcome, ViewerOutcome::Exhausted);

    let out = output_of(c);
    assert!(!out.contains(FIRST_Q));
    assert!(out.contains(END_OF_DATA));
}

#[test]
fn no_stops_the_viewer() {
    let table = table_of(12);
    let mut c = console("yes\nNo\n");
    let outcome = RawDataViewer::new(&table).run(&mut c).expect("viewer");
    assert_eq!(outcome, ViewerOutcome::Declined);

    let out = output_of(c);
    assert_eq!(data_lines(&out), 5);
    assert!(out.contains(END_OF_PROGRAM));
    assert!(!out.contains(END_OF_DATA));
}

#[test]
fn invalid_answer_repeats_the_same_question() {
    let table = table_of(7);
    let mut c = console("maybe\nyes\ny\nyes\n");
    let outcome = RawDataViewer::new(&table).run(&mut c).expect("viewer");
    assert_eq!(outcome, ViewerOutcome::Exhausted);

    let out = output_of(c);
    assert_eq!(out.matches(FIRST_Q).count(), 2);
    assert_eq!(out.matches(MORE_Q).count(), 2);
    assert_eq!(
        out.matches("Sorry, that input wasn't valid (Please enter yes or no)")
            .count(),
        2
    );
    assert_eq!(data_lines(&out), 7);
}

#[test]
fn closed_input_is_an_error() {
    let table = table_of(7);
    let mut c = console("yes\n");
    let err = RawDataViewer::new(&table).run(&mut c).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

#[test]
fn pages_show_derived_and_route_columns() {
    let mut table = read_trips(City::Chicago, CHICAGO_CSV.as_bytes()).unwrap();
    station_stats(&mut table).unwrap();

    let mut c = console("yes\n");
    let mut viewer = RawDataViewer::new(&table);
    viewer.run(&mut c).unwrap_err();

    let out = output_of(c);
    let header = out
        .lines()
        .find(|l| l.contains("Start Time"))
        .expect("header line");
    for col in [
        "End Time",
        "Trip Duration",
        "Gender",
        "Birth Year",
        "month",
        "day_of_week",
        "hour",
        "Start-End Combo",
    ] {
        assert!(header.contains(col), "missing column {col}");
    }
    assert!(out.contains("Canal St & Adams St → Clinton St & Madison St"));
    assert!(out.contains("january"));
}
