mod common;
use common::{console, output_of};
use rbikeshare::errors::AppError;
use rbikeshare::models::{City, DayFilter, MonthFilter, Selection};
use rbikeshare::ui::filters::prompt_selection;
use chrono::Weekday;

const SEP: &str = "----------------------------------------";

#[test]
fn accepts_answers_regardless_of_case_and_whitespace() {
    let mut c = console("  New York CITY \nMARCH\n\tfriday  \n");
    let sel = prompt_selection(&mut c, SEP).expect("selection");

    assert_eq!(
        sel,
        Selection::new(City::NewYorkCity, MonthFilter::Month(3), DayFilter::Day(Weekday::Fri))
    );

    let out = output_of(c);
    assert!(out.contains("Hello! Let's explore some US bikeshare data!"));
    assert!(out.contains("Perfect! Let's analyze: New York City"));
    assert!(out.contains("Perfect! Let's analyze: March"));
    assert!(out.contains("Perfect! Let's analyze: Friday"));
    assert!(out.trim_end().ends_with(SEP));
}

#[test]
fn all_is_accepted_for_month_and_day() {
    let mut c = console("chicago\nALL\nAll\n");
    let sel = prompt_selection(&mut c, SEP).expect("selection");
    assert_eq!(sel.month, MonthFilter::All);
    assert_eq!(sel.day, DayFilter::All);
}

#[test]
fn invalid_city_is_asked_again() {
    let mut c = console("boston\n\nwashington\nall\nall\n");
    let sel = prompt_selection(&mut c, SEP).expect("selection");
    assert_eq!(sel.city, City::Washington);

    let out = output_of(c);
    let rejections = out
        .matches("Sorry we don't have data on that city")
        .count();
    assert_eq!(rejections, 2);
    assert_eq!(out.matches("Which city should we analyze?").count(), 3);
}

#[test]
fn months_after_june_are_rejected() {
    let mut c = console("chicago\njuly\ndecember\njune\nall\n");
    let sel = prompt_selection(&mut c, SEP).expect("selection");
    assert_eq!(sel.month, MonthFilter::Month(6));

    let out = output_of(c);
    assert_eq!(out.matches("Sorry we don't have data on that month").count(), 2);
    // the day question is only reached after the month was accepted
    assert_eq!(out.matches("Which day should we analyze?").count(), 1);
}

#[test]
fn invalid_day_is_asked_again() {
    let mut c = console("chicago\nall\nfunday\nmon\nmonday\n");
    let sel = prompt_selection(&mut c, SEP).expect("selection");
    assert_eq!(sel.day, DayFilter::Day(Weekday::Mon));

    let out = output_of(c);
    assert_eq!(
        out.matches("Sorry, we don't have data to support that entry.")
            .count(),
        2
    );
}

#[test]
fn prompts_list_the_accepted_values() {
    let mut c = console("chicago\nall\nall\n");
    prompt_selection(&mut c, SEP).expect("selection");
    let out = output_of(c);

    assert!(out.contains("(Pick one of the following: Chicago, New York City, Washington)"));
    assert!(out.contains("All, January, February, March, April, May, June"));
    assert!(out.contains("All, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday"));
}

#[test]
fn closed_input_is_an_error() {
    let mut c = console("chicago\nmarch\n");
    let err = prompt_selection(&mut c, SEP).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

#[test]
fn selection_parse_normalizes_flags() {
    let sel = Selection::parse(" Chicago", "JANUARY ", "sunday").expect("valid");
    assert_eq!(sel.city, City::Chicago);
    assert_eq!(sel.month.name(), "january");
    assert_eq!(sel.day.name(), "sunday");

    assert!(matches!(
        Selection::parse("chicago", "august", "all"),
        Err(AppError::InvalidMonth(_))
    ));
    assert!(matches!(
        Selection::parse("paris", "all", "all"),
        Err(AppError::InvalidCity(_))
    ));
    assert!(matches!(
        Selection::parse("chicago", "all", "someday"),
        Err(AppError::InvalidDay(_))
    ));
}
