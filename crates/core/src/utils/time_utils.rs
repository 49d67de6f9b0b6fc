use chrono::{Datelike, Local, NaiveDate};

use crate::constants::DATE_FORMAT;
use crate::errors::Result;

/// Today's date on the service's local clock.
///
/// Budget periods follow the wall calendar of the machine running the
/// server, so everything that needs "the current month" starts here.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// First and last calendar day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(date);
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// The period key for `date`: the first day of its month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}
