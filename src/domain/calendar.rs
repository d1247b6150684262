// Calendar keys - ISO week numbers and month labels for bucketing
use chrono::{DateTime, Datelike, Duration, NaiveDate};

/// ISO-8601 week of `date` as `(iso_year, week)`.
///
/// The date is moved to the Thursday of its own week (Monday=1..Sunday=7);
/// that Thursday's year is the ISO year and its day offset from January 1st
/// gives the week. `None` when that Thursday is outside chrono's date range.
pub fn iso_week(date: NaiveDate) -> Option<(i32, u32)> {
    let weekday = date.weekday().number_from_monday() as i64;
    let thursday = date.checked_add_signed(Duration::days(4 - weekday))?;
    // ordinal() is the 1-based day offset from January 1st
    let week = thursday.ordinal().div_ceil(7);
    Some((thursday.year(), week))
}

/// Week number only. Late December can be week 1 and early January week 52/53.
pub fn week_number(date: NaiveDate) -> Option<u32> {
    iso_week(date).map(|(_, week)| week)
}

/// "Month Year" label, e.g. "January 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Parse a record date. Plain `YYYY-MM-DD` dates are taken as UTC calendar
/// dates; RFC 3339 timestamps are normalised to their UTC date. Dates whose
/// ISO week cannot be computed are rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date = match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => DateTime::parse_from_rfc3339(value).ok()?.naive_utc().date(),
    };
    iso_week(date).map(|_| date)
}
