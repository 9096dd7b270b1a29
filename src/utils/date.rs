use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's calendar day on the local clock. Time of day and UTC offset are dropped.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// `--today` override, or the local calendar day.
pub fn resolve_today(over: Option<&str>) -> AppResult<NaiveDate> {
    match over {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

/// "Saturday, June 1, 2024"
pub fn long(d: NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}

/// "Jun 1, 2024"
pub fn pretty(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}
