//! Date helpers for the date filter.
//!
//! The approval endpoint matches `reservationDate` against text such as
//! `01 Jan 2024`, while `<input type="date">` speaks `yyyy-mm-dd`.

use chrono::NaiveDate;

pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const SEARCH_DATE_FORMAT: &str = "%d %b %Y";

/// Parse the value of a native date input.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()
}

/// Format a date the way the approval search expects it.
pub fn format_search_date(date: NaiveDate) -> String {
    date.format(SEARCH_DATE_FORMAT).to_string()
}

/// Search term for a date input value: empty when the input is cleared or
/// holds something that is not a date.
pub fn search_term_for_input(value: &str) -> String {
    parse_input_date(value)
        .map(format_search_date)
        .unwrap_or_default()
}
