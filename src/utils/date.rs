use chrono::{Days, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// The day after `today`, saturating at chrono's maximum date
pub(crate) fn next_day(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
