//! Calendar month helpers. Months are represented as the first day of the month.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::{PayoffError, Result};

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The month a simulation starts in when the caller does not pick one
pub fn current_month() -> NaiveDate {
    first_of_month(Local::now().date_naive())
}

/// `None` once the calendar overflows
pub fn add_months(month: NaiveDate, n: u32) -> Option<NaiveDate> {
    month.checked_add_months(Months::new(n))
}

/// Parse `YYYY-MM` (a full `YYYY-MM-DD` date is accepted and truncated)
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map(first_of_month)
        .map_err(|_| PayoffError::InvalidMonth(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        let m = parse_month("2026-11").unwrap();
        assert_eq!(m, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());

        let d = parse_month("2027-02-17").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2027, 2, 1).unwrap());

        assert!(matches!(parse_month("11/2026"), Err(PayoffError::InvalidMonth(_))));
        assert!(parse_month("2026-13").is_err());
    }

    #[test]
    fn test_add_months_crosses_year() {
        let start = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert_eq!(add_months(start, 2), NaiveDate::from_ymd_opt(2027, 1, 1));
        assert_eq!(add_months(start, 1200), NaiveDate::from_ymd_opt(2126, 11, 1));
    }

    #[test]
    fn test_current_month_is_first_day() {
        assert_eq!(current_month().day(), 1);
    }
}
