//! The `--month` filter argument.

use chrono::{Datelike, Local, NaiveDate};
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MonthError(String);

impl Display for MonthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for MonthError {}

/// A calendar month used to filter expense rows. Parses from either `MM` (resolved against the
/// current year) or `YYYY-MM`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MonthFilter {
    year: i32,
    month: u32,
}

impl MonthFilter {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError(format!(
                "Month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true if `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for MonthFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthFilter {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('-') {
            Some((year, month)) => {
                let year: i32 = year
                    .parse()
                    .map_err(|_| MonthError(format!("Invalid year '{year}'")))?;
                let month: u32 = month
                    .parse()
                    .map_err(|_| MonthError(format!("Invalid month '{month}'")))?;
                Self::new(year, month)
            }
            None => {
                let month: u32 = s
                    .parse()
                    .map_err(|_| MonthError(format!("Invalid month '{s}'")))?;
                Self::new(Local::now().year(), month)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        let m: MonthFilter = "2025-09".parse().unwrap();
        assert_eq!(m.year(), 2025);
        assert_eq!(m.month(), 9);
        assert_eq!(m.to_string(), "2025-09");
    }

    #[test]
    fn test_parse_bare_month_uses_current_year() {
        let m: MonthFilter = "09".parse().unwrap();
        assert_eq!(m.month(), 9);
        assert_eq!(m.year(), Local::now().year());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("13".parse::<MonthFilter>().is_err());
        assert!("0".parse::<MonthFilter>().is_err());
        assert!("2025-13".parse::<MonthFilter>().is_err());
        assert!("twelve".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_contains() {
        let m: MonthFilter = "2025-10".parse().unwrap();
        assert!(m.contains(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()));
        assert!(m.contains(NaiveDate::from_ymd_opt(2025, 10, 31).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()));
    }
}
