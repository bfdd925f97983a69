use crate::errors::ServiceError;
use chrono::{Datelike, Months, NaiveDate};
use std::{fmt, str::FromStr};

/// A calendar month of a specific year, e.g. `2025-07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar day of the month, honouring leap-year February.
    pub fn last_day(&self) -> NaiveDate {
        // Only December of the final representable year overflows, and its
        // last day is NaiveDate::MAX.
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl FromStr for YearMonth {
    type Err = ServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ServiceError::Validation(vec![format!(
                "month: '{value}' is not a valid YYYY-MM value"
            )])
        };

        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;

        let well_formed = year.len() == 4
            && month.len() == 2
            && year.bytes().all(|b| b.is_ascii_digit())
            && month.bytes().all(|b| b.is_ascii_digit());

        if !well_formed {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_year_month() {
        let month: YearMonth = "2025-07".parse().unwrap();

        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 7);
        assert_eq!(month.first_day(), date(2025, 7, 1));
        assert_eq!(month.last_day(), date(2025, 7, 31));
        assert_eq!(month.to_string(), "2025-07");
    }

    #[test]
    fn leap_february_has_29_days() {
        let month: YearMonth = "2024-02".parse().unwrap();
        assert_eq!(month.last_day(), date(2024, 2, 29));
    }

    #[test]
    fn common_february_has_28_days() {
        let month: YearMonth = "2025-02".parse().unwrap();
        assert_eq!(month.last_day(), date(2025, 2, 28));
    }

    #[test]
    fn thirty_day_month_and_december() {
        assert_eq!(YearMonth::new(2025, 4).unwrap().last_day(), date(2025, 4, 30));
        assert_eq!(
            YearMonth::new(2025, 12).unwrap().last_day(),
            date(2025, 12, 31)
        );
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["", "2025", "2025-7", "25-07", "2025-13", "2025-00", "2025/07", "abcd-ef"] {
            let err = raw.parse::<YearMonth>().unwrap_err();
            assert!(
                matches!(err, ServiceError::Validation(_)),
                "expected validation error for {raw:?}"
            );
        }
    }
}
