//! Calendar month key (`YYYY-MM`)

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated `YYYY-MM` month key with its inclusive day interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    first: NaiveDate,
    last: NaiveDate,
}

impl Month {
    /// Build a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::InvalidMonth(format!("{}-{:02}", year, month)))?;
        Self::starting_at(first)
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Result<Self> {
        let first = date - Days::new(u64::from(date.day0()));
        Self::starting_at(first)
    }

    /// The current month in UTC
    pub fn current() -> Result<Self> {
        Self::containing(Utc::now().date_naive())
    }

    fn starting_at(first: NaiveDate) -> Result<Self> {
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| Error::InvalidMonth(first.format("%Y-%m").to_string()))?;
        Ok(Self { first, last })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Whether `date` falls within [first day, last day]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMonth(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        if !bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..].parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Month {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
