use std::{fmt, str::FromStr};
use thiserror::Error;
use time::{Month, error::ComponentRange};

/// Year and month of the calendar page being read, shared by every event of a run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct MonthContext {
    year: i32,
    month: Month,
}

impl MonthContext {
    pub fn new(year: i32, month: Month) -> Result<Self, MonthContextError> {
        if !(0..=9999).contains(&year) {
            return Err(MonthContextError::Year(year.to_string()));
        }
        Ok(Self { year, month })
    }

    /// `YYYY-MM-DD` for the given day of this month. The day is zero padded to
    /// two digits and otherwise taken as displayed.
    pub fn date_for_day(&self, day: u32) -> String {
        format!("{self}-{day:02}")
    }
}

#[derive(Debug, Error)]
pub enum MonthContextError {
    #[error("expected `YYYY-MM`, got `{0}`")]
    Format(String),
    #[error("invalid year `{0}`")]
    Year(String),
    #[error("invalid month: {0}")]
    Month(#[from] ComponentRange),
}

/// Accepts `YYYY-MM`, and also `YYYY-MM-DD` with the day ignored, since date
/// indicators on calendar pages often carry a full date.
impl FromStr for MonthContext {
    type Err = MonthContextError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut parts = input.split('-');
        let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
            return Err(MonthContextError::Format(input.to_owned()));
        };
        if let Some(day) = parts.next() {
            if day.is_empty() || !day.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MonthContextError::Format(input.to_owned()));
            }
        }
        if parts.next().is_some() {
            return Err(MonthContextError::Format(input.to_owned()));
        }

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MonthContextError::Year(year.to_owned()));
        }
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MonthContextError::Format(input.to_owned()));
        }
        // Unwrap: both checked to be short runs of ascii digits above
        let year: i32 = year.parse().unwrap();
        let month: u8 = month.parse().unwrap();
        Self::new(year, Month::try_from(month)?)
    }
}

impl fmt::Display for MonthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}
