use std::fmt;

use serde::{Deserialize, Serialize};

mod month;
mod rect;
pub use month::{MonthContext, MonthContextError};
pub use rect::{Point, Rect};

/// One calendar day in the month grid, with where it was laid out on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCell {
    /// Day of month as displayed.
    pub day: u32,
    pub rect: Rect,
}

/// One rendered event occurrence, after text extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFragment {
    pub title: String,
    pub time: Option<String>,
    pub rect: Rect,
}

/// An event attributed to a calendar day. This is the record handed to the sink.
///
/// Equality is structural over all three fields, and is what deduplication uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, cli_table::Table)]
pub struct AssociatedEvent {
    #[table(title = "Date")]
    pub date: String,
    #[table(title = "Time", display_fn = "display_time")]
    pub time: Option<String>,
    #[table(title = "Title")]
    pub title: String,
}

impl AssociatedEvent {
    pub fn new(month: MonthContext, day: u32, time: Option<String>, title: String) -> Self {
        Self {
            date: month.date_for_day(day),
            time,
            title,
        }
    }

    /// Key the output list is ordered by: date, then time with "no time" first.
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.date, self.time.as_deref().unwrap_or(""))
    }
}

impl fmt::Display for AssociatedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.date)?;
        if let Some(time) = &self.time {
            write!(f, " {time}")?;
        }
        write!(f, " {}", self.title)
    }
}

fn display_time(time: &Option<String>) -> impl fmt::Display + '_ {
    time.as_deref().unwrap_or("-")
}
