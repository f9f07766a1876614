//! Game identity: `(date, hour)` as the site writes them in boxscore URLs.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::HoopsError;

/// Date layouts seen in schedule tables and in hand-edited files.
const DATE_FORMATS: &[&str] = &["%a, %b %d, %Y", "%b %d, %Y", "%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Start of a game, as used in boxscore URLs and file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameKey {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Two-digit hour on a 24-hour clock.
    pub hour: String,
}

impl GameKey {
    /// Parses the Date and Time cells of a schedule row.
    ///
    /// Times look like `7:00p`; an `m` is appended when missing and the
    /// result is read on a 12-hour clock. Trailing zone markers such as
    /// `/est` and inner spaces (`7:00 PM`) are tolerated.
    pub fn from_schedule(date: &str, time: &str) -> Result<Self, HoopsError> {
        let date = parse_date(date)?;
        let hour = parse_hour(time)?;
        Ok(Self {
            date: date.format("%Y-%m-%d").to_string(),
            hour: format!("{:02}", hour),
        })
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.date, self.hour)
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, HoopsError> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| HoopsError::Parse(format!("unrecognized date '{}'", raw)))
}

pub fn parse_hour(raw: &str) -> Result<u32, HoopsError> {
    let mut time = raw.trim().to_ascii_uppercase();
    if let Some(slash) = time.find('/') {
        time.truncate(slash);
    }
    time.retain(|c| !c.is_whitespace());
    if time.ends_with('A') || time.ends_with('P') {
        time.push('M');
    }
    NaiveTime::parse_from_str(&time, "%I:%M%p")
        .map(|t| t.hour())
        .map_err(|e| HoopsError::Parse(format!("unrecognized time '{}': {}", raw, e)))
}
