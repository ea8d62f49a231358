//! Schedule date type.

use std::fmt;

use chrono::NaiveDate;

/// Error returned when a schedule date is not a real `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {input}")]
pub struct InvalidDateError {
    input: String,
}

impl InvalidDateError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A calendar date in strict `YYYY-MM-DD` form.
///
/// The original string is kept so that [`ScheduleDate::as_str`] returns
/// exactly what the caller supplied.
///
/// # Examples
///
/// ```
/// use bbc_radio::domain::ScheduleDate;
///
/// let date = ScheduleDate::parse("2021-01-24").unwrap();
/// assert_eq!(date.as_str(), "2021-01-24");
/// assert_eq!(date.path_segments(), "2021/01/24");
///
/// // Not a real day
/// assert!(ScheduleDate::parse("2021-02-30").is_err());
///
/// // Not zero-padded
/// assert!(ScheduleDate::parse("2021-1-24").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ScheduleDate {
    raw: String,
    date: NaiveDate,
}

impl ScheduleDate {
    /// Parse a date in `YYYY-MM-DD` form.
    ///
    /// The shape is checked byte by byte before the components are handed to
    /// chrono, so signs, whitespace and unpadded fields are all rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidDateError> {
        let invalid = || InvalidDateError {
            input: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }

        let digits_ok = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 4 && *i != 7)
            .all(|(_, b)| b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
        let day: u32 = s[8..10].parse().map_err(|_| invalid())?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

        Ok(Self {
            raw: s.to_string(),
            date,
        })
    }

    /// Returns the date exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the date as `YYYY/MM/DD`, the form used in schedule URLs.
    pub fn path_segments(&self) -> String {
        self.raw.replace('-', "/")
    }
}

impl fmt::Debug for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleDate({})", self.raw)
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
