//! Birth moment parsing.
//!
//! A [`BirthMoment`] is always UTC. The strings it is built from carry no
//! offset and none is applied.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::Serialize;

use super::time::{to_julian_day, JulianDay};
use crate::error::{AstroError, AstroResult};

/// Date-of-birth format accepted on the wire.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Time-of-birth format accepted on the wire (24-hour clock).
pub const TOB_FORMAT: &str = "%H:%M";

/// A validated calendar date and wall-clock minute in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl BirthMoment {
    /// Build from individual fields, rejecting dates and times that do not exist.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> AstroResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AstroError::OutOfRange(format!("{:04}-{:02}-{:02}", year, month, day))
        })?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| AstroError::OutOfRange(format!("{:02}:{:02}", hour, minute)))?;

        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
        .checked()
    }

    /// Parse a `YYYY-MM-DD` date and an `HH:MM` time.
    pub fn parse(dob: &str, tob: &str) -> AstroResult<Self> {
        let dob = dob.trim();
        let tob = tob.trim();

        let date = NaiveDate::parse_from_str(dob, DOB_FORMAT).map_err(|source| {
            AstroError::InvalidDate {
                input: dob.to_string(),
                source,
            }
        })?;
        let time = NaiveTime::parse_from_str(tob, TOB_FORMAT).map_err(|source| {
            AstroError::InvalidTime {
                input: tob.to_string(),
                source,
            }
        })?;

        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: time.hour(),
            minute: time.minute(),
        }
        .checked()
    }

    /// Reject moments whose Julian Day would be negative.
    fn checked(self) -> AstroResult<Self> {
        let jd = self.julian_day().value();
        if jd < 0.0 {
            return Err(AstroError::OutOfRange(format!(
                "{:04}-{:02}-{:02} {:02}:{:02} precedes the Julian Day epoch (JD {})",
                self.year, self.month, self.day, self.hour, self.minute, jd
            )));
        }
        Ok(self)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Julian Day of this moment, with the time of day as a day fraction.
    pub fn julian_day(&self) -> JulianDay {
        to_julian_day(self.year, self.month, self.day, self.hour, self.minute, 0.0)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year, self.month, self.day, self.hour, self.minute, 0)
            .single()
    }
}
