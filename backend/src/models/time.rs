use serde::*;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Offset between Julian Day and Modified Julian Date.
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Continuous day count since the Julian epoch (noon, 4713 BC).
///
/// Day fractions are counted from noon, so a calendar midnight lands on `.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(qtty::Days);

impl JulianDay {
    /// Create a new JD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.value() - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Equivalent Modified Julian Date.
    pub fn to_mjd(&self) -> f64 {
        self.value() - MJD_OFFSET
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        use chrono::{Datelike, Timelike};
        let seconds = dt.second() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
        to_julian_day(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), seconds)
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(qtty::Days::new(v))
    }
}

/// Gregorian calendar date to Julian Day (Meeus, *Astronomical Algorithms*, ch. 7).
///
/// `day` carries the time of day as a fraction counted from midnight, so
/// `julian_day(2000, 1, 1.5)` is J2000.0. Month and day are not range checked.
pub fn julian_day(year: i32, month: u32, day: f64) -> JulianDay {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5;
    JulianDay::from(jd)
}

/// Calendar date and UTC wall-clock time to Julian Day.
pub fn to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> JulianDay {
    let fraction = hour as f64 / 24.0 + minute as f64 / 1_440.0 + second / 86_400.0;
    julian_day(year, month, day as f64 + fraction)
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
