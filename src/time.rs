use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::debug;

use crate::types::SolarError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Month lengths of a common year, January first.
const COMMON_YEAR_MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 4 and not by 100, or divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days allowed in `month` of `year` when clamping a day of month.
///
/// February gets 29 days only in leap years. Months outside 1..=12 are given 31
/// days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    month
        .checked_sub(1)
        .and_then(|index| COMMON_YEAR_MONTH_DAYS.get(index as usize))
        .copied()
        .unwrap_or(31)
}

/// Compute the Julian Day at 00:00 of a calendar date (Gregorian calendar).
///
/// The day of month is first clamped to the month's length, so `2024-02-30`
/// becomes `2024-02-29` and `2023-02-30` becomes `2023-02-28`. January and
/// February are then treated as months 13 and 14 of the previous year, and the
/// Gregorian century correction is always applied.
///
/// # Arguments
///
/// * `year` - Calendar year (astronomical numbering)
/// * `month` - Month, 1-indexed
/// * `day` - Day of month, 1-indexed
///
/// # Returns
///
/// The Julian Day as a real number ending in `.5`.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let limit = days_in_month(year, month);
    let day = if day > limit {
        debug!("clamping day {day} of {year}-{month:02} to {limit}");
        limit
    } else {
        day
    };

    let (mut year, mut month) = (f64::from(year), f64::from(month));
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let century = (year / 100.0).floor();
    let gregorian_correction = 2.0 - century + (century / 4.0).floor();
    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + f64::from(day) + gregorian_correction
        - 1524.5
}

/// Minutes elapsed since local midnight for a clock reading.
///
/// No daylight-saving adjustment is applied.
pub fn local_time_minutes(hour: u32, minute: u32, second: u32) -> f64 {
    60.0 * f64::from(hour) + f64::from(minute) + f64::from(second) / 60.0
}

/// Julian century (T) from the given Julian Day (JD),
/// measured in Julian centuries since the J2000.0 epoch.
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian century for a local date, local clock minutes and UTC offset.
///
/// `T = (JD + minutes/1440 − offset/24 − 2451545) / 36525`
pub fn julian_century_at(julian_day: f64, local_minutes: f64, utc_offset_hours: f64) -> f64 {
    julian_century(julian_day + local_minutes / MINUTES_PER_DAY - utc_offset_hours / 24.0)
}

/// A local calendar date and clock time together with its offset from UTC.
///
/// The offset is supplied by the caller; no timezone database or daylight-saving
/// rule is consulted. Days 29 to 31 are accepted for every month and clamped to
/// the month's real length when the Julian Day is computed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    utc_offset_hours: f64,
}

impl LocalInstant {
    /// Creates a local instant from calendar and clock fields.
    ///
    /// # Errors
    ///
    /// Returns a [`SolarError`] if a field is outside its range. See
    /// [`SolarError`] for the limits.
    ///
    /// # Example
    ///
    /// ```
    /// use solar_orientation::LocalInstant;
    ///
    /// // Noon in Bern on the June solstice, CEST
    /// let instant = LocalInstant::new(2024, 6, 21, 12, 0, 0, 2.0).unwrap();
    /// assert_eq!(instant.local_minutes(), 720.0);
    /// ```
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_hours: f64,
    ) -> Result<Self, SolarError> {
        if !(1..=12).contains(&month) {
            return Err(SolarError::MonthOutOfRange);
        }
        if !(1..=31).contains(&day) {
            return Err(SolarError::DayOutOfRange);
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(SolarError::TimeOfDayOutOfRange);
        }
        validate_utc_offset(utc_offset_hours)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Takes the local fields and fixed UTC offset of a chrono date/time.
    ///
    /// Sub-second precision is dropped. The offset is whatever the time zone
    /// reports for that instant (`local - UTC`), including any daylight saving
    /// the zone itself applies.
    pub fn from_datetime<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        let offset_seconds = date.offset().fix().local_minus_utc();
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: date.hour(),
            minute: date.minute(),
            // chrono encodes leap seconds in the nanosecond field, second stays <= 59
            second: date.second(),
            utc_offset_hours: f64::from(offset_seconds) / 3600.0,
        }
    }

    /// Pairs a naive local date/time with an explicit UTC offset in hours.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::UtcOffsetOutOfRange`] for a non-finite offset or one
    /// of 24 hours or more.
    pub fn from_naive(local: NaiveDateTime, utc_offset_hours: f64) -> Result<Self, SolarError> {
        validate_utc_offset(utc_offset_hours)?;
        Ok(Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            utc_offset_hours,
        })
    }

    /// Local time at `seconds` since the Unix epoch, seen at a fixed UTC offset.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::UtcOffsetOutOfRange`] if the offset is not a whole
    /// number of seconds within ±24 hours, or [`SolarError::TimeConversionError`]
    /// if the timestamp is outside chrono's range.
    pub fn from_timestamp(seconds: i64, utc_offset_hours: f64) -> Result<Self, SolarError> {
        validate_utc_offset(utc_offset_hours)?;
        let offset = FixedOffset::east_opt((utc_offset_hours * 3600.0).round() as i32)
            .ok_or(SolarError::UtcOffsetOutOfRange)?;
        let utc = DateTime::from_timestamp(seconds, 0).ok_or(SolarError::TimeConversionError)?;
        Ok(Self::from_datetime(&utc.with_timezone(&offset)))
    }

    /// The system's local time and UTC offset, captured at call time.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        Self::from_datetime(&chrono::Local::now())
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

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Offset from UTC in hours, positive east of Greenwich.
    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Julian Day at local midnight of this date, with the day clamped.
    pub fn julian_day(&self) -> f64 {
        julian_day(self.year, self.month, self.day)
    }

    /// Minutes since local midnight.
    pub fn local_minutes(&self) -> f64 {
        local_time_minutes(self.hour, self.minute, self.second)
    }

    /// Julian century (T) of this instant.
    pub fn julian_century(&self) -> f64 {
        julian_century_at(self.julian_day(), self.local_minutes(), self.utc_offset_hours)
    }
}

fn validate_utc_offset(utc_offset_hours: f64) -> Result<(), SolarError> {
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() >= 24.0 {
        return Err(SolarError::UtcOffsetOutOfRange);
    }
    Ok(())
}
