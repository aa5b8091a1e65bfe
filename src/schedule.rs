use crate::{field::Field, CronError, Result};
use chrono::{DateTime, Datelike, Days, TimeDelta, TimeZone, Timelike};
use std::{fmt::Display, str::FromStr};

/// Search horizon of [`Schedule::upcoming`], in years after the reference time.
///
/// A schedule with an unsatisfiable field (e.g. the empty range `5-4`) would otherwise
/// keep the search advancing forever; once the candidate year passes the horizon the
/// search gives up and reports no upcoming occurrence.
///
/// The rarest satisfiable schedule is one that fires only on February 29th, and the
/// gap between leap days reaches eight years around a non-leap century year
/// (2096-02-29 to 2104-02-29), so the horizon must not be any shorter.
pub const MAX_SEARCH_YEARS: i32 = 8;

/// Represents a parsed five-field cron expression with its methods.
///
/// For cron expression format and usage examples, please refer to the
/// [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    minute: Field,
    hour: Field,
    dom: Field,
    month: Field,
    dow: Field,
    expression: String,
}

impl Schedule {
    /// Parses and validates provided `expression` and constructs [`Schedule`] instance.
    ///
    /// The expression is five whitespace-separated fields in the classic order
    /// `minute hour day-of-month month day-of-week`.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or
    /// `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided expression is unparsable or has
    /// format errors.
    pub fn new(expression: impl AsRef<str>) -> Result<Self> {
        let fields: Vec<&str> = expression.as_ref().split_whitespace().collect();
        if fields.len() != 5 {
            return Err(CronError::InvalidFieldCount(fields.len()));
        }

        Ok(Self {
            minute: Field::parse(fields[0], 0, 59).map_err(CronError::InvalidMinuteField)?,
            hour: Field::parse(fields[1], 0, 23).map_err(CronError::InvalidHourField)?,
            dom: Field::parse(fields[2], 1, 31).map_err(CronError::InvalidDayOfMonthField)?,
            month: Field::parse(fields[3], 1, 12).map_err(CronError::InvalidMonthField)?,
            dow: Field::parse(fields[4], 0, 6).map_err(CronError::InvalidDayOfWeekField)?,
            expression: fields.join(" "),
        })
    }

    /// Returns time of the upcoming occurrence, strictly after the provided `after`
    /// value, truncated to whole-minute granularity.
    ///
    /// The time zone of `after` is preserved unchanged in the result. The schedule
    /// holds no mutable state, so a single instance may serve concurrent calls.
    ///
    /// Returns `None` if there is no occurrence within [`MAX_SEARCH_YEARS`] after
    /// `after`, which can happen only for schedules with an unsatisfiable field.
    pub fn upcoming<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let mut current = after
            .with_second(0)?
            .with_nanosecond(0)?
            .checked_add_signed(TimeDelta::minutes(1))?;
        let horizon = after.year().checked_add(MAX_SEARCH_YEARS)?;

        loop {
            if current.year() > horizon {
                return None;
            }

            // Month: jump straight to the first instant of the next month.
            if !self.month.has(current.month()) {
                let (year, month) = if current.month() == 12 {
                    (current.year() + 1, 1)
                } else {
                    (current.year(), current.month() + 1)
                };
                current = current.timezone().with_ymd_and_hms(year, month, 1, 0, 0, 0).earliest()?;
                continue;
            }

            // Day: valid if it satisfies day-of-month OR day-of-week. `*` on either
            // side makes every day valid. The month is rechecked after the jump
            // since a day rollover may cross a month boundary.
            let day_is_valid =
                self.dom.has(current.day()) || self.dow.has(current.weekday().num_days_from_sunday());
            if !day_is_valid {
                current = current
                    .timezone()
                    .with_ymd_and_hms(current.year(), current.month(), current.day(), 0, 0, 0)
                    .earliest()?
                    .checked_add_days(Days::new(1))?;
                continue;
            }

            if !self.hour.has(current.hour()) {
                current = current
                    .timezone()
                    .with_ymd_and_hms(current.year(), current.month(), current.day(), current.hour(), 0, 0)
                    .earliest()?
                    .checked_add_signed(TimeDelta::hours(1))?;
                continue;
            }

            if !self.minute.has(current.minute()) {
                current = current.checked_add_signed(TimeDelta::minutes(1))?;
                continue;
            }

            return Some(current);
        }
    }

    /// Returns iterator of occurrences strictly after `after`.
    #[inline]
    pub fn iter<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        ScheduleIterator {
            schedule: self.clone(),
            next: self.upcoming(after),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of occurrences strictly after `after`.
    #[inline]
    pub fn into_iter<Tz: TimeZone>(self, after: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        let next = self.upcoming(after);
        ScheduleIterator { schedule: self, next }
    }
}

/// Contains iterator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScheduleIterator<Tz: TimeZone> {
    schedule: Schedule,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for ScheduleIterator<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.upcoming(&current);
        Some(current)
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
