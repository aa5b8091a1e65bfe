use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Schedule expression doesn't consist of exactly five fields.
    #[error("invalid cron expression: expected 5 fields, got {0}")]
    InvalidFieldCount(usize),
    /// Invalid minute field specified.
    #[error("minute field: {0}")]
    InvalidMinuteField(#[source] FieldError),
    /// Invalid hour field specified.
    #[error("hour field: {0}")]
    InvalidHourField(#[source] FieldError),
    /// Invalid day of month field specified.
    #[error("day of month field: {0}")]
    InvalidDayOfMonthField(#[source] FieldError),
    /// Invalid month field specified.
    #[error("month field: {0}")]
    InvalidMonthField(#[source] FieldError),
    /// Invalid day of week field specified.
    #[error("day of week field: {0}")]
    InvalidDayOfWeekField(#[source] FieldError),
}

/// Errors produced while parsing a single cron field.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldError {
    /// A term isn't a parseable unsigned integer.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    /// A plain value lies outside the field's valid bounds.
    #[error("value {0} out of range [{1}-{2}]")]
    OutOfRange(u32, u32, u32),
    /// A range term has a missing bound or a wrong shape.
    #[error("bad range {0:?}")]
    InvalidRange(String),
    /// A step term has a zero, missing or unparseable step, or extra slashes.
    #[error("bad step {0:?}")]
    InvalidStep(String),
}
