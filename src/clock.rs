use time::{macros::format_description, OffsetDateTime, UtcOffset};

/// Source of wall-clock time for response assembly.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Formats `at` in UTC as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Every component is numeric and the default `time` range is years
/// -9999..=9999, so formatting into a `String` cannot fail.
pub fn iso8601_millis(at: OffsetDateTime) -> String {
    let fmt = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    at.to_offset(UtcOffset::UTC)
        .format(&fmt)
        .expect("numeric date format is infallible for in-range datetimes")
}

#[cfg(test)]
pub(crate) struct FixedClock(pub OffsetDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
