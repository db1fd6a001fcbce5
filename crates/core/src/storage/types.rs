use chrono::{DateTime, TimeZone, Utc};

use super::DateRangeError;

/// An inclusive kickoff-instant range used by fixture listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new range, validating that start <= end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// The default listing window: from the Unix epoch up to `now`.
    pub fn through(now: DateTime<Utc>) -> Self {
        Self {
            start: Utc.timestamp_opt(0, 0).single().unwrap_or(now),
            end: now,
        }
    }

    /// Returns true if the instant falls inside this range.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range_construction() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap();

        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
    }

    #[test]
    fn test_same_instant_range_is_valid() {
        let instant = Utc.with_ymd_and_hms(2020, 9, 24, 0, 0, 0).unwrap();
        assert!(DateRange::new(instant, instant).is_ok());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(DateRange::new(start, end), Err(DateRangeError::InvalidRange));
    }

    #[test]
    fn test_default_window_starts_at_epoch() {
        let now = Utc.with_ymd_and_hms(2020, 9, 24, 12, 0, 0).unwrap();
        let range = DateRange::through(now);

        assert_eq!(range.start, Utc.timestamp_opt(0, 0).unwrap());
        assert_eq!(range.end, now);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(end + chrono::Duration::seconds(1)));
    }
}
