//! Past/upcoming classification of shows.
//!
//! Every call site that splits shows into past and upcoming goes through
//! [`classify`], so the boundary is the same everywhere: a show starting
//! exactly at `now` is upcoming.

use chrono::{SubsecRound, Utc};

use crate::types::Timestamp;

/// `strftime` pattern for show dates on listing pages, e.g. `Jan 05 2021`.
pub const SHOW_DATE_FORMAT: &str = "%b %d %Y";

/// Where a show falls relative to the moment a query is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

/// The current time at the precision PostgreSQL stores.
///
/// `TIMESTAMPTZ` keeps microseconds, so a nanosecond `now` bound into SQL
/// would compare differently there than it does in [`classify`].
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Classify a show start time against `now`.
pub fn classify(now: Timestamp, start_time: Timestamp) -> ShowTiming {
    if start_time >= now {
        ShowTiming::Upcoming
    } else {
        ShowTiming::Past
    }
}

/// Shows split by [`classify`], each side keeping input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Split `items` into past and upcoming using the start time returned by
/// `start_time`.
pub fn partition_by_start<T, I, F>(now: Timestamp, items: I, start_time: F) -> Partitioned<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Timestamp,
{
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for item in items {
        match classify(now, start_time(&item)) {
            ShowTiming::Past => past.push(item),
            ShowTiming::Upcoming => upcoming.push(item),
        }
    }
    Partitioned { past, upcoming }
}

/// Render a show start time for listing pages.
pub fn format_show_date(start_time: Timestamp) -> String {
    start_time.format(SHOW_DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{Duration, SubsecRound, TimeZone, Timelike, Utc};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn boundary_is_upcoming() {
        let now = at(2024, 6, 1, 20);
        assert_eq!(classify(now, now), ShowTiming::Upcoming);
    }

    #[test]
    fn later_start_is_upcoming() {
        let now = at(2024, 6, 1, 20);
        assert_eq!(classify(now, now + Duration::seconds(1)), ShowTiming::Upcoming);
    }

    #[test]
    fn earlier_start_is_past() {
        let now = at(2024, 6, 1, 20);
        assert_eq!(classify(now, now - Duration::seconds(1)), ShowTiming::Past);
        assert_eq!(classify(now, now - Duration::days(30)), ShowTiming::Past);
    }

    #[test]
    fn now_has_microsecond_precision() {
        let now = now();
        assert_eq!(now.nanosecond() % 1_000, 0);
        assert!(now <= Utc::now());
    }

    #[test]
    fn show_stored_at_now_stays_upcoming() {
        let now = now();
        // A start time round-tripped through the database keeps microseconds.
        let stored = now.trunc_subsecs(6);
        assert_eq!(classify(now, stored), ShowTiming::Upcoming);
    }

    #[test]
    fn partition_keeps_input_order() {
        let now = at(2024, 6, 1, 0);
        let starts = vec![
            at(2024, 7, 1, 0),
            at(2024, 1, 1, 0),
            now,
            at(2023, 12, 1, 0),
            at(2025, 1, 1, 0),
        ];

        let split = partition_by_start(now, starts.clone(), |t| *t);

        assert_eq!(split.past, vec![starts[1], starts[3]]);
        assert_eq!(split.upcoming, vec![starts[0], starts[2], starts[4]]);
    }

    #[test]
    fn partition_of_nothing_is_empty() {
        let split = partition_by_start(at(2024, 1, 1, 0), Vec::<Timestamp>::new(), |t| *t);
        assert!(split.past.is_empty());
        assert!(split.upcoming.is_empty());
    }

    #[test]
    fn show_date_is_short_form() {
        assert_eq!(format_show_date(at(2021, 1, 5, 21)), "Jan 05 2021");
        assert_eq!(format_show_date(at(2035, 4, 15, 20)), "Apr 15 2035");
    }
}
