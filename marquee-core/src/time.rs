//! Day-scale time primitives shared by the scorers.
//!
//! Proximity tiers are defined over whole-day boundaries, so tier membership
//! is decided on signed milliseconds against `k * MILLIS_PER_DAY` bounds.
//! That keeps the arithmetic exact; the floating [`Event::days_until`]
//! accessor exists for display, not for tier decisions.
//!
//! [`Event::days_until`]: crate::Event::days_until

use chrono::{DateTime, Utc};

use crate::Event;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Signed milliseconds from `at` until the event starts.
///
/// Positive values lie in the future, negative in the past. Returns `None`
/// when the event has no start instant, which scorers treat as the zero
/// proximity tier.
#[must_use]
pub fn millis_until(event: &Event, at: DateTime<Utc>) -> Option<i64> {
    event
        .starts_at
        .map(|starts| starts.signed_duration_since(at).num_milliseconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    fn dated_event(starts_at: Option<DateTime<Utc>>) -> Event {
        Event {
            id: 1,
            title: String::new(),
            category: String::new(),
            city: String::new(),
            starts_at,
            is_active: true,
            available_tickets: 1,
            total_tickets: 1,
        }
    }

    #[rstest]
    fn future_events_are_positive() {
        let now = Utc::now();
        let event = dated_event(Some(now + Duration::days(2)));
        assert_eq!(millis_until(&event, now), Some(2 * MILLIS_PER_DAY));
    }

    #[rstest]
    fn past_events_are_negative() {
        let now = Utc::now();
        let event = dated_event(Some(now - Duration::hours(12)));
        assert_eq!(millis_until(&event, now), Some(-43_200_000));
    }

    #[rstest]
    fn undated_events_have_no_distance() {
        assert!(millis_until(&dated_event(None), Utc::now()).is_none());
    }
}
