//! First-match-wins day-proximity tiers shared by the scorers.

use chrono::{DateTime, Utc};
use marquee_core::time::{MILLIS_PER_DAY, millis_until};
use marquee_core::{Event, Score};

/// How the secondary proximity tier treats events whose date has passed.
///
/// The production heuristic bounds the secondary tier only from above
/// (within 30 days), so an event already in the past still collects the
/// smaller bonus on the personalized and popularity surfaces. That asymmetry
/// is reproduced as the default; [`PastEventPolicy::Excluded`] is the
/// corrected variant for integrators who want the tier gated on the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PastEventPolicy {
    /// Past events remain eligible for the secondary tier (production
    /// behavior).
    #[default]
    Eligible,
    /// The secondary tier requires the event to lie in the future.
    Excluded,
}

/// Tier points for one surface.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProximityWindow {
    /// Bonus for events within the next seven days.
    pub imminent: Score,
    /// Bonus for the secondary tier (within 30 days).
    pub upcoming: Score,
    /// Secondary-tier treatment of past events.
    pub past_events: PastEventPolicy,
}

/// Evaluate the proximity tiers for `event`, first match wins.
///
/// Undated events score zero: with no start instant there is no proximity
/// signal to reward.
pub(crate) fn proximity_score(event: &Event, at: DateTime<Utc>, window: ProximityWindow) -> Score {
    let Some(millis) = millis_until(event, at) else {
        return 0;
    };
    if (0..=7 * MILLIS_PER_DAY).contains(&millis) {
        return window.imminent;
    }
    let lower_bound_ok = match window.past_events {
        PastEventPolicy::Eligible => true,
        PastEventPolicy::Excluded => millis >= 0,
    };
    if lower_bound_ok && millis <= 30 * MILLIS_PER_DAY {
        window.upcoming
    } else {
        0
    }
}
