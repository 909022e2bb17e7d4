//! Popularity-feed scoring.

use chrono::{DateTime, Utc};
use marquee_core::{Event, Ranker, RankingContext, Score};

use crate::proximity::{PastEventPolicy, ProximityWindow, proximity_score};

// Fill-rate tier thresholds, in tenths. Membership is decided by integer
// cross-multiplication (`sold * 10 >= total * tenths`) so boundary ratios
// like 80/100 land in the tier exactly.
const FILL_HIGH_TENTHS: u64 = 8;
const FILL_MID_TENTHS: u64 = 5;
const FILL_LOW_TENTHS: u64 = 3;

/// Tunable weights for the popularity surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularWeights {
    /// Bonus for a live event.
    pub active: Score,
    /// Points per ticket sold. Unbounded and linear; this term dominates the
    /// score and is the primary popularity signal.
    pub per_ticket_sold: Score,
    /// Bonus when at least 80% of capacity is sold.
    pub fill_high: Score,
    /// Bonus when at least 50% of capacity is sold.
    pub fill_mid: Score,
    /// Bonus when at least 30% of capacity is sold.
    pub fill_low: Score,
    /// Bonus for events within the next seven days.
    pub imminent: Score,
    /// Bonus for the secondary proximity tier (within 30 days).
    pub upcoming: Score,
}

impl Default for PopularWeights {
    fn default() -> Self {
        Self {
            active: 20,
            per_ticket_sold: 2,
            fill_high: 30,
            fill_mid: 20,
            fill_low: 10,
            imminent: 15,
            upcoming: 8,
        }
    }
}

/// Ranks the "popular" section by absolute sales volume, with fill rate and
/// recency as secondary signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularityScorer {
    weights: PopularWeights,
    past_events: PastEventPolicy,
}

impl PopularityScorer {
    /// Scorer with the production weights and the faithful past-event tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom weights.
    #[must_use]
    pub fn with_weights(weights: PopularWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Override the secondary tier's treatment of past events.
    #[must_use]
    pub const fn with_past_event_policy(mut self, policy: PastEventPolicy) -> Self {
        self.past_events = policy;
        self
    }

    /// The active weights.
    #[must_use]
    pub const fn weights(&self) -> &PopularWeights {
        &self.weights
    }
}

/// Evaluate the mutually exclusive fill-rate tiers. Zero-capacity events
/// contribute nothing rather than dividing by zero.
pub(crate) fn fill_tier_bonus(event: &Event, weights: &PopularWeights) -> Score {
    if event.total_tickets == 0 {
        return 0;
    }
    let scaled = u64::from(event.sold_tickets()) * 10;
    let total = u64::from(event.total_tickets);
    if scaled >= total * FILL_HIGH_TENTHS {
        weights.fill_high
    } else if scaled >= total * FILL_MID_TENTHS {
        weights.fill_mid
    } else if scaled >= total * FILL_LOW_TENTHS {
        weights.fill_low
    } else {
        0
    }
}

impl Ranker for PopularityScorer {
    fn score(&self, event: &Event, _context: &RankingContext, at: DateTime<Utc>) -> Score {
        let w = &self.weights;
        let mut score = 0;
        if event.is_active {
            score += w.active;
        }
        score += w.per_ticket_sold * u64::from(event.sold_tickets());
        score += fill_tier_bonus(event, w);
        score += proximity_score(
            event,
            at,
            ProximityWindow {
                imminent: w.imminent,
                upcoming: w.upcoming,
                past_events: self.past_events,
            },
        );
        score
    }
}
