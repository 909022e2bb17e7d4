//! Personalized "for you" feed scoring.

use chrono::{DateTime, Utc};
use marquee_core::{Event, Ranker, RankingContext, Score};

use crate::proximity::{PastEventPolicy, ProximityWindow, proximity_score};

/// Tunable weights for the personalized feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForYouWeights {
    /// Bonus when the event is live *and* has tickets left. One conjunctive
    /// gate, not two independent signals: a sold-out live event is no more
    /// recommendable than an inactive one.
    pub bookable: Score,
    /// Bonus when the viewer's concrete category filter matches.
    pub category_match: Score,
    /// Bonus when the viewer's detected city matches.
    pub city_match: Score,
    /// Bonus for events within the next seven days.
    pub imminent: Score,
    /// Bonus for the secondary proximity tier (within 30 days).
    pub upcoming: Score,
    /// Bonus once sales exceed `demand_threshold`.
    pub high_demand: Score,
    /// Sold-ticket count the demand bonus requires to be exceeded.
    pub demand_threshold: u32,
}

impl Default for ForYouWeights {
    fn default() -> Self {
        Self {
            bookable: 30,
            category_match: 25,
            city_match: 20,
            imminent: 15,
            upcoming: 8,
            high_demand: 10,
            demand_threshold: 20,
        }
    }
}

/// Ranks the personalized feed for one viewer's filter and city.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForYouScorer {
    weights: ForYouWeights,
    past_events: PastEventPolicy,
}

impl ForYouScorer {
    /// Scorer with the production weights and the faithful past-event tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom weights.
    #[must_use]
    pub fn with_weights(weights: ForYouWeights) -> Self {
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
    pub const fn weights(&self) -> &ForYouWeights {
        &self.weights
    }
}

impl Ranker for ForYouScorer {
    fn score(&self, event: &Event, context: &RankingContext, at: DateTime<Utc>) -> Score {
        let w = &self.weights;
        let mut score = 0;
        if event.is_bookable() {
            score += w.bookable;
        }
        if context.category_filter().matches(&event.category) {
            score += w.category_match;
        }
        if context.matches_city(&event.city) {
            score += w.city_match;
        }
        score += proximity_score(
            event,
            at,
            ProximityWindow {
                imminent: w.imminent,
                upcoming: w.upcoming,
                past_events: self.past_events,
            },
        );
        if event.sold_tickets() > w.demand_threshold {
            score += w.high_demand;
        }
        score
    }
}
