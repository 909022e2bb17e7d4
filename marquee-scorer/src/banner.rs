//! Hero-banner scoring.

use chrono::{DateTime, Utc};
use marquee_core::{Event, Ranker, RankingContext, Score};

use crate::proximity::{PastEventPolicy, ProximityWindow, proximity_score};

/// Tunable weights for the banner surface.
///
/// The defaults carry the production contract: a fully qualifying event (live,
/// in stock, within a week, more than twenty tickets sold) scores 90.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerWeights {
    /// Bonus for a live event.
    pub active: Score,
    /// Bonus when tickets remain on sale.
    pub stock_remaining: Score,
    /// Bonus for events within the next seven days.
    pub imminent: Score,
    /// Bonus for events between eight and thirty days out.
    pub upcoming: Score,
    /// Bonus once sales exceed `demand_threshold`.
    pub high_demand: Score,
    /// Sold-ticket count the demand bonus requires to be exceeded.
    pub demand_threshold: u32,
}

impl Default for BannerWeights {
    fn default() -> Self {
        Self {
            active: 30,
            stock_remaining: 30,
            imminent: 20,
            upcoming: 10,
            high_demand: 10,
            demand_threshold: 20,
        }
    }
}

/// Picks the most "bannerable" events: live, available, imminent, popular.
///
/// Active status and remaining stock are two independent bonuses here, unlike
/// the personalized feed's single bookable gate. The secondary proximity tier
/// is bounded on both sides, so past events collect no proximity bonus at
/// all.
#[derive(Debug, Clone, Copy, Default)]
pub struct BannerScorer {
    weights: BannerWeights,
}

impl BannerScorer {
    /// Scorer with the production weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom weights.
    #[must_use]
    pub const fn with_weights(weights: BannerWeights) -> Self {
        Self { weights }
    }

    /// The active weights.
    #[must_use]
    pub const fn weights(&self) -> &BannerWeights {
        &self.weights
    }
}

impl Ranker for BannerScorer {
    fn score(&self, event: &Event, _context: &RankingContext, at: DateTime<Utc>) -> Score {
        let w = &self.weights;
        let mut score = 0;
        if event.is_active {
            score += w.active;
        }
        if event.available_tickets > 0 {
            score += w.stock_remaining;
        }
        score += proximity_score(
            event,
            at,
            ProximityWindow {
                imminent: w.imminent,
                upcoming: w.upcoming,
                past_events: PastEventPolicy::Excluded,
            },
        );
        if event.sold_tickets() > w.demand_threshold {
            score += w.high_demand;
        }
        score
    }
}
