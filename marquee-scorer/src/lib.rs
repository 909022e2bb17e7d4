//! Event scorers for Marquee's three ranked surfaces.
//!
//! Each surface gets its own [`Ranker`] implementation with independently
//! tunable weights whose defaults carry the production scoring contract:
//! - [`BannerScorer`] favours live, in-stock, imminent, well-selling events
//!   for the hero banner.
//! - [`ForYouScorer`] adds category and city affinity for the personalized
//!   feed, gating the availability bonus on a single "bookable" conjunction.
//! - [`PopularityScorer`] is dominated by absolute ticket sales, with
//!   fill-rate and recency as secondary signals.
//!
//! Scores are additive integers; callers rank a fetched batch with
//! [`rank_events`], which samples the clock once and breaks ties by fetch
//! order.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use marquee_core::{RankingContext, Surface};
//! use marquee_scorer::{rank_events, scorer_for};
//!
//! let events = Vec::new();
//! let scorer = scorer_for(Surface::Popular);
//! let ranked = rank_events(scorer.as_ref(), &events, &RankingContext::new(), Utc::now());
//! assert!(ranked.is_empty());
//! ```

#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use marquee_core::{Event, Ranker, RankingContext, Score, Surface};

mod banner;
mod for_you;
mod popular;
mod proximity;

pub use banner::{BannerScorer, BannerWeights};
pub use for_you::{ForYouScorer, ForYouWeights};
pub use popular::{PopularWeights, PopularityScorer};
pub use proximity::PastEventPolicy;

/// An event paired with the score it earned for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEvent<'a> {
    /// The scored event.
    pub event: &'a Event,
    /// The score it earned.
    pub score: Score,
}

/// Score a fetched batch and order it for presentation.
///
/// The clock is sampled once by the caller and reused for every event so one
/// pass is internally consistent. The sort is stable and descending: equal
/// scores keep their fetch order, which is the tie-break downstream list
/// renderers rely on.
#[must_use]
pub fn rank_events<'a>(
    ranker: &dyn Ranker,
    events: &'a [Event],
    context: &RankingContext,
    at: DateTime<Utc>,
) -> Vec<RankedEvent<'a>> {
    let mut ranked: Vec<RankedEvent<'a>> = events
        .iter()
        .map(|event| RankedEvent {
            event,
            score: ranker.score(event, context, at),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The default-configured scorer for a surface.
#[must_use]
pub fn scorer_for(surface: Surface) -> Box<dyn Ranker> {
    match surface {
        Surface::Banner => Box::new(BannerScorer::new()),
        Surface::ForYou => Box::new(ForYouScorer::new()),
        Surface::Popular => Box::new(PopularityScorer::new()),
    }
}
