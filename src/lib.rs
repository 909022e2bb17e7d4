//! Facade crate for the Marquee event-ranking engine.
//!
//! Re-exports the core domain types alongside the three surface scorers so
//! callers can depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use marquee_engine::{Event, PopularityScorer, RankingContext, rank_events};
//!
//! let events = vec![Event {
//!     id: 1,
//!     title: "Rooftop Session".to_owned(),
//!     category: "Concert".to_owned(),
//!     city: "Athens".to_owned(),
//!     starts_at: None,
//!     is_active: true,
//!     available_tickets: 30,
//!     total_tickets: 120,
//! }];
//! let ranked = rank_events(
//!     &PopularityScorer::new(),
//!     &events,
//!     &RankingContext::new(),
//!     Utc::now(),
//! );
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use marquee_core::{
    CategoryFilter, Event, ParseSurfaceError, Ranker, RankingContext, Score, Surface,
};
pub use marquee_scorer::{
    BannerScorer, BannerWeights, ForYouScorer, ForYouWeights, PastEventPolicy, PopularWeights,
    PopularityScorer, RankedEvent, rank_events, scorer_for,
};
