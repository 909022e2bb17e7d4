//! Score events for a viewer and surface.
//!
//! The [`Ranker`] trait assigns a relevance score to an [`Event`] given a
//! [`RankingContext`] and an explicit clock sample.

use chrono::{DateTime, Utc};

use crate::{Event, RankingContext};

/// A non-negative additive relevance score.
///
/// Scores are sums of independent weighted contributions; callers order
/// events by descending score.
pub type Score = u64;

/// Calculate a relevance score for an event.
///
/// Higher scores indicate a better fit for the target surface.
/// Implementations must be thread-safe (`Send` + `Sync`) so ranking can run
/// from any task, and must be pure: for a fixed `(event, context, at)` they
/// return the same score on every call. The clock is an explicit argument so
/// a caller ranking a batch samples it once and reuses it across the batch.
///
/// Scoring is infallible. Malformed records (clamped counters, missing
/// dates) contribute zero to the affected term instead of raising an error.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use marquee_core::{Event, Ranker, RankingContext, Score};
///
/// struct ActiveOnly;
///
/// impl Ranker for ActiveOnly {
///     fn score(&self, event: &Event, _context: &RankingContext, _at: DateTime<Utc>) -> Score {
///         if event.is_active { 1 } else { 0 }
///     }
/// }
/// ```
pub trait Ranker: Send + Sync {
    /// Return a score for `event` as seen by `context` at instant `at`.
    fn score(&self, event: &Event, context: &RankingContext, at: DateTime<Utc>) -> Score;
}
