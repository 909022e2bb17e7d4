//! Scenario coverage for the popularity scorer.

use chrono::{DateTime, Duration, Utc};
use marquee_core::{Event, Ranker, RankingContext};
use marquee_scorer::{PastEventPolicy, PopularityScorer};
use rstest::rstest;

fn event(now: DateTime<Utc>, days_ahead: Option<i64>, available: u32, total: u32) -> Event {
    Event {
        id: 30,
        title: "Street Food Week".to_owned(),
        category: "Food".to_owned(),
        city: "Penang".to_owned(),
        starts_at: days_ahead.map(|d| now + Duration::days(d)),
        is_active: true,
        available_tickets: available,
        total_tickets: total,
    }
}

fn score(subject: &Event, now: DateTime<Utc>) -> u64 {
    PopularityScorer::new().score(subject, &RankingContext::new(), now)
}

#[rstest]
// 180 of 200 sold, two days out: 20 + 2*180 + 30 (90% full) + 15.
fn hot_seller_scores_four_twenty_five() {
    let now = Utc::now();
    let subject = event(now, Some(2), 20, 200);
    assert_eq!(score(&subject, now), 425);
}

#[rstest]
// The linear sold term dominates even for inactive, undated events.
fn sales_volume_dominates() {
    let now = Utc::now();
    let mut subject = event(now, None, 500, 1000);
    subject.is_active = false;
    // 2*500 + 20 (half full).
    assert_eq!(score(&subject, now), 1020);
}

#[rstest]
fn zero_capacity_never_panics_and_fills_nothing() {
    let now = Utc::now();
    let subject = event(now, Some(2), 0, 0);
    // Active 20 + imminent 15; no sold term, no fill tier.
    assert_eq!(score(&subject, now), 35);
}

#[rstest]
fn more_sales_never_rank_lower() {
    let now = Utc::now();
    let quieter = event(now, Some(2), 30, 100);
    let busier = event(now, Some(2), 20, 100);
    assert!(score(&busier, now) > score(&quieter, now));
}

#[rstest]
// Same unbounded-lower-end secondary tier as the personalized feed.
fn past_events_keep_the_secondary_tier_by_default() {
    let now = Utc::now();
    let subject = event(now, Some(-10), 50, 100);
    // 20 + 2*50 + 20 (half full) + 8.
    assert_eq!(score(&subject, now), 148);

    let strict = PopularityScorer::new().with_past_event_policy(PastEventPolicy::Excluded);
    assert_eq!(strict.score(&subject, &RankingContext::new(), now), 140);
}
