//! Property-based invariants for the scorers.
//!
//! These complement the scenario tests with invariants that must hold for
//! all valid inputs:
//!
//! - **Purity:** a fixed `(event, context, at)` always scores the same.
//! - **Monotone sales:** more sold tickets never rank lower on the
//!   popularity surface.
//! - **Banner bound:** the default banner weights cap the score at 90.
//! - **Batch order:** `rank_events` returns every event, scored
//!   non-increasingly.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use marquee_core::{CategoryFilter, Event, Ranker, RankingContext};
use marquee_scorer::{BannerScorer, ForYouScorer, PopularityScorer, rank_events};
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Concert", "Sport", "Theatre", "Food"];
const CITIES: &[&str] = &["Lagos", "Porto", "Osaka", "Quito"];
const FILTER_LABELS: &[&str] = &["all", "Concert", "Sport"];

/// A fixed clock keeps generated cases reproducible across runs.
fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0)
        .single()
        .expect("valid instant")
}

prop_compose! {
    fn arb_event()(
        id in any::<u64>(),
        category in proptest::sample::select(CATEGORIES),
        city in proptest::sample::select(CITIES),
        offset_days in proptest::option::of(-60i64..=60),
        is_active in any::<bool>(),
        available in 0u32..=500,
        total in 0u32..=500,
    ) -> Event {
        Event {
            id,
            title: format!("Event {id}"),
            category: category.to_owned(),
            city: city.to_owned(),
            starts_at: offset_days.map(|days| base_instant() + Duration::days(days)),
            is_active,
            available_tickets: available,
            total_tickets: total,
        }
    }
}

prop_compose! {
    fn arb_context()(
        filter in proptest::sample::select(FILTER_LABELS),
        city in proptest::option::of(proptest::sample::select(CITIES)),
    ) -> RankingContext {
        let context = RankingContext::new()
            .with_category_filter(CategoryFilter::from_label(filter));
        match city {
            Some(name) => context.with_user_city(name),
            None => context,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn scoring_is_pure(event in arb_event(), context in arb_context()) {
        let at = base_instant();
        let scorers: [Box<dyn Ranker>; 3] = [
            Box::new(BannerScorer::new()),
            Box::new(ForYouScorer::new()),
            Box::new(PopularityScorer::new()),
        ];
        for scorer in &scorers {
            prop_assert_eq!(
                scorer.score(&event, &context, at),
                scorer.score(&event, &context, at)
            );
        }
    }

    #[test]
    fn an_extra_sale_never_ranks_lower_on_popular(
        event in arb_event(),
        (available, total) in (1u32..=500).prop_flat_map(|total| (1u32..=total, Just(total))),
    ) {
        let mut quieter = event;
        quieter.available_tickets = available;
        quieter.total_tickets = total;
        let mut busier = quieter.clone();
        busier.available_tickets = available - 1;

        let scorer = PopularityScorer::new();
        let context = RankingContext::new();
        let at = base_instant();
        prop_assert!(scorer.score(&busier, &context, at) >= scorer.score(&quieter, &context, at));
    }

    #[test]
    fn banner_scores_stay_within_the_contract_bound(event in arb_event()) {
        let score = BannerScorer::new().score(&event, &RankingContext::new(), base_instant());
        prop_assert!(score <= 90);
    }

    #[test]
    fn batches_rank_complete_and_ordered(
        events in proptest::collection::vec(arb_event(), 0..20),
        context in arb_context(),
    ) {
        let scorer = ForYouScorer::new();
        let ranked = rank_events(&scorer, &events, &context, base_instant());
        prop_assert_eq!(ranked.len(), events.len());
        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.score >= second.score);
            }
        }
    }
}
