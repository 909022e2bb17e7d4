//! The event record scored by the ranking engine.
//!
//! Events are produced by the backend and consumed read-only here. The
//! engine never validates counters at scoring time; derived accessors clamp
//! instead, so a malformed record degrades to the lowest-scoring tier rather
//! than failing a ranking pass.

use chrono::{DateTime, Utc};

use crate::time::MILLIS_PER_DAY;

/// A bookable (or previously bookable) event.
///
/// `starts_at` is `None` when the upstream payload carried a missing or
/// unparseable date; scorers treat such events as "not imminent".
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use marquee_core::Event;
///
/// let event = Event {
///     id: 1,
///     title: "Open-air cinema".to_owned(),
///     category: "Film".to_owned(),
///     city: "Lyon".to_owned(),
///     starts_at: Some(Utc::now()),
///     is_active: true,
///     available_tickets: 40,
///     total_tickets: 100,
/// };
/// assert_eq!(event.sold_tickets(), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Backend identifier, echoed into ranked output.
    pub id: u64,
    /// Display name.
    pub title: String,
    /// Free-form category label.
    pub category: String,
    /// City the event takes place in.
    pub city: String,
    /// Occurrence instant; `None` when the upstream date was absent or
    /// unparseable.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_starts_at")
    )]
    pub starts_at: Option<DateTime<Utc>>,
    /// Whether the event is currently bookable.
    pub is_active: bool,
    /// Tickets still on sale. May exceed `total_tickets` in malformed
    /// payloads; accessors clamp.
    pub available_tickets: u32,
    /// Total ticket capacity.
    pub total_tickets: u32,
}

impl Event {
    /// Number of tickets no longer available.
    ///
    /// Saturates at zero when `available_tickets` exceeds `total_tickets`,
    /// so malformed counters never produce a negative contribution.
    #[must_use]
    pub const fn sold_tickets(&self) -> u32 {
        self.total_tickets.saturating_sub(self.available_tickets)
    }

    /// Whether the event is live and has tickets left.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        self.is_active && self.available_tickets > 0
    }

    /// Proportion of capacity already sold, in `0.0..=1.0`.
    ///
    /// Returns `0.0` for zero-capacity events rather than dividing by zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "fill rate is a ratio of lossless u32-to-f64 conversions"
    )]
    pub fn fill_rate(&self) -> f64 {
        if self.total_tickets == 0 {
            return 0.0;
        }
        f64::from(self.sold_tickets()) / f64::from(self.total_tickets)
    }

    /// Signed days between `at` and the event's start.
    ///
    /// Positive values lie in the future, negative in the past. Returns
    /// `None` when no start instant is known.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, Utc};
    /// use marquee_core::Event;
    ///
    /// let now = Utc::now();
    /// let event = Event {
    ///     id: 1,
    ///     title: String::new(),
    ///     category: String::new(),
    ///     city: String::new(),
    ///     starts_at: Some(now + Duration::days(3)),
    ///     is_active: true,
    ///     available_tickets: 1,
    ///     total_tickets: 1,
    /// };
    /// let days = event.days_until(now).unwrap_or_default();
    /// assert!((days - 3.0).abs() < 0.01);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "callers want fractional days; day-scale magnitudes fit f64 exactly enough"
    )]
    pub fn days_until(&self, at: DateTime<Utc>) -> Option<f64> {
        self.starts_at.map(|starts| {
            let millis = starts.signed_duration_since(at).num_milliseconds();
            millis as f64 / MILLIS_PER_DAY as f64
        })
    }
}

/// Accept an RFC 3339 instant or a bare `YYYY-MM-DD` date (midnight UTC);
/// anything else degrades to `None` with a warning instead of failing the
/// whole payload.
#[cfg(feature = "serde")]
fn deserialize_starts_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_lenient_date))
}

#[cfg(feature = "serde")]
fn parse_lenient_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    log::warn!("ignoring unparseable event date {raw:?}");
    None
}
