//! Per-request viewer context consumed by the personalized scorer.

/// The viewer's category filter.
///
/// The upstream client encodes "no filter" as the literal label `all`; that
/// sentinel becomes [`CategoryFilter::All`] at this boundary so scorers never
/// compare against a magic string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category selected; never grants a match bonus.
    #[default]
    All,
    /// A concrete category label to match events against.
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from the raw label the client sends.
    ///
    /// The literal `all` (exactly, as the client sends it) maps to
    /// [`CategoryFilter::All`]; anything else is a concrete category.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::All);
    /// assert!(CategoryFilter::from_label("Concert").matches("Concert"));
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "all" {
            Self::All
        } else {
            Self::Category(label.to_owned())
        }
    }

    /// Whether a concrete filter equals `category`.
    ///
    /// [`CategoryFilter::All`] matches nothing: with no filter selected there
    /// is no category signal to reward.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => false,
            Self::Category(selected) => selected == category,
        }
    }
}

/// Viewer context for one ranking pass. Built per call, never persisted.
///
/// # Examples
/// ```
/// use marquee_core::{CategoryFilter, RankingContext};
///
/// let context = RankingContext::new()
///     .with_category_filter(CategoryFilter::from_label("Sport"))
///     .with_user_city("Nouakchott");
/// assert!(context.category_filter().matches("Sport"));
/// assert!(context.matches_city("Nouakchott"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankingContext {
    category_filter: CategoryFilter,
    user_city: Option<String>,
}

impl RankingContext {
    /// Context with no filter and no detected city.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the category filter while returning `self` for chaining.
    #[must_use]
    pub fn with_category_filter(mut self, filter: CategoryFilter) -> Self {
        self.category_filter = filter;
        self
    }

    /// Set the viewer's detected city while returning `self` for chaining.
    #[must_use]
    pub fn with_user_city(mut self, city: impl Into<String>) -> Self {
        self.user_city = Some(city.into());
        self
    }

    /// The active category filter.
    #[must_use]
    pub const fn category_filter(&self) -> &CategoryFilter {
        &self.category_filter
    }

    /// The viewer's detected city, if any.
    #[must_use]
    pub fn user_city(&self) -> Option<&str> {
        self.user_city.as_deref()
    }

    /// Whether the viewer's city is known and equals `city`.
    #[must_use]
    pub fn matches_city(&self, city: &str) -> bool {
        self.user_city.as_deref() == Some(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sentinel_label_clears_the_filter() {
        assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::All);
    }

    #[rstest]
    // The sentinel is exact; a capitalised "All" is a real category label.
    fn sentinel_is_case_sensitive() {
        assert!(CategoryFilter::from_label("All").matches("All"));
    }

    #[rstest]
    #[case(CategoryFilter::All, "Concert", false)]
    #[case(CategoryFilter::from_label("Concert"), "Concert", true)]
    #[case(CategoryFilter::from_label("Concert"), "Theatre", false)]
    fn filter_matching(
        #[case] filter: CategoryFilter,
        #[case] category: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(category), expected);
    }

    #[rstest]
    fn city_match_requires_a_known_city() {
        let anonymous = RankingContext::new();
        assert!(!anonymous.matches_city("Nantes"));

        let located = RankingContext::new().with_user_city("Nantes");
        assert!(located.matches_city("Nantes"));
        assert!(!located.matches_city("Rennes"));
    }
}
