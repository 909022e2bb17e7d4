//! Identifiers for the three ranked UI surfaces.
//!
//! # Examples
//! ```
//! use marquee_core::Surface;
//!
//! assert_eq!(Surface::Banner.as_str(), "banner");
//! assert_eq!(Surface::ForYou.to_string(), "for-you");
//! ```

use thiserror::Error;

/// A UI surface that presents a ranked list of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The hero banner at the top of the home feed.
    Banner,
    /// The personalized "for you" feed.
    ForYou,
    /// The popularity-ordered section.
    Popular,
}

/// Error returned when parsing an unknown surface name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown surface '{0}', expected banner, for-you, or popular")]
pub struct ParseSurfaceError(String);

impl Surface {
    /// Return the surface as its canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::ForYou => "for-you",
            Self::Popular => "popular",
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Surface {
    type Err = ParseSurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banner" => Ok(Self::Banner),
            "for-you" | "foryou" => Ok(Self::ForYou),
            "popular" => Ok(Self::Popular),
            _ => Err(ParseSurfaceError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("banner", Surface::Banner)]
    #[case("for-you", Surface::ForYou)]
    #[case("FORYOU", Surface::ForYou)]
    #[case("popular", Surface::Popular)]
    fn parses_known_names(#[case] input: &str, #[case] expected: Surface) {
        assert_eq!(Surface::from_str(input), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_names() {
        let err = Surface::from_str("trending").unwrap_err();
        assert!(err.to_string().contains("trending"));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Surface::Popular.to_string(), Surface::Popular.as_str());
    }
}
