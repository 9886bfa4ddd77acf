//! Review platform tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ParseError;

/// External review source.
///
/// Serialized as its lowercase tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
    Yelp,
    Facebook,
    TripAdvisor,
    Other,
}

impl Platform {
    /// All platforms in display order
    pub const ALL: [Platform; 5] = [
        Platform::Google,
        Platform::Yelp,
        Platform::Facebook,
        Platform::TripAdvisor,
        Platform::Other,
    ];

    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Google => "google",
            Platform::Yelp => "yelp",
            Platform::Facebook => "facebook",
            Platform::TripAdvisor => "tripadvisor",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == tag)
            .ok_or_else(|| ParseError::UnknownPlatform(s.to_string()))
    }
}
