//! Filter and sort criteria
//!
//! Typed replacements for loosely shaped filter objects. Parsing from
//! strings happens here, at the boundary; the engine only sees these types.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::review::{ParseError, Platform, MAX_RATING, MIN_RATING};

/// Inclusive rating bounds.
///
/// `min > max` is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingRange {
    pub min: u8,
    pub max: u8,
}

impl RatingRange {
    /// Creates a range without validating it
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Returns true if the rating lies within the bounds
    pub fn contains(&self, rating: u8) -> bool {
        self.min <= rating && rating <= self.max
    }

    /// Returns true if this is the full 1..=5 range
    pub fn is_full(&self) -> bool {
        self.min <= MIN_RATING && self.max >= MAX_RATING
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self {
            min: MIN_RATING,
            max: MAX_RATING,
        }
    }
}

/// Inclusive date window with an optional upper end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Window starting at `from` with no upper end
    pub fn since(from: DateTime<Utc>) -> Self {
        Self { from, to: None }
    }

    /// Window from `from` to `to`, both inclusive
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to: Some(to) }
    }

    /// Returns true if the timestamp lies within the window
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        if *date < self.from {
            return false;
        }
        match self.to {
            Some(to) => *date <= to,
            None => true,
        }
    }
}

/// Declarative, conjunctive filter over reviews.
///
/// The default value matches every review with a valid rating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Platforms to include; empty means all
    pub platforms: HashSet<Platform>,
    /// Inclusive rating bounds
    pub rating_range: RatingRange,
    /// Optional date window
    pub date_range: Option<DateRange>,
    /// Case-insensitive content substring; empty means none
    pub keyword: String,
}

impl FilterSpec {
    /// Creates the match-everything filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    pub fn with_rating_range(mut self, min: u8, max: u8) -> Self {
        self.rating_range = RatingRange::new(min, max);
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Returns true if any dimension narrows the result
    pub fn is_active(&self) -> bool {
        !self.platforms.is_empty()
            || !self.rating_range.is_full()
            || self.date_range.is_some()
            || !self.keyword.is_empty()
    }
}

/// Ordering applied to a review list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Newest first
    #[default]
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Highest rating first
    RatingDesc,
    /// Lowest rating first
    RatingAsc,
    /// By platform tag, newest first within a platform
    Platform,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::DateDesc,
        SortOption::DateAsc,
        SortOption::RatingDesc,
        SortOption::RatingAsc,
        SortOption::Platform,
    ];

    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::DateDesc => "date-desc",
            SortOption::DateAsc => "date-asc",
            SortOption::RatingDesc => "rating-desc",
            SortOption::RatingAsc => "rating-asc",
            SortOption::Platform => "platform",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == tag)
            .ok_or_else(|| ParseError::UnknownSortOption(s.to_string()))
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// A bare date resolves to the start of the day, or to its last
/// nanosecond when `end_of_day` is set, so an inclusive upper bound
/// covers the whole day.
pub fn parse_timestamp(input: &str, end_of_day: bool) -> Result<DateTime<Utc>, ParseError> {
    let input = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(input.to_string()))?;
    let naive = if end_of_day {
        date.and_hms_nano_opt(23, 59, 59, 999_999_999)
    } else {
        date.and_hms_opt(0, 0, 0)
    }
    .ok_or_else(|| ParseError::InvalidDate(input.to_string()))?;

    Ok(Utc.from_utc_datetime(&naive))
}
