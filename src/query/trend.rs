//! Rating trend analytics
//!
//! Buckets reviews by calendar period and compares the current average
//! rating with the average as of one period ago.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::Serialize;

use crate::review::{ParseError, Review};

use super::stats::mean_rating;

/// Calendar bucket size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    /// ISO week, starting Monday
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TrendPeriod {
    pub const ALL: [TrendPeriod; 4] = [
        TrendPeriod::Week,
        TrendPeriod::Month,
        TrendPeriod::Quarter,
        TrendPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendPeriod::Week => "week",
            TrendPeriod::Month => "month",
            TrendPeriod::Quarter => "quarter",
            TrendPeriod::Year => "year",
        }
    }

    /// First day of the bucket containing `date`
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        let start = match self {
            TrendPeriod::Week => {
                return date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            }
            TrendPeriod::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
            TrendPeriod::Quarter => {
                let first_month = (date.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), first_month, 1)
            }
            TrendPeriod::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
        };
        start.unwrap_or(date)
    }

    /// The instant one period before `now`
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let months = match self {
            TrendPeriod::Week => return now - Duration::days(7),
            TrendPeriod::Month => 1,
            TrendPeriod::Quarter => 3,
            TrendPeriod::Year => 12,
        };
        now.checked_sub_months(Months::new(months)).unwrap_or(now)
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrendPeriod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        TrendPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == tag)
            .ok_or_else(|| ParseError::UnknownPeriod(s.to_string()))
    }
}

/// Average rating within one bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period_start: NaiveDate,
    pub review_count: usize,
    pub average_rating: f64,
}

/// Per-bucket average ratings, oldest bucket first.
///
/// Empty buckets are omitted.
pub fn rating_trend(reviews: &[Review], period: TrendPeriod) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Review>> = BTreeMap::new();
    for review in reviews {
        let key = period.bucket_start(review.date.date_naive());
        buckets.entry(key).or_default().push(review);
    }

    buckets
        .into_iter()
        .map(|(period_start, members)| TrendPoint {
            period_start,
            review_count: members.len(),
            average_rating: mean_rating(members.into_iter()),
        })
        .collect()
}

/// Change of the average rating over the last period.
///
/// `current` averages every review; `previous` averages the reviews dated
/// before `period.cutoff(now)` and is 0 when there are none.
pub fn rating_change(reviews: &[Review], period: TrendPeriod, now: DateTime<Utc>) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    let cutoff = period.cutoff(now);
    let current = mean_rating(reviews.iter());
    let previous = mean_rating(reviews.iter().filter(|r| r.date < cutoff));

    current - previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::criteria::parse_timestamp;
    use crate::review::Platform;

    fn make_review(id: &str, rating: u8, date: &str) -> Review {
        Review::with_id(
            id,
            "C",
            Platform::Google,
            rating,
            parse_timestamp(date, false).unwrap(),
            "text",
        )
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_bucket_start() {
        // 2024-05-15 is a Wednesday
        let date = day("2024-05-15");
        assert_eq!(TrendPeriod::Week.bucket_start(date), day("2024-05-13"));
        assert_eq!(TrendPeriod::Month.bucket_start(date), day("2024-05-01"));
        assert_eq!(TrendPeriod::Quarter.bucket_start(date), day("2024-04-01"));
        assert_eq!(TrendPeriod::Year.bucket_start(date), day("2024-01-01"));
    }

    #[test]
    fn test_monthly_trend() {
        let reviews = vec![
            make_review("a", 4, "2024-02-20"),
            make_review("b", 2, "2024-01-03"),
            make_review("c", 5, "2024-02-01"),
            make_review("d", 4, "2024-01-28"),
        ];

        let trend = rating_trend(&reviews, TrendPeriod::Month);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].period_start, day("2024-01-01"));
        assert_eq!(trend[0].review_count, 2);
        assert!((trend[0].average_rating - 3.0).abs() < 1e-9);
        assert_eq!(trend[1].period_start, day("2024-02-01"));
        assert!((trend[1].average_rating - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_trend_empty() {
        assert!(rating_trend(&[], TrendPeriod::Week).is_empty());
    }

    #[test]
    fn test_rating_change() {
        let now = parse_timestamp("2024-06-15", false).unwrap();
        let reviews = vec![
            make_review("old", 3, "2024-04-01"),
            make_review("new", 5, "2024-06-10"),
        ];

        // current = 4.0, previous (before 2024-05-15) = 3.0
        let change = rating_change(&reviews, TrendPeriod::Month, now);
        assert!((change - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_change_without_history() {
        let now = parse_timestamp("2024-06-15", false).unwrap();
        let reviews = vec![make_review("new", 4, "2024-06-14")];
        assert!((rating_change(&reviews, TrendPeriod::Week, now) - 4.0).abs() < 1e-9);
        assert_eq!(rating_change(&[], TrendPeriod::Week, now), 0.0);
    }

    #[test]
    fn test_cutoff() {
        let now = parse_timestamp("2024-03-31", false).unwrap();
        assert_eq!(
            TrendPeriod::Month.cutoff(now),
            parse_timestamp("2024-02-29", false).unwrap()
        );
        assert_eq!(
            TrendPeriod::Week.cutoff(now),
            parse_timestamp("2024-03-24", false).unwrap()
        );
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("Quarter".parse::<TrendPeriod>().unwrap(), TrendPeriod::Quarter);
        assert!("decade".parse::<TrendPeriod>().is_err());
    }
}
