//! Seed reviews
//!
//! Stands in for the platform sync job: a fixed collection written by
//! `reviewhub init`.

use chrono::{DateTime, Utc};

use crate::review::{Platform, Review, ReviewResponse};

struct SeedEntry {
    id: &'static str,
    customer: &'static str,
    platform: Platform,
    rating: u8,
    date: &'static str,
    content: &'static str,
    response: Option<(&'static str, &'static str)>,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: "rev-001",
        customer: "Sarah Johnson",
        platform: Platform::Google,
        rating: 5,
        date: "2024-05-28T14:22:00Z",
        content: "Absolutely loved the service! The staff was friendly and the food came out fast.",
        response: Some((
            "Thank you Sarah! We're thrilled you enjoyed your visit.",
            "2024-05-29T09:10:00Z",
        )),
    },
    SeedEntry {
        id: "rev-002",
        customer: "Michael Chen",
        platform: Platform::Yelp,
        rating: 4,
        date: "2024-05-25T19:05:00Z",
        content: "Great food, slightly long wait on a Friday night. Would come back.",
        response: None,
    },
    SeedEntry {
        id: "rev-003",
        customer: "Emily Rodriguez",
        platform: Platform::Facebook,
        rating: 2,
        date: "2024-05-20T12:40:00Z",
        content: "My order was wrong and the manager was slow to fix it.",
        response: None,
    },
    SeedEntry {
        id: "rev-004",
        customer: "David Kim",
        platform: Platform::TripAdvisor,
        rating: 5,
        date: "2024-05-18T20:15:00Z",
        content: "Best dinner of our trip. The dessert menu is a must.",
        response: Some((
            "So glad you made us part of your trip, David!",
            "2024-05-19T08:00:00Z",
        )),
    },
    SeedEntry {
        id: "rev-005",
        customer: "Jessica Patel",
        platform: Platform::Google,
        rating: 3,
        date: "2024-05-11T13:30:00Z",
        content: "Decent lunch spot. Service was fine, prices a bit high.",
        response: None,
    },
    SeedEntry {
        id: "rev-006",
        customer: "Robert Wilson",
        platform: Platform::Yelp,
        rating: 1,
        date: "2024-05-02T18:45:00Z",
        content: "Cold food and a rude server. Very disappointing.",
        response: Some((
            "We're sorry, Robert. Please reach out so we can make this right.",
            "2024-05-03T10:20:00Z",
        )),
    },
    SeedEntry {
        id: "rev-007",
        customer: "Amanda Garcia",
        platform: Platform::Google,
        rating: 5,
        date: "2024-04-27T11:00:00Z",
        content: "The brunch is fantastic and the coffee is excellent.",
        response: None,
    },
    SeedEntry {
        id: "rev-008",
        customer: "Thomas Brown",
        platform: Platform::Other,
        rating: 4,
        date: "2024-04-15T17:25:00Z",
        content: "Found this place through a friend. Friendly staff and cozy atmosphere.",
        response: None,
    },
    SeedEntry {
        id: "rev-009",
        customer: "Olivia Martinez",
        platform: Platform::Facebook,
        rating: 5,
        date: "2024-04-03T21:10:00Z",
        content: "Celebrated a birthday here, the team went above and beyond!",
        response: Some((
            "Happy birthday, Olivia! Thanks for celebrating with us.",
            "2024-04-04T09:45:00Z",
        )),
    },
    SeedEntry {
        id: "rev-010",
        customer: "James Lee",
        platform: Platform::TripAdvisor,
        rating: 3,
        date: "2024-03-22T15:50:00Z",
        content: "Good location, average food. The wait staff seemed overwhelmed.",
        response: None,
    },
    SeedEntry {
        id: "rev-011",
        customer: "Sophia Nguyen",
        platform: Platform::Google,
        rating: 4,
        date: "2024-03-09T10:05:00Z",
        content: "Fresh ingredients and a nice patio. Parking is tricky.",
        response: None,
    },
    SeedEntry {
        id: "rev-012",
        customer: "Daniel Taylor",
        platform: Platform::Yelp,
        rating: 2,
        date: "2024-02-14T20:30:00Z",
        content: "Valentine's dinner was rushed and the food was cold.",
        response: None,
    },
];

fn parse(ts: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Utc))
        .expect("seed timestamps are valid RFC 3339")
}

/// Returns the seed collection.
pub fn seed_reviews() -> Vec<Review> {
    SEED.iter()
        .map(|entry| {
            let mut review = Review::with_id(
                entry.id,
                entry.customer,
                entry.platform,
                entry.rating,
                parse(entry.date),
                entry.content,
            );
            if let Some((text, date)) = entry.response {
                review.response = Some(ReviewResponse {
                    text: text.to_string(),
                    date: parse(date),
                });
            }
            review
        })
        .collect()
}
