// Sort engine: orders a hotel collection by a SortKey.
// Every comparator is total and deterministic; ties break by hotel id
// ascending so two calls with the same input always produce the same order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{Hotel, SortKey};

/// Weights behind the "recommended" composite score. These are a product
/// policy carried over from the listing UI, not a derived business rule, so
/// they stay named and overridable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub guest_rating: f64,
    pub star_rating: f64,
    pub review_count: f64,
}

pub const DEFAULT_RANKING_WEIGHTS: RankingWeights = RankingWeights {
    guest_rating: 0.4,
    star_rating: 0.3,
    review_count: 0.0001,
};

impl Default for RankingWeights {
    fn default() -> Self {
        DEFAULT_RANKING_WEIGHTS
    }
}

/// Composite score for the `Recommended` key. An unrated hotel scores as if
/// its guest rating were 0.
pub fn recommended_score(hotel: &Hotel, weights: &RankingWeights) -> f64 {
    weights.guest_rating * hotel.guest_rating.unwrap_or(0.0)
        + weights.star_rating * f64::from(hotel.star_rating)
        + weights.review_count * f64::from(hotel.review_count)
}

/// Returns a new list ordered by `key` with the default ranking weights.
/// Never mutates the input.
pub fn sort(hotels: &[Hotel], key: SortKey) -> Vec<Hotel> {
    sort_with_weights(hotels, key, &DEFAULT_RANKING_WEIGHTS)
}

/// As `sort`, with a caller-supplied recommended-score policy.
pub fn sort_with_weights(hotels: &[Hotel], key: SortKey, weights: &RankingWeights) -> Vec<Hotel> {
    let mut ordered = hotels.to_vec();
    ordered.sort_by(|a, b| compare(a, b, key, weights));
    ordered
}

fn compare(a: &Hotel, b: &Hotel, key: SortKey, weights: &RankingWeights) -> Ordering {
    let by_id = |ord: Ordering| ord.then_with(|| a.id.cmp(&b.id));

    match key {
        SortKey::PriceAsc => by_id(a.price_per_night.total_cmp(&b.price_per_night)),
        SortKey::PriceDesc => by_id(b.price_per_night.total_cmp(&a.price_per_night)),
        SortKey::StarRating => by_id(b.star_rating.cmp(&a.star_rating)),
        SortKey::Popularity => by_id(b.review_count.cmp(&a.review_count)),
        SortKey::GuestRating => by_id(match (a.guest_rating, b.guest_rating) {
            // Rated hotels first, best rating leading; unrated sort last.
            (Some(ra), Some(rb)) => rb.total_cmp(&ra),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::Distance => by_id(match (a.distance_from_center_km, b.distance_from_center_km) {
            (Some(da), Some(db)) => da.total_cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::Newest => match (a.listed_at, b.listed_at) {
            (Some(ta), Some(tb)) => by_id(tb.cmp(&ta)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            // When the catalog supplies no listing timestamps this key is an
            // identity sort: equal under a stable sort keeps the input order.
            (None, None) => Ordering::Equal,
        },
        SortKey::Recommended => by_id(
            recommended_score(b, weights).total_cmp(&recommended_score(a, weights)),
        ),
    }
}
