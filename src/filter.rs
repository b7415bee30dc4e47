// Filter evaluator: applies a FilterSet to a hotel collection.
// Relative order of surviving hotels is preserved; an empty FilterSet is the
// identity. A malformed FilterSet is rejected before any filtering happens so
// a bad range can never silently return an empty or full list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, Violations};
use crate::model::{canonical_tag, Hotel};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    /// Open-ended upper bound when `None`.
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub price_range: Option<PriceRange>,
    pub min_star_rating: Option<u8>,
    /// Empty means "no constraint", not "exclude all". Tags are compared on
    /// their canonical form, not the display label.
    pub required_amenities: BTreeSet<String>,
}

impl FilterSet {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut v = Violations::new();

        if let Some(range) = &self.price_range {
            v.check(
                range.min.is_finite() && range.min >= 0.0,
                ValidationError::NegativeNumber {
                    field: "price_range.min",
                    value: range.min,
                },
            );
            if let Some(max) = range.max {
                if !max.is_finite() {
                    v.push(ValidationError::NegativeNumber {
                        field: "price_range.max",
                        value: max,
                    });
                } else {
                    v.check(
                        range.min <= max,
                        ValidationError::InvertedPriceRange {
                            min: range.min,
                            max,
                        },
                    );
                }
            }
        }
        if let Some(stars) = self.min_star_rating {
            v.check(
                (1..=5).contains(&stars),
                ValidationError::StarRatingOutOfRange(stars),
            );
        }

        v.into_result(())
    }

    /// True when no field is set, i.e. `filter` would be the identity.
    pub fn is_empty(&self) -> bool {
        self.price_range.is_none()
            && self.min_star_rating.is_none()
            && self.required_amenities.is_empty()
    }

    fn matches(&self, hotel: &Hotel, required: &BTreeSet<String>) -> bool {
        if !self.price_range.map_or(true, |range| {
            hotel.price_per_night >= range.min
                && range.max.map_or(true, |max| hotel.price_per_night <= max)
        }) {
            return false;
        }

        if !self
            .min_star_rating
            .map_or(true, |min| hotel.star_rating >= min)
        {
            return false;
        }

        if !required.is_empty() {
            let tags: BTreeSet<String> =
                hotel.amenities.iter().map(|tag| canonical_tag(tag)).collect();
            if !required.is_subset(&tags) {
                return false;
            }
        }

        true
    }
}

/// Returns the subset of `hotels` satisfying every active filter predicate,
/// in their original relative order.
pub fn filter(hotels: &[Hotel], filters: &FilterSet) -> Result<Vec<Hotel>, Vec<ValidationError>> {
    filters.validate()?;
    Ok(apply(hotels, filters))
}

// Applies an already-validated FilterSet. The orchestrator validates criteria
// and filters in one combined pass and then comes in through here.
pub(crate) fn apply(hotels: &[Hotel], filters: &FilterSet) -> Vec<Hotel> {
    let required: BTreeSet<String> = filters
        .required_amenities
        .iter()
        .map(|tag| canonical_tag(tag))
        .collect();

    hotels
        .iter()
        .filter(|hotel| filters.matches(hotel, &required))
        .cloned()
        .collect()
}
