// Domain model for the hotel search core.
// Value types only: construction-time validation, equality, no behavior that
// touches I/O or shared state. Catalog data is immutable for the lifetime of
// a search session.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, Violations};

/// Canonical identifier for an amenity tag. Comparison throughout the engine
/// is on this form, never on display labels: trimmed, lowercased, runs of
/// whitespace and separators collapsed to a single underscore.
pub fn canonical_tag(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub star_rating: u8,
    pub guest_rating: Option<f64>,
    pub review_count: u32,
    pub price_per_night: f64,
    pub amenities: BTreeSet<String>,
    pub distance_from_center_km: Option<f64>,
    pub listed_at: Option<DateTime<Utc>>,
}

impl Hotel {
    /// Checks every construction invariant and reports all violations at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut v = Violations::new();

        v.check(!self.id.trim().is_empty(), ValidationError::EmptyField("id"));
        v.check(
            !self.name.trim().is_empty(),
            ValidationError::EmptyField("name"),
        );
        v.check(
            (1..=5).contains(&self.star_rating),
            ValidationError::StarRatingOutOfRange(self.star_rating),
        );
        if let Some(rating) = self.guest_rating {
            v.check(
                rating.is_finite() && (0.0..=5.0).contains(&rating),
                ValidationError::GuestRatingOutOfRange(rating),
            );
        }
        v.check(
            self.price_per_night.is_finite() && self.price_per_night > 0.0,
            ValidationError::NonPositiveAmount {
                field: "price_per_night",
                value: self.price_per_night,
            },
        );
        if let Some(distance) = self.distance_from_center_km {
            v.check(
                distance.is_finite() && distance >= 0.0,
                ValidationError::NegativeNumber {
                    field: "distance_from_center_km",
                    value: distance,
                },
            );
        }

        v.into_result(())
    }

    /// Returns the hotel with its amenity tags rewritten to canonical form.
    /// Idempotent; catalog ingestion applies this once per record.
    pub fn canonicalized(mut self) -> Self {
        self.amenities = self.amenities.iter().map(|tag| canonical_tag(tag)).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub nightly_price: f64,
    pub max_occupancy: u32,
    pub available_count: u32,
    pub features: Vec<String>,
}

impl RoomType {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut v = Violations::new();

        v.check(!self.id.trim().is_empty(), ValidationError::EmptyField("id"));
        v.check(
            !self.name.trim().is_empty(),
            ValidationError::EmptyField("name"),
        );
        v.check(
            self.nightly_price.is_finite() && self.nightly_price > 0.0,
            ValidationError::NonPositiveAmount {
                field: "nightly_price",
                value: self.nightly_price,
            },
        );
        v.check(self.max_occupancy >= 1, ValidationError::ZeroOccupancy);

        v.into_result(())
    }
}

/// What the guest asked for: destination, stay dates, party size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub rooms: u32,
}

impl SearchCriteria {
    pub fn new(
        destination: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: u32,
        children: u32,
        rooms: u32,
    ) -> Result<Self, Vec<ValidationError>> {
        let criteria = Self {
            destination: destination.into(),
            check_in,
            check_out,
            adults,
            children,
            rooms,
        };
        criteria.validate()?;
        Ok(criteria)
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut v = Violations::new();

        v.check(
            !self.destination.trim().is_empty(),
            ValidationError::EmptyField("destination"),
        );
        v.check(
            self.check_out > self.check_in,
            ValidationError::CheckOutNotAfterCheckIn {
                check_in: self.check_in,
                check_out: self.check_out,
            },
        );
        v.check(self.adults >= 1, ValidationError::NoAdults);
        v.check(self.rooms >= 1, ValidationError::NoRooms);

        v.into_result(())
    }

    /// Calendar-day difference between check-out and check-in. At least 1 for
    /// any criteria that passed validation.
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    /// Total party size. Widened to u64 so the sum cannot overflow even at
    /// the extremes of the unvalidated-from-above counts.
    pub fn guests(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }
}

/// Requested result ordering. Each key maps to one deterministic comparator;
/// ties break by hotel id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Recommended,
    PriceAsc,
    PriceDesc,
    GuestRating,
    StarRating,
    Distance,
    Popularity,
    Newest,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Recommended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hotel() -> Hotel {
        Hotel {
            id: "h1".to_string(),
            name: "Harbor View".to_string(),
            location: "Lisbon".to_string(),
            coordinates: Some(Coordinates {
                lat: 38.7223,
                lng: -9.1393,
            }),
            star_rating: 4,
            guest_rating: Some(4.3),
            review_count: 812,
            price_per_night: 145.0,
            amenities: ["WiFi", "Pool"].iter().map(|s| s.to_string()).collect(),
            distance_from_center_km: Some(1.2),
            listed_at: None,
        }
    }

    #[test]
    fn test_valid_hotel_passes() {
        assert!(sample_hotel().validate().is_ok());
    }

    #[test]
    fn test_hotel_reports_every_violation() {
        let mut hotel = sample_hotel();
        hotel.star_rating = 0;
        hotel.guest_rating = Some(7.5);
        hotel.price_per_night = -80.0;

        let errors = hotel.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::StarRatingOutOfRange(0)));
        assert!(errors.contains(&ValidationError::GuestRatingOutOfRange(7.5)));
        assert!(errors.contains(&ValidationError::NonPositiveAmount {
            field: "price_per_night",
            value: -80.0,
        }));
    }

    #[test]
    fn test_canonical_tag_normalizes_case_and_separators() {
        assert_eq!(canonical_tag("Free WiFi"), "free_wifi");
        assert_eq!(canonical_tag("  free-wifi "), "free_wifi");
        assert_eq!(canonical_tag("FREE__WIFI"), "free_wifi");
        assert_eq!(canonical_tag("pool"), "pool");
    }

    #[test]
    fn test_canonicalized_is_idempotent() {
        let hotel = sample_hotel().canonicalized();
        let again = hotel.clone().canonicalized();
        assert_eq!(hotel.amenities, again.amenities);
        assert!(hotel.amenities.contains("wifi"));
        assert!(hotel.amenities.contains("pool"));
    }

    #[test]
    fn test_room_type_requires_positive_price_and_occupancy() {
        let room = RoomType {
            id: "r1".to_string(),
            name: "Double".to_string(),
            nightly_price: 0.0,
            max_occupancy: 0,
            available_count: 3,
            features: vec!["queen_bed".to_string()],
        };

        let errors = room.validate().unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroOccupancy));
        assert!(errors.contains(&ValidationError::NonPositiveAmount {
            field: "nightly_price",
            value: 0.0,
        }));
    }

    #[test]
    fn test_criteria_nights_is_calendar_day_difference() {
        let criteria = SearchCriteria::new(
            "Lisbon",
            NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            2,
            1,
            1,
        )
        .unwrap();
        assert_eq!(criteria.nights(), 3);
        assert_eq!(criteria.guests(), 3);
    }

    #[test]
    fn test_criteria_collects_all_violations() {
        let errors = SearchCriteria::new(
            "",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            0,
            0,
            0,
        )
        .unwrap_err();

        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyField("destination")));
        assert!(errors.contains(&ValidationError::NoAdults));
        assert!(errors.contains(&ValidationError::NoRooms));
    }

    #[test]
    fn test_sort_key_serde_round_trip() {
        let key: SortKey = serde_json::from_str("\"price_asc\"").unwrap();
        assert_eq!(key, SortKey::PriceAsc);
        assert_eq!(serde_json::to_string(&SortKey::Recommended).unwrap(), "\"recommended\"");
    }
}
