// Catalog feed ingestion.
//
// The engine itself is agnostic to where the hotel array comes from; this
// module covers the common case of a supplier JSON feed handed over as a
// string. Raw feed records are deserialized as-is and then converted into
// validated domain values, with amenity tags canonicalized on the way in.
// Every invalid record is reported, not just the first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;
use crate::model::{Coordinates, Hotel, RoomType};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("invalid catalog record `{record_id}`: {errors:?}")]
    InvalidRecord {
        record_id: String,
        errors: Vec<ValidationError>,
    },
}

// Raw feed records, mirroring the supplier document field for field.

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogFeed {
    pub feed_id: String,
    pub currency: String,
    pub generated_at: String,
    pub hotels: Vec<CatalogHotel>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogHotel {
    pub hotel_id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<CatalogCoordinates>,
    pub category: u8,
    #[serde(default)]
    pub guest_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    pub price_per_night: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub distance_from_center_km: Option<f64>,
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rooms: Vec<CatalogRoom>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogCoordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogRoom {
    pub room_id: String,
    pub name: String,
    pub nightly_price: f64,
    pub max_occupancy: u32,
    pub available_count: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A hotel and its bookable rooms, as produced by feed ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelListing {
    pub hotel: Hotel,
    pub rooms: Vec<RoomType>,
}

impl TryFrom<CatalogHotel> for Hotel {
    type Error = Vec<ValidationError>;

    fn try_from(raw: CatalogHotel) -> Result<Self, Self::Error> {
        let hotel = Hotel {
            id: raw.hotel_id,
            name: raw.name,
            location: raw.location,
            coordinates: raw.coordinates.map(|c| Coordinates {
                lat: c.lat,
                lng: c.lng,
            }),
            star_rating: raw.category,
            guest_rating: raw.guest_rating,
            review_count: raw.review_count,
            price_per_night: raw.price_per_night,
            amenities: raw.amenities.into_iter().collect(),
            distance_from_center_km: raw.distance_from_center_km,
            listed_at: raw.listed_at,
        }
        .canonicalized();
        hotel.validate()?;
        Ok(hotel)
    }
}

impl TryFrom<CatalogRoom> for RoomType {
    type Error = Vec<ValidationError>;

    fn try_from(raw: CatalogRoom) -> Result<Self, Self::Error> {
        let room = RoomType {
            id: raw.room_id,
            name: raw.name,
            nightly_price: raw.nightly_price,
            max_occupancy: raw.max_occupancy,
            available_count: raw.available_count,
            features: raw.features,
        };
        room.validate()?;
        Ok(room)
    }
}

impl CatalogFeed {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    /// Converts every feed record into validated domain values. On failure,
    /// returns one `InvalidRecord` per offending hotel or room so a feed
    /// audit sees the whole picture.
    pub fn into_listings(self) -> Result<Vec<HotelListing>, Vec<CatalogError>> {
        let mut listings = Vec::with_capacity(self.hotels.len());
        let mut invalid = Vec::new();

        for mut raw in self.hotels {
            let hotel_id = raw.hotel_id.clone();
            let raw_rooms = std::mem::take(&mut raw.rooms);

            let hotel = match Hotel::try_from(raw) {
                Ok(hotel) => Some(hotel),
                Err(errors) => {
                    invalid.push(CatalogError::InvalidRecord {
                        record_id: hotel_id.clone(),
                        errors,
                    });
                    None
                }
            };

            let mut rooms = Vec::with_capacity(raw_rooms.len());
            for raw_room in raw_rooms {
                let record_id = format!("{}/{}", hotel_id, raw_room.room_id);
                match RoomType::try_from(raw_room) {
                    Ok(room) => rooms.push(room),
                    Err(errors) => invalid.push(CatalogError::InvalidRecord { record_id, errors }),
                }
            }

            if let Some(hotel) = hotel {
                listings.push(HotelListing { hotel, rooms });
            }
        }

        if invalid.is_empty() {
            Ok(listings)
        } else {
            Err(invalid)
        }
    }
}

// A small feed for inline testing.
pub const SMALL_SAMPLE_JSON: &str = r#"{
    "feed_id": "FEED-2025-06-11",
    "currency": "EUR",
    "generated_at": "2025-06-11T08:30:00Z",
    "hotels": [
        {
            "hotel_id": "39776757",
            "name": "Days Inn By Wyndham Fargo",
            "location": "Fargo",
            "category": 3,
            "guest_rating": 4.1,
            "review_count": 230,
            "price_per_night": 84.82,
            "amenities": ["Free WiFi", "Parking"],
            "distance_from_center_km": 3.4,
            "rooms": [
                {
                    "room_id": "ND1",
                    "name": "Room, Queen Bed",
                    "nightly_price": 84.82,
                    "max_occupancy": 2,
                    "available_count": 4,
                    "features": ["queen_bed"]
                }
            ]
        },
        {
            "hotel_id": "40112233",
            "name": "Hotel Mundial",
            "location": "Lisbon",
            "coordinates": { "lat": 38.7147, "lng": -9.1365 },
            "category": 4,
            "review_count": 1874,
            "price_per_night": 152.0,
            "amenities": ["wifi", "pool", "spa"],
            "listed_at": "2024-05-02T00:00:00Z",
            "rooms": [
                {
                    "room_id": "DBL",
                    "name": "Double Room",
                    "nightly_price": 152.0,
                    "max_occupancy": 2,
                    "available_count": 0
                },
                {
                    "room_id": "FAM",
                    "name": "Family Suite",
                    "nightly_price": 240.0,
                    "max_occupancy": 4,
                    "available_count": 2,
                    "features": ["sofa_bed", "city_view"]
                }
            ]
        }
    ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_convert_sample_feed() {
        let feed = CatalogFeed::parse(SMALL_SAMPLE_JSON).unwrap();
        assert_eq!(feed.feed_id, "FEED-2025-06-11");
        assert_eq!(feed.currency, "EUR");

        let listings = feed.into_listings().unwrap();
        assert_eq!(listings.len(), 2);

        let fargo = &listings[0];
        assert_eq!(fargo.hotel.id, "39776757");
        assert_eq!(fargo.hotel.star_rating, 3);
        // Amenity tags arrive canonicalized.
        assert!(fargo.hotel.amenities.contains("free_wifi"));
        assert!(fargo.hotel.amenities.contains("parking"));
        assert_eq!(fargo.rooms.len(), 1);

        let mundial = &listings[1];
        assert_eq!(mundial.hotel.guest_rating, None);
        assert!(mundial.hotel.listed_at.is_some());
        assert_eq!(mundial.rooms.len(), 2);
        assert_eq!(mundial.rooms[0].available_count, 0);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = CatalogFeed::parse("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::JsonParseError(_)));
    }

    #[test]
    fn test_every_invalid_record_is_reported() {
        let json = r#"{
            "feed_id": "F1",
            "currency": "EUR",
            "generated_at": "2025-06-11T08:30:00Z",
            "hotels": [
                {
                    "hotel_id": "bad-stars",
                    "name": "No Stars",
                    "location": "Nowhere",
                    "category": 0,
                    "price_per_night": 50.0
                },
                {
                    "hotel_id": "ok",
                    "name": "Fine Hotel",
                    "location": "Lisbon",
                    "category": 3,
                    "price_per_night": 90.0,
                    "rooms": [
                        {
                            "room_id": "BAD",
                            "name": "Free Room",
                            "nightly_price": 0.0,
                            "max_occupancy": 2,
                            "available_count": 1
                        }
                    ]
                }
            ]
        }"#;

        let errors = CatalogFeed::parse(json).unwrap().into_listings().unwrap_err();
        assert_eq!(errors.len(), 2);

        let ids: Vec<&str> = errors
            .iter()
            .map(|e| match e {
                CatalogError::InvalidRecord { record_id, .. } => record_id.as_str(),
                other => panic!("unexpected error: {:?}", other),
            })
            .collect();
        assert_eq!(ids, ["bad-stars", "ok/BAD"]);
    }
}
