// Hotel search & booking query engine: a pure, synchronous, in-memory core
// for a listing UI. Every operation is a function from inputs to outputs;
// nothing in here performs I/O or holds shared mutable state.

pub mod booking;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod pricing;
pub mod sort;

// Re-export key types for convenience
pub use booking::{validate_booking, BookingDraft, GuestContact, ValidatedBooking};
pub use catalog::{CatalogError, CatalogFeed, HotelListing};
pub use engine::SearchEngine;
pub use error::ValidationError;
pub use filter::{filter, FilterSet, PriceRange};
pub use model::{canonical_tag, Coordinates, Hotel, RoomType, SearchCriteria, SortKey};
pub use pricing::{
    compute_price, PriceBreakdown, PricingPolicy, DEFAULT_TAX_RATE, STANDARD_ROOM_FEE,
};
pub use sort::{
    recommended_score, sort, sort_with_weights, RankingWeights, DEFAULT_RANKING_WEIGHTS,
};
