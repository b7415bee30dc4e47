// Error taxonomy for the query engine.
// Every fallible entry point reports the complete list of violated rules,
// not just the first one, so a caller can surface all form errors in one pass.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("`{field}` must be a positive finite amount, got {value}")]
    NonPositiveAmount { field: &'static str, value: f64 },

    #[error("`{field}` must be a non-negative finite number, got {value}")]
    NegativeNumber { field: &'static str, value: f64 },

    #[error("`{field}` exceeds the maximum allowed amount ({max}), got {value}")]
    AmountTooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("star rating must be between 1 and 5, got {0}")]
    StarRatingOutOfRange(u8),

    #[error("guest rating must be between 0.0 and 5.0, got {0}")]
    GuestRatingOutOfRange(f64),

    #[error("check-out {check_out} must be after check-in {check_in}")]
    CheckOutNotAfterCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("at least one adult is required")]
    NoAdults,

    #[error("at least one room is required")]
    NoRooms,

    #[error("room max occupancy must be at least 1")]
    ZeroOccupancy,

    #[error("price range minimum {min} exceeds maximum {max}")]
    InvertedPriceRange { min: f64, max: f64 },

    #[error("tax rate must be within [0, 1), got {0}")]
    TaxRateOutOfRange(f64),

    #[error("night count must be at least 1, got {0}")]
    NoNights(u32),

    #[error("{guests} guest(s) across {rooms} room(s) exceeds per-room occupancy of {max_occupancy}")]
    ExceedsRoomOccupancy {
        guests: u64,
        rooms: u32,
        max_occupancy: u32,
    },

    #[error("{requested} room(s) requested but only {available} available")]
    NotEnoughRoomsAvailable { requested: u32, available: u32 },

    #[error("email address `{0}` is not valid")]
    InvalidEmail(String),
}

/// Collects rule checks and hands back either the value or every violation
/// found along the way.
#[derive(Debug, Default)]
pub struct Violations(Vec<ValidationError>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn check(&mut self, ok: bool, err: ValidationError) {
        if !ok {
            self.0.push(err);
        }
    }

    pub fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }

    pub fn extend(&mut self, errs: Vec<ValidationError>) {
        self.0.extend(errs);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result<T>(self, value: T) -> Result<T, Vec<ValidationError>> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self.0)
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.0
    }

    pub fn into_result_with<T>(
        self,
        value: impl FnOnce() -> T,
    ) -> Result<T, Vec<ValidationError>> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(self.0)
        }
    }
}
