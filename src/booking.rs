// Booking lifecycle validator and the draft a checkout flow works on.
//
// Every rule is evaluated, never short-circuited, so a form can render all
// violations in one pass. The capacity rule is per room:
// ceil((adults + children) / rooms) <= room.max_occupancy.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, Violations};
use crate::model::{Hotel, RoomType, SearchCriteria};
use crate::pricing::{PriceBreakdown, PricingPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl GuestContact {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut v = Violations::new();

        v.check(
            !self.first_name.trim().is_empty(),
            ValidationError::EmptyField("first_name"),
        );
        v.check(
            !self.last_name.trim().is_empty(),
            ValidationError::EmptyField("last_name"),
        );
        if self.email.trim().is_empty() {
            v.push(ValidationError::EmptyField("email"));
        } else if !self.email.contains('@') {
            v.push(ValidationError::InvalidEmail(self.email.clone()));
        }

        v.into_result(())
    }
}

/// A booking that passed every lifecycle rule, carrying the derived night
/// count alongside the original inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedBooking {
    pub criteria: SearchCriteria,
    pub room: RoomType,
    pub nights: u32,
}

/// Validates a prospective booking against a room.
///
/// All checks run regardless of earlier failures: date ordering, per-room
/// occupancy, room availability, and the at-least-one-adult rule.
pub fn validate_booking(
    criteria: &SearchCriteria,
    room: &RoomType,
) -> Result<ValidatedBooking, Vec<ValidationError>> {
    let mut v = Violations::new();

    if let Err(errors) = criteria.validate() {
        v.extend(errors);
    }

    if criteria.rooms >= 1 {
        // Integer ceiling in u64; guests == 0 is fine (NoAdults is reported
        // above) and the widened sum cannot overflow at any u32 inputs.
        let rooms = u64::from(criteria.rooms);
        let per_room = (criteria.guests() + rooms - 1) / rooms;
        v.check(
            per_room <= u64::from(room.max_occupancy),
            ValidationError::ExceedsRoomOccupancy {
                guests: criteria.guests(),
                rooms: criteria.rooms,
                max_occupancy: room.max_occupancy,
            },
        );
    }

    v.check(
        criteria.rooms <= room.available_count,
        ValidationError::NotEnoughRoomsAvailable {
            requested: criteria.rooms,
            available: room.available_count,
        },
    );

    v.into_result_with(|| ValidatedBooking {
        criteria: criteria.clone(),
        room: room.clone(),
        nights: criteria.nights(),
    })
}

/// What the checkout flow holds between room selection and finalization.
/// Only the pricing-relevant parts ever change, and only by re-running the
/// validator and the pricing calculator together via `reprice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub hotel: Hotel,
    pub room: RoomType,
    pub criteria: SearchCriteria,
    pub contact: GuestContact,
    pub breakdown: PriceBreakdown,
    policy: PricingPolicy,
}

impl BookingDraft {
    pub fn new(
        hotel: Hotel,
        room: RoomType,
        criteria: SearchCriteria,
        contact: GuestContact,
        policy: PricingPolicy,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut v = Violations::new();
        if let Err(errors) = contact.validate() {
            v.extend(errors);
        }

        let validated = match validate_booking(&criteria, &room) {
            Ok(validated) => validated,
            Err(errors) => {
                v.extend(errors);
                return Err(v.into_errors());
            }
        };
        v.into_result(())?;

        let breakdown = policy.breakdown(room.nightly_price, validated.nights, criteria.rooms)?;

        Ok(Self {
            hotel,
            room,
            criteria,
            contact,
            breakdown,
            policy,
        })
    }

    /// Re-validates and re-prices the draft after a date or occupancy change.
    /// The draft is untouched when the new criteria fail validation.
    pub fn reprice(
        &mut self,
        criteria: SearchCriteria,
    ) -> Result<&PriceBreakdown, Vec<ValidationError>> {
        let validated = validate_booking(&criteria, &self.room)?;
        self.breakdown =
            self.policy
                .breakdown(self.room.nightly_price, validated.nights, criteria.rooms)?;
        self.criteria = criteria;
        Ok(&self.breakdown)
    }
}
