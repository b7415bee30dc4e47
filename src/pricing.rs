// Pricing calculator: derives the total stay cost from nightly rate, night
// count, room count, tax rate, and a fixed per-room service fee.
//
// All arithmetic runs in `Decimal` so the additivity invariant
// `total == base + tax + fee` holds exactly at minor-unit (2 dp) precision.
// Rates arrive as f64 from the catalog and are converted at the edge.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, Violations};

/// Currency minor-unit precision (cents).
const DECIMAL_PLACES: u32 = 2;

/// Upper bound on any single monetary input. Catalog rates live orders of
/// magnitude below this; anything above it is treated as corrupt input.
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Tax rate carried over from the listing UI. A policy value, not a derived
/// business rule.
pub const DEFAULT_TAX_RATE: f64 = 0.12;

/// Flat service fee charged per room, in currency units.
pub const STANDARD_ROOM_FEE: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub nights: u32,
    pub base_amount: Decimal,
    pub tax_amount: Decimal,
    pub fee_amount: Decimal,
    pub total: Decimal,
}

/// Named, overridable tax/fee policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub tax_rate: f64,
    pub per_room_fee: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            per_room_fee: STANDARD_ROOM_FEE,
        }
    }
}

impl PricingPolicy {
    /// Convenience wrapper over `compute_price` using this policy's tax and
    /// fee values.
    pub fn breakdown(
        &self,
        nightly_rate: f64,
        nights: u32,
        room_count: u32,
    ) -> Result<PriceBreakdown, Vec<ValidationError>> {
        compute_price(nightly_rate, nights, room_count, self.tax_rate, self.per_room_fee)
    }
}

// Inputs are bounds-checked before conversion, so a failed conversion cannot
// occur on the paths that reach this.
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Computes a `PriceBreakdown` for a stay.
///
/// `base = nightly_rate * nights * room_count`, `tax = base * tax_rate`
/// rounded half-even to the currency minor unit, `fee = per_room_fee *
/// room_count`, `total = base + tax + fee`. Pure; cheap enough to re-run on
/// every input change without memoization.
pub fn compute_price(
    nightly_rate: f64,
    nights: u32,
    room_count: u32,
    tax_rate: f64,
    per_room_fee: f64,
) -> Result<PriceBreakdown, Vec<ValidationError>> {
    let mut v = Violations::new();

    v.check(nights >= 1, ValidationError::NoNights(nights));
    v.check(room_count >= 1, ValidationError::NoRooms);
    v.check(
        nightly_rate.is_finite() && nightly_rate >= 0.0,
        ValidationError::NegativeNumber {
            field: "nightly_rate",
            value: nightly_rate,
        },
    );
    v.check(
        nightly_rate <= MAX_AMOUNT,
        ValidationError::AmountTooLarge {
            field: "nightly_rate",
            value: nightly_rate,
            max: MAX_AMOUNT,
        },
    );
    v.check(
        tax_rate.is_finite() && (0.0..1.0).contains(&tax_rate),
        ValidationError::TaxRateOutOfRange(tax_rate),
    );
    v.check(
        per_room_fee.is_finite() && per_room_fee >= 0.0,
        ValidationError::NegativeNumber {
            field: "per_room_fee",
            value: per_room_fee,
        },
    );
    v.check(
        per_room_fee <= MAX_AMOUNT,
        ValidationError::AmountTooLarge {
            field: "per_room_fee",
            value: per_room_fee,
            max: MAX_AMOUNT,
        },
    );

    v.into_result(())?;

    let base_amount = (to_decimal(nightly_rate) * Decimal::from(nights) * Decimal::from(room_count))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    let tax_amount = (base_amount * to_decimal(tax_rate))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    let fee_amount = (to_decimal(per_room_fee) * Decimal::from(room_count))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);

    Ok(PriceBreakdown {
        nights,
        base_amount,
        tax_amount,
        fee_amount,
        total: base_amount + tax_amount + fee_amount,
    })
}
