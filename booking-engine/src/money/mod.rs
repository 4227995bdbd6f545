//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for storage/serialization. Every intermediate monetary value passes through
//! [`round2`] so drift never accumulates across additions.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest single input amount (1e15); products with a night count stay far
/// below `Decimal::MAX`
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated at the boundary.
/// If NaN/Infinity somehow reaches here, logs a warning and returns ZERO
/// so one bad form field cannot poison the whole invoice.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::warn!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert an input amount that must not be negative
///
/// Negative and non-finite values become zero; values above [`MAX_AMOUNT`]
/// are capped.
#[inline]
pub fn sanitize_amount(value: f64) -> Decimal {
    let amount = to_decimal(value);
    if amount.is_sign_negative() {
        if !amount.is_zero() {
            tracing::warn!(value = ?value, "Negative amount in monetary calculation, defaulting to zero");
        }
        return Decimal::ZERO;
    }
    if amount > MAX_AMOUNT {
        tracing::warn!(value = ?value, "Amount above limit in monetary calculation, capping");
        return MAX_AMOUNT;
    }
    amount
}

/// Convert a percentage input, clamped to `[0, 100]`
#[inline]
pub fn sanitize_percent(value: f64) -> Decimal {
    let pct = sanitize_amount(value);
    if pct > Decimal::ONE_HUNDRED {
        tracing::warn!(value = ?value, "Percentage above 100, capping");
        return Decimal::ONE_HUNDRED;
    }
    pct
}

/// `a * b`, or zero (with a warning) when the product overflows
#[inline]
pub fn checked_product(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        tracing::warn!(%a, %b, "Overflow in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value).to_f64().unwrap_or_default()
}

/// Round to 2 decimal places, half-up
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest whole currency unit, half-up
#[inline]
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// `round2(base * pct / 100)`
#[inline]
pub fn percent_of(base: Decimal, pct: Decimal) -> Decimal {
    round2(checked_product(base, pct) / Decimal::ONE_HUNDRED)
}

/// `min(amount, max)`, floored at zero
#[inline]
pub fn clamp(amount: Decimal, max: Decimal) -> Decimal {
    amount.min(max).max(Decimal::ZERO)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
