//! Discount Allocator
//!
//! Computes a percent or flat discount against the gross base of its scope
//! and spreads it over the buckets of that scope in proportion to their
//! gross share. Buckets outside the scope are never reduced.

use crate::money::{clamp, percent_of, round2, sanitize_amount, sanitize_percent};
use rust_decimal::prelude::*;
use shared::models::{DiscountMode, DiscountScope, DiscountSpec};

const ROOM: usize = 0;
const EXTRAS_TAXED: usize = 1;
const EXTRAS_UNTAXED: usize = 2;

/// Gross (pre-discount) amounts per bucket
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiscountBuckets {
    pub room: Decimal,
    pub extras_taxed: Decimal,
    pub extras_untaxed: Decimal,
}

impl DiscountBuckets {
    pub fn new(room: Decimal, extras_taxed: Decimal, extras_untaxed: Decimal) -> Self {
        Self {
            room,
            extras_taxed,
            extras_untaxed,
        }
    }

    pub fn total(&self) -> Decimal {
        self.room + self.extras_taxed + self.extras_untaxed
    }

    /// Gross base a discount of `scope` is computed against
    pub fn scope_base(&self, scope: DiscountScope) -> Decimal {
        let grosses = self.as_array();
        scope_mask(scope)
            .iter()
            .zip(grosses)
            .filter(|(in_scope, _)| **in_scope)
            .map(|(_, gross)| gross.max(Decimal::ZERO))
            .sum()
    }

    fn as_array(&self) -> [Decimal; 3] {
        [self.room, self.extras_taxed, self.extras_untaxed]
    }
}

fn scope_mask(scope: DiscountScope) -> [bool; 3] {
    match scope {
        DiscountScope::Total => [true, true, true],
        DiscountScope::Room => [true, false, false],
        DiscountScope::Extras => [false, true, true],
    }
}

/// Result of allocating a discount across the buckets
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiscountAllocation {
    pub scope_base: Decimal,
    pub discount_amount: Decimal,
    pub room_discount: Decimal,
    pub extras_taxed_discount: Decimal,
    pub extras_untaxed_discount: Decimal,
    pub net_room: Decimal,
    pub net_extras_taxed: Decimal,
    pub net_extras_untaxed: Decimal,
}

impl DiscountAllocation {
    /// No discount: nets equal grosses
    pub fn none(gross: &DiscountBuckets) -> Self {
        Self {
            net_room: gross.room.max(Decimal::ZERO),
            net_extras_taxed: gross.extras_taxed.max(Decimal::ZERO),
            net_extras_untaxed: gross.extras_untaxed.max(Decimal::ZERO),
            ..Self::default()
        }
    }

    pub fn net_total(&self) -> Decimal {
        self.net_room + self.net_extras_taxed + self.net_extras_untaxed
    }
}

/// Discount amount for a scope base, clamped to `[0, scope_base]`
///
/// Percent discounts are always taken from the gross base, never chained.
pub fn discount_amount(scope_base: Decimal, spec: &DiscountSpec) -> Decimal {
    if scope_base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let raw = match spec.mode {
        DiscountMode::Percent => percent_of(scope_base, sanitize_percent(spec.value)),
        DiscountMode::Flat => round2(sanitize_amount(spec.value)),
    };
    clamp(raw, scope_base)
}

/// Allocate a discount over the gross buckets
///
/// Each in-scope bucket takes `discount * bucket_gross / scope_base`, rounded
/// to 2 dp; the last in-scope bucket with a non-zero gross absorbs the
/// rounding remainder so the shares sum exactly to the discount amount.
pub fn allocate_discount(gross: &DiscountBuckets, spec: Option<&DiscountSpec>) -> DiscountAllocation {
    let Some(spec) = spec else {
        return DiscountAllocation::none(gross);
    };

    let scope_base = gross.scope_base(spec.scope);
    let amount = discount_amount(scope_base, spec);
    if amount.is_zero() {
        return DiscountAllocation {
            scope_base,
            ..DiscountAllocation::none(gross)
        };
    }

    let grosses = gross.as_array().map(|g| g.max(Decimal::ZERO));
    let mask = scope_mask(spec.scope);
    let last = (0..grosses.len())
        .rev()
        .find(|&i| mask[i] && grosses[i] > Decimal::ZERO);

    let mut shares = [Decimal::ZERO; 3];
    let mut allocated = Decimal::ZERO;
    for i in 0..grosses.len() {
        if !mask[i] || grosses[i].is_zero() || Some(i) == last {
            continue;
        }
        let share = match amount.checked_mul(grosses[i]) {
            Some(product) => round2(product / scope_base),
            // ratio <= 1, cannot overflow
            None => round2(amount * (grosses[i] / scope_base)),
        };
        shares[i] = share;
        allocated += share;
    }
    if let Some(i) = last {
        shares[i] = clamp(amount - allocated, grosses[i]);
    }

    let net = |i: usize| (grosses[i] - shares[i]).max(Decimal::ZERO);

    DiscountAllocation {
        scope_base,
        discount_amount: amount,
        room_discount: shares[ROOM],
        extras_taxed_discount: shares[EXTRAS_TAXED],
        extras_untaxed_discount: shares[EXTRAS_UNTAXED],
        net_room: net(ROOM),
        net_extras_taxed: net(EXTRAS_TAXED),
        net_extras_untaxed: net(EXTRAS_UNTAXED),
    }
}
