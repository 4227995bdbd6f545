//! Billing Calculator
//!
//! Orchestrates room pricing, extras, the discount allocator and the tax
//! engine into an [`InvoiceSummary`]. The whole summary is recomputed from
//! scratch for every input change.

use crate::money::{checked_product, round2, round_whole, sanitize_amount, sanitize_percent, to_f64};
use rust_decimal::prelude::*;
use shared::models::{
    DiscountSpec, ExtraService, InvoiceLine, InvoiceRequest, InvoiceSummary, LineKind,
    PriceSource, Stay, TaxSpec,
};

use super::discount::{DiscountBuckets, allocate_discount};
use super::tax::{TaxSplit, forward_tax, reverse_tax};

/// Display name of the room line when a special price is used
pub const SPECIAL_RATE_LINE_NAME: &str = "Special rate";

/// Room charge before discount
#[derive(Debug, Clone, PartialEq)]
struct RoomCharge {
    name: String,
    rate_per_night: Decimal,
    base: Decimal,
    /// Tax already contained in a special price, scaled to the stay
    carried_tax: Option<TaxSplit>,
}

fn room_charge(price_source: &PriceSource, nights: u32, rate_percent: Decimal) -> RoomCharge {
    let n = Decimal::from(nights);
    match price_source {
        PriceSource::Plan(plan) => {
            let rate = sanitize_amount(plan.price_per_night);
            RoomCharge {
                name: plan.code.clone(),
                rate_per_night: rate,
                base: round2(checked_product(rate, n)),
                carried_tax: None,
            }
        }
        PriceSource::Special(special) => {
            // Reverse per night, then scale, so rounding never compounds across nights
            let per_night = reverse_tax(sanitize_amount(special.final_price_per_night), rate_percent);
            RoomCharge {
                name: SPECIAL_RATE_LINE_NAME.to_string(),
                rate_per_night: per_night.base,
                base: round2(checked_product(per_night.base, n)),
                carried_tax: Some(per_night.split().times(nights)),
            }
        }
    }
}

/// Compute the full invoice for a stay
///
/// Steps:
/// 1. room base from the plan rate, or reverse-derived from a special price
/// 2. extras into taxed / untaxed buckets by each line's own GST flag
/// 3. discount allocated proportionally over the buckets of its scope
/// 4. tax per bucket: room by `tax.enabled` (special price carries its own tax),
///    extras by their flag
/// 5. optional round-off to the nearest whole unit, then balance after advance
///
/// Non-finite or negative amounts are treated as zero. Amounts are capped at
/// [`MAX_AMOUNT`](crate::money::MAX_AMOUNT) and percentages at 100, so no
/// finite input can overflow the arithmetic.
pub fn compute_invoice(
    stay: &Stay,
    price_source: &PriceSource,
    extras: &[ExtraService],
    discount: Option<&DiscountSpec>,
    tax: &TaxSpec,
    round_off: bool,
    advance_paid: f64,
) -> InvoiceSummary {
    let nights = stay.nights();
    let rate_percent = sanitize_percent(tax.rate_percent);

    // 1. Room
    let room = room_charge(price_source, nights, rate_percent);
    let special_pricing = room.carried_tax.is_some();
    let room_taxable = special_pricing || tax.enabled;

    let mut lines = Vec::with_capacity(extras.len() + 1);
    lines.push(InvoiceLine {
        kind: LineKind::Room,
        name: room.name.clone(),
        quantity: nights,
        unit_price: to_f64(room.rate_per_night),
        amount: to_f64(room.base),
        taxable: room_taxable,
    });

    // 2. Extras
    let mut extras_taxed = Decimal::ZERO;
    let mut extras_untaxed = Decimal::ZERO;
    for service in extras {
        let days = service.billable_days(nights);
        let unit_price = sanitize_amount(service.price_per_day);
        let amount = round2(checked_product(unit_price, Decimal::from(days)));
        if service.gst_enabled {
            extras_taxed += amount;
        } else {
            extras_untaxed += amount;
        }
        lines.push(InvoiceLine {
            kind: LineKind::Extra,
            name: service.name.clone(),
            quantity: days,
            unit_price: to_f64(unit_price),
            amount: to_f64(amount),
            taxable: service.gst_enabled,
        });
    }

    // 3. Discount
    let gross = DiscountBuckets::new(room.base, extras_taxed, extras_untaxed);
    let alloc = allocate_discount(&gross, discount);

    // 4. Tax
    let room_tax = match room.carried_tax {
        Some(carried) => carried,
        None if tax.enabled => forward_tax(alloc.net_room, rate_percent),
        None => TaxSplit::default(),
    };
    let extras_tax = forward_tax(alloc.net_extras_taxed, rate_percent);
    let gst = room_tax + extras_tax;

    let taxable_amount = if room_taxable {
        alloc.net_room + alloc.net_extras_taxed
    } else {
        alloc.net_extras_taxed
    };

    // 5. Totals
    let subtotal = alloc.net_total();
    let pre_round_total = subtotal + gst.total();
    let (grand_total, round_off_amount) = if round_off {
        let rounded = round_whole(pre_round_total);
        (rounded, rounded - pre_round_total)
    } else {
        (pre_round_total, Decimal::ZERO)
    };
    let advance = sanitize_amount(advance_paid);
    let balance_due = round2(grand_total - advance);

    tracing::debug!(
        nights,
        special_pricing,
        gross_base = %gross.total(),
        discount = %alloc.discount_amount,
        gst = %gst.total(),
        grand_total = %grand_total,
        balance_due = %balance_due,
        "Invoice computed"
    );

    InvoiceSummary {
        nights,
        room_rate_per_night: to_f64(room.rate_per_night),
        special_pricing,
        room_base: to_f64(room.base),
        extras_taxable_base: to_f64(extras_taxed),
        extras_non_taxable_base: to_f64(extras_untaxed),
        gross_base: to_f64(gross.total()),
        discount_amount: to_f64(alloc.discount_amount),
        net_room: to_f64(alloc.net_room),
        net_extras_taxable: to_f64(alloc.net_extras_taxed),
        net_extras_non_taxable: to_f64(alloc.net_extras_untaxed),
        subtotal: to_f64(subtotal),
        taxable_amount: to_f64(taxable_amount),
        cgst: to_f64(gst.cgst),
        sgst: to_f64(gst.sgst),
        gst_total: to_f64(gst.total()),
        pre_round_total: to_f64(pre_round_total),
        round_off_amount: to_f64(round_off_amount),
        grand_total: to_f64(grand_total),
        advance_paid: to_f64(advance),
        balance_due: to_f64(balance_due),
        lines,
    }
}

/// Compute the invoice for a complete form payload
///
/// Omitted tax settings default to [`TaxSpec::default`], omitted round-off to on.
pub fn compute_invoice_for(request: &InvoiceRequest) -> InvoiceSummary {
    compute_invoice_with(request, TaxSpec::default(), true)
}

/// Compute the invoice for a form payload, filling omitted tax and round-off
/// settings from the given defaults
pub fn compute_invoice_with(
    request: &InvoiceRequest,
    default_tax: TaxSpec,
    default_round_off: bool,
) -> InvoiceSummary {
    compute_invoice(
        &request.stay,
        &request.price_source,
        request.extras.as_slice(),
        request.discount.as_ref(),
        &request.tax_or(default_tax),
        request.round_off_or(default_round_off),
        request.advance_paid,
    )
}
