//! Invoice Model

use serde::{Deserialize, Serialize};

/// Invoice line kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineKind {
    Room,
    Extra,
}

/// One billed line (room nights or an extra service), before discount and tax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub kind: LineKind,
    pub name: String,
    /// Nights (room) or billed days (extra)
    pub quantity: u32,
    /// Tax-exclusive unit price
    pub unit_price: f64,
    pub amount: f64,
    pub taxable: bool,
}

/// Invoice breakdown for a stay
///
/// Derived data: recomputed from scratch on every input change, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub nights: u32,
    /// Tax-exclusive nightly rate actually billed
    pub room_rate_per_night: f64,
    /// Room priced from a tax-inclusive special rate
    pub special_pricing: bool,

    // === Gross buckets ===
    pub room_base: f64,
    pub extras_taxable_base: f64,
    pub extras_non_taxable_base: f64,
    pub gross_base: f64,

    // === Discount ===
    pub discount_amount: f64,
    pub net_room: f64,
    pub net_extras_taxable: f64,
    pub net_extras_non_taxable: f64,
    /// Net total of all buckets (before tax)
    pub subtotal: f64,

    // === Tax ===
    pub taxable_amount: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub gst_total: f64,

    // === Totals ===
    pub pre_round_total: f64,
    pub round_off_amount: f64,
    pub grand_total: f64,
    pub advance_paid: f64,
    /// Negative when the guest has overpaid
    pub balance_due: f64,

    pub lines: Vec<InvoiceLine>,
}

impl InvoiceSummary {
    /// Whether the advance exceeds the grand total
    pub fn is_overpaid(&self) -> bool {
        self.balance_due < 0.0
    }
}
