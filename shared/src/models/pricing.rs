//! Pricing Model (rate plans, extras, discount, tax)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::stay::Stay;

/// Default flat tax rate, split into two equal halves (CGST/SGST)
pub const DEFAULT_TAX_RATE_PERCENT: f64 = 5.0;

/// Selected flat nightly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePlan {
    /// Plan code (e.g. "EP", "CP", "MAP")
    pub code: String,
    pub price_per_night: f64,
}

/// Tax-inclusive per-night override ("offer" price)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialPrice {
    pub final_price_per_night: f64,
}

/// Where the nightly room rate comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceSource {
    Plan(RatePlan),
    Special(SpecialPrice),
}

impl PriceSource {
    pub fn is_special(&self) -> bool {
        matches!(self, PriceSource::Special(_))
    }
}

/// Day-scoped extra service line (breakfast, extra bed, airport pickup...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraService {
    pub name: String,
    pub price_per_day: f64,
    /// 1-based nights of the stay the service applies to; empty means every night
    #[serde(default)]
    pub applicable_days: BTreeSet<u32>,
    #[serde(default)]
    pub gst_enabled: bool,
}

impl ExtraService {
    pub fn new(name: impl Into<String>, price_per_day: f64, gst_enabled: bool) -> Self {
        Self {
            name: name.into(),
            price_per_day,
            applicable_days: BTreeSet::new(),
            gst_enabled,
        }
    }

    /// Restrict the service to the given nights
    pub fn on_days(mut self, days: impl IntoIterator<Item = u32>) -> Self {
        self.applicable_days = days.into_iter().collect();
        self
    }

    /// Days billed for a stay of `nights`: every night when no day is
    /// selected, otherwise the selected days inside `[1, nights]`
    pub fn billable_days(&self, nights: u32) -> u32 {
        if self.applicable_days.is_empty() {
            return nights;
        }
        let in_range = self
            .applicable_days
            .iter()
            .filter(|d| (1..=nights).contains(*d))
            .count();
        u32::try_from(in_range).unwrap_or(nights)
    }
}

/// Immutable list of extra services
///
/// Every edit returns a new list; the receiver is left untouched, so
/// several form rows can hold the same list without aliasing edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceList(Vec<ExtraService>);

impl ServiceList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[ExtraService] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn with_added(&self, service: ExtraService) -> Self {
        let mut next = self.0.clone();
        next.push(service);
        Self(next)
    }

    /// Replace the line at `index`; an out-of-range index returns an unchanged copy
    pub fn with_replaced(&self, index: usize, service: ExtraService) -> Self {
        let mut next = self.0.clone();
        if let Some(slot) = next.get_mut(index) {
            *slot = service;
        }
        Self(next)
    }

    /// Remove the line at `index`; an out-of-range index returns an unchanged copy
    pub fn without(&self, index: usize) -> Self {
        let mut next = self.0.clone();
        if index < next.len() {
            next.remove(index);
        }
        Self(next)
    }

    /// Select or deselect a single night on the line at `index`
    pub fn with_day_toggled(&self, index: usize, day: u32) -> Self {
        let mut next = self.0.clone();
        if let Some(service) = next.get_mut(index)
            && !service.applicable_days.remove(&day)
        {
            service.applicable_days.insert(day);
        }
        Self(next)
    }
}

impl From<Vec<ExtraService>> for ServiceList {
    fn from(services: Vec<ExtraService>) -> Self {
        Self(services)
    }
}

impl FromIterator<ExtraService> for ServiceList {
    fn from_iter<I: IntoIterator<Item = ExtraService>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Discount mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountMode {
    Percent,
    Flat,
}

/// Which gross bucket a discount is computed against and deducted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountScope {
    Total,
    Room,
    Extras,
}

/// Discount spec (percent: 10 = 10%, flat: 500 = ₹500)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountSpec {
    pub mode: DiscountMode,
    pub value: f64,
    pub scope: DiscountScope,
}

impl DiscountSpec {
    pub fn percent(value: f64, scope: DiscountScope) -> Self {
        Self {
            mode: DiscountMode::Percent,
            value,
            scope,
        }
    }

    pub fn flat(value: f64, scope: DiscountScope) -> Self {
        Self {
            mode: DiscountMode::Flat,
            value,
            scope,
        }
    }
}

/// Flat-rate tax spec
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSpec {
    /// Room tax toggle for the whole stay (extras use their own flag)
    pub enabled: bool,
    /// Full rate; CGST and SGST each take half
    pub rate_percent: f64,
}

impl TaxSpec {
    pub fn new(enabled: bool, rate_percent: f64) -> Self {
        Self {
            enabled,
            rate_percent,
        }
    }

    pub fn disabled() -> Self {
        Self::new(false, DEFAULT_TAX_RATE_PERCENT)
    }
}

impl Default for TaxSpec {
    fn default() -> Self {
        Self::new(true, DEFAULT_TAX_RATE_PERCENT)
    }
}

/// Full billing input as sent by the booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub stay: Stay,
    pub price_source: PriceSource,
    #[serde(default)]
    pub extras: ServiceList,
    #[serde(default)]
    pub discount: Option<DiscountSpec>,
    /// Tax settings; the engine's configured default when omitted
    #[serde(default)]
    pub tax: Option<TaxSpec>,
    /// Round-off toggle; the engine's configured default when omitted
    #[serde(default)]
    pub round_off: Option<bool>,
    #[serde(default)]
    pub advance_paid: f64,
}

impl InvoiceRequest {
    /// Tax settings, falling back to `default` when the form left them out
    pub fn tax_or(&self, default: TaxSpec) -> TaxSpec {
        self.tax.unwrap_or(default)
    }

    /// Round-off toggle, falling back to `default`
    pub fn round_off_or(&self, default: bool) -> bool {
        self.round_off.unwrap_or(default)
    }
}
