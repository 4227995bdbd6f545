//! Tax Engine (flat rate split into CGST/SGST halves)

use crate::money::{checked_product, percent_of, round2};
use rust_decimal::prelude::*;

/// Tax split into its two equal halves
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaxSplit {
    pub cgst: Decimal,
    pub sgst: Decimal,
}

impl TaxSplit {
    pub fn total(&self) -> Decimal {
        self.cgst + self.sgst
    }

    /// Scale a per-night split to a whole stay
    pub fn times(&self, nights: u32) -> TaxSplit {
        let n = Decimal::from(nights);
        TaxSplit {
            cgst: round2(checked_product(self.cgst, n)),
            sgst: round2(checked_product(self.sgst, n)),
        }
    }
}

impl std::ops::Add for TaxSplit {
    type Output = TaxSplit;

    fn add(self, rhs: TaxSplit) -> TaxSplit {
        TaxSplit {
            cgst: self.cgst + rhs.cgst,
            sgst: self.sgst + rhs.sgst,
        }
    }
}

/// Tax-exclusive base and tax portion recovered from an inclusive price
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReverseTax {
    pub base: Decimal,
    pub tax_portion: Decimal,
}

impl ReverseTax {
    /// Split the tax portion into halves; SGST takes the odd cent
    pub fn split(&self) -> TaxSplit {
        let cgst = round2(self.tax_portion / Decimal::TWO);
        TaxSplit {
            cgst,
            sgst: self.tax_portion - cgst,
        }
    }
}

/// Forward tax on a taxable amount: each half is `percent_of(amount, rate / 2)`
pub fn forward_tax(taxable: Decimal, rate_percent: Decimal) -> TaxSplit {
    if taxable <= Decimal::ZERO || rate_percent <= Decimal::ZERO {
        return TaxSplit::default();
    }
    let half_rate = rate_percent / Decimal::TWO;
    let half = percent_of(taxable, half_rate);
    TaxSplit {
        cgst: half,
        sgst: half,
    }
}

/// Reverse-derive the tax-exclusive base from a tax-inclusive amount
///
/// `base = round2(inclusive / (1 + rate/100))`, `tax = round2(inclusive - base)`.
/// Apply to a single night's price and scale afterwards.
pub fn reverse_tax(inclusive: Decimal, rate_percent: Decimal) -> ReverseTax {
    let inclusive = inclusive.max(Decimal::ZERO);
    if rate_percent <= Decimal::ZERO {
        return ReverseTax {
            base: round2(inclusive),
            tax_portion: Decimal::ZERO,
        };
    }

    let divisor = Decimal::ONE + rate_percent / Decimal::ONE_HUNDRED;
    let base = round2(inclusive / divisor);
    ReverseTax {
        base,
        tax_portion: round2(inclusive - base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_forward_tax_halves() {
        let split = forward_tax(dec("4320"), dec("5"));
        assert_eq!(split.cgst, dec("108"));
        assert_eq!(split.sgst, dec("108"));
        assert_eq!(split.total(), dec("216"));
    }

    #[test]
    fn test_forward_tax_rounds_each_half() {
        // 2.5% of 99.99 = 2.49975 -> 2.50 per half
        let split = forward_tax(dec("99.99"), dec("5"));
        assert_eq!(split.cgst, dec("2.50"));
        assert_eq!(split.total(), dec("5.00"));
    }

    #[test]
    fn test_forward_tax_zero_inputs() {
        assert_eq!(forward_tax(Decimal::ZERO, dec("5")), TaxSplit::default());
        assert_eq!(forward_tax(dec("1000"), Decimal::ZERO), TaxSplit::default());
    }

    #[test]
    fn test_reverse_tax_special_price() {
        let rt = reverse_tax(dec("2100"), dec("5"));
        assert_eq!(rt.base, dec("2000.00"));
        assert_eq!(rt.tax_portion, dec("100.00"));

        let split = rt.split();
        assert_eq!(split.cgst, dec("50"));
        assert_eq!(split.sgst, dec("50"));
    }

    #[test]
    fn test_reverse_tax_uneven_price() {
        // 1999 / 1.05 = 1903.8095... -> 1903.81, tax 95.19
        let rt = reverse_tax(dec("1999"), dec("5"));
        assert_eq!(rt.base, dec("1903.81"));
        assert_eq!(rt.tax_portion, dec("95.19"));

        // odd cent lands on SGST
        let split = rt.split();
        assert_eq!(split.cgst, dec("47.60"));
        assert_eq!(split.sgst, dec("47.59"));
        assert_eq!(split.total(), rt.tax_portion);
    }

    #[test]
    fn test_reverse_tax_zero_rate() {
        let rt = reverse_tax(dec("1500"), Decimal::ZERO);
        assert_eq!(rt.base, dec("1500"));
        assert_eq!(rt.tax_portion, Decimal::ZERO);
    }

    #[test]
    fn test_reverse_round_trip_within_a_cent() {
        for cents in [1_u32, 99, 1000, 123_456, 999_999, 25_000_001] {
            let base = Decimal::from(cents) / Decimal::ONE_HUNDRED;
            for rate in ["5", "12", "18", "28", "2.5"] {
                let rate = dec(rate);
                let inclusive = base + percent_of(base, rate);
                let recovered = reverse_tax(inclusive, rate).base;
                assert!(
                    (recovered - base).abs() <= dec("0.01"),
                    "base {base} rate {rate} recovered {recovered}"
                );
            }
        }
    }

    #[test]
    fn test_overflowing_inputs_fall_back_to_zero() {
        assert_eq!(forward_tax(Decimal::MAX, dec("5")), TaxSplit::default());
        let split = TaxSplit {
            cgst: Decimal::MAX,
            sgst: dec("1"),
        };
        assert_eq!(split.times(2).cgst, Decimal::ZERO);
        assert_eq!(split.times(2).sgst, dec("2"));
    }

    #[test]
    fn test_split_times_nights() {
        let split = reverse_tax(dec("2100"), dec("5")).split().times(3);
        assert_eq!(split.cgst, dec("150"));
        assert_eq!(split.sgst, dec("150"));
    }
}
