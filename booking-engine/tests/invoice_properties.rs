//! 计费属性测试 - 随机输入 (固定种子)
//!
//! 覆盖：幂等、折扣上限、取整对账、反算税往返

use booking_engine::money::{percent_of, round2, to_decimal};
use booking_engine::pricing::{DiscountBuckets, allocate_discount, discount_amount};
use booking_engine::{compute_invoice, reverse_tax};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use shared::models::{
    DiscountScope, DiscountSpec, ExtraService, PriceSource, RatePlan, SpecialPrice, Stay, TaxSpec,
};

const ITERATIONS: usize = 500;

/// Random price with two decimals
fn random_price(rng: &mut impl Rng, max_cents: u64) -> f64 {
    rng.gen_range(0..=max_cents) as f64 / 100.0
}

fn random_scope(rng: &mut impl Rng) -> DiscountScope {
    match rng.gen_range(0..3) {
        0 => DiscountScope::Total,
        1 => DiscountScope::Room,
        _ => DiscountScope::Extras,
    }
}

fn random_stay(rng: &mut impl Rng) -> Stay {
    let check_in = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
        + Duration::days(rng.gen_range(0..365));
    let hours = rng.gen_range(0..24 * 14);
    Stay::new(check_in, check_in + Duration::hours(hours))
}

struct RandomInput {
    stay: Stay,
    source: PriceSource,
    extras: Vec<ExtraService>,
    discount: Option<DiscountSpec>,
    tax: TaxSpec,
    round_off: bool,
    advance: f64,
}

fn random_input(rng: &mut impl Rng) -> RandomInput {
    let source = if rng.gen_bool(0.3) {
        PriceSource::Special(SpecialPrice {
            final_price_per_night: random_price(rng, 2_000_000),
        })
    } else {
        PriceSource::Plan(RatePlan {
            code: "EP".to_string(),
            price_per_night: random_price(rng, 2_000_000),
        })
    };

    let extras = (0..rng.gen_range(0..4))
        .map(|i| {
            let service = ExtraService::new(format!("Service {i}"), random_price(rng, 100_000), rng.gen_bool(0.5));
            if rng.gen_bool(0.5) {
                service.on_days([1, rng.gen_range(1..5)])
            } else {
                service
            }
        })
        .collect();

    let discount = match rng.gen_range(0..3) {
        0 => None,
        1 => Some(DiscountSpec::percent(rng.gen_range(0..=100) as f64, random_scope(rng))),
        _ => Some(DiscountSpec::flat(random_price(rng, 5_000_000), random_scope(rng))),
    };

    let rates = [0.0, 5.0, 12.0, 18.0, 28.0];
    RandomInput {
        stay: random_stay(rng),
        source,
        extras,
        discount,
        tax: TaxSpec::new(rng.gen_bool(0.7), rates[rng.gen_range(0..rates.len())]),
        round_off: rng.gen_bool(0.5),
        advance: random_price(rng, 1_000_000),
    }
}

fn run(input: &RandomInput) -> shared::models::InvoiceSummary {
    compute_invoice(
        &input.stay,
        &input.source,
        &input.extras,
        input.discount.as_ref(),
        &input.tax,
        input.round_off,
        input.advance,
    )
}

#[test]
fn invoice_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x0b00c);
    for _ in 0..ITERATIONS {
        let input = random_input(&mut rng);
        let first = run(&input);
        let second = run(&input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn flat_discount_never_exceeds_scope_base() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ITERATIONS {
        let base = Decimal::new(rng.gen_range(0..10_000_000), 2);
        let spec = DiscountSpec::flat(random_price(&mut rng, 20_000_000), DiscountScope::Total);
        let amount = discount_amount(base, &spec);
        assert!(amount <= base, "discount {amount} > base {base}");
        assert!(amount >= Decimal::ZERO);
    }
}

#[test]
fn allocation_conserves_discount() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ITERATIONS {
        let gross = DiscountBuckets::new(
            Decimal::new(rng.gen_range(0..1_000_000), 2),
            Decimal::new(rng.gen_range(0..100_000), 2),
            Decimal::new(rng.gen_range(0..100_000), 2),
        );
        let spec = DiscountSpec::percent(rng.gen_range(0..=100) as f64, random_scope(&mut rng));
        let alloc = allocate_discount(&gross, Some(&spec));

        let spread = alloc.room_discount + alloc.extras_taxed_discount + alloc.extras_untaxed_discount;
        assert!(spread <= alloc.discount_amount);
        assert!(alloc.discount_amount - spread < Decimal::new(2, 2));
        assert!(alloc.net_room >= Decimal::ZERO);
        assert!(alloc.net_extras_taxed >= Decimal::ZERO);
        assert!(alloc.net_extras_untaxed >= Decimal::ZERO);
        assert_eq!(alloc.net_total() + spread, gross.total());
    }
}

#[test]
fn round_off_reconciles_and_stays_below_one() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..ITERATIONS {
        let input = random_input(&mut rng);
        let inv = run(&input);

        let grand = round2(to_decimal(inv.grand_total));
        let pre = round2(to_decimal(inv.pre_round_total));
        let round_off = round2(to_decimal(inv.round_off_amount));
        assert_eq!(grand - pre, round_off);
        assert!(round_off.abs() < Decimal::ONE, "round-off {round_off}");
        if !input.round_off {
            assert!(round_off.is_zero());
        }

        let balance = round2(to_decimal(inv.balance_due));
        assert_eq!(balance, grand - round2(to_decimal(inv.advance_paid)));
        assert!(inv.discount_amount <= inv.gross_base);
    }
}

#[test]
fn reverse_tax_round_trip_within_a_cent() {
    let mut rng = StdRng::seed_from_u64(2026);
    let cent = Decimal::new(1, 2);
    for _ in 0..ITERATIONS {
        let base = Decimal::new(rng.gen_range(0..100_000_000), 2);
        let rate = Decimal::new(rng.gen_range(0..=2800), 2);
        let inclusive = base + percent_of(base, rate);
        let recovered = reverse_tax(inclusive, rate).base;
        assert!(
            (recovered - base).abs() <= cent,
            "base {base} rate {rate} recovered {recovered}"
        );
    }
}
