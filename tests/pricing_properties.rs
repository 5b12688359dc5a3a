use order_pricing::application::pricing;
use order_pricing::domain::money::{Cents, Currency};
use order_pricing::domain::order::OrderItem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const ROUNDS: usize = 2_000;
const COUPONS: [Option<&str>; 6] = [
    None,
    Some("SAVE10"),
    Some("SAVE20"),
    Some("FREESHIP"),
    Some("WELCOME"),
    Some("WELCOME2025"),
];

/// Items with prices carrying three decimals, so half-cent rounding is exercised.
/// Returns the items alongside their prices in tenths of a cent.
fn random_items(rng: &mut StdRng) -> (Vec<OrderItem>, Vec<(i64, i64)>) {
    let count = rng.gen_range(1..=5);
    let mut items = Vec::with_capacity(count);
    let mut raw = Vec::with_capacity(count);
    for i in 0..count {
        let millis = rng.gen_range(1..=150_000);
        let qty = rng.gen_range(1..=12);
        items.push(OrderItem::new(format!("SKU{i}"), qty, Decimal::new(millis, 3)));
        raw.push((millis, qty));
    }
    (items, raw)
}

fn random_currency(rng: &mut StdRng) -> Currency {
    if rng.gen_bool(0.5) {
        Currency::Usd
    } else {
        Currency::Eur
    }
}

#[test]
fn test_subtotal_is_sum_of_rounded_lines() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let (items, raw) = random_items(&mut rng);
        let expected: i64 = raw
            .iter()
            .map(|(millis, qty)| (millis + 5) / 10 * qty)
            .sum();
        assert_eq!(pricing::subtotal(&items).unwrap(), Cents(expected));
    }
}

#[test]
fn test_shipping_depends_only_on_subtotal() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..ROUNDS {
        let (items, _) = random_items(&mut rng);
        let currency = random_currency(&mut rng);
        let coupon = COUPONS[rng.gen_range(0..COUPONS.len())];

        let breakdown = pricing::price(&items, coupon, currency).unwrap();
        let fee = match currency {
            Currency::Usd => Cents(799),
            Currency::Eur => Cents(699),
        };
        if breakdown.subtotal >= Cents(5000) {
            assert_eq!(breakdown.shipping, Cents::ZERO);
        } else {
            assert_eq!(breakdown.shipping, fee);
        }
    }
}

#[test]
fn test_total_is_consistent_and_non_negative() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let (items, _) = random_items(&mut rng);
        let currency = random_currency(&mut rng);
        let coupon = COUPONS[rng.gen_range(0..COUPONS.len())];

        let b = pricing::price(&items, coupon, currency).unwrap();
        assert!(b.total >= Cents::ZERO);
        assert!(b.discount <= b.subtotal);
        assert_eq!(
            b.total,
            (b.subtotal - b.discount).non_negative() + b.shipping + b.tax
        );
    }
}

#[test]
fn test_absent_coupon_matches_no_discount() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..ROUNDS {
        let (items, _) = random_items(&mut rng);
        let currency = random_currency(&mut rng);

        let absent = pricing::price(&items, None, currency).unwrap();
        let empty = pricing::price(&items, Some(""), currency).unwrap();
        assert_eq!(absent, empty);
        assert_eq!(absent.discount, Cents::ZERO);
    }
}
