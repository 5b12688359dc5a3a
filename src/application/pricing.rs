use crate::domain::money::{Cents, Currency};
use crate::domain::order::{OrderItem, PriceBreakdown};
use crate::error::{OrderError, Result};

/// Subtotal at or above which shipping is waived.
pub const FREE_SHIPPING_THRESHOLD: Cents = Cents(5000);
/// Upper bound of the `WELCOME*` discount.
pub const WELCOME_DISCOUNT_CAP: Cents = Cents(1500);

/// Sums each line as its unit price rounded to the cent times its quantity.
///
/// Rounding happens per line, never on the aggregate.
pub fn subtotal(items: &[OrderItem]) -> Result<Cents> {
    items.iter().try_fold(Cents::ZERO, |acc, item| {
        Cents::from_major(item.unit_price)
            .and_then(|unit| unit.checked_mul(item.qty))
            .and_then(|line| acc.checked_add(line))
            .ok_or_else(|| OrderError::validation("amount overflow"))
    })
}

/// Resolves a normalized coupon code against the fixed discount table.
///
/// `FREESHIP` is accepted but yields no discount and does not touch shipping.
pub fn discount(subtotal: Cents, coupon: Option<&str>) -> Result<Cents> {
    let Some(code) = coupon else {
        return Ok(Cents::ZERO);
    };
    match code {
        "" | "FREESHIP" => Ok(Cents::ZERO),
        "SAVE10" => Ok(percent_floor(subtotal, 10)),
        "SAVE20" => Ok(percent_floor(subtotal, 20)),
        welcome if welcome.starts_with("WELCOME") => {
            Ok(percent_floor(subtotal, 5).min(WELCOME_DISCOUNT_CAP))
        }
        _ => Err(OrderError::validation("unknown coupon")),
    }
}

pub fn shipping(subtotal: Cents, currency: Currency) -> Cents {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        return Cents::ZERO;
    }
    match currency {
        Currency::Usd => Cents(799),
        Currency::Eur => Cents(699),
    }
}

/// Tax on a discounted subtotal, rounded half-up. Non-positive bases are untaxed.
pub fn tax(taxable: Cents, currency: Currency) -> Cents {
    if taxable <= Cents::ZERO {
        return Cents::ZERO;
    }
    // Rates in basis points.
    let rate: i128 = match currency {
        Currency::Usd => 825,
        Currency::Eur => 2000,
    };
    Cents(((i128::from(taxable.value()) * rate + 5_000) / 10_000) as i64)
}

/// Prices a set of line items under an already-normalized coupon code.
pub fn price(
    items: &[OrderItem],
    coupon: Option<&str>,
    currency: Currency,
) -> Result<PriceBreakdown> {
    let subtotal = subtotal(items)?;
    let discount = discount(subtotal, coupon)?;
    let discounted = (subtotal - discount).non_negative();
    let shipping = shipping(subtotal, currency);
    let tax = tax(discounted, currency);

    let total = discounted
        .checked_add(shipping)
        .and_then(|amount| amount.checked_add(tax))
        .ok_or_else(|| OrderError::validation("amount overflow"))?;

    Ok(PriceBreakdown {
        subtotal,
        discount,
        shipping,
        tax,
        total,
    })
}

fn percent_floor(amount: Cents, percent: i64) -> Cents {
    Cents((i128::from(amount.value()) * i128::from(percent) / 100) as i64)
}
