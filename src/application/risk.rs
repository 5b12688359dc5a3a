use crate::domain::money::Cents;
use crate::error::{OrderError, Result};

const BLOCKED_DOMAIN_SUFFIX: &str = "@tempmail.com";
const MAX_ORDER_TOTAL: Cents = Cents(200_000);
const MAX_PLUS_ALIAS_TOTAL: Cents = Cents(50_000);

/// Applies the fraud heuristics to a priced order. The first matching rule
/// rejects the order.
pub fn assess(email: &str, total: Cents) -> Result<()> {
    if email.ends_with(BLOCKED_DOMAIN_SUFFIX) {
        return Err(OrderError::risk("tempmail is not allowed"));
    }
    if total > MAX_ORDER_TOTAL {
        return Err(OrderError::risk("amount too high"));
    }
    if email.contains('+') && total > MAX_PLUS_ALIAS_TOTAL {
        return Err(OrderError::risk("plus-alias high amount"));
    }
    Ok(())
}
