use crate::domain::order::{CreateOrderRequest, OrderItem};
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;

/// Checks a request before anything is priced or charged.
///
/// Rules run in a fixed order and the first violation is returned.
pub fn validate(request: &CreateOrderRequest) -> Result<()> {
    if request.user_email.is_empty() || !request.user_email.contains('@') {
        return Err(OrderError::validation("invalid email"));
    }
    if request.items.is_empty() {
        return Err(OrderError::validation("empty items"));
    }
    request.items.iter().try_for_each(validate_item)
}

fn validate_item(item: &OrderItem) -> Result<()> {
    if item.sku.is_empty() {
        return Err(OrderError::validation("invalid sku"));
    }
    if item.qty <= 0 {
        return Err(OrderError::validation("invalid qty"));
    }
    if item.unit_price <= Decimal::ZERO {
        return Err(OrderError::validation("invalid price"));
    }
    Ok(())
}
