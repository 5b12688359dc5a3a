use crate::domain::money::{Cents, Currency};
use crate::domain::order::Order;

/// A rendered confirmation email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Confirmation {
    pub fn for_order(order: &Order, total: Cents, currency: Currency) -> Self {
        let mut lines: Vec<String> = order
            .items
            .iter()
            .map(|item| {
                // Unit prices go through the same per-item rounding as the subtotal.
                let unit = Cents::from_major(item.unit_price)
                    .map(|cents| currency.format(cents))
                    .unwrap_or_else(|| item.unit_price.to_string());
                format!("{} x{} @ {}", item.sku, item.qty, unit)
            })
            .collect();
        lines.push(String::new());
        lines.push(format!("Total: {}", currency.format(total)));

        Self {
            to: order.user_email.clone(),
            subject: format!("Order {} confirmed", order.id),
            body: lines.join("\n"),
        }
    }
}
