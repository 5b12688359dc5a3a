use super::notification::Confirmation;
use super::{normalizer, pricing, risk, validator};
use crate::domain::order::{CreateOrderRequest, CreatedOrder, Order, PriceBreakdown};
use crate::domain::ports::{EmailClientBox, PaymentClientBox};
use crate::error::{OrderError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

/// The main entry point for turning an order request into a paid order.
///
/// `OrderPipeline` owns the payment and email collaborators. Each call to
/// [`create_order`](Self::create_order) validates, prices and risk-checks the
/// request before any collaborator is contacted, then charges, and only after
/// an approved charge sends the confirmation.
pub struct OrderPipeline {
    payments: PaymentClientBox,
    emails: EmailClientBox,
}

/// A request that passed validation, with identity fields normalized.
struct PricedRequest {
    order_id: String,
    user_email: String,
    coupon_code: Option<String>,
    created_at: DateTime<Utc>,
    breakdown: PriceBreakdown,
}

impl OrderPipeline {
    /// Creates a new `OrderPipeline`.
    ///
    /// # Arguments
    ///
    /// * `payments` - The collaborator that charges the order total.
    /// * `emails` - The collaborator that delivers the confirmation.
    pub fn new(payments: PaymentClientBox, emails: EmailClientBox) -> Self {
        Self { payments, emails }
    }

    /// Prices a request without charging it or sending anything.
    ///
    /// Fails with the same validation and risk errors as `create_order`.
    #[instrument(skip_all, fields(currency = %request.currency, items = request.items.len()))]
    pub fn quote(&self, request: &CreateOrderRequest) -> Result<PriceBreakdown> {
        Ok(prepare(request)?.breakdown)
    }

    /// Runs the full pipeline for one request.
    #[instrument(skip_all, fields(currency = %request.currency, items = request.items.len()))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<CreatedOrder> {
        let priced = prepare(&request)?;
        let total = priced.breakdown.total;

        debug!(order_id = %priced.order_id, total = %total, "Charging order");
        let payment = self
            .payments
            .charge(total, request.currency, &priced.order_id)
            .await?;

        if !payment.is_approved() {
            let reason = payment
                .decline_reason
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            warn!(order_id = %priced.order_id, reason = %reason, "Payment declined");
            return Err(OrderError::PaymentDeclined(reason));
        }

        let order = Order {
            id: priced.order_id,
            user_email: priced.user_email,
            items: request.items,
            coupon_code: priced.coupon_code,
            created_at: priced.created_at,
        };

        let confirmation = Confirmation::for_order(&order, total, request.currency);
        debug!(order_id = %order.id, "Sending confirmation");
        self.emails
            .send(&confirmation.to, &confirmation.subject, &confirmation.body)
            .await?;

        info!(order_id = %order.id, total = %total, "Order created");
        Ok(CreatedOrder {
            order,
            total_cents: total,
            payment,
        })
    }
}

/// Everything that happens before a collaborator is involved.
fn prepare(request: &CreateOrderRequest) -> Result<PricedRequest> {
    validator::validate(request)?;

    let user_email = normalizer::normalize_email(&request.user_email);
    let coupon_code = normalizer::normalize_coupon(request.coupon_code.as_deref());
    let order_id = normalizer::new_order_id();
    let created_at = normalizer::now();

    let breakdown = pricing::price(&request.items, coupon_code.as_deref(), request.currency)?;
    debug!(
        subtotal = %breakdown.subtotal,
        discount = %breakdown.discount,
        shipping = %breakdown.shipping,
        tax = %breakdown.tax,
        total = %breakdown.total,
        "Priced order"
    );

    if let Err(e) = risk::assess(&user_email, breakdown.total) {
        warn!(error = %e, "Order rejected");
        return Err(e);
    }

    Ok(PricedRequest {
        order_id,
        user_email,
        coupon_code,
        created_at,
        breakdown,
    })
}
