use super::money::{Cents, Currency};
use super::payment::PaymentOutcome;
use crate::error::ClientError;
use async_trait::async_trait;

#[async_trait]
pub trait PaymentClient: Send + Sync {
    async fn charge(
        &self,
        amount: Cents,
        currency: Currency,
        order_id: &str,
    ) -> Result<PaymentOutcome, ClientError>;
}

#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ClientError>;
}

pub type PaymentClientBox = Box<dyn PaymentClient>;
pub type EmailClientBox = Box<dyn EmailClient>;
