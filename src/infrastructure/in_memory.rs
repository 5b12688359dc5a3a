use crate::application::normalizer;
use crate::domain::money::{Cents, Currency};
use crate::domain::payment::PaymentOutcome;
use crate::domain::ports::{EmailClient, PaymentClient};
use crate::error::ClientError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A charge request as seen by [`SimulatedPaymentClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRecord {
    pub amount: Cents,
    pub currency: Currency,
    pub order_id: String,
}

/// A payment gateway stand-in that answers every charge the same way.
///
/// Clones share the same charge log, so a test can hand one clone to the
/// pipeline and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct SimulatedPaymentClient {
    /// `Some` makes every charge decline, with the inner value as reason.
    decline: Option<Option<String>>,
    charges: Arc<RwLock<Vec<ChargeRecord>>>,
}

impl SimulatedPaymentClient {
    /// Approves every charge.
    pub fn approving() -> Self {
        Self::default()
    }

    /// Declines every charge with the given reason.
    pub fn declining(reason: Option<&str>) -> Self {
        Self {
            decline: Some(reason.map(str::to_string)),
            ..Self::default()
        }
    }

    pub async fn charges(&self) -> Vec<ChargeRecord> {
        self.charges.read().await.clone()
    }
}

#[async_trait]
impl PaymentClient for SimulatedPaymentClient {
    async fn charge(
        &self,
        amount: Cents,
        currency: Currency,
        order_id: &str,
    ) -> Result<PaymentOutcome, ClientError> {
        let mut charges = self.charges.write().await;
        charges.push(ChargeRecord {
            amount,
            currency,
            order_id: order_id.to_string(),
        });
        debug!(order_id, amount = %amount, "Simulated charge");

        Ok(match &self.decline {
            Some(reason) => PaymentOutcome::declined(reason.clone()),
            None => PaymentOutcome::approved(format!("txn_{}", normalizer::random_token())),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// An email transport that keeps every message in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingEmailClient {
    outbox: Arc<RwLock<Vec<SentEmail>>>,
}

impl RecordingEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.outbox.read().await.clone()
    }
}

#[async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ClientError> {
        let mut outbox = self.outbox.write().await;
        outbox.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        debug!(to, subject, "Recorded email");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentStatus;

    #[tokio::test]
    async fn test_approving_client_records_charges() {
        let client = SimulatedPaymentClient::approving();
        let outcome = client.charge(Cents(2964), Currency::Usd, "ord_1").await.unwrap();

        assert_eq!(outcome.status, PaymentStatus::Approved);
        assert!(outcome.transaction_id.unwrap().starts_with("txn_"));
        assert_eq!(outcome.decline_reason, None);
        assert_eq!(
            client.charges().await,
            vec![ChargeRecord {
                amount: Cents(2964),
                currency: Currency::Usd,
                order_id: "ord_1".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_declining_client() {
        let client = SimulatedPaymentClient::declining(Some("insufficient funds"));
        let outcome = client.charge(Cents(100), Currency::Eur, "ord_2").await.unwrap();

        assert_eq!(outcome.status, PaymentStatus::Declined);
        assert_eq!(outcome.transaction_id, None);
        assert_eq!(outcome.decline_reason.as_deref(), Some("insufficient funds"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let client = RecordingEmailClient::new();
        let handle = client.clone();
        handle.send("a@b.com", "hi", "body").await.unwrap();

        let sent = client.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@b.com");
    }
}
