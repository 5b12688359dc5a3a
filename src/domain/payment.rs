use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Approved,
    Declined,
}

/// Answer of a payment collaborator to a charge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    /// Only present when the charge was declined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_reason: Option<String>,
}

impl PaymentOutcome {
    pub fn approved(transaction_id: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Approved,
            transaction_id: Some(transaction_id.into()),
            decline_reason: None,
        }
    }

    pub fn declined(reason: Option<String>) -> Self {
        Self {
            status: PaymentStatus::Declined,
            transaction_id: None,
            decline_reason: reason,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == PaymentStatus::Approved
    }
}
