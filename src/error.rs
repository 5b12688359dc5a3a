use thiserror::Error;

/// Error returned by a payment or email collaborator.
pub type ClientError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("VALIDATION: {0}")]
    Validation(String),
    #[error("RISK: {0}")]
    Risk(String),
    #[error("PAYMENT_DECLINED: {0}")]
    PaymentDeclined(String),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrderError {
    pub(crate) fn validation(reason: &str) -> Self {
        Self::Validation(reason.to_string())
    }

    pub(crate) fn risk(reason: &str) -> Self {
        Self::Risk(reason.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
