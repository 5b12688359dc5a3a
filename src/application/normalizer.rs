use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;

const ORDER_ID_PREFIX: &str = "ord_";
const TOKEN_LEN: usize = 16;

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trims and upper-cases a coupon code. Blank codes count as absent.
pub fn normalize_coupon(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
}

/// A random alphanumeric token suitable for opaque identifiers.
pub fn random_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

pub fn new_order_id() -> String {
    format!("{ORDER_ID_PREFIX}{}", random_token())
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}
