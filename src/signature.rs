//! Verification of the signature attached to Tropipay webhook notifications.
//!
//! Tropipay signs each notification with the lowercase hex SHA-256 digest of
//! `bank_order_code + client_id + client_secret + original_currency_amount`.
//!
//! ```rust
//! # use tropipay_rust::{apis::auth::Credentials, signature::{compute_signature, verify_signature}};
//! let credentials = Credentials::new("client-id", "client-secret");
//!
//! let signature = compute_signature(&credentials, "100.50", "ORD-123");
//! assert!(verify_signature(&credentials, "100.50", "ORD-123", &signature));
//! assert!(!verify_signature(&credentials, "100.51", "ORD-123", &signature));
//! ```

use crate::apis::auth::Credentials;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Credentials needed to check a webhook signature.
pub trait WebhookCredentials {
    fn client_id(&self) -> &str;
    fn client_secret(&self) -> &str;
}

impl WebhookCredentials for Credentials {
    fn client_id(&self) -> &str {
        Credentials::client_id(self)
    }

    fn client_secret(&self) -> &str {
        Credentials::client_secret(self).expose_secret()
    }
}

/// Computes the signature Tropipay attaches to a notification for the given payment.
pub fn compute_signature(
    credentials: &impl WebhookCredentials,
    original_currency_amount: &str,
    bank_order_code: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bank_order_code.as_bytes());
    hasher.update(credentials.client_id().as_bytes());
    hasher.update(credentials.client_secret().as_bytes());
    hasher.update(original_currency_amount.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns `true` if `signature` is the expected signature for the given payment.
///
/// The comparison is case-sensitive and runs in constant time.
pub fn verify_signature(
    credentials: &impl WebhookCredentials,
    original_currency_amount: &str,
    bank_order_code: &str,
    signature: &str,
) -> bool {
    let expected = compute_signature(credentials, original_currency_amount, bank_order_code);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}
