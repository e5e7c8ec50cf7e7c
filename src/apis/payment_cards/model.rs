use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum Currency {
    Eur,
    Usd,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Eur => write!(f, "EUR"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

/// Payment methods offered to the payer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// External card payment.
    Ext,
    /// Payment with a Tropipay balance.
    Tpp,
}

/// Payer details attached to a payment card.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct PaymentCardClient {
    pub name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub country_id: u32,
    pub terms_and_conditions: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreatePaymentCardRequest {
    pub reference: String,
    pub concept: String,
    #[builder(default)]
    pub favorite: bool,
    /// Amount in cents.
    pub amount: u64,
    pub currency: Currency,
    pub description: String,
    #[builder(default)]
    pub single_use: bool,
    pub reason_id: u32,
    pub expiration_days: u32,
    pub lang: String,
    pub url_success: String,
    pub url_failed: String,
    pub url_notification: String,
    pub service_date: String,
    #[builder(default)]
    pub client: Option<PaymentCardClient>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_payment: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
}

/// A payment link as returned by Tropipay.
///
/// Fields not modelled explicitly are kept verbatim in `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    pub id: String,
    pub reference: Option<String>,
    pub concept: Option<String>,
    pub description: Option<String>,
    pub amount: Option<u64>,
    /// ISO code as sent by Tropipay. Not limited to the currencies accepted on creation.
    pub currency: Option<String>,
    pub single_use: Option<bool>,
    pub favorite: Option<bool>,
    pub reason_id: Option<u32>,
    pub expiration_days: Option<u32>,
    pub lang: Option<String>,
    pub url_success: Option<String>,
    pub url_failed: Option<String>,
    pub url_notification: Option<String>,
    pub service_date: Option<String>,
    pub state: Option<i64>,
    pub short_url: Option<String>,
    pub payment_url: Option<String>,
    pub qr_image: Option<String>,
    pub has_client: Option<bool>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
