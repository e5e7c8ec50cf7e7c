use crate::apis::payment_cards::Currency;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Seller side of an escrow payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct MediationSeller {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreateMediationCardRequest {
    /// Amount in cents.
    pub amount: u64,
    pub currency: Currency,
    pub concept: String,
    pub description: String,
    pub reference: String,
    #[builder(default)]
    pub single_use: bool,
    pub lang: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// Buyer details, passed through untouched.
    #[builder(default)]
    pub buyer: Option<serde_json::Value>,
    pub seller: MediationSeller,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_percent: Option<f64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_fixed: Option<u64>,
    #[builder(default)]
    pub send_mail: bool,
}
