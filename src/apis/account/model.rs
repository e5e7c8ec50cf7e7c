use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Balance of the account, in cents.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub balance: i64,
    pub pending_in: i64,
    pub pending_out: i64,
}

/// Page selection for the movements list.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ListMovementsRequest {
    pub offset: u32,
    pub limit: u32,
}

impl Default for ListMovementsRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GetRateRequest {
    pub currency_from: String,
    #[builder(default = "\"EUR\".to_string()")]
    pub currency_to: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RateResponse {
    pub rate: f64,
}
