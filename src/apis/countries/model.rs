use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub sepa_zone: Option<bool>,
    pub state: Option<i64>,
    pub slug: Option<String>,
    pub slugn: Option<i64>,
    pub calling_code: Option<i64>,
    pub is_destination: Option<bool>,
    pub is_risky: Option<bool>,
    pub current_currency: Option<String>,
    pub is_favorite: Option<bool>,
    pub position: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
