use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Events a webhook can be subscribed to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum HookEventType {
    TransactionCompleted,
    TransactionCharged,
    TransactionGuarded,
    UserSignup,
    UserKyc,
    PaymentInStateChange,
    PaymentOutStateChange,
    BeneficiaryAdded,
    BeneficiaryUpdated,
    BeneficiaryDeleted,
    TransactionNew,
    TransactionPreauthorized,
    TransactionPendingin,
    TransactionProcessing,
    TransactionError,
    TransactionBloqued,
    TransactionGuardedSend,
    TransactionGuardedMediation,
    UserAfterUpdate,
    UserAfterCreate,
    #[serde(rename = "userDetail_after_create")]
    UserDetailAfterCreate,
    #[serde(rename = "userDetail_after_update")]
    UserDetailAfterUpdate,
    TpvCallbackOk,
    FraudStateOnChange,
}

impl HookEventType {
    /// Name of the event as understood by Tropipay.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEventType::TransactionCompleted => "transaction_completed",
            HookEventType::TransactionCharged => "transaction_charged",
            HookEventType::TransactionGuarded => "transaction_guarded",
            HookEventType::UserSignup => "user_signup",
            HookEventType::UserKyc => "user_kyc",
            HookEventType::PaymentInStateChange => "payment_in_state_change",
            HookEventType::PaymentOutStateChange => "payment_out_state_change",
            HookEventType::BeneficiaryAdded => "beneficiary_added",
            HookEventType::BeneficiaryUpdated => "beneficiary_updated",
            HookEventType::BeneficiaryDeleted => "beneficiary_deleted",
            HookEventType::TransactionNew => "transaction_new",
            HookEventType::TransactionPreauthorized => "transaction_preauthorized",
            HookEventType::TransactionPendingin => "transaction_pendingin",
            HookEventType::TransactionProcessing => "transaction_processing",
            HookEventType::TransactionError => "transaction_error",
            HookEventType::TransactionBloqued => "transaction_bloqued",
            HookEventType::TransactionGuardedSend => "transaction_guarded_send",
            HookEventType::TransactionGuardedMediation => "transaction_guarded_mediation",
            HookEventType::UserAfterUpdate => "user_after_update",
            HookEventType::UserAfterCreate => "user_after_create",
            HookEventType::UserDetailAfterCreate => "userDetail_after_create",
            HookEventType::UserDetailAfterUpdate => "userDetail_after_update",
            HookEventType::TpvCallbackOk => "tpv_callback_ok",
            HookEventType::FraudStateOnChange => "fraud_state_on_change",
        }
    }
}

impl fmt::Display for HookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the notification is delivered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HookTarget {
    /// HTTP POST to an URL.
    Web,
    /// Email to an address.
    Email,
}

impl HookTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookTarget::Web => "web",
            HookTarget::Email => "email",
        }
    }
}

impl fmt::Display for HookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscription of a target to an event.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct HookSubscription {
    pub event: HookEventType,
    pub target: HookTarget,
    /// URL or email address, depending on the target.
    pub value: String,
}

/// An active subscription as returned by Tropipay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedHook {
    pub event: HookEventType,
    pub target: HookTarget,
    pub value: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
