// Default URLs
pub static DEFAULT_PRODUCTION_URL: &str = "https://www.tropipay.com";
pub static DEFAULT_DEVELOPMENT_URL: &str = "https://tropipay-dev.herokuapp.com";

// Every endpoint lives under this prefix
pub static API_PREFIX: &str = "/api/v2";
pub static ACCESS_TOKEN_PATH: &str = "/access/token";

/// Scopes requested when the caller does not restrict them.
pub static DEFAULT_SCOPES: &[&str] = &[
    "ALLOW_GET_PROFILE_DATA",
    "ALLOW_PAYMENT_IN",
    "ALLOW_EXTERNAL_CHARGE",
    "KYC3_FULL_ALLOW",
    "ALLOW_PAYMENT_OUT",
    "ALLOW_MARKET_PURCHASES",
    "ALLOW_GET_BALANCE",
    "ALLOW_GET_MOVEMENT_LIST",
    "ALLOW_GET_CREDENTIAL",
];

// Error messages
pub static GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub static NO_RESPONSE_ERROR_MESSAGE: &str = "Request failed: No response received";
