use tropipay_rust::apis::{
    deposit_accounts::{
        BeneficiaryType, CreateDepositAccountRequest, CreateDepositAccountRequestBuilder,
    },
    payment_cards::{CreatePaymentCardRequest, CreatePaymentCardRequestBuilder, Currency},
};
use uuid::Uuid;

static MOCK_SHOP_URL: &str = "https://shop.example.com";

pub fn payment_card_request(amount: u64) -> CreatePaymentCardRequest {
    CreatePaymentCardRequestBuilder::default()
        .reference(format!("rust-sdk-test-{}", Uuid::new_v4()))
        .concept("Integration test")
        .description("Payment card created by the integration tests")
        .amount(amount)
        .currency(Currency::Eur)
        .reason_id(4u32)
        .expiration_days(1u32)
        .lang("es")
        .url_success(format!("{}/success", MOCK_SHOP_URL))
        .url_failed(format!("{}/failed", MOCK_SHOP_URL))
        .url_notification(format!("{}/notify", MOCK_SHOP_URL))
        .service_date("2021-08-20")
        .build()
        .unwrap()
}

pub fn deposit_account_request() -> CreateDepositAccountRequest {
    CreateDepositAccountRequestBuilder::default()
        .alias(format!("rust-sdk-test-{}", Uuid::new_v4()))
        .user_relation_type_id(1u32)
        .beneficiary_type(BeneficiaryType::External)
        .document_expiration_date("2030-01-01")
        .account_number("ES9121000418450200051332")
        .swift("CAIXESBBXXX")
        .first_name("Jane")
        .last_name("Doe")
        .country_destination_id(1u32)
        .city("Madrid")
        .postal_code("28001")
        .address("Calle Mayor 1")
        .build()
        .unwrap()
}
