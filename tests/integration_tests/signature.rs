use crate::common::test_context::TestContext;
use tropipay_rust::signature::compute_signature;

#[tokio::test]
async fn verify_notification_signature() {
    let ctx = TestContext::start().await;
    let signature = compute_signature(&ctx.credentials, "1000", "ORD-42");

    assert!(ctx.client.verify_signature("1000", "ORD-42", &signature));
    assert!(!ctx.client.verify_signature("1001", "ORD-42", &signature));
    assert!(!ctx
        .client
        .verify_signature("1000", "ORD-42", &signature.to_uppercase()));
}
