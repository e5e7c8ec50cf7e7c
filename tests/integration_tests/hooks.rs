use crate::common::test_context::TestContext;
use tropipay_rust::apis::hooks::{HookEventType, HookSubscription, HookTarget};

fn subscription(event: HookEventType, value: &str) -> HookSubscription {
    HookSubscription {
        event,
        target: HookTarget::Web,
        value: value.to_string(),
    }
}

#[tokio::test]
async fn hook_subscription_lifecycle() {
    let ctx = TestContext::start().await;
    let event = HookEventType::TransactionCompleted;

    // Subscribe
    let hook = ctx
        .client
        .hooks
        .subscribe(&subscription(event, "https://shop.example.com/hooks/v1"))
        .await
        .unwrap();
    assert_eq!(hook.event, event);
    assert_eq!(hook.target, HookTarget::Web);

    // List, both globally and by event
    let hooks = ctx.client.hooks.list(None).await.unwrap();
    assert!(hooks.iter().any(|h| h.event == event));
    let hooks = ctx.client.hooks.list(Some(event)).await.unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0].value, "https://shop.example.com/hooks/v1");

    // Change the target url
    let updated = ctx
        .client
        .hooks
        .update(&subscription(event, "https://shop.example.com/hooks/v2"))
        .await
        .unwrap();
    assert_eq!(updated.value, "https://shop.example.com/hooks/v2");

    // Unsubscribe
    ctx.client
        .hooks
        .delete(event, HookTarget::Web)
        .await
        .unwrap();
    let hooks = ctx.client.hooks.list(Some(event)).await.unwrap();
    assert!(hooks.is_empty());
}

#[tokio::test]
async fn list_hook_events() {
    let ctx = TestContext::start().await;

    let events = ctx.client.hooks.events().await.unwrap();

    assert!(!events.as_array().unwrap().is_empty());
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn list_hooks_of_event_without_subscriptions() {
    let ctx = TestContext::start().await;

    let hooks = ctx
        .client
        .hooks
        .list(Some(HookEventType::UserDetailAfterUpdate))
        .await
        .unwrap();

    assert!(hooks.is_empty());
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn delete_missing_hook() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .hooks
        .delete(HookEventType::UserKyc, HookTarget::Email)
        .await
        .unwrap_err();

    assert!(err.api_error().unwrap().is_not_found());
}
