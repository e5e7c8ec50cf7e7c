use crate::{common::test_context::TestContext, integration_tests::helpers};

#[tokio::test]
async fn create_and_get_payment_card() {
    let ctx = TestContext::start().await;
    let request = helpers::payment_card_request(1000);

    // Create a new payment card
    let card = ctx.client.payment_cards.create(&request).await.unwrap();

    assert!(!card.id.is_empty());
    assert!(card.short_url.is_some());
    assert_eq!(card.reference.as_deref(), Some(request.reference.as_str()));
    assert_eq!(card.amount, Some(1000));
    assert_eq!(card.currency.as_deref(), Some("EUR"));

    // Retrieve it again
    let retrieved = ctx.client.payment_cards.get(&card.id).await.unwrap();
    assert_eq!(retrieved.id, card.id);
    assert_eq!(retrieved.reference, card.reference);
    assert_eq!(retrieved.short_url, card.short_url);
}

#[tokio::test]
async fn list_payment_cards() {
    let ctx = TestContext::start().await;

    let card = ctx
        .client
        .payment_cards
        .create(&helpers::payment_card_request(500))
        .await
        .unwrap();

    let cards = ctx.client.payment_cards.list().await.unwrap();

    assert!(cards.iter().any(|c| c.id == card.id));
}

#[tokio::test]
async fn delete_payment_card() {
    let ctx = TestContext::start().await;

    let card = ctx
        .client
        .payment_cards
        .create(&helpers::payment_card_request(500))
        .await
        .unwrap();

    ctx.client.payment_cards.delete(&card.id).await.unwrap();

    let cards = ctx.client.payment_cards.list().await.unwrap();
    assert!(cards.iter().all(|c| c.id != card.id));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn get_non_existent_payment_card() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .payment_cards
        .get("non-existent")
        .await
        .unwrap_err();

    assert!(err.api_error().unwrap().is_not_found());
    assert_eq!(err.api_error().unwrap().message, "Payment card not found");
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn favorite_payment_cards() {
    let ctx = TestContext::start().await;

    // No favorites yet
    assert!(ctx.client.payment_cards.favorites().await.unwrap().is_empty());

    let mut request = helpers::payment_card_request(700);
    request.favorite = true;
    let favorite = ctx.client.payment_cards.create(&request).await.unwrap();
    ctx.client
        .payment_cards
        .create(&helpers::payment_card_request(800))
        .await
        .unwrap();

    let favorites = ctx.client.payment_cards.favorites().await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, favorite.id);
    assert_eq!(favorites[0].favorite, Some(true));
}
