use crate::common::mock_server::{MockServerConfiguration, MockServerStorage};
use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tropipay_rust::apis::{
    account::{GetRateRequest, ListMovementsRequest},
    deposit_accounts::CreateDepositAccountRequest,
    hooks::{HookSubscription, SubscribedHook},
    mediation_cards::CreateMediationCardRequest,
    payment_cards::CreatePaymentCardRequest,
};
use uuid::Uuid;

const MOCK_MOVEMENTS_COUNT: u32 = 25;

fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": { "message": message }
    }))
}

fn new_payment_card(mut card: Value, id: &str) -> Value {
    let now = Utc::now();
    card["id"] = json!(id);
    card["state"] = json!(1);
    let short_code: String = id.chars().take(8).collect();
    card["shortUrl"] = json!(format!("https://tppay.me/{}", short_code));
    card["paymentUrl"] = json!(format!("https://www.tropipay.com/checkout/{}", id));
    card["createdAt"] = json!(now);
    card["updatedAt"] = json!(now);
    card
}

#[derive(Deserialize)]
pub(super) struct TokenRequest {
    client_id: String,
    client_secret: String,
    grant_type: String,
    scope: Option<String>,
}

/// POST /access/token
pub(super) async fn post_access_token(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    incoming: web::Json<TokenRequest>,
) -> HttpResponse {
    let mut storage = storage.write().unwrap();
    storage.token_requests += 1;

    match incoming.into_inner() {
        TokenRequest {
            client_id,
            client_secret,
            grant_type,
            scope,
        } if client_id == configuration.client_id
            && client_secret == configuration.client_secret
            && grant_type == "client_credentials" =>
        {
            let access_token = Uuid::new_v4().to_string();
            storage.access_tokens.insert(access_token.clone());

            HttpResponse::Ok().json(json!({
                "access_token": access_token,
                "refresh_token": Uuid::new_v4().to_string(),
                "token_type": "Bearer",
                "expires_in": 86400,
                "scope": scope
            }))
        }
        _ => HttpResponse::Unauthorized().json(json!({
            "error": { "message": "Invalid client credentials" }
        })),
    }
}

/// GET /paymentcards
pub(super) async fn list_payment_cards(storage: web::Data<MockServerStorage>) -> HttpResponse {
    let storage = storage.read().unwrap();

    HttpResponse::Ok().json(json!({
        "count": storage.payment_cards.len(),
        "rows": storage.payment_cards
    }))
}

/// POST /paymentcards
pub(super) async fn create_payment_card(
    storage: web::Data<MockServerStorage>,
    request: web::Json<CreatePaymentCardRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let id = Uuid::new_v4().to_string();

    let mut card = new_payment_card(serde_json::to_value(&request).unwrap(), &id);
    card["hasClient"] = json!(request.client.is_some());
    card["expirationDate"] =
        json!(Utc::now() + Duration::days(i64::from(request.expiration_days)));

    storage.write().unwrap().payment_cards.push(card.clone());

    HttpResponse::Created().json(card)
}

/// GET /paymentcards/favorites
pub(super) async fn list_favorite_payment_cards(
    storage: web::Data<MockServerStorage>,
) -> HttpResponse {
    let favorites: Vec<_> = storage
        .read()
        .unwrap()
        .payment_cards
        .iter()
        .filter(|card| card["favorite"] == json!(true))
        .cloned()
        .collect();

    HttpResponse::Ok().json(json!({
        "count": favorites.len(),
        "rows": favorites
    }))
}

/// POST /paymentcards/mediation
pub(super) async fn create_mediation_card(
    storage: web::Data<MockServerStorage>,
    request: web::Json<CreateMediationCardRequest>,
) -> HttpResponse {
    let id = Uuid::new_v4().to_string();

    let mut card = new_payment_card(serde_json::to_value(request.into_inner()).unwrap(), &id);
    card["mediation"] = json!(true);

    storage.write().unwrap().payment_cards.push(card.clone());

    HttpResponse::Ok().json(card)
}

/// GET /paymentcards/{id}
pub(super) async fn get_payment_card(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();

    storage
        .read()
        .unwrap()
        .payment_cards
        .iter()
        .find(|card| card["id"] == json!(id))
        .map_or_else(
            || not_found("Payment card not found"),
            |card| HttpResponse::Ok().json(card),
        )
}

/// DELETE /paymentcards/{id}
pub(super) async fn delete_payment_card(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();

    let mut storage = storage.write().unwrap();
    match storage
        .payment_cards
        .iter()
        .position(|card| card["id"] == json!(id))
    {
        Some(index) => {
            let mut card = storage.payment_cards.remove(index);
            card["state"] = json!(0);
            HttpResponse::Ok().json(card)
        }
        None => not_found("Payment card not found"),
    }
}

/// GET /deposit_accounts
pub(super) async fn list_deposit_accounts(storage: web::Data<MockServerStorage>) -> HttpResponse {
    let accounts: Vec<_> = storage
        .read()
        .unwrap()
        .deposit_accounts
        .values()
        .cloned()
        .collect();

    HttpResponse::Ok().json(accounts)
}

/// POST /deposit_accounts
pub(super) async fn create_deposit_account(
    storage: web::Data<MockServerStorage>,
    request: web::Json<CreateDepositAccountRequest>,
) -> HttpResponse {
    let mut storage = storage.write().unwrap();
    storage.last_deposit_account_id += 1;
    let id = storage.last_deposit_account_id;

    let now = Utc::now();
    let mut account = serde_json::to_value(request.into_inner()).unwrap();
    account["id"] = json!(id);
    account["state"] = json!(0);
    account["createdAt"] = json!(now);
    account["updatedAt"] = json!(now);

    storage.deposit_accounts.insert(id, account.clone());

    HttpResponse::Ok().json(account)
}

/// GET /deposit_accounts/{id}
pub(super) async fn get_deposit_account(
    storage: web::Data<MockServerStorage>,
    path: web::Path<u64>,
) -> HttpResponse {
    let id = path.into_inner();

    storage.read().unwrap().deposit_accounts.get(&id).map_or_else(
        || not_found("Deposit account not found"),
        |account| HttpResponse::Ok().json(account),
    )
}

/// PUT /deposit_accounts/{id}
pub(super) async fn update_deposit_account(
    storage: web::Data<MockServerStorage>,
    path: web::Path<u64>,
    changes: web::Json<Value>,
) -> HttpResponse {
    let id = path.into_inner();

    let mut storage = storage.write().unwrap();
    let account = match storage.deposit_accounts.get_mut(&id) {
        Some(account) => account,
        None => return not_found("Deposit account not found"),
    };

    let changes = match changes.into_inner() {
        Value::Object(changes) => changes,
        _ => return HttpResponse::BadRequest().finish(),
    };
    for (key, value) in changes {
        account[key.as_str()] = value;
    }
    account["updatedAt"] = json!(Utc::now());

    HttpResponse::Ok().json(account.clone())
}

/// DELETE /deposit_accounts/{id}
pub(super) async fn delete_deposit_account(
    storage: web::Data<MockServerStorage>,
    path: web::Path<u64>,
) -> HttpResponse {
    let id = path.into_inner();

    storage.write().unwrap().deposit_accounts.remove(&id).map_or_else(
        || not_found("Deposit account not found"),
        |_| HttpResponse::Ok().json(json!({ "deleted": 1 })),
    )
}

/// GET /hooks
pub(super) async fn list_hooks(storage: web::Data<MockServerStorage>) -> HttpResponse {
    HttpResponse::Ok().json(&storage.read().unwrap().hooks)
}

/// POST /hooks
pub(super) async fn subscribe_hook(
    storage: web::Data<MockServerStorage>,
    subscription: web::Json<HookSubscription>,
) -> HttpResponse {
    let subscription = subscription.into_inner();
    let now = Utc::now();
    let hook = SubscribedHook {
        event: subscription.event,
        target: subscription.target,
        value: subscription.value,
        created_at: Some(now),
        updated_at: Some(now),
        extra: Default::default(),
    };

    let mut storage = storage.write().unwrap();
    storage
        .hooks
        .retain(|h| !(h.event == hook.event && h.target == hook.target));
    storage.hooks.push(hook.clone());

    HttpResponse::Ok().json(hook)
}

/// PUT /hooks
pub(super) async fn update_hook(
    storage: web::Data<MockServerStorage>,
    subscription: web::Json<HookSubscription>,
) -> HttpResponse {
    let subscription = subscription.into_inner();

    let mut storage = storage.write().unwrap();
    match storage
        .hooks
        .iter_mut()
        .find(|h| h.event == subscription.event && h.target == subscription.target)
    {
        Some(hook) => {
            hook.value = subscription.value;
            hook.updated_at = Some(Utc::now());
            HttpResponse::Ok().json(&*hook)
        }
        None => not_found("Hook not found"),
    }
}

/// GET /hooks/events
pub(super) async fn list_hook_events() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {
            "name": "transaction_completed",
            "description": "The payment has been completed"
        },
        {
            "name": "transaction_charged",
            "description": "The card has been charged"
        },
        {
            "name": "beneficiary_added",
            "description": "A new beneficiary has been added"
        }
    ]))
}

/// GET /hooks/{event}
pub(super) async fn list_hooks_by_event(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let event = path.into_inner();

    let hooks: Vec<_> = storage
        .read()
        .unwrap()
        .hooks
        .iter()
        .filter(|h| h.event.as_str() == event)
        .cloned()
        .collect();

    if hooks.is_empty() {
        not_found("Hook not found")
    } else {
        HttpResponse::Ok().json(hooks)
    }
}

/// DELETE /hooks/{event}/{target}
pub(super) async fn delete_hook(
    storage: web::Data<MockServerStorage>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (event, target) = path.into_inner();

    let mut storage = storage.write().unwrap();
    let before = storage.hooks.len();
    storage
        .hooks
        .retain(|h| !(h.event.as_str() == event && h.target.as_str() == target));

    if storage.hooks.len() == before {
        not_found("Hook not found")
    } else {
        HttpResponse::Ok().json(json!({ "deleted": true }))
    }
}

/// GET /users/balance
pub(super) async fn get_balance() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "balance": 125000,
        "pendingIn": 3000,
        "pendingOut": 0
    }))
}

/// GET /users/profile
pub(super) async fn get_profile(
    configuration: web::Data<MockServerConfiguration>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "id": configuration.client_id,
        "name": "Mock",
        "surname": "Merchant",
        "email": "merchant@example.com",
        "state": 1,
        "kycLevel": 4
    }))
}

/// GET /movements
pub(super) async fn list_movements(query: web::Query<ListMovementsRequest>) -> HttpResponse {
    let ListMovementsRequest { offset, limit } = query.into_inner();
    let end = offset.saturating_add(limit).min(MOCK_MOVEMENTS_COUNT);

    let rows: Vec<_> = (offset..end)
        .map(|i| {
            json!({
                "id": i + 1,
                "amount": 100 * (i + 1),
                "currency": "EUR",
                "state": 4
            })
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "count": MOCK_MOVEMENTS_COUNT,
        "rows": rows
    }))
}

/// POST /movements/get_rate
pub(super) async fn get_rate(request: web::Json<GetRateRequest>) -> HttpResponse {
    let rate = match (request.currency_from.as_str(), request.currency_to.as_str()) {
        (from, to) if from == to => 1.0,
        ("USD", "EUR") => 0.92,
        ("EUR", "USD") => 1.08,
        _ => {
            return HttpResponse::BadRequest().json(json!({
                "error": { "message": "Currency not supported" }
            }))
        }
    };

    HttpResponse::Ok().json(json!({ "rate": rate }))
}

/// GET /countries
pub(super) async fn list_countries() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {
            "id": 1,
            "name": "Spain",
            "sepaZone": true,
            "slug": "es",
            "callingCode": 34,
            "isDestination": true,
            "currentCurrency": "EUR"
        },
        {
            "id": 53,
            "name": "Cuba",
            "sepaZone": false,
            "slug": "cu",
            "callingCode": 53,
            "isDestination": true,
            "currentCurrency": "CUP"
        },
        {
            "id": 60,
            "name": "United States",
            "sepaZone": false,
            "slug": "us",
            "callingCode": 1,
            "isDestination": false,
            "currentCurrency": "USD"
        }
    ]))
}

/// GET /countries/destinations
pub(super) async fn list_destination_countries() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "count": 2,
        "rows": [
            { "id": 1, "name": "Spain", "isDestination": true },
            { "id": 53, "name": "Cuba", "isDestination": true }
        ]
    }))
}
