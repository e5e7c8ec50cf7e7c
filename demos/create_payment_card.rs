use anyhow::Context;
use tropipay_rust::{
    apis::{
        auth::Credentials,
        payment_cards::{CreatePaymentCardRequestBuilder, Currency},
    },
    client::Environment,
    TropipayClient,
};
use url::Url;

#[derive(serde::Deserialize, Debug)]
struct Config {
    client_id: String,
    client_secret: String,
    shop_url: Url,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Tropipay client
    let tropipay = TropipayClient::builder(Credentials::new(config.client_id, config.client_secret))
        .with_environment(Environment::Development)
        .build()?;

    // Check the balance of the account
    let balance = tropipay.account.balance().await?;
    tracing::info!(
        "Balance: {:.2} EUR (pending in: {:.2}, pending out: {:.2})",
        balance.balance as f64 / 100.0,
        balance.pending_in as f64 / 100.0,
        balance.pending_out as f64 / 100.0
    );

    // Create a new payment link
    let request = CreatePaymentCardRequestBuilder::default()
        .reference(format!("demo-{}", chrono::Utc::now().timestamp()))
        .concept("Bicycle")
        .description("One red bicycle")
        .amount(30000u64)
        .currency(Currency::Eur)
        .reason_id(4u32)
        .expiration_days(1u32)
        .lang("es")
        .url_success(config.shop_url.join("success")?.to_string())
        .url_failed(config.shop_url.join("failed")?.to_string())
        .url_notification(config.shop_url.join("notify")?.to_string())
        .service_date(chrono::Utc::now().format("%Y-%m-%d").to_string())
        .build()?;

    let card = tropipay.payment_cards.create(&request).await?;
    tracing::info!("Created new payment card: {}", card.id);
    tracing::info!(
        "Payment link: {}",
        card.short_url
            .as_deref()
            .or(card.payment_url.as_deref())
            .context("Missing payment link")?
    );

    // Retrieve it again
    let card = tropipay.payment_cards.get(&card.id).await?;
    tracing::info!("{:#?}", card);

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
