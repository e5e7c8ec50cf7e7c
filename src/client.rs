//! Module containing the main Tropipay API client.

use crate::{
    apis::{
        account::AccountApi,
        auth::{AuthApi, Credentials},
        countries::CountriesApi,
        deposit_accounts::DepositAccountsApi,
        hooks::HooksApi,
        mediation_cards::MediationCardsApi,
        payment_cards::PaymentCardsApi,
        TropipayClientInner,
    },
    authenticator::Authenticator,
    common::{ACCESS_TOKEN_PATH, API_PREFIX, DEFAULT_DEVELOPMENT_URL, DEFAULT_PRODUCTION_URL},
    error::ApiError,
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_headers::InjectHeadersMiddleware,
    },
    signature::{self, WebhookCredentials},
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use std::sync::Arc;

/// Client for Tropipay public APIs.
///
/// Every API client exposed by a `TropipayClient` shares the same session: the access token
/// is requested lazily on the first authenticated call and reused until it is about to expire.
/// Failed requests are never retried automatically.
#[derive(Debug, Clone)]
pub struct TropipayClient {
    /// Authentication APIs client.
    pub auth: AuthApi,
    /// Payment cards (payment links) APIs client.
    pub payment_cards: PaymentCardsApi,
    /// Mediation (escrow) payment cards APIs client.
    pub mediation_cards: MediationCardsApi,
    /// Deposit accounts (beneficiaries) APIs client.
    pub deposit_accounts: DepositAccountsApi,
    /// Webhook subscriptions APIs client.
    pub hooks: HooksApi,
    /// Balance, movements, profile and rates APIs client.
    pub account: AccountApi,
    /// Countries APIs client.
    pub countries: CountriesApi,
    inner: Arc<TropipayClientInner>,
}

impl TropipayClient {
    /// Builds a new [`TropipayClient`](crate::client::TropipayClient) with the default configuration.
    pub fn new(credentials: Credentials) -> Result<TropipayClient, Error> {
        TropipayClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`TropipayClient`](crate::client::TropipayClient).
    pub fn builder(credentials: Credentials) -> TropipayClientBuilder {
        TropipayClientBuilder::new(credentials)
    }

    /// Returns the environment this client is connected to.
    pub fn environment(&self) -> &Environment {
        &self.inner.environment
    }

    /// Verifies the signature of a webhook notification against the credentials of this client.
    ///
    /// See [`verify_signature`](crate::signature::verify_signature).
    pub fn verify_signature(
        &self,
        original_currency_amount: &str,
        bank_order_code: &str,
        signature: &str,
    ) -> bool {
        signature::verify_signature(self, original_currency_amount, bank_order_code, signature)
    }
}

impl WebhookCredentials for TropipayClient {
    fn client_id(&self) -> &str {
        self.inner.authenticator.credentials().client_id()
    }

    fn client_secret(&self) -> &str {
        self.inner
            .authenticator
            .credentials()
            .client_secret()
            .expose_secret()
    }
}

/// Builder for a [`TropipayClient`](crate::client::TropipayClient).
#[derive(Debug)]
pub struct TropipayClientBuilder {
    client: reqwest::Client,
    environment: Environment,
    credentials: Credentials,
}

impl TropipayClientBuilder {
    /// Creates a new builder to configure a [`TropipayClient`](crate::client::TropipayClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            environment: Environment::Development,
            credentials,
        }
    }

    /// Consumes the builder and builds a new [`TropipayClient`](crate::client::TropipayClient).
    ///
    /// Fails with [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) if the
    /// client id or secret are blank. No network activity happens here.
    pub fn build(self) -> Result<TropipayClient, Error> {
        self.credentials.validate()?;

        // Build an authenticator
        let authenticator = Authenticator::new(
            build_client_with_middleware(self.client.clone(), None),
            self.environment.api_url(ACCESS_TOKEN_PATH)?,
            self.credentials,
        );

        // Prepare the middlewares
        let auth_middleware = Some(AuthenticationMiddleware {
            authenticator: authenticator.clone(),
        });

        // Build the actual Tropipay client
        let inner = Arc::new(TropipayClientInner {
            client: build_client_with_middleware(self.client.clone(), auth_middleware),
            public_client: build_client_with_middleware(self.client, None),
            authenticator,
            environment: self.environment,
        });

        Ok(TropipayClient {
            auth: AuthApi::new(inner.clone()),
            payment_cards: PaymentCardsApi::new(inner.clone()),
            mediation_cards: MediationCardsApi::new(inner.clone()),
            deposit_accounts: DepositAccountsApi::new(inner.clone()),
            hooks: HooksApi::new(inner.clone()),
            account: AccountApi::new(inner.clone()),
            countries: CountriesApi::new(inner.clone()),
            inner,
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Timeouts and proxies are configured on this client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to: [`Environment::Development`](crate::client::Environment::Development)
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// Tropipay environment to which a [`TropipayClient`](crate::client::TropipayClient) should connect.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Environment {
    /// Tropipay development environment: `https://tropipay-dev.herokuapp.com`.
    Development,
    /// Tropipay production environment: `https://www.tropipay.com`.
    Production,
    /// Custom environment, for example a local mock of the Tropipay APIs.
    Custom { base_url: Url },
}

impl Environment {
    /// Builds a new custom environment where all the APIs are served from the same base url.
    pub fn from_single_url(base_url: &Url) -> Self {
        Self::Custom {
            base_url: base_url.clone(),
        }
    }

    /// Base url of this environment.
    pub fn base_url(&self) -> &str {
        match self {
            Environment::Development => DEFAULT_DEVELOPMENT_URL,
            Environment::Production => DEFAULT_PRODUCTION_URL,
            Environment::Custom { base_url } => base_url.as_str(),
        }
    }

    /// Resolves `path` against the versioned API root, e.g. `/paymentcards` becomes
    /// `{base_url}/api/v2/paymentcards`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let mut url = match self {
            Environment::Development | Environment::Production => Url::parse(self.base_url())
                .map_err(|e| Error::ApiError(ApiError::unknown(e.into())))?,
            Environment::Custom { base_url } => base_url.clone(),
        };

        // Keep any path prefix of the base url, e.g. a gateway mounted under `/tropipay`
        let full_path = format!("{}{}{}", url.path().trim_end_matches('/'), API_PREFIX, path);
        url.set_path(&full_path);

        Ok(url)
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: Option<AuthenticationMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::default())
        .with(ErrorHandlingMiddleware)
        .with(InjectHeadersMiddleware::new());

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder.build()
}
