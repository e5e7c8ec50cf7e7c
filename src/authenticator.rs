use crate::{
    apis::auth::{AccessToken, AuthenticationResult, Credentials, Token},
    error::{ApiError, Error},
};
use chrono::{DateTime, Duration, Utc};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};
use tokio::sync::Mutex;

/// Manager for credentials and access tokens.
///
/// A single authenticator is shared by every API client built from the same
/// [`TropipayClient`](crate::TropipayClient), so they all observe the same session.
#[derive(Clone)]
pub struct Authenticator {
    inner: Arc<AuthenticatorInner>,
}

struct AuthenticatorInner {
    client: ClientWithMiddleware,
    token_url: Url,
    credentials: Credentials,
    session: Mutex<Session>,
}

/// Token state held in memory. Replaced as a whole on every successful authentication.
#[derive(Default)]
struct Session {
    access_token: Option<AccessToken>,
    refresh_token: Option<Token>,
    scope: Option<String>,
}

impl Session {
    fn authentication_result(&self) -> Option<AuthenticationResult> {
        self.access_token
            .as_ref()
            .map(|access_token| AuthenticationResult {
                access_token: access_token.clone(),
                refresh_token: self.refresh_token.clone(),
                scope: self.scope.clone(),
            })
    }
}

impl Authenticator {
    /// Creates a new authenticator with an empty session.
    pub fn new(client: ClientWithMiddleware, token_url: Url, credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(AuthenticatorInner {
                client,
                token_url,
                credentials,
                session: Mutex::new(Session::default()),
            }),
        }
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Returns the current access token used for authentication against the Tropipay APIs.
    /// If there's no access token available, or the available one is about to expire, a new one
    /// will be requested from the server using the configured client credentials.
    ///
    /// Concurrent calls to `get_access_token` that find no valid token wait for one single
    /// request to Tropipay APIs and share its result.
    ///
    /// If the client is already authenticated, this is a no-op.
    #[tracing::instrument(name = "Get Access Token", level = "debug", skip(self))]
    pub async fn get_access_token(&self) -> Result<AuthenticationResult, Error> {
        let mut session = self.inner.session.lock().await;

        // If we are already authenticated, do nothing
        if let Some(token) = &session.access_token {
            if !should_refresh_token(token) {
                tracing::debug!("Reusing existing access token");
                if let Some(result) = session.authentication_result() {
                    return Ok(result);
                }
            }
        }

        self.authenticate_locked(&mut session).await
    }

    /// Exchanges the client credentials for a new access token, regardless of the
    /// state of the current session.
    #[tracing::instrument(name = "Authenticate", level = "debug", skip(self))]
    pub async fn authenticate(&self) -> Result<AuthenticationResult, Error> {
        let mut session = self.inner.session.lock().await;
        self.authenticate_locked(&mut session).await
    }

    /// Returns the cached authentication result without any network activity.
    pub async fn cached(&self) -> Option<AuthenticationResult> {
        self.inner.session.lock().await.authentication_result()
    }

    /// Forgets the current session if it still holds `token`. The next authenticated call
    /// will exchange the credentials again.
    pub async fn invalidate_if_current(&self, token: &str) {
        let mut session = self.inner.session.lock().await;

        // A concurrent call may have already replaced the rejected token
        let is_current = session
            .access_token
            .as_ref()
            .map_or(false, |t| t.expose_secret() == token);
        if is_current {
            *session = Session::default();
            tracing::debug!("Access token invalidated");
        }
    }

    async fn authenticate_locked(
        &self,
        session: &mut Session,
    ) -> Result<AuthenticationResult, Error> {
        match self.exchange_credentials().await {
            Ok(new_session) => {
                *session = new_session;
                tracing::info!("Got new access token");

                session.authentication_result().ok_or_else(|| {
                    Error::ApiError(ApiError::unknown(anyhow::anyhow!(
                        "Session is empty right after authentication"
                    )))
                })
            }
            Err(e) => {
                *session = Session::default();
                tracing::warn!("Authentication failed: {}", e);
                Err(e.into_authentication_failure())
            }
        }
    }

    async fn exchange_credentials(&self) -> Result<Session, Error> {
        let res: RawAuthenticationResponse = self
            .inner
            .client
            .post(self.inner.token_url.clone())
            .json(&self.inner.credentials.token_request())
            .send()
            .await?
            .json()
            .await?;

        if !res.token_type.eq_ignore_ascii_case("Bearer") {
            return Err(Error::ApiError(ApiError::unknown(anyhow::anyhow!(
                "Unsupported access token type: {}",
                res.token_type,
            ))));
        }

        Ok(Session {
            access_token: Some(AccessToken {
                token: res.access_token.into(),
                expires_at: res.expires_in.and_then(expiration_from_now),
            }),
            refresh_token: res.refresh_token.map(Token::from),
            scope: res.scope,
        })
    }
}

impl Debug for Authenticator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("token_url", &self.inner.token_url.as_str())
            .field("client_id", &self.inner.credentials.client_id())
            .finish_non_exhaustive()
    }
}

/// Instant `expires_in` seconds from now. Lifetimes too large to represent never expire.
fn expiration_from_now(expires_in: i64) -> Option<DateTime<Utc>> {
    Duration::try_seconds(expires_in).and_then(|lifetime| now().checked_add_signed(lifetime))
}

/// Returns `true` if the token is close to expiration (1 minute before actual expiration)
/// and should be refreshed. If this token does not expire, this function always returns `false`.
fn should_refresh_token(token: &AccessToken) -> bool {
    token
        .expires_at
        .map_or(false, |expires_at| now() >= expires_at - Duration::seconds(60))
}

// Select an implementation of `now()` depending on whether we are testing or not
#[cfg(not(test))]
fn now() -> DateTime<Utc> {
    Utc::now()
}
#[cfg(test)]
use tests::mocked_time::now;

/// Successful response of an authentication request.
#[derive(serde::Deserialize)]
struct RawAuthenticationResponse {
    access_token: String,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
    token_type: String,
    scope: Option<String>,
}
