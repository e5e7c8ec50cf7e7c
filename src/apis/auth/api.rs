use crate::{
    apis::{auth::AuthenticationResult, TropipayClientInner},
    Error,
};
use std::sync::Arc;

/// Tropipay authentication API client.
#[derive(Debug, Clone)]
pub struct AuthApi {
    inner: Arc<TropipayClientInner>,
}

impl AuthApi {
    pub(crate) fn new(inner: Arc<TropipayClientInner>) -> Self {
        Self { inner }
    }

    /// Returns the current [`AccessToken`](crate::apis::auth::AccessToken) used to authenticate to the Tropipay APIs.
    /// If the client is not authenticated yet, or the token is about to expire, a new authentication request
    /// using the configured credentials will be fired.
    pub async fn get_access_token(&self) -> Result<AuthenticationResult, Error> {
        // Just delegate to the authenticator
        self.inner.authenticator.get_access_token().await
    }

    /// Exchanges the configured credentials for a fresh access token, replacing the current one.
    ///
    /// On failure the session is cleared and an error of kind
    /// [`ErrorKind::Authentication`](crate::error::ErrorKind::Authentication) is returned.
    pub async fn authenticate(&self) -> Result<AuthenticationResult, Error> {
        self.inner.authenticator.authenticate().await
    }

    /// Returns the access token currently held by the client, without any network activity.
    pub async fn cached_access_token(&self) -> Option<AuthenticationResult> {
        self.inner.authenticator.cached().await
    }
}
