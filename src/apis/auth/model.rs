use crate::{common::DEFAULT_SCOPES, Error};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Credentials used to authenticate against Tropipay's APIs.
///
/// ```rust
/// # use tropipay_rust::apis::auth::Credentials;
/// let credentials = Credentials::new("some-client-id", "some-client-secret")
///     .with_scopes(["ALLOW_GET_BALANCE", "ALLOW_PAYMENT_IN"]);
///
/// assert_eq!(credentials.scopes(), ["ALLOW_GET_BALANCE", "ALLOW_PAYMENT_IN"]);
/// assert!(!format!("{:?}", credentials).contains("some-client-secret"));
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    client_id: String,
    client_secret: Token,
    scopes: Vec<String>,
}

impl Credentials {
    /// Builds a new set of credentials requesting the full default permission set.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<Token>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Restricts the scopes requested during authentication. Duplicates are ignored.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.clear();
        for scope in scopes {
            let scope = scope.into();
            if !self.scopes.contains(&scope) {
                self.scopes.push(scope);
            }
        }
        self
    }

    /// Returns a reference to the client id stored in this [`Credentials`](crate::apis::auth::Credentials).
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns a reference to the client secret stored in this [`Credentials`](crate::apis::auth::Credentials).
    pub fn client_secret(&self) -> &Token {
        &self.client_secret
    }

    /// Returns the scopes requested during authentication.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.client_id.trim().is_empty() {
            return Err(Error::InvalidConfiguration(
                "client id must not be empty".to_string(),
            ));
        }

        if self.client_secret.expose_secret().trim().is_empty() {
            return Err(Error::InvalidConfiguration(
                "client secret must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Body of a client-credentials exchange.
    pub(crate) fn token_request(&self) -> TokenRequest<'_> {
        TokenRequest {
            client_id: &self.client_id,
            client_secret: self.client_secret.expose_secret(),
            grant_type: "client_credentials",
            scope: self.scopes.join(" "),
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    scope: String,
}

/// Result of an authentication request.
#[derive(Clone, Debug)]
pub struct AuthenticationResult {
    pub(crate) access_token: AccessToken,
    pub(crate) refresh_token: Option<Token>,
    pub(crate) scope: Option<String>,
}

impl AuthenticationResult {
    /// Returns a reference to the [`AccessToken`](crate::apis::auth::AccessToken) returned by the authentication server.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns a reference to the refresh token returned by the authentication server, if present.
    pub fn refresh_token(&self) -> Option<&Token> {
        self.refresh_token.as_ref()
    }

    /// Space separated scopes granted by the authentication server, if reported.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

/// Opaque access token used to authenticate to Tropipay APIs.
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub(crate) token: Token,
    pub(crate) expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Actual token contents held by this `AccessToken` instance.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Expiration date of the token.
    ///
    /// Returns `None` if this token does not expire.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl Deref for AccessToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        self.token()
    }
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use tropipay_rust::apis::auth::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`
/// assert_eq!(token.expose_secret(), "supersecret");
/// ```
#[derive(Deserialize, Clone, Debug)]
pub struct Token(Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}
