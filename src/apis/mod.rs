//! Clients for the various Tropipay APIs.

use crate::{authenticator::Authenticator, client::Environment, Error};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

pub mod account;
pub mod auth;
pub mod countries;
pub mod deposit_accounts;
pub mod hooks;
pub mod mediation_cards;
pub mod payment_cards;

pub(crate) struct TropipayClientInner {
    /// Client carrying the access token on every request.
    pub(crate) client: ClientWithMiddleware,
    /// Client for endpoints that do not require a session.
    pub(crate) public_client: ClientWithMiddleware,
    pub(crate) authenticator: Authenticator,
    pub(crate) environment: Environment,
}

impl TropipayClientInner {
    /// Resolves a path relative to the versioned API root of the configured environment.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.environment.api_url(path)
    }
}

impl Debug for TropipayClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TropipayClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// List endpoints answer either with a bare array or with a paginated envelope.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    Paged { rows: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paged { rows } => rows,
            ListResponse::Plain(items) => items,
        }
    }
}
