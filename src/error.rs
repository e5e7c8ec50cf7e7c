//! Standard errors used by all functions in the crate.

use crate::common::{GENERIC_ERROR_MESSAGE, NO_RESPONSE_ERROR_MESSAGE};
use std::fmt;

/// Error collecting all possible failures of the Tropipay client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was configured with invalid settings and cannot be built.
    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),
    /// Normalized failure of a call to the Tropipay APIs.
    #[error("{0}")]
    ApiError(#[from] ApiError),
}

impl Error {
    /// Returns the normalized [`ApiError`](crate::error::ApiError), if this is a runtime failure.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::ApiError(e) => Some(e),
            Error::InvalidConfiguration(_) => None,
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// Marks a failure that happened while exchanging the client credentials.
    pub(crate) fn into_authentication_failure(self) -> Self {
        match self {
            Error::ApiError(e) => Error::ApiError(ApiError {
                kind: ErrorKind::Authentication,
                ..e
            }),
            e => e,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ApiError(ApiError::from_transport(e))
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => e
                .downcast::<Error>()
                .unwrap_or_else(|e| Error::ApiError(ApiError::unknown(e))),
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Broad classification of an [`ApiError`](crate::error::ApiError).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The client credentials could not be exchanged for an access token.
    Authentication,
    /// The server answered with a 4xx status.
    Client,
    /// The server answered with a 5xx status, or the failure could not be classified.
    Server,
    /// The request was sent but no response was received.
    Network,
}

/// Normalized Tropipay API error.
///
/// Every failure observed at runtime, whether the server answered with an error
/// status or no answer arrived at all, is reported with this shape.
#[derive(Debug)]
pub struct ApiError {
    /// Human readable description of the failure.
    pub message: String,
    /// HTTP status returned by the server, or 500 when there was no response.
    pub status: u16,
    /// The `error` object returned by the server, if any.
    pub detail: Option<serde_json::Value>,
    /// Classification of this failure.
    pub kind: ErrorKind,
    cause: Option<anyhow::Error>,
}

impl ApiError {
    /// Builds an error out of a non-successful HTTP response.
    pub(crate) fn from_response(
        status: u16,
        message: Option<String>,
        detail: Option<serde_json::Value>,
    ) -> Self {
        Self {
            message: message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            status,
            detail,
            kind: kind_for_status(status),
            cause: None,
        }
    }

    /// Builds an error out of a transport failure reported by reqwest.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        let (message, status, kind) = if let Some(status) = e.status() {
            (
                GENERIC_ERROR_MESSAGE,
                status.as_u16(),
                kind_for_status(status.as_u16()),
            )
        } else if e.is_timeout() || e.is_connect() || e.is_request() {
            (NO_RESPONSE_ERROR_MESSAGE, 500, ErrorKind::Network)
        } else {
            (GENERIC_ERROR_MESSAGE, 500, ErrorKind::Server)
        };

        Self {
            message: message.to_string(),
            status,
            detail: None,
            kind,
            cause: Some(e.into()),
        }
    }

    /// Builds an error for a failure that does not fit any other category.
    pub(crate) fn unknown(cause: anyhow::Error) -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE.to_string(),
            status: 500,
            detail: None,
            kind: ErrorKind::Server,
            cause: Some(cause),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

fn kind_for_status(status: u16) -> ErrorKind {
    if (400..500).contains(&status) {
        ErrorKind::Client
    } else {
        ErrorKind::Server
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tropipay HTTP error {}: {}", self.status, self.message)?;

        if let Some(ref detail) = self.detail {
            write!(f, "\nAdditional details: {}", detail)?;
        }

        Ok(())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}
