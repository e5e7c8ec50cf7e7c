use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use serde_json::{Map, Value};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from Tropipay APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await?;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

/// Body of an error response from Tropipay APIs.
#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum ErrorResponseBody {
    Detailed { error: Map<String, Value> },
    Plain { error: String },
    Unknown,
}

async fn api_error_from_response(response: Response) -> reqwest_middleware::Result<ApiError> {
    let status = response.status().as_u16();

    // Parse the response body as JSON
    let bytes = response.bytes().await?;
    let error_response: ErrorResponseBody =
        serde_json::from_slice(&bytes).unwrap_or(ErrorResponseBody::Unknown);

    let api_error = match error_response {
        ErrorResponseBody::Detailed { error } => ApiError::from_response(
            status,
            error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            Some(Value::Object(error)),
        ),
        ErrorResponseBody::Plain { error } => {
            ApiError::from_response(status, Some(error.clone()), Some(Value::String(error)))
        }
        ErrorResponseBody::Unknown => ApiError::from_response(status, None, None),
    };

    Ok(api_error)
}
