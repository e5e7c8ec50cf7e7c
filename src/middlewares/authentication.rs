use crate::authenticator::Authenticator;
use async_trait::async_trait;
use reqwest::{header::HeaderValue, Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the access token into outgoing HTTP requests.
/// On the first request, an additional HTTP request will be fired to get a new access token.
///
/// If Tropipay rejects the token with a `401`, the session is cleared so that the next
/// request authenticates again. The rejected request itself is not retried.
pub struct AuthenticationMiddleware {
    pub(crate) authenticator: Authenticator,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Request an access token from the authenticator
        let access_token = self.authenticator.get_access_token().await?;

        // Inject the access token as a header
        let mut header_value = HeaderValue::from_str(&format!(
            "Bearer {}",
            access_token.access_token.expose_secret()
        ))
        .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert("Authorization", header_value);

        // Run the rest of the middlewares
        let response = next.run(req, extensions).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!("Access token rejected by the server");
            self.authenticator
                .invalidate_if_current(access_token.access_token.expose_secret())
                .await;
        }

        Ok(response)
    }
}
