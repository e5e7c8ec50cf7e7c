use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

static APPLICATION_JSON: &str = "application/json";

/// Middleware to inject the `User-Agent` and JSON content negotiation headers to all outgoing requests.
pub struct InjectHeadersMiddleware {
    user_agent: HeaderValue,
}

impl InjectHeadersMiddleware {
    pub fn new() -> Self {
        Self {
            user_agent: HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        }
    }
}

impl Default for InjectHeadersMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for InjectHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers
            .entry(CONTENT_TYPE)
            .or_insert_with(|| HeaderValue::from_static(APPLICATION_JSON));

        next.run(req, extensions).await
    }
}
