use crate::{
    apis::{countries::Country, ListResponse, TropipayClientInner},
    Error,
};
use std::sync::Arc;

/// Tropipay countries APIs client.
///
/// These endpoints are public: calling them never triggers an authentication.
#[derive(Clone, Debug)]
pub struct CountriesApi {
    inner: Arc<TropipayClientInner>,
}

impl CountriesApi {
    pub(crate) fn new(inner: Arc<TropipayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the countries supported by Tropipay.
    #[tracing::instrument(name = "List Countries", skip(self))]
    pub async fn list(&self) -> Result<Vec<Country>, Error> {
        let res: ListResponse<_> = self
            .inner
            .public_client
            .get(self.inner.endpoint("/countries")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res.into_items())
    }

    /// Lists the countries funds can be sent to.
    #[tracing::instrument(name = "List Destination Countries", skip(self))]
    pub async fn destinations(&self) -> Result<Vec<Country>, Error> {
        let res: ListResponse<_> = self
            .inner
            .public_client
            .get(self.inner.endpoint("/countries/destinations")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res.into_items())
    }
}
