use crate::{
    apis::{
        account::{AccountBalance, GetRateRequest, ListMovementsRequest, RateResponse},
        TropipayClientInner,
    },
    Error,
};
use std::sync::Arc;

/// Tropipay account APIs client: balance, movements, profile and exchange rates.
#[derive(Clone, Debug)]
pub struct AccountApi {
    inner: Arc<TropipayClientInner>,
}

impl AccountApi {
    pub(crate) fn new(inner: Arc<TropipayClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the balance of the account.
    #[tracing::instrument(name = "Get Balance", skip(self))]
    pub async fn balance(&self) -> Result<AccountBalance, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.endpoint("/users/balance")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the movements of the account. The page is returned as sent by Tropipay.
    #[tracing::instrument(name = "List Movements", skip(self))]
    pub async fn movements(
        &self,
        request: &ListMovementsRequest,
    ) -> Result<serde_json::Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.endpoint("/movements")?)
            .query(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the profile of the account owner.
    #[tracing::instrument(name = "Get Profile", skip(self))]
    pub async fn profile(&self) -> Result<serde_json::Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.endpoint("/users/profile")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the conversion rate between two currencies.
    #[tracing::instrument(
        name = "Get Rate",
        skip(self, request),
        fields(from = %request.currency_from, to = %request.currency_to)
    )]
    pub async fn rate(&self, request: &GetRateRequest) -> Result<f64, Error> {
        let res: RateResponse = self
            .inner
            .client
            .post(self.inner.endpoint("/movements/get_rate")?)
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res.rate)
    }
}
