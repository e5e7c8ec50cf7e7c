use crate::{
    apis::{
        deposit_accounts::{
            CreateDepositAccountRequest, DepositAccount, UpdateDepositAccountRequest,
        },
        ListResponse, TropipayClientInner,
    },
    Error,
};
use std::sync::Arc;

/// Tropipay deposit accounts APIs client.
///
/// Deposit accounts are the beneficiaries funds can be sent to.
#[derive(Clone, Debug)]
pub struct DepositAccountsApi {
    inner: Arc<TropipayClientInner>,
}

impl DepositAccountsApi {
    pub(crate) fn new(inner: Arc<TropipayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all the beneficiaries of the account.
    #[tracing::instrument(name = "List Deposit Accounts", skip(self))]
    pub async fn list(&self) -> Result<Vec<DepositAccount>, Error> {
        let res: ListResponse<_> = self
            .inner
            .client
            .get(self.inner.endpoint("/deposit_accounts")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res.into_items())
    }

    /// Adds a new beneficiary.
    #[tracing::instrument(
        name = "Create Deposit Account",
        skip(self, request),
        fields(alias = %request.alias)
    )]
    pub async fn create(
        &self,
        request: &CreateDepositAccountRequest,
    ) -> Result<DepositAccount, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.endpoint("/deposit_accounts")?)
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets the details of an existing beneficiary.
    ///
    /// If there's no beneficiary with the given id, an error with status 404 is returned.
    #[tracing::instrument(name = "Get Deposit Account by ID", skip(self))]
    pub async fn get(&self, id: u64) -> Result<DepositAccount, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.endpoint(&format!("/deposit_accounts/{}", id))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Updates the given fields of an existing beneficiary.
    #[tracing::instrument(name = "Update Deposit Account", skip(self, request))]
    pub async fn update(
        &self,
        id: u64,
        request: &UpdateDepositAccountRequest,
    ) -> Result<DepositAccount, Error> {
        let res = self
            .inner
            .client
            .put(self.inner.endpoint(&format!("/deposit_accounts/{}", id))?)
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Deletes a beneficiary. The server answer is returned verbatim.
    #[tracing::instrument(name = "Delete Deposit Account", skip(self))]
    pub async fn delete(&self, id: u64) -> Result<serde_json::Value, Error> {
        let res = self
            .inner
            .client
            .delete(self.inner.endpoint(&format!("/deposit_accounts/{}", id))?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
