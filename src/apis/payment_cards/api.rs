use crate::{
    apis::{
        payment_cards::{CreatePaymentCardRequest, PaymentCard},
        ListResponse, TropipayClientInner,
    },
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Tropipay payment cards APIs client.
///
/// A payment card is a reusable or single-use payment link.
#[derive(Clone, Debug)]
pub struct PaymentCardsApi {
    inner: Arc<TropipayClientInner>,
}

impl PaymentCardsApi {
    pub(crate) fn new(inner: Arc<TropipayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new payment card.
    #[tracing::instrument(
        name = "Create Payment Card",
        skip(self, request),
        fields(
            reference = %request.reference,
            amount = %request.amount,
            currency = %request.currency
        )
    )]
    pub async fn create(&self, request: &CreatePaymentCardRequest) -> Result<PaymentCard, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.endpoint("/paymentcards")?)
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the payment cards of the account.
    #[tracing::instrument(name = "List Payment Cards", skip(self))]
    pub async fn list(&self) -> Result<Vec<PaymentCard>, Error> {
        let res: ListResponse<_> = self
            .inner
            .client
            .get(self.inner.endpoint("/paymentcards")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res.into_items())
    }

    /// Gets the details of an existing payment card.
    ///
    /// If there's no payment card with the given id, an error with status 404 is returned.
    #[tracing::instrument(name = "Get Payment Card by ID", skip(self))]
    pub async fn get(&self, id: &str) -> Result<PaymentCard, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .endpoint(&format!("/paymentcards/{}", encode(id)))?,
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Deletes a payment card.
    ///
    /// The deletion is logical: the short URL is deactivated and the card disappears from
    /// listings, while the long payment URL may remain reachable. The server answer is returned verbatim.
    #[tracing::instrument(name = "Delete Payment Card", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<serde_json::Value, Error> {
        let res = self
            .inner
            .client
            .delete(
                self.inner
                    .endpoint(&format!("/paymentcards/{}", encode(id)))?,
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the payment cards marked as favorite. An empty list is not an error.
    #[tracing::instrument(name = "List Favorite Payment Cards", skip(self))]
    pub async fn favorites(&self) -> Result<Vec<PaymentCard>, Error> {
        let res: ListResponse<_> = self
            .inner
            .client
            .get(self.inner.endpoint("/paymentcards/favorites")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res.into_items())
    }
}
