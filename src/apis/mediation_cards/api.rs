use crate::{
    apis::{
        mediation_cards::CreateMediationCardRequest, payment_cards::PaymentCard,
        TropipayClientInner,
    },
    Error,
};
use std::sync::Arc;

/// Tropipay mediation payment cards APIs client.
///
/// A mediation card is an escrow payment link: funds are held until both parties confirm.
/// Only business accounts are allowed to create them; other accounts get a 403 error.
#[derive(Clone, Debug)]
pub struct MediationCardsApi {
    inner: Arc<TropipayClientInner>,
}

impl MediationCardsApi {
    pub(crate) fn new(inner: Arc<TropipayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new mediation payment card.
    #[tracing::instrument(
        name = "Create Mediation Card",
        skip(self, request),
        fields(
            reference = %request.reference,
            amount = %request.amount,
            currency = %request.currency
        )
    )]
    pub async fn create(&self, request: &CreateMediationCardRequest) -> Result<PaymentCard, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.endpoint("/paymentcards/mediation")?)
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
