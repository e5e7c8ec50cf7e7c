use crate::{
    apis::{
        hooks::{HookEventType, HookSubscription, HookTarget, SubscribedHook},
        ListResponse, TropipayClientInner,
    },
    Error,
};
use std::sync::Arc;

/// Tropipay webhook subscriptions APIs client.
#[derive(Clone, Debug)]
pub struct HooksApi {
    inner: Arc<TropipayClientInner>,
}

impl HooksApi {
    pub(crate) fn new(inner: Arc<TropipayClientInner>) -> Self {
        Self { inner }
    }

    /// Subscribes a target to an event.
    #[tracing::instrument(
        name = "Subscribe Hook",
        skip(self, subscription),
        fields(event = %subscription.event, target = %subscription.target)
    )]
    pub async fn subscribe(&self, subscription: &HookSubscription) -> Result<SubscribedHook, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.endpoint("/hooks")?)
            .json(subscription)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the active subscriptions, optionally restricted to a single event.
    ///
    /// If there's no subscription for the given event, an empty list is returned.
    #[tracing::instrument(name = "List Hooks", skip(self))]
    pub async fn list(
        &self,
        event: Option<HookEventType>,
    ) -> Result<Vec<SubscribedHook>, Error> {
        let url = match event {
            Some(event) => self.inner.endpoint(&format!("/hooks/{}", event))?,
            None => self.inner.endpoint("/hooks")?,
        };

        let res = self.inner.client.get(url).send().await.map_err(Error::from);

        // Return an empty list if the server returned 404 for a specific event
        let hooks = match res {
            Ok(body) => body.json::<ListResponse<_>>().await?.into_items(),
            Err(Error::ApiError(api_error)) if event.is_some() && api_error.is_not_found() => {
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(hooks)
    }

    /// Changes the value of an existing subscription, identified by its event and target.
    #[tracing::instrument(
        name = "Update Hook",
        skip(self, subscription),
        fields(event = %subscription.event, target = %subscription.target)
    )]
    pub async fn update(&self, subscription: &HookSubscription) -> Result<SubscribedHook, Error> {
        let res = self
            .inner
            .client
            .put(self.inner.endpoint("/hooks")?)
            .json(subscription)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Removes a subscription. The server answer is returned verbatim.
    #[tracing::instrument(name = "Delete Hook", skip(self))]
    pub async fn delete(
        &self,
        event: HookEventType,
        target: HookTarget,
    ) -> Result<serde_json::Value, Error> {
        let res = self
            .inner
            .client
            .delete(
                self.inner
                    .endpoint(&format!("/hooks/{}/{}", event, target))?,
            )
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the events available for subscription, as described by Tropipay.
    #[tracing::instrument(name = "List Hook Events", skip(self))]
    pub async fn events(&self) -> Result<serde_json::Value, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.endpoint("/hooks/events")?)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
