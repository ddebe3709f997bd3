use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode, Url};

use crate::{config::SinkConfig, data::AssociatedEvent, error::SinkError};

/// Successful hand-off of an event list.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub status: StatusCode,
    /// Whatever the receiver answered with.
    pub body: String,
}

/// Receives the final, ordered event list.
#[allow(async_fn_in_trait)]
pub trait Sink {
    async fn deliver(&self, events: &[AssociatedEvent]) -> Result<Delivery, SinkError>;
}

/// POSTs the events as a JSON array to a webhook.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: Client,
    url: Url,
}

impl WebhookSink {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, SinkError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(SinkError::Client)?;
        Ok(Self { client, url })
    }

    /// `None` if no webhook is configured.
    pub fn from_config(config: &SinkConfig) -> Result<Option<Self>, SinkError> {
        config
            .webhook_url
            .clone()
            .map(|url| Self::new(url, config.timeout))
            .transpose()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Sink for WebhookSink {
    async fn deliver(&self, events: &[AssociatedEvent]) -> Result<Delivery, SinkError> {
        tracing::debug!("posting {} events to {}", events.len(), self.url);
        let res = self
            .client
            .post(self.url.clone())
            .json(events)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(SinkError::Status { status, body });
        }
        Ok(Delivery { status, body })
    }
}
