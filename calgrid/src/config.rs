use std::{env, time::Duration};

use anyhow::Context;
use reqwest::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how extracted events are delivered.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// `None` disables delivery.
    pub webhook_url: Option<Url>,
    pub timeout: Duration,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SinkConfig {
    /// Read `WEBHOOK_URL` and `WEBHOOK_TIMEOUT_SECS`. Both are optional, but must
    /// be well formed if set.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let webhook_url = var("WEBHOOK_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| Url::parse(url.trim()))
            .transpose()
            .context("`WEBHOOK_URL` is not a valid url")?;
        let timeout = match var("WEBHOOK_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .context("`WEBHOOK_TIMEOUT_SECS` must be a whole number of seconds")?,
            ),
            None => DEFAULT_TIMEOUT,
        };
        Ok(Self {
            webhook_url,
            timeout,
        })
    }
}
