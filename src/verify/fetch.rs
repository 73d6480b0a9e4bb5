use std::time::Duration;

use tracing::debug;

use crate::error::{FortuneError, Result};

const USER_AGENT: &str = concat!("quote_fortune/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back the body of a reference page.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetch with a per-request timeout. Non-2xx is an error.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FortuneError::Client)?;
        Ok(HttpSource { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        let fetch_err = |source: reqwest::Error| FortuneError::Fetch {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().map_err(fetch_err)?;
        let status = response.status();
        debug!(url, %status, "fetched reference page");
        if !status.is_success() {
            return Err(FortuneError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().map_err(fetch_err)
    }
}
