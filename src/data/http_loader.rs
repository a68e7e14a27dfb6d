use std::time::Duration;

use tracing::debug;

use crate::data::DataLoader;
use crate::error::{ChartError, ChartResult};

/// Single-request HTTP loader; no retries.
#[derive(Debug, Clone)]
pub struct HttpDataLoader {
    client: reqwest::blocking::Client,
}

impl HttpDataLoader {
    pub fn new(timeout: Duration) -> ChartResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ChartError::Configuration(format!("http client: {err}")))?;
        Ok(Self { client })
    }
}

impl DataLoader for HttpDataLoader {
    fn fetch(&self, url: &str) -> ChartResult<String> {
        let to_load_error = |err: reqwest::Error| ChartError::DataLoad {
            url: url.to_owned(),
            reason: err.to_string(),
        };
        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(to_load_error)?;
        let body = response.text().map_err(to_load_error)?;
        debug!(url, bytes = body.len(), "fetched chart data");
        Ok(body)
    }
}
