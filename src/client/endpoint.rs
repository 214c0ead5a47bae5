use std::future::Future;

use reqwest::Client;

use crate::model::{CalculationResult, ConfigurationPayload};

use super::error::SubmitError;

/// Remote calculator URL used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://streetless-heidy-folkish.ngrok-free.dev/configure";

/// Something that turns a configuration payload into calculation results.
///
/// [`HttpEndpoint`] is the real implementation; tests substitute their own.
pub trait CalculationEndpoint {
    /// Sends one request for `payload` and returns the parsed result.
    fn configure(
        &self,
        payload: &ConfigurationPayload,
    ) -> impl Future<Output = Result<CalculationResult, SubmitError>> + Send;
}

/// Posts payloads as JSON to a fixed URL.
///
/// No retries and no timeout beyond the transport's own.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: Client,
    url: String,
}

impl HttpEndpoint {
    /// Creates an endpoint posting to `url`.
    pub fn new(url: impl Into<String>) -> Result<Self, SubmitError> {
        Ok(Self {
            client: Client::builder().build()?,
            url: url.into(),
        })
    }

    /// Returns the URL requests are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CalculationEndpoint for HttpEndpoint {
    async fn configure(
        &self,
        payload: &ConfigurationPayload,
    ) -> Result<CalculationResult, SubmitError> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        check_status(response.status().as_u16())?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Maps a non-success status to [`SubmitError::Server`].
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Server(status))
    }
}
