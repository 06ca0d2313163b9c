//! Remote quote provider.
//!
//! `QuoteProvider` is the seam between the quote source and the network. The production
//! implementation, `RapidApiProvider`, issues one blocking `GET` per call with the two
//! identifying headers, rejects non-success statuses, and decodes the body with
//! [`parse_payload`](crate::model::payload::parse_payload).
use std::time::Duration;

use log::debug;
use quote_common::net::{HOST_HEADER, KEY_HEADER, QUOTE_API_HOST, QUOTE_ENDPOINT};
use quote_common::{Quote, QuoteError, Result};
use reqwest::blocking::Client;

use crate::model::payload::parse_payload;

/// Source of fresh quotes. Implementations may block.
pub trait QuoteProvider: Send + Sync {
    /// Fetches one random quote.
    fn fetch(&self) -> Result<Quote>;
}

/// Quote provider backed by the RapidAPI `quotes15` service.
pub struct RapidApiProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RapidApiProvider {
    /// Creates a provider for the public endpoint.
    ///
    /// `timeout` of `None` waits for the provider indefinitely.
    pub fn new(api_key: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        Self::with_endpoint(QUOTE_ENDPOINT, api_key, timeout)
    }

    /// Creates a provider for a custom endpoint.
    pub fn with_endpoint(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Http(format!("HTTP client builder failed: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }
}

impl QuoteProvider for RapidApiProvider {
    fn fetch(&self) -> Result<Quote> {
        let api_key = self.api_key.as_deref().ok_or(QuoteError::MissingApiKey)?;

        debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(HOST_HEADER, QUOTE_API_HOST)
            .header(KEY_HEADER, api_key)
            .send()
            .map_err(|e| QuoteError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| QuoteError::Http(e.to_string()))?;
        parse_payload(&body)
    }
}
