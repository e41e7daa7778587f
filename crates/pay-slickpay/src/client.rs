//! # Slick-Pay HTTP Executor
//!
//! Every processor call goes through [`SlickpayClient`]: bearer auth, JSON
//! headers, 3 s connect / 20 s total timeouts. The HTTP status is not used
//! to decide success; the processor signals failures in the JSON body, so
//! the body is always decoded and handed back.

use crate::config::SlickpayConfig;
use pay_core::{PaymentError, PaymentResult};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub struct SlickpayClient {
    client: Client,
    base_url: String,
    auth_header: String,
}

impl SlickpayClient {
    pub fn new(config: &SlickpayConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .danger_accept_invalid_hostnames(!config.verify_hostname)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            auth_header: config.auth_header(),
        })
    }

    /// `{base}/{segments...}`, each segment percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> PaymentResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            PaymentError::Configuration(format!("Invalid API base URL {}: {}", self.base_url, e))
        })?;

        {
            let mut path = url.path_segments_mut().map_err(|_| {
                PaymentError::Configuration(format!("API base URL cannot take a path: {}", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }

        Ok(url)
    }

    pub async fn get(&self, segments: &[&str]) -> PaymentResult<Value> {
        let url = self.endpoint(segments)?;
        self.execute(self.client.get(url)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> PaymentResult<Value> {
        let url = self.endpoint(segments)?;
        self.execute(self.client.post(url).json(body)).await
    }

    async fn execute(&self, request: RequestBuilder) -> PaymentResult<Value> {
        let response = request
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &self.auth_header)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if status.is_success() {
            debug!("Slick-Pay {} -> {}", url.path(), status);
        } else {
            warn!("Slick-Pay {} -> {}: {}", url.path(), status, body);
        }

        serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!(
                "Failed to parse Slick-Pay response (HTTP {}): {}",
                status, e
            ))
        })
    }
}
