use async_trait::async_trait;
use dioxus::logger::tracing::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::shared::types::{Envelope, Reading};

/// Read side of the sensor backend.
#[async_trait(?Send)]
pub trait SensorApi {
    async fn latest(&self, device_id: &str) -> Result<Reading, FetchError>;
    async fn history(&self, device_id: &str) -> Result<Vec<Reading>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpSensorApi {
    client: Client,
    latest_url: String,
    history_url: String,
}

impl HttpSensorApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: build_client(),
            latest_url: config.latest_url(),
            history_url: config.history_url(),
        }
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: &str,
        device_id: &str,
    ) -> Result<T, FetchError> {
        debug!("[api] GET {} device_id={}", url, device_id);
        let res = self
            .client
            .get(url)
            .query(&[("device_id", device_id)])
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = res.status();
        let bytes = res.bytes().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        if !status.is_success() {
            // error responses still carry an envelope with a message
            let message = serde_json::from_slice::<Envelope<serde_json::Value>>(&bytes)
                .ok()
                .and_then(|env| env.message);
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }
        decode_envelope(url, &bytes)
    }
}

#[async_trait(?Send)]
impl SensorApi for HttpSensorApi {
    async fn latest(&self, device_id: &str) -> Result<Reading, FetchError> {
        self.get_envelope(&self.latest_url, device_id).await
    }

    async fn history(&self, device_id: &str) -> Result<Vec<Reading>, FetchError> {
        self.get_envelope(&self.history_url, device_id).await
    }
}

/// Unwraps `{status, data}`; anything but `status == "success"` with data is an error.
pub fn decode_envelope<T: DeserializeOwned>(url: &str, bytes: &[u8]) -> Result<T, FetchError> {
    let env: Envelope<T> = serde_json::from_slice(bytes).map_err(|source| {
        let snip = String::from_utf8_lossy(bytes);
        let snip = snip.chars().take(300).collect::<String>();
        debug!("[api] undecodable body from {}: {}", url, snip);
        FetchError::Decode {
            url: url.to_string(),
            source,
        }
    })?;
    if !env.is_success() {
        return Err(FetchError::Application {
            message: env.message.unwrap_or_default(),
            status: env.status,
        });
    }
    env.data.ok_or_else(|| FetchError::MissingData {
        url: url.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Client {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
}

// the browser owns timeouts for fetch()
#[cfg(target_arch = "wasm32")]
fn build_client() -> Client {
    Client::new()
}
