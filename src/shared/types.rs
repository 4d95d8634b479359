use serde::{Deserialize, Deserializer, Serialize};

pub const STATUS_SUCCESS: &str = "success";

/// One sensor sample as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: i64, // epoch seconds
    // historical_data rows carry no device id
    #[serde(default)]
    pub device_id: String,
    pub temperature: f64, // °C
    pub humidity: f64,    // %
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_anomaly: bool,
}

/// `{ "status": "success", "data": ... }` wrapper used by both endpoints.
/// Error responses carry `message` and no `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
