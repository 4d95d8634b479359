use anyhow::{anyhow, Context, Result};

pub const DEFAULT_DEVICE_ID: &str = "sensor_002";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_TABLE_CAPACITY: usize = 10;
// Django dev server, used when there is no page origin to inherit
pub const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000";

pub const LATEST_PATH: &str = "/api/v1/latest_data";
pub const HISTORY_PATH: &str = "/api/v1/historical_data";

/// What to do with a response that arrives after a newer response
/// for the same endpoint was already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Apply every response as it arrives, even if it is older.
    #[default]
    ApplyInArrivalOrder,
    /// Drop responses to requests older than the newest applied one.
    DiscardStale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub device_id: String,
    pub poll_interval_ms: u32,
    pub table_capacity: usize,
    pub stale_responses: StaleResponsePolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            device_id: DEFAULT_DEVICE_ID.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            table_capacity: DEFAULT_TABLE_CAPACITY,
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `SENSOR_*` environment variables (native shells only).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(base) = lookup("SENSOR_API_BASE") {
            cfg.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(id) = lookup("SENSOR_DEVICE_ID") {
            if id.trim().is_empty() {
                return Err(anyhow!("SENSOR_DEVICE_ID is set but empty"));
            }
            cfg.device_id = id;
        }
        if let Some(ms) = lookup("SENSOR_POLL_MS") {
            let ms: u32 = ms
                .parse()
                .with_context(|| format!("SENSOR_POLL_MS={ms:?} is not a number"))?;
            if ms == 0 {
                return Err(anyhow!("SENSOR_POLL_MS must be greater than zero"));
            }
            cfg.poll_interval_ms = ms;
        }
        if let Some(flag) = lookup("SENSOR_DISCARD_STALE") {
            cfg.stale_responses = match flag.as_str() {
                "1" | "true" | "yes" => StaleResponsePolicy::DiscardStale,
                "0" | "false" | "no" => StaleResponsePolicy::ApplyInArrivalOrder,
                other => return Err(anyhow!("SENSOR_DISCARD_STALE={other:?} is not a boolean")),
            };
        }
        Ok(cfg)
    }

    pub fn latest_url(&self) -> String {
        format!("{}{}", self.api_base, LATEST_PATH)
    }

    pub fn history_url(&self) -> String {
        format!("{}{}", self.api_base, HISTORY_PATH)
    }
}

#[cfg(feature = "web")]
fn default_api_base() -> String {
    page_origin().unwrap_or_else(|| FALLBACK_API_BASE.to_string())
}

#[cfg(not(feature = "web"))]
fn default_api_base() -> String {
    FALLBACK_API_BASE.to_string()
}

// window.location.origin; reqwest needs absolute URLs even in the browser
#[cfg(feature = "web")]
fn page_origin() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let location = Reflect::get(&js_sys::global(), &JsValue::from_str("location")).ok()?;
    Reflect::get(&location, &JsValue::from_str("origin"))
        .ok()?
        .as_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_dashboard_constants() {
        let cfg = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.device_id, "sensor_002");
        assert_eq!(cfg.poll_interval_ms, 5_000);
        assert_eq!(cfg.table_capacity, 10);
        assert_eq!(
            cfg.stale_responses,
            StaleResponsePolicy::ApplyInArrivalOrder
        );
        assert_eq!(cfg.latest_url(), "http://127.0.0.1:8000/api/v1/latest_data");
    }

    #[test]
    fn env_overrides() {
        let cfg = DashboardConfig::from_lookup(lookup(&[
            ("SENSOR_API_BASE", "https://safe.example/"),
            ("SENSOR_DEVICE_ID", "sensor_007"),
            ("SENSOR_POLL_MS", "2500"),
            ("SENSOR_DISCARD_STALE", "true"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.history_url(),
            "https://safe.example/api/v1/historical_data"
        );
        assert_eq!(cfg.device_id, "sensor_007");
        assert_eq!(cfg.poll_interval_ms, 2_500);
        assert_eq!(cfg.stale_responses, StaleResponsePolicy::DiscardStale);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(DashboardConfig::from_lookup(lookup(&[("SENSOR_POLL_MS", "soon")])).is_err());
        assert!(DashboardConfig::from_lookup(lookup(&[("SENSOR_POLL_MS", "0")])).is_err());
        assert!(DashboardConfig::from_lookup(lookup(&[("SENSOR_DEVICE_ID", " ")])).is_err());
        assert!(
            DashboardConfig::from_lookup(lookup(&[("SENSOR_DISCARD_STALE", "maybe")])).is_err()
        );
    }
}
