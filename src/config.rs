use dioxus::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub app_name: String,
    pub unlock_sms_number: String,
    pub two_factor_probability: f64,
    pub session_expiry_probability: f64,
    pub latest_message_latency_ms: u32,
    pub refresh_latency_ms: u32,
    pub status_refresh_ms: u32,
    pub toast_lifetime_ms: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            app_name: "TeleConnect".to_string(),
            unlock_sms_number: "+1 (234) 567-8900".to_string(),
            two_factor_probability: 0.5,
            session_expiry_probability: 0.3,
            latest_message_latency_ms: 800,
            refresh_latency_ms: 1500,
            status_refresh_ms: 5000,
            toast_lifetime_ms: 4000,
        }
    }
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        match fetch_runtime_config().await {
            Ok(config) => config,
            Err(message) => {
                tracing::warn!("{message}; using built-in defaults");
                RuntimeConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    Ok(from_lookup(|name| std::env::var(name).ok()))
}

/// Builds the config from `TELECONNECT_*` variables. A bad value only
/// resets its own field.
#[cfg(not(target_arch = "wasm32"))]
fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    let probability = |name: &str, fallback: f64| {
        or_fallback(name, parse_probability(name, lookup(name)), fallback)
    };
    let millis = |name: &str, fallback: u32| {
        or_fallback(name, parse_millis(name, lookup(name)), fallback)
    };
    RuntimeConfig {
        two_factor_probability: probability(
            "TELECONNECT_TWO_FACTOR_PROBABILITY",
            defaults.two_factor_probability,
        ),
        session_expiry_probability: probability(
            "TELECONNECT_SESSION_EXPIRY_PROBABILITY",
            defaults.session_expiry_probability,
        ),
        latest_message_latency_ms: millis(
            "TELECONNECT_LATEST_MESSAGE_LATENCY_MS",
            defaults.latest_message_latency_ms,
        ),
        refresh_latency_ms: millis("TELECONNECT_REFRESH_LATENCY_MS", defaults.refresh_latency_ms),
        status_refresh_ms: millis("TELECONNECT_STATUS_REFRESH_MS", defaults.status_refresh_ms),
        toast_lifetime_ms: millis("TELECONNECT_TOAST_LIFETIME_MS", defaults.toast_lifetime_ms),
        app_name: lookup("TELECONNECT_APP_NAME").unwrap_or(defaults.app_name),
        unlock_sms_number: lookup("TELECONNECT_UNLOCK_SMS_NUMBER")
            .unwrap_or(defaults.unlock_sms_number),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn or_fallback<T: std::fmt::Display>(
    name: &str,
    parsed: Result<Option<T>, String>,
    fallback: T,
) -> T {
    match parsed {
        Ok(Some(value)) => value,
        Ok(None) => fallback,
        Err(message) => {
            tracing::warn!("{message}; {name} stays at {fallback}");
            fallback
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_probability(name: &str, value: Option<String>) -> Result<Option<f64>, String> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{name} must be a number"))?;
    if (0.0..=1.0).contains(&parsed) {
        Ok(Some(parsed))
    } else {
        Err(format!("{name} must be between 0 and 1"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_millis(name: &str, value: Option<String>) -> Result<Option<u32>, String> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("{name} must be a whole number of milliseconds"))?;
    if parsed == 0 {
        Err(format!("{name} must be greater than zero"))
    } else {
        Ok(Some(parsed))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        assert_eq!(from_lookup(lookup_from(&[])), RuntimeConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_lookup(lookup_from(&[
            ("TELECONNECT_APP_NAME", "Relay"),
            ("TELECONNECT_SESSION_EXPIRY_PROBABILITY", "0"),
            ("TELECONNECT_REFRESH_LATENCY_MS", "250"),
        ]));
        assert_eq!(config.app_name, "Relay");
        assert_eq!(config.session_expiry_probability, 0.0);
        assert_eq!(config.refresh_latency_ms, 250);
        assert_eq!(config.two_factor_probability, 0.5);
    }

    #[test]
    fn bad_value_only_resets_its_own_field() {
        let config = from_lookup(lookup_from(&[
            ("TELECONNECT_APP_NAME", "Relay"),
            ("TELECONNECT_TWO_FACTOR_PROBABILITY", "1.5"),
            ("TELECONNECT_STATUS_REFRESH_MS", "soon"),
            ("TELECONNECT_REFRESH_LATENCY_MS", "250"),
        ]));
        assert_eq!(config.app_name, "Relay");
        assert_eq!(config.refresh_latency_ms, 250);
        assert_eq!(config.two_factor_probability, 0.5);
        assert_eq!(config.status_refresh_ms, 5000);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let err = parse_probability("TELECONNECT_TWO_FACTOR_PROBABILITY", Some("1.5".to_string()))
            .unwrap_err();
        assert_eq!(err, "TELECONNECT_TWO_FACTOR_PROBABILITY must be between 0 and 1");
    }

    #[test]
    fn rejects_zero_latency() {
        let err = parse_millis("TELECONNECT_STATUS_REFRESH_MS", Some("0".to_string())).unwrap_err();
        assert_eq!(err, "TELECONNECT_STATUS_REFRESH_MS must be greater than zero");
    }

    #[test]
    fn non_numeric_latency_is_reported_as_such() {
        let err = parse_millis("TELECONNECT_STATUS_REFRESH_MS", Some("soon".to_string())).unwrap_err();
        assert_eq!(
            err,
            "TELECONNECT_STATUS_REFRESH_MS must be a whole number of milliseconds"
        );
    }

    #[test]
    fn partial_json_document_keeps_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"unlockSmsNumber":"+44 20 7946 0000"}"#).unwrap();
        assert_eq!(config.unlock_sms_number, "+44 20 7946 0000");
        assert_eq!(config.toast_lifetime_ms, 4000);
    }
}
