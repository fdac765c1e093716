use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Application-level constants
pub const APP_NAME: &str = "medigate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Chat envelope limits (characters).
pub const SESSION_ID_MAX_CHARS: usize = 64;
pub const PROMPT_MAX_CHARS: usize = 500;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));
const DEFAULT_LLM_BASE_URL: &str = "https://api.deepseek.com";
const DEFAULT_LLM_MODEL: &str = "deepseek-chat";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PREDICTOR_BASE_URL: &str = "http://localhost:8500";
const DEFAULT_DIABETES_STORE_URL: &str = "http://localhost:5000/api/save";
const DEFAULT_HYPERTENSION_STORE_URL: &str = "https://back-6jw0.onrender.com/api/save1";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 15;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "medigate=info,medigate_lib=info,tower_http=info"
}

/// Language model connection settings.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API, without trailing slash.
    pub base_url: String,
    /// `None` for providers that need no authentication.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LLM_BASE_URL.into(),
            api_key: None,
            model: DEFAULT_LLM_MODEL.into(),
            temperature: 0.4,
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

/// Outbound endpoints for the measurement prediction flow.
#[derive(Debug, Clone)]
pub struct PredictionConfig {
    pub predictor_base_url: String,
    pub diabetes_store_url: String,
    pub hypertension_store_url: String,
    pub timeout_secs: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            predictor_base_url: DEFAULT_PREDICTOR_BASE_URL.into(),
            diabetes_store_url: DEFAULT_DIABETES_STORE_URL.into(),
            hypertension_store_url: DEFAULT_HYPERTENSION_STORE_URL.into(),
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub llm: LlmConfig,
    pub prediction: PredictionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            llm: LlmConfig::default(),
            prediction: PredictionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source. Blank values count as unset;
    /// unparseable values are logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let bind_addr = match get("MEDIGATE_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "Invalid MEDIGATE_BIND_ADDR, using default");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let llm = LlmConfig {
            base_url: get("DEEPSEEK_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.llm.base_url),
            api_key: get("DEEPSEEK_API_KEY"),
            model: get("DEEPSEEK_MODEL").unwrap_or(defaults.llm.model),
            temperature: defaults.llm.temperature,
            timeout_secs: parse_secs(get("DEEPSEEK_TIMEOUT_SECS"), "DEEPSEEK_TIMEOUT_SECS")
                .unwrap_or(defaults.llm.timeout_secs),
        };

        let prediction = PredictionConfig {
            predictor_base_url: get("PREDICTOR_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.prediction.predictor_base_url),
            diabetes_store_url: get("NODE_DIABETES_URL")
                .unwrap_or(defaults.prediction.diabetes_store_url),
            hypertension_store_url: get("NODE_HYPERTENSION_URL")
                .unwrap_or(defaults.prediction.hypertension_store_url),
            timeout_secs: defaults.prediction.timeout_secs,
        };

        Self {
            bind_addr,
            llm,
            prediction,
        }
    }
}

fn parse_secs(raw: Option<String>, key: &str) -> Option<u64> {
    let raw = raw?;
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            tracing::warn!(key, value = %raw, "Invalid timeout, using default");
            None
        }
    }
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
    fn defaults_when_environment_empty() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8000");
        assert_eq!(config.llm.base_url, "https://api.deepseek.com");
        assert_eq!(config.llm.model, "deepseek-chat");
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.prediction.diabetes_store_url, "http://localhost:5000/api/save");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MEDIGATE_BIND_ADDR", "127.0.0.1:9100"),
            ("DEEPSEEK_BASE_URL", "http://localhost:11434/v1/"),
            ("DEEPSEEK_API_KEY", "sk-test"),
            ("DEEPSEEK_MODEL", "qwen2.5:3b"),
            ("DEEPSEEK_TIMEOUT_SECS", "5"),
            ("NODE_HYPERTENSION_URL", "http://store.local/api/save1"),
        ]));
        assert_eq!(config.bind_addr.port(), 9100);
        assert_eq!(config.llm.base_url, "http://localhost:11434/v1");
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.model, "qwen2.5:3b");
        assert_eq!(config.llm.timeout_secs, 5);
        assert_eq!(config.prediction.hypertension_store_url, "http://store.local/api/save1");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MEDIGATE_BIND_ADDR", "not-an-address"),
            ("DEEPSEEK_TIMEOUT_SECS", "0"),
            ("DEEPSEEK_API_KEY", "   "),
        ]));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.llm.timeout_secs, 30);
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn app_name_is_medigate() {
        assert_eq!(APP_NAME, "medigate");
    }
}
