//! Configuration for the interpretation client.
//!
//! The credential comes from the environment at startup. A missing credential
//! is logged as a warning; requests then fail at the client boundary and fall
//! back like any other service error.

use std::time::Duration;

/// Default chat completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-0125";

/// Default bound on generated tokens; four paragraphs of at most 60 words fit.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Default delay before each request is dispatched.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(1500);

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model.
pub const MODEL_VAR: &str = "OPENAI_MODEL_NAME";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_VAR: &str = "OPENAI_BASE_URL";

/// Interpretation client settings.
#[derive(Clone)]
pub struct OracleConfig {
    /// Chat completions URL.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Minimum delay before each dispatch.
    pub throttle: Duration,
    /// Bearer credential; `None` makes every request fail without dispatch.
    pub api_key: Option<String>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            throttle: DEFAULT_THROTTLE,
            api_key: None,
        }
    }
}

impl std::fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("throttle", &self.throttle)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl OracleConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using a variable lookup function.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        match get(API_KEY_VAR) {
            Some(key) => config.api_key = Some(key),
            None => tracing::warn!(
                "{API_KEY_VAR} is not set; readings will fall back until it is configured"
            ),
        }
        if let Some(model) = get(MODEL_VAR) {
            config.model = model;
        }
        if let Some(endpoint) = get(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        config
    }

    /// Set the credential.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the generated-token bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the pre-dispatch delay.
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = OracleConfig::default();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.model, "gpt-3.5-turbo-0125");
        assert_eq!(cfg.throttle, Duration::from_millis(1500));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn missing_key_is_not_fatal() {
        let cfg = OracleConfig::from_lookup(lookup(&[]));
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.model, DEFAULT_MODEL);
    }

    #[test]
    fn reads_variables() {
        let cfg = OracleConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            (MODEL_VAR, "gpt-4o-mini"),
            (ENDPOINT_VAR, "http://localhost:8080/v1/chat/completions"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.endpoint, "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = OracleConfig::from_lookup(lookup(&[(API_KEY_VAR, "  ")]));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = OracleConfig::default().with_api_key("sk-secret");
        let shown = format!("{cfg:?}");
        assert!(!shown.contains("sk-secret"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn builder_methods() {
        let cfg = OracleConfig::default()
            .with_model("m")
            .with_endpoint("http://e")
            .with_max_tokens(42)
            .with_throttle(Duration::ZERO);
        assert_eq!(cfg.model, "m");
        assert_eq!(cfg.endpoint, "http://e");
        assert_eq!(cfg.max_tokens, 42);
        assert_eq!(cfg.throttle, Duration::ZERO);
    }
}
