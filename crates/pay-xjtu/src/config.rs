//! # Gateway Configuration
//!
//! Fixed endpoints and client identities for the campus card gateway.
//! Defaults are the vendor's constants; the base URL and timeout may be
//! overridden from the environment.

use once_cell::sync::Lazy;
use pay_core::{PaymentError, PaymentResult, Platform};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use std::env;
use std::time::Duration;

/// Gateway origin
pub const DEFAULT_BASE_URL: &str = "http://202.117.1.244:9001";

/// Order creation endpoint
pub const CREATE_ORDER_PATH: &str = "/Order/CreateOrder";

/// Payment confirmation endpoint
pub const CONFIRM_PATH: &str = "/Pay/CommonMobilePay";

/// User agent of the vendor's Android in-app browser
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 14; 2211133C Build/UKQ1.230804.001; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/126.0.6478.134 Mobile Safari/537.36 toon/2123344193 toonType/150 toonVersion/6.4.0 toongine/1.0.12 toongineBuild/12 platform/android language/zh skin/white fontIndex/0";

/// `X-Requested-With` value sent by the in-app browser
pub const REQUESTED_WITH: &str = "synjones.commerce.xjtu";

/// User agent of a generic desktop browser
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

pub const X_REQUESTED_WITH: &str = "x-requested-with";

/// Process-wide configuration, loaded from the environment on first use.
///
/// A bad override is kept as the error; it never falls back to the defaults.
pub static GATEWAY_CONFIG: Lazy<PaymentResult<GatewayConfig>> =
    Lazy::new(GatewayConfig::from_env);

/// The process-wide configuration, or the error loading it produced
pub fn gateway_config() -> PaymentResult<&'static GatewayConfig> {
    loaded(&GATEWAY_CONFIG)
}

fn loaded(config: &PaymentResult<GatewayConfig>) -> PaymentResult<&GatewayConfig> {
    config.as_ref().map_err(Clone::clone)
}

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Origin every gateway path is appended to
    pub base_url: String,

    pub create_order_path: String,

    pub confirm_path: String,

    pub mobile_user_agent: String,

    /// `X-Requested-With` header for mobile sessions
    pub requested_with: String,

    pub desktop_user_agent: String,

    /// Per-request timeout; `None` leaves it to the transport
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `XJTUPAY_BASE_URL`
    /// - `XJTUPAY_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("XJTUPAY_BASE_URL") {
            let parsed = Url::parse(&base_url).map_err(|e| {
                PaymentError::Configuration(format!("XJTUPAY_BASE_URL is not a URL: {}", e))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(PaymentError::Configuration(
                    "XJTUPAY_BASE_URL must use http or https".to_string(),
                ));
            }
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = lookup("XJTUPAY_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                PaymentError::Configuration("XJTUPAY_TIMEOUT_SECS must be an integer".to_string())
            })?;
            if secs == 0 {
                return Err(PaymentError::Configuration(
                    "XJTUPAY_TIMEOUT_SECS must be positive".to_string(),
                ));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Builder: set custom base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Builder: set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Absolute URL for a gateway path
    pub fn url_for(&self, path: &str) -> Result<Url, PaymentError> {
        join_url(&self.base_url, path)
    }

    /// Fixed headers sent with every request of a session
    pub fn headers(&self, platform: Platform) -> Result<HeaderMap, PaymentError> {
        let mut headers = HeaderMap::new();
        match platform {
            Platform::Mobile => {
                headers.insert(USER_AGENT, header_value(&self.mobile_user_agent)?);
                headers.insert(X_REQUESTED_WITH, header_value(&self.requested_with)?);
            }
            Platform::Desktop => {
                headers.insert(USER_AGENT, header_value(&self.desktop_user_agent)?);
            }
        }
        Ok(headers)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            create_order_path: CREATE_ORDER_PATH.to_string(),
            confirm_path: CONFIRM_PATH.to_string(),
            mobile_user_agent: MOBILE_USER_AGENT.to_string(),
            requested_with: REQUESTED_WITH.to_string(),
            desktop_user_agent: DESKTOP_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> Result<Url, PaymentError> {
    let joined = format!("{}{}", base_url, path);
    Url::parse(&joined).map_err(|e| PaymentError::InvalidUrl(format!("{}: {}", joined, e)))
}

fn header_value(value: &str) -> Result<HeaderValue, PaymentError> {
    HeaderValue::from_str(value)
        .map_err(|e| PaymentError::Configuration(format!("invalid header value: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = GatewayConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.create_order_path, "/Order/CreateOrder");
        assert_eq!(config.confirm_path, "/Pay/CommonMobilePay");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = GatewayConfig::from_vars(vars(&[
            ("XJTUPAY_BASE_URL", "http://127.0.0.1:9001/"),
            ("XJTUPAY_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9001");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_overrides() {
        let bad_scheme = GatewayConfig::from_vars(vars(&[("XJTUPAY_BASE_URL", "ftp://gw")]));
        assert!(matches!(bad_scheme, Err(PaymentError::Configuration(_))));

        let bad_timeout = GatewayConfig::from_vars(vars(&[("XJTUPAY_TIMEOUT_SECS", "soon")]));
        assert!(matches!(bad_timeout, Err(PaymentError::Configuration(_))));

        let zero_timeout = GatewayConfig::from_vars(vars(&[("XJTUPAY_TIMEOUT_SECS", "0")]));
        assert!(matches!(zero_timeout, Err(PaymentError::Configuration(_))));
    }

    #[test]
    fn test_bad_override_is_kept_as_error() {
        let loaded_config =
            GatewayConfig::from_vars(vars(&[("XJTUPAY_BASE_URL", "ftp://127.0.0.1:9001")]));

        match loaded(&loaded_config) {
            Err(PaymentError::Configuration(msg)) => assert!(msg.contains("XJTUPAY_BASE_URL")),
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_loaded_config_is_borrowed() {
        let loaded_config =
            GatewayConfig::from_vars(vars(&[("XJTUPAY_BASE_URL", "http://127.0.0.1:9001")]));
        let config = loaded(&loaded_config).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9001");
        assert_ne!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_url_for() {
        let config = GatewayConfig::default();
        assert_eq!(
            config.url_for(CREATE_ORDER_PATH).unwrap().as_str(),
            "http://202.117.1.244:9001/Order/CreateOrder"
        );
    }

    #[test]
    fn test_platform_headers() {
        let config = GatewayConfig::default();

        let mobile = config.headers(Platform::Mobile).unwrap();
        assert_eq!(mobile.get(USER_AGENT).unwrap(), MOBILE_USER_AGENT);
        assert_eq!(mobile.get(X_REQUESTED_WITH).unwrap(), REQUESTED_WITH);

        let desktop = config.headers(Platform::Desktop).unwrap();
        assert_eq!(desktop.get(USER_AGENT).unwrap(), DESKTOP_USER_AGENT);
        assert!(desktop.get(X_REQUESTED_WITH).is_none());
    }
}
