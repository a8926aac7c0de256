// HTTP client utilities
use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Create the shared HTTP client from config
///
/// No request timeout is set unless `timeout_secs` is configured.
pub fn create_client(config: &Config) -> Result<Client, TranslateError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .user_agent(concat!("shakespeare/", env!("CARGO_PKG_VERSION")));

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = Proxy::all(proxy)
            .map_err(|e| TranslateError::Config(format!("Invalid http_proxy '{}': {}", proxy, e)))?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(client_build_error)
}

// Building the client never touches the network, so failures are config errors.
fn client_build_error(e: reqwest::Error) -> TranslateError {
    TranslateError::Config(format!("Failed to build HTTP client: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_proxy() {
        let config = Config {
            http_proxy: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            create_client(&config),
            Err(TranslateError::Config(_))
        ));
    }

    #[test]
    fn build_failure_is_not_transport() {
        let e = Client::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        let err = client_build_error(e);
        assert!(!err.is_transport());
        assert!(matches!(err, TranslateError::Config(ref m) if m.contains("HTTP client")));
    }

    #[test]
    fn empty_proxy_is_ignored() {
        let config = Config {
            http_proxy: Some(String::new()),
            timeout_secs: Some(5),
            ..Config::default()
        };
        assert!(create_client(&config).is_ok());
    }
}
