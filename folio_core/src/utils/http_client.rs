//! HTTP client construction for outbound provider calls
//!
//! One place to set timeouts, pooling and the user agent so every provider
//! talks to the network the same way.

use reqwest::Client;
use std::time::Duration;

/// Configuration for the outbound HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Overall request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// Connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Pool idle timeout (default: 90 seconds)
    pub pool_idle_timeout: Duration,
    /// Max idle connections per host (default: 2)
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 2,
        }
    }
}

/// Create the client used for email delivery
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    create_http_client_with(HttpClientConfig::default())
}

/// Create a client with the specified configuration
pub fn create_http_client_with(config: HttpClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .user_agent(format!("folio/{}", env!("CARGO_PKG_VERSION")))
        .build()
}
