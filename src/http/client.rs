use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::rate_limiter::RateLimiter;

/// HTTP client with bearer auth and built-in rate limiting
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(
        api_token: &str,
        user_agent: &str,
        timeout_secs: u64,
        rate_limit_ms: u64,
    ) -> Result<Self> {
        let client = Self::build_client(api_token, user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        self.send_get_request(url).await
    }

    fn build_client(api_token: &str, user_agent: &str, timeout_secs: u64) -> Result<Client> {
        let headers = Self::default_headers(api_token)?;

        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")
    }

    fn default_headers(api_token: &str) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_token}"))
            .context("API token contains characters not valid in a header")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}
