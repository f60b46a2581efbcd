//! HTTP client shared by every provider adapter
//!
//! Wraps reqwest with a per-provider rate limiter, a bounded retry policy and
//! a hard per-request timeout, so no single provider can stall an aggregation.

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::modules::provider::domain::ProviderConfig;
use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, RequestBuilder, Response};
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const API_USER_AGENT: &str = "mosaic/0.1 (image aggregation service)";

/// Desktop browser identity; the wallpaper site rejects anything else
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";
pub const BROWSER_REFERER: &str = "https://www.google.com/";

/// Raw response for callers that handle the status themselves
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fully read binary response
#[derive(Debug, Clone)]
pub struct RawBytes {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Rate-limited HTTP client with retries for one provider
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    timeout: Duration,
    default_headers: Vec<(&'static str, String)>,
    provider_name: String,
}

impl RateLimitClient {
    /// Unsplash: 50 req/hour on demo keys, so keep bursts small
    pub fn for_unsplash(config: &ProviderConfig) -> Self {
        Self::new(
            "Unsplash",
            RetryPolicy::transient(),
            Self::create_rate_limiter(2.0, 5),
            config.timeout(),
        )
    }

    pub fn for_pexels(config: &ProviderConfig) -> Self {
        Self::new(
            "Pexels",
            RetryPolicy::transient(),
            Self::create_rate_limiter(3.0, 5),
            config.timeout(),
        )
    }

    /// nekos.life serves one image per call, so allow a burst of single fetches
    pub fn for_nekos(config: &ProviderConfig) -> Self {
        Self::new(
            "Nekos",
            RetryPolicy::single_attempt(),
            Self::create_rate_limiter(10.0, 25),
            config.timeout(),
        )
    }

    pub fn for_artic(config: &ProviderConfig) -> Self {
        Self::new(
            "Art Institute",
            RetryPolicy::transient(),
            Self::create_rate_limiter(5.0, 5),
            config.timeout(),
        )
    }

    pub fn for_wallpaperflare(config: &ProviderConfig) -> Self {
        Self::new(
            "WallpaperFlare",
            RetryPolicy::single_attempt(),
            Self::create_rate_limiter(2.0, 3),
            config.timeout(),
        )
        .with_header("User-Agent", BROWSER_USER_AGENT)
        .with_header("Referer", BROWSER_REFERER)
    }

    /// Client for proxying arbitrary image downloads
    pub fn for_downloads(timeout: Duration) -> Self {
        Self::new(
            "Download",
            RetryPolicy::single_attempt(),
            Self::create_rate_limiter(20.0, 20),
            timeout,
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let duration = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::from_secs(3600)
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(duration)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    pub fn new(
        provider_name: &str,
        retry_policy: RetryPolicy,
        rate_limiter: DirectRateLimiter,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            retry_policy,
            timeout,
            default_headers: vec![("User-Agent", API_USER_AGENT.to_string())],
            provider_name: provider_name.to_string(),
        }
    }

    /// Set a header sent with every request, replacing any earlier value
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.default_headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.default_headers.push((name, value.into()));
        self
    }

    /// GET a JSON document, retrying transient failures
    pub async fn get_json<T>(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send_with_retries(url, query, headers).await?;
        self.parse_response(response).await
    }

    /// GET and hand back the status and body without judging the status
    pub async fn get_raw(&self, url: &str, query: &[(&str, String)]) -> AppResult<RawResponse> {
        self.rate_limiter.until_ready().await;
        let response = self.build_request(url, query, &[]).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    /// GET with a custom timeout, for health probes
    pub async fn probe(&self, url: &str, timeout: Duration) -> AppResult<RawResponse> {
        let response = self
            .build_request(url, &[], &[])
            .timeout(timeout)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    /// GET a successful response and read the whole body.
    ///
    /// The client timeout covers the body as well, so a stalled transfer is
    /// an error here rather than a truncated body later.
    pub async fn get_bytes(&self, url: &str) -> AppResult<RawBytes> {
        self.rate_limiter.until_ready().await;
        let response = self
            .build_request(url, &[], &[])
            .send()
            .await?
            .error_for_status()?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(RawBytes { content_type, body })
    }

    async fn send_with_retries(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> AppResult<Response> {
        let mut last_error = None;

        for attempt in 0..=self.retry_policy.max_retries {
            self.rate_limiter.until_ready().await;

            match self.build_request(url, query, headers).send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        return Ok(response);
                    }

                    let retryable = status.as_u16() == 429 || status.is_server_error();
                    if retryable && attempt < self.retry_policy.max_retries {
                        let rate_limit_info = RateLimitInfo::from_headers(response.headers());
                        let delay = self.calculate_retry_delay(attempt, &rate_limit_info);
                        log::warn!(
                            "{} API returned {} (attempt {}/{}). Retrying in {:?}",
                            self.provider_name,
                            status,
                            attempt + 1,
                            self.retry_policy.max_retries + 1,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    let message = format!("Status {}: {}", status.as_u16(), truncate(&body, 200));
                    return Err(if status.as_u16() == 429 {
                        AppError::RateLimitError(message)
                    } else {
                        AppError::ApiError(message)
                    });
                }
                Err(e) => {
                    if is_retryable_error(&e) && attempt < self.retry_policy.max_retries {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} API request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.provider_name,
                            attempt + 1,
                            self.retry_policy.max_retries + 1,
                            e,
                            delay
                        );
                        last_error = Some(AppError::from(e));
                        sleep(delay).await;
                        continue;
                    }
                    return Err(AppError::from(e));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AppError::ApiError(format!(
                "{} API request failed after {} attempts",
                self.provider_name,
                self.retry_policy.max_retries + 1
            ))
        }))
    }

    fn build_request(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> RequestBuilder {
        let mut request_builder = self.client.get(url).timeout(self.timeout);

        for (name, value) in &self.default_headers {
            request_builder = request_builder.header(*name, value);
        }
        for (name, value) in headers {
            request_builder = request_builder.header(*name, value);
        }
        if !query.is_empty() {
            request_builder = request_builder.query(query);
        }

        request_builder
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                truncate(&response_text, 200)
            ))
        })
    }

    fn calculate_retry_delay(&self, attempt: u32, rate_limit_info: &RateLimitInfo) -> Duration {
        if let Some(server_delay) = rate_limit_info.recommended_delay() {
            return server_delay.min(self.retry_policy.max_delay);
        }

        self.retry_policy.calculate_delay(attempt, None)
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
