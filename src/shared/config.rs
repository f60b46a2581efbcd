use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::time::Duration;

use crate::modules::provider::domain::value_objects::ImageSource;
use crate::shared::errors::{AppError, AppResult};

pub const UNSPLASH_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";
pub const PEXELS_KEY_VAR: &str = "PEXELS_API_KEY";

const UNSPLASH_PLACEHOLDER: &str = "your_unsplash_access_key_here";
const PEXELS_PLACEHOLDER: &str = "your_pexels_api_key_here";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;
const DEFAULT_PROVIDER_DEADLINE_SECS: u64 = 25;

/// Providers that may run at all, resolved once from configuration.
///
/// Providers without credentials never make it into this set, so request
/// handling only ever asks "is it enabled", never "is the key a placeholder".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledProviders {
    sources: BTreeSet<ImageSource>,
}

impl EnabledProviders {
    pub fn new(sources: impl IntoIterator<Item = ImageSource>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
        }
    }

    pub fn all() -> Self {
        Self::new(ImageSource::ALL)
    }

    pub fn contains(&self, source: ImageSource) -> bool {
        self.sources.contains(&source)
    }
}

/// Credentials for the providers that need them
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub unsplash_access_key: Option<String>,
    pub pexels_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Build credentials from raw values, discarding blanks and the sample placeholders
    pub fn from_raw(unsplash: Option<String>, pexels: Option<String>) -> Self {
        Self {
            unsplash_access_key: usable_credential(unsplash, UNSPLASH_PLACEHOLDER),
            pexels_api_key: usable_credential(pexels, PEXELS_PLACEHOLDER),
        }
    }

    pub fn enabled_providers(&self) -> EnabledProviders {
        let mut sources = vec![ImageSource::Anime, ImageSource::Artwork, ImageSource::Wallpaper];
        if self.unsplash_access_key.is_some() {
            sources.push(ImageSource::Curated);
        }
        if self.pexels_api_key.is_some() {
            sources.push(ImageSource::Stock);
        }
        EnabledProviders::new(sources)
    }
}

fn usable_credential(value: Option<String>, placeholder: &str) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != placeholder)
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub credentials: ProviderCredentials,
    pub enabled: EnabledProviders,
    pub request_timeout: Duration,
    pub health_check_timeout: Duration,
    pub provider_deadline: Duration,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let credentials = ProviderCredentials::from_raw(
            std::env::var(UNSPLASH_KEY_VAR).ok(),
            std::env::var(PEXELS_KEY_VAR).ok(),
        );

        if credentials.unsplash_access_key.is_none() {
            log::warn!("Unsplash provider disabled: {} not configured", UNSPLASH_KEY_VAR);
        }
        if credentials.pexels_api_key.is_none() {
            log::warn!("Pexels provider disabled: {} not configured", PEXELS_KEY_VAR);
        }

        let bind_addr = std::env::var("MOSAIC_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::InvalidInput(format!("Invalid MOSAIC_BIND_ADDR: {}", e)))?;

        let enabled = credentials.enabled_providers();

        Ok(Self {
            bind_addr,
            credentials,
            enabled,
            request_timeout: secs_from_env("MOSAIC_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            health_check_timeout: secs_from_env("MOSAIC_HEALTH_TIMEOUT_SECS", DEFAULT_HEALTH_TIMEOUT_SECS)?,
            provider_deadline: secs_from_env(
                "MOSAIC_PROVIDER_DEADLINE_SECS",
                DEFAULT_PROVIDER_DEADLINE_SECS,
            )?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let credentials = ProviderCredentials::default();
        let enabled = credentials.enabled_providers();
        Self {
            bind_addr: ([127, 0, 0, 1], 5000).into(),
            credentials,
            enabled,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            health_check_timeout: Duration::from_secs(DEFAULT_HEALTH_TIMEOUT_SECS),
            provider_deadline: Duration::from_secs(DEFAULT_PROVIDER_DEADLINE_SECS),
        }
    }
}

fn secs_from_env(var: &str, default: u64) -> AppResult<Duration> {
    match std::env::var(var) {
        Ok(raw) => {
            let secs: u64 = raw.trim().parse()?;
            Ok(Duration::from_secs(secs.max(1)))
        }
        Err(_) => Ok(Duration::from_secs(default)),
    }
}
