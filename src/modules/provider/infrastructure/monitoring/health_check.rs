use crate::modules::provider::{domain::ImageSource, traits::ImageProvider};
use crate::shared::errors::AppError;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of probing one provider
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub status: Option<u16>,
    pub working: bool,
    pub response: Option<serde_json::Value>,
    pub error: Option<String>,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub checked_at: DateTime<Utc>,
    pub providers: BTreeMap<ImageSource, ProbeReport>,
}

/// Runs the live probe of every provider that exposes one.
///
/// Independent of the aggregation path; a probe never changes what the
/// engine does.
pub struct HealthChecker {
    providers: Vec<Arc<dyn ImageProvider>>,
    timeout: Duration,
}

impl HealthChecker {
    pub fn new(providers: Vec<Arc<dyn ImageProvider>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    pub async fn check_all(&self) -> HealthReport {
        let probes = self.providers.iter().map(|provider| self.check(provider));
        let providers = join_all(probes).await.into_iter().flatten().collect();

        HealthReport {
            checked_at: Utc::now(),
            providers,
        }
    }

    /// `None` when the provider has no probe
    async fn check(&self, provider: &Arc<dyn ImageProvider>) -> Option<(ImageSource, ProbeReport)> {
        let source = provider.source();
        let start = Instant::now();
        let outcome = match tokio::time::timeout(self.timeout, provider.probe()).await {
            Ok(outcome) => outcome,
            Err(_) => Err(AppError::Timeout(format!("no answer within {:?}", self.timeout))),
        };
        let latency_ms = start.elapsed().as_millis() as u64;

        let report = match outcome {
            Err(AppError::NotImplemented(_)) => return None,
            Ok(probe) => ProbeReport {
                status: Some(probe.status),
                working: probe.working,
                response: Some(probe.response),
                error: None,
                latency_ms,
            },
            Err(e) => ProbeReport {
                status: None,
                working: false,
                response: None,
                error: Some(e.to_string()),
                latency_ms,
            },
        };

        log::info!(
            "Health: {} working={} in {}ms",
            source.provider_name(),
            report.working,
            latency_ms
        );
        Some((source, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::traits::{HealthProbe, MockImageProvider};

    #[tokio::test]
    async fn test_reports_only_probed_providers() {
        let mut nekos = MockImageProvider::new();
        nekos.expect_source().return_const(ImageSource::Anime);
        nekos.expect_probe().returning(|| {
            Ok(HealthProbe {
                status: 200,
                working: true,
                response: serde_json::json!({"url": "https://cdn.nekos.life/neko/1.jpg"}),
            })
        });

        let mut artic = MockImageProvider::new();
        artic.expect_source().return_const(ImageSource::Artwork);
        artic
            .expect_probe()
            .returning(|| Err(AppError::ApiError("connection refused".into())));

        let mut unsplash = MockImageProvider::new();
        unsplash.expect_source().return_const(ImageSource::Curated);
        unsplash
            .expect_probe()
            .returning(|| Err(AppError::NotImplemented("no probe".into())));

        let checker = HealthChecker::new(
            vec![Arc::new(nekos), Arc::new(artic), Arc::new(unsplash)],
            Duration::from_secs(5),
        );
        let report = checker.check_all().await;

        assert_eq!(report.providers.len(), 2);
        let anime = &report.providers[&ImageSource::Anime];
        assert!(anime.working);
        assert_eq!(anime.status, Some(200));

        let artwork = &report.providers[&ImageSource::Artwork];
        assert!(!artwork.working);
        assert!(artwork.status.is_none());
        assert!(artwork.error.as_deref().unwrap_or_default().contains("refused"));
    }
}
