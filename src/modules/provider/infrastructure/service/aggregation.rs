use crate::modules::provider::domain::{
    AggregatedPage, Diagnostics, FetchBudgeter, FetchMode, FetchPlan, ImageRecord, ImageSource,
    PageEstimate, ProviderOutcome,
};
use crate::modules::provider::traits::{FetchRequest, ImageProvider, ProviderPage};
use crate::shared::application::pagination::{PageWindow, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use futures::future::join_all;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;

/// Fans a request out to every eligible provider and merges the results
/// into one shuffled page.
///
/// Provider failures never escape: each one is folded into that provider's
/// diagnostics entry and contributes zero records.
pub struct AggregationEngine {
    providers: Vec<Arc<dyn ImageProvider>>,
    budgeter: FetchBudgeter,
    deadline: Duration,
}

/// What one provider contributed to an aggregation
struct ProviderResult {
    source: ImageSource,
    records: Vec<ImageRecord>,
    total_pages: Option<u32>,
    outcome: ProviderOutcome,
}

impl AggregationEngine {
    pub fn new(
        providers: Vec<Arc<dyn ImageProvider>>,
        budgeter: FetchBudgeter,
        deadline: Duration,
    ) -> Self {
        Self {
            providers,
            budgeter,
            deadline,
        }
    }

    fn provider_for(&self, source: ImageSource) -> Option<&Arc<dyn ImageProvider>> {
        self.providers
            .iter()
            .find(|provider| provider.source() == source)
    }

    /// Aggregate one page. Never fails; an empty page with diagnostics is
    /// the worst case.
    pub async fn aggregate(
        &self,
        query: Option<&str>,
        pagination: PaginationParams,
        mode: FetchMode,
    ) -> AggregatedPage {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let per_page = pagination.per_page_usize();
        let page = pagination.page.max(1);
        let timer = TimedOperation::new("Aggregation");

        LogContext::search_operation(query.unwrap_or(""), page, None);

        let plan = self.budgeter.plan(query, per_page, mode);
        let mut diagnostics = Self::skipped_diagnostics(&plan);

        let calls = plan.fetches.iter().filter_map(|planned| {
            let Some(provider) = self.provider_for(planned.source) else {
                log::warn!(
                    "No adapter registered for enabled source {}",
                    planned.source
                );
                diagnostics.insert(planned.source, ProviderOutcome::skipped());
                return None;
            };
            let request = FetchRequest::new(query, page, planned.quota, per_page);
            Some(self.run_provider(Arc::clone(provider), request))
        });
        let calls: Vec<_> = calls.collect();

        // Strict join: nothing is merged until every launched call resolved
        let results = join_all(calls).await;

        let mut estimate = PageEstimate::default();
        let mut bag = Vec::new();
        for result in results {
            LogContext::provider_outcome(
                result.source.provider_name(),
                result.outcome.success,
                result.outcome.count,
                result.outcome.error.as_deref(),
            );
            estimate.observe(result.total_pages);
            bag.extend(result.records);
            diagnostics.insert(result.source, result.outcome);
        }

        let gathered = bag.len();
        let images = shuffle_and_truncate(bag, per_page);
        let window = PageWindow::new(page, estimate.total_pages(query.is_some()));

        timer.finish_with_info(&format!(
            "{:?} mode, {} gathered, {} returned, {} total pages",
            mode,
            gathered,
            images.len(),
            window.total_pages
        ));

        AggregatedPage::new(images, window, diagnostics)
    }

    fn skipped_diagnostics(plan: &FetchPlan) -> Diagnostics {
        plan.skipped
            .iter()
            .map(|(source, reason)| {
                log::debug!("Provider {} skipped: {:?}", source, reason);
                (*source, ProviderOutcome::skipped())
            })
            .collect()
    }

    async fn run_provider(
        &self,
        provider: Arc<dyn ImageProvider>,
        request: FetchRequest,
    ) -> ProviderResult {
        let source = provider.source();
        let fetched = match tokio::time::timeout(self.deadline, provider.fetch(&request)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(format!(
                "{} did not respond within {:?}",
                source.provider_name(),
                self.deadline
            ))),
        };

        Self::into_result(source, request.quota, fetched)
    }

    fn into_result(source: ImageSource, quota: usize, fetched: AppResult<ProviderPage>) -> ProviderResult {
        match fetched {
            Ok(mut page) => {
                page.records.truncate(quota);
                ProviderResult {
                    source,
                    outcome: ProviderOutcome::succeeded(page.records.len()),
                    total_pages: page.total_pages,
                    records: page.records,
                }
            }
            Err(e) => ProviderResult {
                source,
                records: Vec::new(),
                total_pages: None,
                outcome: ProviderOutcome::failed(e.to_string()),
            },
        }
    }
}

/// Uniform random permutation, then cut to the page size
fn shuffle_and_truncate(mut images: Vec<ImageRecord>, per_page: usize) -> Vec<ImageRecord> {
    images.shuffle(&mut rand::thread_rng());
    images.truncate(per_page);
    images
}
