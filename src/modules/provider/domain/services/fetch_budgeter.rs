use std::collections::BTreeMap;

use crate::modules::provider::domain::value_objects::ImageSource;
use crate::shared::config::EnabledProviders;

/// Which caller the budget is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FetchMode {
    /// The `/images` browsing/search endpoint
    Primary,
    /// Related-images lookups, which over-fetch to filter by source afterwards
    Related,
}

/// Soft quota for one provider: `min(per_page / divisor, cap)`, never below 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaRule {
    pub divisor: usize,
    pub cap: usize,
}

impl QuotaRule {
    pub const fn new(divisor: usize, cap: usize) -> Self {
        Self { divisor, cap }
    }

    pub fn quota(&self, per_page: usize) -> usize {
        (per_page / self.divisor.max(1)).min(self.cap).max(1)
    }
}

/// Immutable budgeting data shared by every aggregation
#[derive(Debug, Clone)]
pub struct BudgetPolicy {
    anime_trigger_words: Vec<String>,
    rules: BTreeMap<(ImageSource, FetchMode), QuotaRule>,
}

pub const DEFAULT_ANIME_TRIGGER_WORDS: [&str; 5] = ["anime", "cat", "neko", "cute", "pixel"];

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ANIME_TRIGGER_WORDS.iter().map(|w| w.to_string()))
            .with_rule(ImageSource::Curated, FetchMode::Primary, QuotaRule::new(4, 10))
            .with_rule(ImageSource::Stock, FetchMode::Primary, QuotaRule::new(4, 15))
            .with_rule(ImageSource::Anime, FetchMode::Primary, QuotaRule::new(8, 3))
            .with_rule(ImageSource::Artwork, FetchMode::Primary, QuotaRule::new(6, 8))
            .with_rule(ImageSource::Curated, FetchMode::Related, QuotaRule::new(2, 50))
            .with_rule(ImageSource::Stock, FetchMode::Related, QuotaRule::new(2, 50))
            .with_rule(ImageSource::Anime, FetchMode::Related, QuotaRule::new(4, 25))
            .with_rule(ImageSource::Artwork, FetchMode::Related, QuotaRule::new(4, 25))
    }
}

impl BudgetPolicy {
    /// Policy with the given anime trigger words and no quota rules yet
    pub fn new(trigger_words: impl IntoIterator<Item = String>) -> Self {
        Self {
            anime_trigger_words: trigger_words
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
            rules: BTreeMap::new(),
        }
    }

    pub fn with_rule(mut self, source: ImageSource, mode: FetchMode, rule: QuotaRule) -> Self {
        self.rules.insert((source, mode), rule);
        self
    }

    pub fn rule(&self, source: ImageSource, mode: FetchMode) -> Option<QuotaRule> {
        self.rules.get(&(source, mode)).copied()
    }

    /// Anime runs for empty queries, or when the query mentions a trigger word
    pub fn anime_matches(&self, query: Option<&str>) -> bool {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            None => true,
            Some(q) => {
                let q = q.to_lowercase();
                self.anime_trigger_words.iter().any(|w| q.contains(w.as_str()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Missing credentials, decided at startup
    NotConfigured,
    /// Provider does not apply to this query or mode
    NotEligible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedFetch {
    pub source: ImageSource,
    pub quota: usize,
}

/// Providers to call for one aggregation, and the ones left out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPlan {
    pub fetches: Vec<PlannedFetch>,
    pub skipped: Vec<(ImageSource, SkipReason)>,
}

impl FetchPlan {
    pub fn quota_for(&self, source: ImageSource) -> Option<usize> {
        self.fetches
            .iter()
            .find(|f| f.source == source)
            .map(|f| f.quota)
    }

    pub fn includes(&self, source: ImageSource) -> bool {
        self.quota_for(source).is_some()
    }
}

/// Allocates independent per-provider quotas.
///
/// Quotas are not carved out of a shared pool; providers may jointly
/// over-fetch and the aggregation engine truncates afterwards.
#[derive(Debug, Clone)]
pub struct FetchBudgeter {
    policy: BudgetPolicy,
    enabled: EnabledProviders,
}

impl FetchBudgeter {
    pub fn new(policy: BudgetPolicy, enabled: EnabledProviders) -> Self {
        Self { policy, enabled }
    }

    pub fn is_eligible(&self, source: ImageSource, query: Option<&str>) -> bool {
        match source {
            ImageSource::Anime => self.policy.anime_matches(query),
            _ => true,
        }
    }

    pub fn plan(&self, query: Option<&str>, per_page: usize, mode: FetchMode) -> FetchPlan {
        let mut plan = FetchPlan::default();

        for source in ImageSource::AGGREGATED {
            if !self.enabled.contains(source) {
                plan.skipped.push((source, SkipReason::NotConfigured));
                continue;
            }

            let rule = match self.policy.rule(source, mode) {
                Some(rule) if self.is_eligible(source, query) => rule,
                _ => {
                    plan.skipped.push((source, SkipReason::NotEligible));
                    continue;
                }
            };

            plan.fetches.push(PlannedFetch {
                source,
                quota: rule.quota(per_page),
            });
        }

        log::debug!(
            "BUDGET: {:?} plan for per_page={} -> {:?}",
            mode,
            per_page,
            plan.fetches
        );

        plan
    }
}
