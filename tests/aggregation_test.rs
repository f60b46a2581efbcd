//! Aggregation engine and related-images behaviour with in-process fake providers

mod utils;

use mosaic_lib::modules::provider::{
    domain::{BudgetPolicy, FetchBudgeter, FetchMode, ImageRecord, ImageSource, ProviderConfig},
    infrastructure::{
        adapters::{NekosAdapter, WallpaperFlareAdapter},
        AggregationEngine, RelatedImagesResolver,
    },
    traits::ImageProvider,
};
use mosaic_lib::shared::{application::pagination::PaginationParams, config::EnabledProviders};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use utils::{spawn_slow_json_upstream, FakeProvider};

fn engine_with(
    providers: Vec<Arc<dyn ImageProvider>>,
    enabled: EnabledProviders,
) -> AggregationEngine {
    AggregationEngine::new(
        providers,
        FetchBudgeter::new(BudgetPolicy::default(), enabled),
        Duration::from_secs(5),
    )
}

fn urls(images: &[ImageRecord]) -> BTreeSet<String> {
    images.iter().map(|image| image.url.clone()).collect()
}

#[tokio::test]
async fn test_page_never_exceeds_per_page() {
    let engine = engine_with(
        vec![
            Arc::new(FakeProvider::new(ImageSource::Curated, 40)),
            Arc::new(FakeProvider::new(ImageSource::Stock, 40)),
            Arc::new(FakeProvider::new(ImageSource::Anime, 40)),
            Arc::new(FakeProvider::new(ImageSource::Artwork, 40)),
        ],
        EnabledProviders::all(),
    );

    for per_page in [1, 4, 8, 20, 60] {
        let page = engine
            .aggregate(None, PaginationParams::new(1, per_page), FetchMode::Primary)
            .await;
        assert!(page.images.len() <= per_page as usize);
        assert_eq!(page.has_next, page.current_page < page.total_pages);
        assert_eq!(page.has_prev, page.current_page > 1);
    }
}

#[tokio::test]
async fn test_anime_trigger_words_gate_the_anime_provider() {
    let anime = Arc::new(FakeProvider::new(ImageSource::Anime, 3));
    let engine = engine_with(
        vec![
            Arc::new(FakeProvider::new(ImageSource::Artwork, 3)),
            anime.clone(),
        ],
        EnabledProviders::new([ImageSource::Anime, ImageSource::Artwork]),
    );

    engine
        .aggregate(Some("ocean"), PaginationParams::default(), FetchMode::Primary)
        .await;
    assert_eq!(anime.calls(), 0);

    let page = engine
        .aggregate(Some("Cute Puppies"), PaginationParams::default(), FetchMode::Primary)
        .await;
    assert_eq!(anime.calls(), 1);
    assert!(page.diagnostics[&ImageSource::Anime].success);

    engine
        .aggregate(None, PaginationParams::default(), FetchMode::Primary)
        .await;
    assert_eq!(anime.calls(), 2);
}

#[tokio::test]
async fn test_skipped_and_failed_providers_are_distinguishable() {
    let engine = engine_with(
        vec![
            Arc::new(FakeProvider::new(ImageSource::Stock, 10).failing()),
            Arc::new(FakeProvider::new(ImageSource::Artwork, 10)),
        ],
        EnabledProviders::new([ImageSource::Stock, ImageSource::Artwork, ImageSource::Anime]),
    );

    let page = engine
        .aggregate(Some("harbour"), PaginationParams::default(), FetchMode::Primary)
        .await;

    let curated = &page.diagnostics[&ImageSource::Curated];
    assert!(!curated.success);
    assert_eq!(curated.count, 0);
    assert!(curated.error.is_none());

    let stock = &page.diagnostics[&ImageSource::Stock];
    assert!(!stock.success);
    assert!(stock.error.as_deref().unwrap().contains("upstream exploded"));

    let artwork = &page.diagnostics[&ImageSource::Artwork];
    assert!(artwork.success);
    assert_eq!(artwork.count, 3);
    assert_eq!(page.images.len(), 3);

    let json = serde_json::to_value(&page).unwrap();
    assert!(json["debug"]["curated"]["error"].is_null());
    assert_eq!(json["debug"]["stock"]["success"], false);
}

#[tokio::test]
async fn test_repeated_calls_return_the_same_set() {
    let engine = engine_with(
        vec![
            Arc::new(FakeProvider::new(ImageSource::Curated, 5)),
            Arc::new(FakeProvider::new(ImageSource::Stock, 5)),
            Arc::new(FakeProvider::new(ImageSource::Artwork, 3)),
        ],
        EnabledProviders::new([ImageSource::Curated, ImageSource::Stock, ImageSource::Artwork]),
    );

    let first = engine
        .aggregate(Some("bridge"), PaginationParams::default(), FetchMode::Primary)
        .await;
    let second = engine
        .aggregate(Some("bridge"), PaginationParams::default(), FetchMode::Primary)
        .await;

    assert_eq!(first.images.len(), 13);
    assert_eq!(urls(&first.images), urls(&second.images));
}

#[tokio::test]
async fn test_total_pages_heuristic() {
    let engine = engine_with(
        vec![
            Arc::new(FakeProvider::new(ImageSource::Curated, 5).with_total_pages(300)),
            Arc::new(FakeProvider::new(ImageSource::Stock, 5).with_total_pages(4)),
        ],
        EnabledProviders::new([ImageSource::Curated, ImageSource::Stock]),
    );

    let search = engine
        .aggregate(Some("forest"), PaginationParams::new(20, 20), FetchMode::Primary)
        .await;
    assert_eq!(search.total_pages, 20);
    assert!(!search.has_next);
    assert!(search.has_prev);

    let browse = engine
        .aggregate(None, PaginationParams::new(1, 20), FetchMode::Primary)
        .await;
    assert_eq!(browse.total_pages, 50);
}

#[tokio::test]
async fn test_related_mode_uses_larger_quotas() {
    let curated = Arc::new(FakeProvider::new(ImageSource::Curated, 0));
    let engine = engine_with(
        vec![curated.clone()],
        EnabledProviders::new([ImageSource::Curated]),
    );

    engine
        .aggregate(None, PaginationParams::new(1, 20), FetchMode::Primary)
        .await;
    engine
        .aggregate(None, PaginationParams::new(1, 200), FetchMode::Related)
        .await;

    assert_eq!(curated.quotas(), vec![5, 50]);
}

#[tokio::test]
async fn test_slow_anime_calls_fit_the_deadline_in_related_mode() {
    let base = spawn_slow_json_upstream(
        Duration::from_millis(300),
        r#"{"url": "https://cdn.nekos.life/neko/neko_003.jpg"}"#,
    )
    .await;
    let anime: Arc<dyn ImageProvider> = Arc::new(NekosAdapter::with_config(
        ProviderConfig::new(ImageSource::Anime).with_base_url(base),
    ));
    let engine = AggregationEngine::new(
        vec![anime],
        FetchBudgeter::new(
            BudgetPolicy::default(),
            EnabledProviders::new([ImageSource::Anime]),
        ),
        Duration::from_secs(2),
    );

    let page = engine
        .aggregate(None, PaginationParams::new(1, 200), FetchMode::Related)
        .await;

    let anime = &page.diagnostics[&ImageSource::Anime];
    assert!(anime.success, "{:?}", anime.error);
    assert_eq!(anime.count, 25);
    assert_eq!(page.images.len(), 25);
}

#[tokio::test]
async fn test_related_images_filter_by_source() {
    let engine = Arc::new(engine_with(
        vec![
            Arc::new(FakeProvider::new(ImageSource::Curated, 60)),
            Arc::new(FakeProvider::new(ImageSource::Artwork, 60)),
        ],
        EnabledProviders::new([ImageSource::Curated, ImageSource::Artwork]),
    ));
    let resolver = RelatedImagesResolver::new(engine, Arc::new(WallpaperFlareAdapter::new()));

    let related = resolver
        .resolve(ImageSource::Artwork, Some("bridges"), 1, 100)
        .await;

    assert_eq!(related.source, ImageSource::Artwork);
    assert_eq!(related.query, "bridges");
    assert!(!related.images.is_empty());
    assert!(related
        .images
        .iter()
        .all(|image| image.source == ImageSource::Artwork));
}

#[tokio::test]
async fn test_related_images_fall_back_when_source_has_nothing() {
    let artwork = Arc::new(FakeProvider::new(ImageSource::Artwork, 0));
    let curated = Arc::new(FakeProvider::new(ImageSource::Curated, 30));
    let engine = Arc::new(engine_with(
        vec![curated.clone(), artwork.clone()],
        EnabledProviders::new([ImageSource::Curated, ImageSource::Artwork]),
    ));
    let resolver = RelatedImagesResolver::new(engine, Arc::new(WallpaperFlareAdapter::new()));

    let related = resolver
        .resolve(ImageSource::Artwork, Some("cats"), 1, 100)
        .await;

    assert_eq!(artwork.calls(), 2, "one doubled pass plus one fallback pass");
    assert_eq!(curated.quotas(), vec![50, 50]);
    assert!(!related.images.is_empty());
    assert!(related
        .images
        .iter()
        .all(|image| image.source == ImageSource::Curated));
}

#[tokio::test]
async fn test_related_images_without_query_do_not_fall_back() {
    let artwork = Arc::new(FakeProvider::new(ImageSource::Artwork, 0));
    let engine = Arc::new(engine_with(
        vec![
            Arc::new(FakeProvider::new(ImageSource::Curated, 30)),
            artwork.clone(),
        ],
        EnabledProviders::new([ImageSource::Curated, ImageSource::Artwork]),
    ));
    let resolver = RelatedImagesResolver::new(engine, Arc::new(WallpaperFlareAdapter::new()));

    let related = resolver.resolve(ImageSource::Artwork, None, 1, 100).await;

    assert_eq!(artwork.calls(), 1);
    assert!(related.images.is_empty());
    assert_eq!(related.query, "");
}
