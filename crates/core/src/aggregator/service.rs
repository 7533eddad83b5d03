//! The aggregation service: feeds, normalization and hydration.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::metrics::{PROVIDER_CACHE_HITS, PROVIDER_CACHE_MISSES};
use crate::movie::{Movie, Platform, PriceCategory};
use crate::tmdb::{
    CountryListings, DiscoverQuery, MovieCatalog, MovieDetail, MovieSummary, ProviderEntry,
    TmdbConfig,
};

use super::embed::to_embed_url;
use super::provider_cache::ProviderCache;
use super::AggregatorError;

/// Items per feed response.
const FEED_LIMIT: usize = 12;
/// Items per search response.
const SEARCH_LIMIT: usize = 20;
/// Runtime ceiling, in minutes, for the low-data classification.
const LOW_DATA_RUNTIME_CAP: u32 = 110;

const UNTITLED: &str = "Untitled";
const NO_DESCRIPTION: &str = "No description available.";

/// Aggregates upstream TMDB data into canonical movies.
///
/// Owns the provider cache and the lazily fetched genre table; both live
/// for the lifetime of the service, which in the server is the lifetime
/// of the process.
pub struct MovieAggregator {
    catalog: Option<Arc<dyn MovieCatalog>>,
    region: String,
    image_base: String,
    providers: ProviderCache,
    genres: OnceCell<HashMap<u64, String>>,
}

impl MovieAggregator {
    /// Create a new aggregator.
    ///
    /// `catalog` is `None` when no upstream credential is configured; in
    /// that state the feeds fail with
    /// [`AggregatorError::NotConfigured`] while provider lookups resolve
    /// empty and hydration passes movies through unchanged.
    pub fn new(catalog: Option<Arc<dyn MovieCatalog>>, config: &TmdbConfig) -> Self {
        let image_base = config
            .image_base_url
            .clone()
            .unwrap_or_else(|| crate::tmdb::DEFAULT_IMAGE_BASE_URL.to_string());

        Self {
            catalog,
            region: config.region.clone(),
            image_base,
            providers: ProviderCache::new(config.provider_cache_capacity),
            genres: OnceCell::new(),
        }
    }

    /// Whether an upstream catalog is configured.
    pub fn is_configured(&self) -> bool {
        self.catalog.is_some()
    }

    fn require_catalog(&self) -> Result<&Arc<dyn MovieCatalog>, AggregatorError> {
        self.catalog.as_ref().ok_or(AggregatorError::NotConfigured)
    }

    // =========================================================================
    // Feeds
    // =========================================================================

    /// Weekly trending movies for the home region.
    pub async fn trending(&self) -> Result<Vec<Movie>, AggregatorError> {
        let catalog = self.require_catalog()?;
        let raw = catalog.trending_week(&self.region).await?;
        self.normalize_many(raw, FEED_LIMIT).await
    }

    /// Newest releases originating from the home region.
    pub async fn new_local(&self) -> Result<Vec<Movie>, AggregatorError> {
        let catalog = self.require_catalog()?;
        let query = DiscoverQuery {
            region: self.region.clone(),
            origin_country: Some(self.region.clone()),
            sort_by: Some("release_date.desc".to_string()),
            ..Default::default()
        };
        let raw = catalog.discover(&query).await?;
        self.normalize_many(raw, FEED_LIMIT).await
    }

    /// Movies watchable without paying per title.
    pub async fn cheapest(&self) -> Result<Vec<Movie>, AggregatorError> {
        let catalog = self.require_catalog()?;
        let query = DiscoverQuery {
            region: self.region.clone(),
            monetization_types: Some("free|ads|flatrate".to_string()),
            watch_region: Some(self.region.clone()),
            ..Default::default()
        };
        let raw = catalog.discover(&query).await?;
        self.normalize_many(raw, FEED_LIMIT).await
    }

    /// Short movies, friendly to metered connections.
    pub async fn low_data(&self) -> Result<Vec<Movie>, AggregatorError> {
        let catalog = self.require_catalog()?;
        let query = DiscoverQuery {
            region: self.region.clone(),
            max_runtime: Some(LOW_DATA_RUNTIME_CAP),
            sort_by: Some("popularity.desc".to_string()),
            ..Default::default()
        };
        let raw = catalog.discover(&query).await?;
        self.normalize_many(raw, FEED_LIMIT).await
    }

    /// Free-text search. A blank query resolves empty with no upstream
    /// call.
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, AggregatorError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let catalog = self.require_catalog()?;
        let raw = catalog.search_movies(query, &self.region).await?;
        self.normalize_many(raw, SEARCH_LIMIT).await
    }

    /// Fetch and hydrate a single movie for its details page.
    pub async fn movie_by_id(&self, id: u64) -> Result<Movie, AggregatorError> {
        let catalog = self.require_catalog()?;
        let detail = catalog.movie_detail(id).await?;
        let platforms = self.watch_providers(detail.id).await?;
        let base = self.movie_from_detail(detail, platforms);
        self.hydrate(base).await
    }

    // =========================================================================
    // Normalization
    // =========================================================================

    async fn normalize_many(
        &self,
        raw: Vec<MovieSummary>,
        limit: usize,
    ) -> Result<Vec<Movie>, AggregatorError> {
        try_join_all(raw.into_iter().take(limit).map(|item| self.normalize(item))).await
    }

    /// Produce a canonical movie from one raw listing record.
    ///
    /// Provider offers and genre names are resolved concurrently; the
    /// low-data and home-region flags stay false until hydration.
    pub async fn normalize(&self, item: MovieSummary) -> Result<Movie, AggregatorError> {
        let (platforms, genres) = tokio::try_join!(
            self.watch_providers(item.id),
            self.genre_names(&item.genre_ids)
        )?;

        let price_category = PriceCategory::from_platforms(&platforms);

        Ok(Movie {
            id: item.id,
            title: item
                .title
                .filter(|t| !t.is_empty())
                .or(item.name.filter(|n| !n.is_empty()))
                .unwrap_or_else(|| UNTITLED.to_string()),
            year: parse_year(item.release_date.as_deref()),
            genres,
            rating: round_rating(item.vote_average.unwrap_or(0.0)),
            poster_url: self.image_url(item.poster_path.as_deref(), "w500"),
            backdrop_url: self.image_url(item.backdrop_path.as_deref(), "w1280"),
            trailer_url: String::new(),
            description: item
                .overview
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            platforms,
            tags: Vec::new(),
            low_data_friendly: false,
            is_afro: false,
            price_category,
            runtime: None,
        })
    }

    fn movie_from_detail(&self, detail: MovieDetail, platforms: Vec<Platform>) -> Movie {
        let price_category = PriceCategory::from_platforms(&platforms);

        Movie {
            id: detail.id,
            title: detail
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            year: parse_year(detail.release_date.as_deref()),
            genres: detail
                .genres
                .map(|entries| entries.into_iter().map(|g| g.name).collect())
                .unwrap_or_default(),
            rating: round_rating(detail.vote_average.unwrap_or(0.0)),
            poster_url: self.image_url(detail.poster_path.as_deref(), "w500"),
            backdrop_url: self.image_url(detail.backdrop_path.as_deref(), "w1280"),
            trailer_url: String::new(),
            description: detail
                .overview
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            platforms,
            tags: Vec::new(),
            low_data_friendly: matches!(
                detail.runtime,
                Some(r) if r > 0 && r <= LOW_DATA_RUNTIME_CAP
            ),
            is_afro: detail
                .production_countries
                .as_deref()
                .is_some_and(|countries| countries.iter().any(|c| c.iso_3166_1 == self.region)),
            price_category,
            runtime: None,
        }
    }

    // =========================================================================
    // Hydration
    // =========================================================================

    /// Enrich a normalized movie with detail-endpoint data.
    ///
    /// Issues the detail and video lookups concurrently. Without an
    /// upstream catalog the input is returned unchanged.
    pub async fn hydrate(&self, movie: Movie) -> Result<Movie, AggregatorError> {
        let Some(catalog) = &self.catalog else {
            return Ok(movie);
        };

        let (detail, videos) = tokio::try_join!(
            catalog.movie_detail(movie.id),
            catalog.movie_videos(movie.id)
        )?;

        let trailer = videos
            .into_iter()
            .find(|v| v.site == "YouTube" && (v.kind == "Trailer" || v.kind == "Teaser"));

        let mut hydrated = movie;
        if let Some(entries) = detail.genres {
            // Detail genres replace the base list entirely, no merging.
            hydrated.genres = entries.into_iter().map(|g| g.name).collect();
        }
        if let Some(runtime) = detail.runtime.filter(|r| *r > 0) {
            hydrated.low_data_friendly = runtime <= LOW_DATA_RUNTIME_CAP;
        }
        hydrated.runtime = detail.runtime;
        if let Some(countries) = detail.production_countries.as_deref() {
            hydrated.is_afro = countries.iter().any(|c| c.iso_3166_1 == self.region)
                || hydrated.is_afro;
        }
        if let Some(video) = trailer {
            hydrated.trailer_url = to_embed_url(&video.key);
        }

        Ok(hydrated)
    }

    // =========================================================================
    // Provider and genre lookups
    // =========================================================================

    /// Watch-provider offers for a movie, served from the cache after the
    /// first lookup. Resolves empty without caching when no upstream is
    /// configured.
    pub async fn watch_providers(&self, id: u64) -> Result<Vec<Platform>, AggregatorError> {
        let Some(catalog) = &self.catalog else {
            return Ok(Vec::new());
        };

        if let Some(cached) = self.providers.get(id).await {
            PROVIDER_CACHE_HITS.inc();
            return Ok(cached);
        }
        PROVIDER_CACHE_MISSES.inc();
        debug!("provider cache miss: id={}", id);

        let results = catalog.watch_providers(id).await?;
        let platforms = self.map_listings(id, results.results.get(&self.region));
        self.providers.insert(id, platforms.clone()).await;
        Ok(platforms)
    }

    fn map_listings(&self, id: u64, listings: Option<&CountryListings>) -> Vec<Platform> {
        let Some(listings) = listings else {
            return Vec::new();
        };

        listings
            .flatrate
            .iter()
            .chain(&listings.ads)
            .chain(&listings.rent)
            .chain(&listings.buy)
            .map(|offer| {
                // First match wins: an offer listed under both rent and
                // flatrate is labeled "Rent". This order intentionally
                // differs from the aggregate derivation in
                // PriceCategory::from_platforms.
                let price = if contains(&listings.rent, offer.provider_id) {
                    PriceCategory::Rent
                } else if contains(&listings.buy, offer.provider_id) {
                    PriceCategory::Buy
                } else if contains(&listings.ads, offer.provider_id) {
                    PriceCategory::Free
                } else {
                    PriceCategory::Subscription
                };

                Platform {
                    name: offer.provider_name.clone(),
                    link: format!("https://www.themoviedb.org/movie/{}/watch", id),
                    price: price.as_str().to_string(),
                    logo: self.image_url(offer.logo_path.as_deref(), "w92"),
                }
            })
            .collect()
    }

    /// Resolve genre ids to display names, preserving input order and
    /// silently dropping unknown ids.
    pub async fn genre_names(&self, ids: &[u64]) -> Result<Vec<String>, AggregatorError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let table = self.genre_table().await?;
        Ok(ids.iter().filter_map(|id| table.get(id).cloned()).collect())
    }

    /// The genre table, fetched at most once per process. Empty when no
    /// upstream is configured.
    async fn genre_table(&self) -> Result<&HashMap<u64, String>, AggregatorError> {
        self.genres
            .get_or_try_init(|| async {
                let Some(catalog) = &self.catalog else {
                    return Ok(HashMap::new());
                };
                let entries = catalog.genre_list().await?;
                Ok(entries.into_iter().map(|g| (g.id, g.name)).collect())
            })
            .await
    }

    fn image_url(&self, path: Option<&str>, size: &str) -> String {
        match path {
            Some(p) if !p.is_empty() => format!("{}/{}{}", self.image_base, size, p),
            _ => String::new(),
        }
    }
}

fn contains(offers: &[ProviderEntry], provider_id: u64) -> bool {
    offers.iter().any(|o| o.provider_id == provider_id)
}

fn parse_year(date: Option<&str>) -> i32 {
    date.and_then(|d| d.get(..4))
        .and_then(|year| year.parse().ok())
        .unwrap_or(0)
}

fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockMovieCatalog, RecordedQuery};
    use crate::tmdb::{GenreEntry, MovieVideo};

    fn aggregator(mock: Arc<MockMovieCatalog>) -> MovieAggregator {
        MovieAggregator::new(Some(mock), &TmdbConfig::default())
    }

    fn unconfigured() -> MovieAggregator {
        MovieAggregator::new(None, &TmdbConfig::default())
    }

    #[tokio::test]
    async fn test_normalize_rounds_rating_to_one_decimal() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        let mut item = fixtures::raw_movie(603, "The Matrix");
        item.vote_average = Some(8.54999);

        let movie = agg.normalize(item).await.unwrap();
        assert_eq!(movie.rating, 8.5);
    }

    #[tokio::test]
    async fn test_normalize_title_falls_back_through_name() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        let item = MovieSummary {
            id: 1,
            name: Some("Named Only".to_string()),
            ..Default::default()
        };
        assert_eq!(agg.normalize(item).await.unwrap().title, "Named Only");

        let empty_title = MovieSummary {
            id: 3,
            title: Some(String::new()),
            name: Some("Named Anyway".to_string()),
            ..Default::default()
        };
        assert_eq!(
            agg.normalize(empty_title).await.unwrap().title,
            "Named Anyway"
        );

        let bare = MovieSummary {
            id: 2,
            ..Default::default()
        };
        let movie = agg.normalize(bare).await.unwrap();
        assert_eq!(movie.title, "Untitled");
        assert_eq!(movie.description, "No description available.");
        assert_eq!(movie.year, 0);
        assert_eq!(movie.rating, 0.0);
    }

    #[tokio::test]
    async fn test_normalize_parses_year_from_release_date() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        let mut item = fixtures::raw_movie(1, "Test");
        item.release_date = Some("1999-03-30".to_string());
        assert_eq!(agg.normalize(item).await.unwrap().year, 1999);

        let mut garbled = fixtures::raw_movie(2, "Test");
        garbled.release_date = Some("n/a".to_string());
        assert_eq!(agg.normalize(garbled).await.unwrap().year, 0);
    }

    #[tokio::test]
    async fn test_normalize_leaves_hydration_flags_false() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        let movie = agg
            .normalize(fixtures::raw_movie(1, "Test"))
            .await
            .unwrap();
        assert!(!movie.low_data_friendly);
        assert!(!movie.is_afro);
        assert!(movie.runtime.is_none());
        assert!(movie.trailer_url.is_empty());
    }

    #[tokio::test]
    async fn test_normalize_builds_image_urls() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        let mut item = fixtures::raw_movie(1, "Test");
        item.poster_path = Some("/poster.jpg".to_string());
        item.backdrop_path = Some("/backdrop.jpg".to_string());

        let movie = agg.normalize(item).await.unwrap();
        assert_eq!(movie.poster_url, "https://image.tmdb.org/t/p/w500/poster.jpg");
        assert_eq!(
            movie.backdrop_url,
            "https://image.tmdb.org/t/p/w1280/backdrop.jpg"
        );
    }

    #[tokio::test]
    async fn test_watch_providers_cached_after_first_call() {
        let mock = Arc::new(MockMovieCatalog::new());
        mock.set_providers(
            42,
            fixtures::region_providers("NG", vec![fixtures::provider(8, "Netflix")]),
        )
        .await;
        let agg = aggregator(Arc::clone(&mock));

        let first = agg.watch_providers(42).await.unwrap();
        let second = agg.watch_providers(42).await.unwrap();
        assert_eq!(first, second);

        let provider_calls = mock
            .recorded_queries()
            .await
            .into_iter()
            .filter(|q| matches!(q, RecordedQuery::WatchProviders { id: 42 }))
            .count();
        assert_eq!(provider_calls, 1);
    }

    #[tokio::test]
    async fn test_watch_providers_without_catalog_is_empty_and_uncached() {
        let agg = unconfigured();
        assert!(agg.watch_providers(42).await.unwrap().is_empty());
        assert_eq!(agg.providers.len().await, 0);
    }

    #[tokio::test]
    async fn test_offer_label_precedence_rent_beats_subscription() {
        let mock = Arc::new(MockMovieCatalog::new());
        let netflix = fixtures::provider(8, "Netflix");
        mock.set_providers(
            1,
            fixtures::providers_with_listings(
                "NG",
                CountryListings {
                    flatrate: vec![netflix.clone()],
                    rent: vec![netflix],
                    ads: vec![fixtures::provider(9, "AdService")],
                    buy: vec![],
                },
            ),
        )
        .await;
        let agg = aggregator(Arc::clone(&mock));

        let platforms = agg.watch_providers(1).await.unwrap();
        // flatrate entry first, then ads, then rent; the duplicated
        // Netflix offer is labeled Rent in both positions.
        assert_eq!(platforms.len(), 3);
        assert_eq!(platforms[0].name, "Netflix");
        assert_eq!(platforms[0].price, "Rent");
        assert_eq!(platforms[1].name, "AdService");
        assert_eq!(platforms[1].price, "Free");
        assert_eq!(platforms[2].price, "Rent");
    }

    #[tokio::test]
    async fn test_offer_links_point_at_details_page() {
        let mock = Arc::new(MockMovieCatalog::new());
        mock.set_providers(
            603,
            fixtures::region_providers("NG", vec![fixtures::provider(8, "Netflix")]),
        )
        .await;
        let agg = aggregator(Arc::clone(&mock));

        let platforms = agg.watch_providers(603).await.unwrap();
        assert_eq!(
            platforms[0].link,
            "https://www.themoviedb.org/movie/603/watch"
        );
    }

    #[tokio::test]
    async fn test_aggregate_price_category_free_wins() {
        let mock = Arc::new(MockMovieCatalog::new());
        mock.set_providers(
            1,
            fixtures::providers_with_listings(
                "NG",
                CountryListings {
                    ads: vec![fixtures::provider(9, "AdService")],
                    buy: vec![fixtures::provider(2, "Store")],
                    ..Default::default()
                },
            ),
        )
        .await;
        let agg = aggregator(Arc::clone(&mock));

        let movie = agg.normalize(fixtures::raw_movie(1, "Test")).await.unwrap();
        assert_eq!(movie.price_category, PriceCategory::Free);
    }

    #[tokio::test]
    async fn test_genre_names_preserve_order_and_drop_unknown() {
        let mock = Arc::new(MockMovieCatalog::new());
        mock.set_genres(vec![
            GenreEntry {
                id: 18,
                name: "Drama".to_string(),
            },
            GenreEntry {
                id: 35,
                name: "Comedy".to_string(),
            },
        ])
        .await;
        let agg = aggregator(Arc::clone(&mock));

        let names = agg.genre_names(&[35, 999, 18]).await.unwrap();
        assert_eq!(names, vec!["Comedy", "Drama"]);
    }

    #[tokio::test]
    async fn test_genre_table_fetched_once() {
        let mock = Arc::new(MockMovieCatalog::new());
        mock.set_genres(vec![GenreEntry {
            id: 18,
            name: "Drama".to_string(),
        }])
        .await;
        let agg = aggregator(Arc::clone(&mock));

        agg.genre_names(&[18]).await.unwrap();
        agg.genre_names(&[18]).await.unwrap();

        let genre_calls = mock
            .recorded_queries()
            .await
            .into_iter()
            .filter(|q| matches!(q, RecordedQuery::GenreList))
            .count();
        assert_eq!(genre_calls, 1);
    }

    #[tokio::test]
    async fn test_search_blank_query_short_circuits() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        assert!(agg.search("").await.unwrap().is_empty());
        assert!(agg.search("   ").await.unwrap().is_empty());
        assert!(mock.recorded_queries().await.is_empty());
    }

    #[tokio::test]
    async fn test_feeds_fail_without_credential() {
        let agg = unconfigured();
        assert!(matches!(
            agg.trending().await,
            Err(AggregatorError::NotConfigured)
        ));
        assert!(matches!(
            agg.search("okafor").await,
            Err(AggregatorError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_feed_truncates_to_twelve_in_upstream_order() {
        let mock = Arc::new(MockMovieCatalog::new());
        let listing: Vec<MovieSummary> = (0..20)
            .map(|i| fixtures::raw_movie(i, &format!("Movie {}", i)))
            .collect();
        mock.set_trending(listing).await;
        let agg = aggregator(Arc::clone(&mock));

        let feed = agg.trending().await.unwrap();
        assert_eq!(feed.len(), 12);
        let ids: Vec<u64> = feed.iter().map(|m| m.id).collect();
        assert_eq!(ids, (0..12).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_search_truncates_to_twenty() {
        let mock = Arc::new(MockMovieCatalog::new());
        let listing: Vec<MovieSummary> = (0..30)
            .map(|i| fixtures::raw_movie(i, &format!("Movie {}", i)))
            .collect();
        mock.set_search_results(listing).await;
        let agg = aggregator(Arc::clone(&mock));

        let results = agg.search("movie").await.unwrap();
        assert_eq!(results.len(), 20);
    }

    #[tokio::test]
    async fn test_new_local_discovers_home_region_newest_first() {
        let mock = Arc::new(MockMovieCatalog::new());
        mock.set_discover_results(vec![fixtures::raw_movie(1, "Local")])
            .await;
        let agg = aggregator(Arc::clone(&mock));

        agg.new_local().await.unwrap();

        let queries = mock.recorded_queries().await;
        let Some(RecordedQuery::Discover {
            origin_country,
            sort_by,
            ..
        }) = queries.first()
        else {
            panic!("expected a discover query, got {:?}", queries);
        };
        assert_eq!(origin_country.as_deref(), Some("NG"));
        assert_eq!(sort_by.as_deref(), Some("release_date.desc"));
    }

    #[tokio::test]
    async fn test_low_data_discovers_capped_runtime() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        agg.low_data().await.unwrap();

        let queries = mock.recorded_queries().await;
        let Some(RecordedQuery::Discover {
            max_runtime,
            sort_by,
            ..
        }) = queries.first()
        else {
            panic!("expected a discover query, got {:?}", queries);
        };
        assert_eq!(*max_runtime, Some(110));
        assert_eq!(sort_by.as_deref(), Some("popularity.desc"));
    }

    #[tokio::test]
    async fn test_cheapest_discovers_free_monetization() {
        let mock = Arc::new(MockMovieCatalog::new());
        let agg = aggregator(Arc::clone(&mock));

        agg.cheapest().await.unwrap();

        let queries = mock.recorded_queries().await;
        let Some(RecordedQuery::Discover {
            monetization_types, ..
        }) = queries.first()
        else {
            panic!("expected a discover query, got {:?}", queries);
        };
        assert_eq!(monetization_types.as_deref(), Some("free|ads|flatrate"));
    }

    #[tokio::test]
    async fn test_hydrate_without_catalog_returns_input() {
        let agg = unconfigured();
        let movie = fixtures::sample_base_movie(5);
        let hydrated = agg.hydrate(movie.clone()).await.unwrap();
        assert_eq!(hydrated, movie);
    }

    #[tokio::test]
    async fn test_hydrate_recomputes_flags_and_picks_trailer() {
        let mock = Arc::new(MockMovieCatalog::new());
        let mut detail = fixtures::detail(5, "Test");
        detail.runtime = Some(96);
        detail.genres = Some(vec![GenreEntry {
            id: 18,
            name: "Drama".to_string(),
        }]);
        detail.production_countries = Some(vec![fixtures::country("NG")]);
        mock.add_detail(detail).await;
        mock.set_videos(
            5,
            vec![
                MovieVideo {
                    key: "clipclip".to_string(),
                    site: "YouTube".to_string(),
                    kind: "Clip".to_string(),
                },
                MovieVideo {
                    key: "dQw4w9WgXcQ".to_string(),
                    site: "YouTube".to_string(),
                    kind: "Teaser".to_string(),
                },
            ],
        )
        .await;
        let agg = aggregator(Arc::clone(&mock));

        let hydrated = agg.hydrate(fixtures::sample_base_movie(5)).await.unwrap();
        assert!(hydrated.low_data_friendly);
        assert!(hydrated.is_afro);
        assert_eq!(hydrated.runtime, Some(96));
        assert_eq!(hydrated.genres, vec!["Drama"]);
        assert_eq!(
            hydrated.trailer_url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[tokio::test]
    async fn test_hydrate_keeps_base_values_when_detail_is_sparse() {
        let mock = Arc::new(MockMovieCatalog::new());
        mock.add_detail(fixtures::detail(5, "Test")).await;
        mock.set_videos(5, vec![]).await;
        let agg = aggregator(Arc::clone(&mock));

        let mut base = fixtures::sample_base_movie(5);
        base.genres = vec!["Action".to_string()];
        base.trailer_url = "https://www.youtube.com/embed/existing1".to_string();
        base.is_afro = true;

        let hydrated = agg.hydrate(base.clone()).await.unwrap();
        assert_eq!(hydrated.genres, base.genres);
        assert_eq!(hydrated.trailer_url, base.trailer_url);
        assert!(hydrated.is_afro);
        assert!(!hydrated.low_data_friendly);
    }

    #[tokio::test]
    async fn test_movie_by_id_hydrates() {
        let mock = Arc::new(MockMovieCatalog::new());
        let mut detail = fixtures::detail(603, "The Matrix");
        detail.release_date = Some("1999-03-30".to_string());
        detail.runtime = Some(136);
        detail.vote_average = Some(8.19);
        detail.genres = Some(vec![GenreEntry {
            id: 28,
            name: "Action".to_string(),
        }]);
        mock.add_detail(detail).await;
        mock.set_videos(
            603,
            vec![MovieVideo {
                key: "m8e-FF8MsqU".to_string(),
                site: "YouTube".to_string(),
                kind: "Trailer".to_string(),
            }],
        )
        .await;
        mock.set_providers(
            603,
            fixtures::region_providers("NG", vec![fixtures::provider(8, "Netflix")]),
        )
        .await;
        let agg = aggregator(Arc::clone(&mock));

        let movie = agg.movie_by_id(603).await.unwrap();
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year, 1999);
        assert_eq!(movie.rating, 8.2);
        assert_eq!(movie.runtime, Some(136));
        assert!(!movie.low_data_friendly);
        assert_eq!(movie.genres, vec!["Action"]);
        assert_eq!(
            movie.trailer_url,
            "https://www.youtube.com/embed/m8e-FF8MsqU"
        );
        assert_eq!(movie.platforms.len(), 1);
        assert_eq!(movie.price_category, PriceCategory::Subscription);
    }

    #[test]
    fn test_parse_year_edge_cases() {
        assert_eq!(parse_year(Some("2023-01-15")), 2023);
        assert_eq!(parse_year(Some("202")), 0);
        assert_eq!(parse_year(None), 0);
    }

    #[test]
    fn test_round_rating() {
        assert_eq!(round_rating(8.54999), 8.5);
        assert_eq!(round_rating(8.55), 8.6);
        assert_eq!(round_rating(0.0), 0.0);
    }
}
