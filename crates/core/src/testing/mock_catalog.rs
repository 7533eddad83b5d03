//! Mock upstream movie catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::tmdb::{
    DiscoverQuery, GenreEntry, MovieCatalog, MovieDetail, MovieSummary, MovieVideo, TmdbError,
    WatchProviderResults,
};

/// A recorded upstream query for test assertions.
#[derive(Debug, Clone)]
pub enum RecordedQuery {
    TrendingWeek {
        region: String,
    },
    Discover {
        region: String,
        origin_country: Option<String>,
        sort_by: Option<String>,
        monetization_types: Option<String>,
        max_runtime: Option<u32>,
    },
    SearchMovies {
        query: String,
        region: String,
    },
    MovieDetail {
        id: u64,
    },
    MovieVideos {
        id: u64,
    },
    WatchProviders {
        id: u64,
    },
    GenreList,
}

/// Mock implementation of the [`MovieCatalog`] trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable listings, details, videos and providers
/// - Track queries for assertions (e.g. exact upstream call counts)
/// - Simulate failures
#[derive(Debug, Default)]
pub struct MockMovieCatalog {
    trending: Arc<RwLock<Vec<MovieSummary>>>,
    discover: Arc<RwLock<Vec<MovieSummary>>>,
    search: Arc<RwLock<Vec<MovieSummary>>>,
    details: Arc<RwLock<HashMap<u64, MovieDetail>>>,
    videos: Arc<RwLock<HashMap<u64, Vec<MovieVideo>>>>,
    providers: Arc<RwLock<HashMap<u64, WatchProviderResults>>>,
    genres: Arc<RwLock<Vec<GenreEntry>>>,
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next operation fails with this error.
    next_error: Arc<RwLock<Option<TmdbError>>>,
}

impl MockMovieCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_trending(&self, listing: Vec<MovieSummary>) {
        *self.trending.write().await = listing;
    }

    pub async fn set_discover_results(&self, listing: Vec<MovieSummary>) {
        *self.discover.write().await = listing;
    }

    pub async fn set_search_results(&self, listing: Vec<MovieSummary>) {
        *self.search.write().await = listing;
    }

    pub async fn add_detail(&self, detail: MovieDetail) {
        self.details.write().await.insert(detail.id, detail);
    }

    pub async fn set_videos(&self, id: u64, videos: Vec<MovieVideo>) {
        self.videos.write().await.insert(id, videos);
    }

    pub async fn set_providers(&self, id: u64, providers: WatchProviderResults) {
        self.providers.write().await.insert(id, providers);
    }

    pub async fn set_genres(&self, genres: Vec<GenreEntry>) {
        *self.genres.write().await = genres;
    }

    /// Make the next operation fail with the given error.
    pub async fn fail_next(&self, error: TmdbError) {
        *self.next_error.write().await = Some(error);
    }

    /// All queries recorded so far.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Total number of upstream calls recorded.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    async fn record(&self, query: RecordedQuery) -> Result<(), TmdbError> {
        self.queries.write().await.push(query);
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        Ok(())
    }
}

#[async_trait]
impl MovieCatalog for MockMovieCatalog {
    async fn trending_week(&self, region: &str) -> Result<Vec<MovieSummary>, TmdbError> {
        self.record(RecordedQuery::TrendingWeek {
            region: region.to_string(),
        })
        .await?;
        Ok(self.trending.read().await.clone())
    }

    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<MovieSummary>, TmdbError> {
        self.record(RecordedQuery::Discover {
            region: query.region.clone(),
            origin_country: query.origin_country.clone(),
            sort_by: query.sort_by.clone(),
            monetization_types: query.monetization_types.clone(),
            max_runtime: query.max_runtime,
        })
        .await?;
        Ok(self.discover.read().await.clone())
    }

    async fn search_movies(
        &self,
        query: &str,
        region: &str,
    ) -> Result<Vec<MovieSummary>, TmdbError> {
        self.record(RecordedQuery::SearchMovies {
            query: query.to_string(),
            region: region.to_string(),
        })
        .await?;
        Ok(self.search.read().await.clone())
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, TmdbError> {
        self.record(RecordedQuery::MovieDetail { id }).await?;
        self.details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| TmdbError::NotFound(format!("movie {}", id)))
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<MovieVideo>, TmdbError> {
        self.record(RecordedQuery::MovieVideos { id }).await?;
        Ok(self.videos.read().await.get(&id).cloned().unwrap_or_default())
    }

    async fn watch_providers(&self, id: u64) -> Result<WatchProviderResults, TmdbError> {
        self.record(RecordedQuery::WatchProviders { id }).await?;
        Ok(self
            .providers
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }

    async fn genre_list(&self) -> Result<Vec<GenreEntry>, TmdbError> {
        self.record(RecordedQuery::GenreList).await?;
        Ok(self.genres.read().await.clone())
    }
}
