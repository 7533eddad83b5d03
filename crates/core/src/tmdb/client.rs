//! TMDB API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::UPSTREAM_REQUESTS_TOTAL;

use super::types::{
    DiscoverQuery, GenreEntry, MovieDetail, MovieSummary, MovieVideo, WatchProviderResults,
};
use super::{MovieCatalog, TmdbError};

/// Default image CDN base for posters, backdrops and provider logos.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key. Empty means the upstream is not configured and the
    /// aggregation endpoints refuse to serve.
    #[serde(default)]
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Image base URL for posters/backdrops/logos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    /// Home region code used for provider availability and local discovery.
    #[serde(default = "default_region")]
    pub region: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Maximum number of movies whose provider offers are cached.
    #[serde(default = "default_provider_cache_capacity")]
    pub provider_cache_capacity: usize,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            image_base_url: None,
            region: default_region(),
            timeout_secs: default_timeout(),
            provider_cache_capacity: default_provider_cache_capacity(),
        }
    }
}

fn default_region() -> String {
    "NG".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_provider_cache_capacity() -> usize {
    1024
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: &TmdbConfig) -> Result<Self, TmdbError> {
        if config.api_key.is_empty() {
            return Err(TmdbError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        UPSTREAM_REQUESTS_TOTAL.with_label_values(&[endpoint]).inc();

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(TmdbError::NotConfigured("Invalid TMDB API key".to_string()));
        }
        if status == 404 {
            return Err(TmdbError::NotFound(path.to_string()));
        }
        if status == 429 {
            return Err(TmdbError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TmdbError::Parse(format!("{}: {}", path, e)))
    }
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    results: Vec<MovieVideo>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<GenreEntry>,
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn trending_week(&self, region: &str) -> Result<Vec<MovieSummary>, TmdbError> {
        debug!("TMDB trending: region={}", region);

        let listing: ListingResponse = self
            .get_json(
                "trending",
                "/trending/movie/week",
                &[("region", region.to_string())],
            )
            .await?;
        Ok(listing.results)
    }

    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<MovieSummary>, TmdbError> {
        debug!("TMDB discover: {:?}", query);

        let mut params = vec![("region", query.region.clone())];
        if let Some(country) = &query.origin_country {
            params.push(("with_origin_country", country.clone()));
        }
        if let Some(sort_by) = &query.sort_by {
            params.push(("sort_by", sort_by.clone()));
        }
        if let Some(types) = &query.monetization_types {
            params.push(("with_watch_monetization_types", types.clone()));
        }
        if let Some(watch_region) = &query.watch_region {
            params.push(("watch_region", watch_region.clone()));
        }
        if let Some(max_runtime) = query.max_runtime {
            params.push(("with_runtime.lte", max_runtime.to_string()));
        }
        if !query.include_adult {
            params.push(("include_adult", "false".to_string()));
        }

        let listing: ListingResponse = self
            .get_json("discover", "/discover/movie", &params)
            .await?;
        Ok(listing.results)
    }

    async fn search_movies(
        &self,
        query: &str,
        region: &str,
    ) -> Result<Vec<MovieSummary>, TmdbError> {
        debug!("TMDB movie search: query='{}'", query);

        let listing: ListingResponse = self
            .get_json(
                "search",
                "/search/movie",
                &[
                    ("query", query.to_string()),
                    ("include_adult", "false".to_string()),
                    ("region", region.to_string()),
                ],
            )
            .await?;
        Ok(listing.results)
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, TmdbError> {
        debug!("TMDB get movie: id={}", id);

        self.get_json(
            "detail",
            &format!("/movie/{}", id),
            &[("language", "en-US".to_string())],
        )
        .await
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<MovieVideo>, TmdbError> {
        debug!("TMDB get videos: id={}", id);

        let listing: VideoListResponse = self
            .get_json(
                "videos",
                &format!("/movie/{}/videos", id),
                &[("language", "en-US".to_string())],
            )
            .await?;
        Ok(listing.results)
    }

    async fn watch_providers(&self, id: u64) -> Result<WatchProviderResults, TmdbError> {
        debug!("TMDB get watch providers: id={}", id);

        self.get_json("providers", &format!("/movie/{}/watch/providers", id), &[])
            .await
    }

    async fn genre_list(&self) -> Result<Vec<GenreEntry>, TmdbError> {
        debug!("TMDB get genre table");

        let listing: GenreListResponse = self
            .get_json(
                "genres",
                "/genre/movie/list",
                &[("language", "en-US".to_string())],
            )
            .await?;
        Ok(listing.genres)
    }
}
