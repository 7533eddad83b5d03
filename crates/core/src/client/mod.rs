//! Resilient client facade over the HTTP surface.
//!
//! Presentation layers (mobile and web) consume the backend through this
//! one shared client instead of carrying their own copies of the fetch
//! and fallback logic. Every method degrades silently to the sample
//! catalog when the backend is unreachable or misconfigured, so the UI
//! always has something to render.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::movie::{sample_movies, Movie, PriceCategory};
use crate::tagline::{ERROR_TAGLINE, FALLBACK_TAGLINE};

/// Error constructing the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the aggregation API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct TaglineRequest<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct TaglineResponse {
    #[serde(default)]
    tagline: String,
}

impl ApiClient {
    /// Create a new client against the given API base, e.g.
    /// `http://localhost:5174/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_movies(&self, path: &str) -> Result<Vec<Movie>, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Weekly trending movies, or the full sample catalog on failure.
    pub async fn trending_movies(&self) -> Vec<Movie> {
        match self.fetch_movies("/movies/trending").await {
            Ok(movies) => movies,
            Err(e) => {
                debug!("trending fetch failed, serving samples: {}", e);
                sample_movies()
            }
        }
    }

    /// Newest local films, or the local subset of the samples on failure.
    pub async fn new_afro_films(&self) -> Vec<Movie> {
        match self.fetch_movies("/movies/new").await {
            Ok(movies) => movies,
            Err(e) => {
                debug!("new-films fetch failed, serving samples: {}", e);
                sample_movies().into_iter().filter(|m| m.is_afro).collect()
            }
        }
    }

    /// Cheapest picks, or the free/subscription samples on failure.
    pub async fn cheapest_picks(&self) -> Vec<Movie> {
        match self.fetch_movies("/movies/cheapest").await {
            Ok(movies) => movies,
            Err(e) => {
                debug!("cheapest fetch failed, serving samples: {}", e);
                sample_movies()
                    .into_iter()
                    .filter(|m| {
                        m.price_category == PriceCategory::Free
                            || m.price_category == PriceCategory::Subscription
                    })
                    .collect()
            }
        }
    }

    /// Low-data picks, or the short samples on failure.
    pub async fn low_data_picks(&self) -> Vec<Movie> {
        match self.fetch_movies("/movies/low-data").await {
            Ok(movies) => movies,
            Err(e) => {
                debug!("low-data fetch failed, serving samples: {}", e);
                sample_movies()
                    .into_iter()
                    .filter(|m| m.low_data_friendly)
                    .collect()
            }
        }
    }

    /// A single hydrated movie, or its sample counterpart on failure.
    pub async fn movie_by_id(&self, id: u64) -> Option<Movie> {
        let path = format!("/movies/{}", id);
        match self.fetch_movie(&path).await {
            Ok(movie) => Some(movie),
            Err(e) => {
                debug!("movie {} fetch failed, serving samples: {}", id, e);
                sample_movies().into_iter().find(|m| m.id == id)
            }
        }
    }

    async fn fetch_movie(&self, path: &str) -> Result<Movie, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Search by free text. A blank query returns empty with no request;
    /// failures fall back to a title/tag substring match over the samples.
    pub async fn search_movies(&self, query: &str) -> Vec<Movie> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let result = self
            .client
            .get(format!("{}/movies/search", self.base_url))
            .query(&[("query", query)])
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(response) => response.json().await.unwrap_or_else(|e| {
                debug!("search response parse failed, serving samples: {}", e);
                search_samples(query)
            }),
            Err(e) => {
                debug!("search fetch failed, serving samples: {}", e);
                search_samples(query)
            }
        }
    }

    /// Generate a tagline; always resolves to some tagline text.
    pub async fn naija_tagline(&self, title: &str, description: &str) -> String {
        let result = self
            .client
            .post(format!("{}/generate-tagline", self.base_url))
            .json(&TaglineRequest { title, description })
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => response
                .json::<TaglineResponse>()
                .await
                .ok()
                .map(|r| r.tagline)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| FALLBACK_TAGLINE.to_string()),
            Ok(_) => FALLBACK_TAGLINE.to_string(),
            Err(e) => {
                debug!("tagline request failed: {}", e);
                ERROR_TAGLINE.to_string()
            }
        }
    }
}

fn search_samples(query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();
    sample_movies()
        .into_iter()
        .filter(|m| {
            m.title.to_lowercase().contains(&needle)
                || m.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}
