//! Wire types for the TMDB API surface the aggregator consumes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One raw movie record from a search/discovery/trending listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    /// Some upstream records (TV crossovers) carry `name` instead of `title`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

/// Full movie record from the detail endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Minutes; 0 or absent when unknown upstream.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Absent (None) and empty are distinct: hydration only overrides the
    /// base genres when the field is present.
    #[serde(default)]
    pub genres: Option<Vec<GenreEntry>>,
    #[serde(default)]
    pub production_countries: Option<Vec<ProductionCountry>>,
}

/// One entry of the genre id-to-name table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreEntry {
    pub id: u64,
    pub name: String,
}

/// Production country of a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
}

/// One entry of a movie's video list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieVideo {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Watch-provider offers keyed by region code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchProviderResults {
    #[serde(default)]
    pub results: HashMap<String, CountryListings>,
}

/// Per-region provider offers split by monetization type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryListings {
    #[serde(default)]
    pub flatrate: Vec<ProviderEntry>,
    #[serde(default)]
    pub ads: Vec<ProviderEntry>,
    #[serde(default)]
    pub rent: Vec<ProviderEntry>,
    #[serde(default)]
    pub buy: Vec<ProviderEntry>,
}

/// One provider offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEntry {
    pub provider_id: u64,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

/// Parameters for the discovery endpoint.
///
/// Each feed builds one canned query; the client translates the set
/// fields into TMDB query parameters.
#[derive(Debug, Clone, Default)]
pub struct DiscoverQuery {
    pub region: String,
    /// `with_origin_country`.
    pub origin_country: Option<String>,
    /// `sort_by`, e.g. "release_date.desc" or "popularity.desc".
    pub sort_by: Option<String>,
    /// `with_watch_monetization_types`, e.g. "free|ads|flatrate".
    pub monetization_types: Option<String>,
    /// `watch_region`; only meaningful with monetization types.
    pub watch_region: Option<String>,
    /// `with_runtime.lte`.
    pub max_runtime: Option<u32>,
    pub include_adult: bool,
}
