//! Test utilities: a mock upstream catalog with recorded calls, and
//! fixture builders for wire types.
//!
//! Available outside `cfg(test)` so the server's integration tests can
//! drive the real router against a controllable upstream.

mod mock_catalog;

pub use mock_catalog::{MockMovieCatalog, RecordedQuery};

/// Fixture builders for upstream wire types and canonical movies.
pub mod fixtures {
    use crate::movie::{Movie, PriceCategory};
    use crate::tmdb::{
        CountryListings, MovieDetail, MovieSummary, ProductionCountry, ProviderEntry,
        WatchProviderResults,
    };

    /// A raw listing record with sensible defaults.
    pub fn raw_movie(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: Some(title.to_string()),
            overview: Some(format!("{} overview", title)),
            vote_average: Some(7.0),
            ..Default::default()
        }
    }

    /// A detail record with sensible defaults.
    pub fn detail(id: u64, title: &str) -> MovieDetail {
        MovieDetail {
            id,
            title: Some(title.to_string()),
            overview: Some(format!("{} overview", title)),
            vote_average: Some(7.0),
            ..Default::default()
        }
    }

    /// A provider offer.
    pub fn provider(id: u64, name: &str) -> ProviderEntry {
        ProviderEntry {
            provider_id: id,
            provider_name: name.to_string(),
            logo_path: Some(format!("/{}.jpg", name.to_lowercase())),
        }
    }

    /// Provider results with the given offers listed as flatrate for one
    /// region.
    pub fn region_providers(region: &str, flatrate: Vec<ProviderEntry>) -> WatchProviderResults {
        providers_with_listings(
            region,
            CountryListings {
                flatrate,
                ..Default::default()
            },
        )
    }

    /// Provider results with full listings for one region.
    pub fn providers_with_listings(
        region: &str,
        listings: CountryListings,
    ) -> WatchProviderResults {
        let mut results = WatchProviderResults::default();
        results.results.insert(region.to_string(), listings);
        results
    }

    /// A production country.
    pub fn country(code: &str) -> ProductionCountry {
        ProductionCountry {
            iso_3166_1: code.to_string(),
        }
    }

    /// A freshly normalized movie with default (pre-hydration) flags.
    pub fn sample_base_movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            year: 2020,
            genres: Vec::new(),
            rating: 7.0,
            poster_url: String::new(),
            backdrop_url: String::new(),
            trailer_url: String::new(),
            description: "A test movie.".to_string(),
            platforms: Vec::new(),
            tags: Vec::new(),
            low_data_friendly: false,
            is_afro: false,
            price_category: PriceCategory::Subscription,
            runtime: None,
        }
    }
}
