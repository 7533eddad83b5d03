use serde::{Deserialize, Serialize};

/// Coarse billing classification shown to users.
///
/// Serialized with the exact labels the wire format uses ("Free",
/// "Subscription", "Rent", "Buy").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceCategory {
    Free,
    Subscription,
    Rent,
    Buy,
}

impl PriceCategory {
    /// The wire label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Free => "Free",
            PriceCategory::Subscription => "Subscription",
            PriceCategory::Rent => "Rent",
            PriceCategory::Buy => "Buy",
        }
    }

    /// Derive the aggregate category from a platform list.
    ///
    /// Precedence: Free > Subscription > Rent > Buy, defaulting to
    /// Subscription when the list is empty. Note this order differs from
    /// the per-offer labeling precedence in the provider lookup
    /// (rent > buy > ads > subscription); both orders are load-bearing
    /// for downstream filters and must not be unified.
    pub fn from_platforms(platforms: &[Platform]) -> Self {
        for category in [
            PriceCategory::Free,
            PriceCategory::Subscription,
            PriceCategory::Rent,
            PriceCategory::Buy,
        ] {
            if platforms.iter().any(|p| p.price == category.as_str()) {
                return category;
            }
        }
        PriceCategory::Subscription
    }
}

impl std::fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A streaming/rental/purchase service through which a movie can be watched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Provider display name.
    pub name: String,
    /// Canonical details-page URL for the movie (never a deep link).
    pub link: String,
    /// One of the four category labels for live data; the sample catalog
    /// carries raw naira prices here instead.
    pub price: String,
    /// Absolute logo image URL, or empty.
    pub logo: String,
}

/// Canonical movie record, constructed fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// Release year, 0 when the release date is unknown.
    pub year: i32,
    pub genres: Vec<String>,
    /// Rounded to one decimal place, 0 when absent upstream.
    pub rating: f64,
    pub poster_url: String,
    #[serde(default)]
    pub backdrop_url: String,
    /// Normalized embeddable player URL, empty until hydrated.
    pub trailer_url: String,
    pub description: String,
    pub platforms: Vec<Platform>,
    /// Only populated in the sample catalog; empty from the live aggregator.
    pub tags: Vec<String>,
    /// True iff runtime <= 110 minutes once known; false before hydration.
    #[serde(rename = "lowDataFriendly")]
    pub low_data_friendly: bool,
    /// True iff a production country matches the home region; false before
    /// hydration.
    #[serde(rename = "isAfro")]
    pub is_afro: bool,
    #[serde(rename = "priceCategory")]
    pub price_category: PriceCategory,
    /// Minutes, present only after hydration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
}
