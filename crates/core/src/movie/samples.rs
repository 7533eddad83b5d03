//! Static sample catalog used as a silent fallback by the client facade
//! when the backend is unreachable or misconfigured.

use super::{Movie, Platform, PriceCategory};

const NETFLIX_LOGO: &str =
    "https://upload.wikimedia.org/wikipedia/commons/0/08/Netflix_2015_logo.svg";

/// Nigerian-focused sample catalog.
///
/// The aggregator never serves these; only the client facade substitutes
/// them so the UI always has something to render.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Anikulapo".to_string(),
            year: 2022,
            genres: vec!["Drama".to_string(), "Fantasy".to_string()],
            rating: 8.5,
            poster_url: "https://picsum.photos/seed/anikulapo/400/600".to_string(),
            backdrop_url: "https://picsum.photos/seed/anikulapo-bg/1200/600".to_string(),
            trailer_url: "https://www.youtube.com/embed/5-XQjD5Tz4c".to_string(),
            description: "After an affair with the king's wife leads to his demise, a traveler \
                          encounters a mystical bird with the power to give him another life."
                .to_string(),
            platforms: vec![Platform {
                name: "Netflix".to_string(),
                link: "https://netflix.com".to_string(),
                price: "Subscription".to_string(),
                logo: NETFLIX_LOGO.to_string(),
            }],
            tags: vec![
                "Nollywood".to_string(),
                "Epic".to_string(),
                "Cultural".to_string(),
            ],
            low_data_friendly: true,
            is_afro: true,
            price_category: PriceCategory::Subscription,
            runtime: None,
        },
        Movie {
            id: 2,
            title: "The Wedding Party".to_string(),
            year: 2016,
            genres: vec!["Comedy".to_string(), "Romance".to_string()],
            rating: 7.9,
            poster_url: "https://picsum.photos/seed/wedding/400/600".to_string(),
            backdrop_url: "https://picsum.photos/seed/wedding-bg/1200/600".to_string(),
            trailer_url: "https://www.youtube.com/embed/SAsXmQ-W63c".to_string(),
            description: "As their big day arrives, a couple's lavish wedding plans turn into a \
                          chaotic nightmare."
                .to_string(),
            platforms: vec![
                Platform {
                    name: "Netflix".to_string(),
                    link: "https://netflix.com".to_string(),
                    price: "Subscription".to_string(),
                    logo: NETFLIX_LOGO.to_string(),
                },
                Platform {
                    name: "Showmax".to_string(),
                    link: "https://showmax.com".to_string(),
                    price: "₦1,200/mo".to_string(),
                    logo: "https://upload.wikimedia.org/wikipedia/en/thumb/5/52/Showmax_Logo.svg/1200px-Showmax_Logo.svg.png"
                        .to_string(),
                },
            ],
            tags: vec![
                "Classic".to_string(),
                "Party Vibes".to_string(),
                "Lagos Life".to_string(),
            ],
            low_data_friendly: true,
            is_afro: true,
            price_category: PriceCategory::Subscription,
            runtime: None,
        },
        Movie {
            id: 3,
            title: "King of Boys".to_string(),
            year: 2018,
            genres: vec!["Crime".to_string(), "Drama".to_string()],
            rating: 9.1,
            poster_url: "https://picsum.photos/seed/kob/400/600".to_string(),
            backdrop_url: "https://picsum.photos/seed/kob-bg/1200/600".to_string(),
            trailer_url: "https://www.youtube.com/embed/k-pY8L3j6o8".to_string(),
            description: "Eniola Salami, a businesswoman and philanthropist with a checkered \
                          past and a promising political future."
                .to_string(),
            platforms: vec![Platform {
                name: "Netflix".to_string(),
                link: "https://netflix.com".to_string(),
                price: "Subscription".to_string(),
                logo: NETFLIX_LOGO.to_string(),
            }],
            tags: vec![
                "Must Watch".to_string(),
                "Eniola Salami".to_string(),
                "Power".to_string(),
            ],
            low_data_friendly: false,
            is_afro: true,
            price_category: PriceCategory::Subscription,
            runtime: None,
        },
        Movie {
            id: 4,
            title: "Shanty Town".to_string(),
            year: 2023,
            genres: vec!["Action".to_string(), "Crime".to_string()],
            rating: 7.5,
            poster_url: "https://picsum.photos/seed/shanty/400/600".to_string(),
            backdrop_url: "https://picsum.photos/seed/shanty-bg/1200/600".to_string(),
            trailer_url: "https://www.youtube.com/embed/abc".to_string(),
            description: "A group of courtesans attempts to escape the clutches of a notorious \
                          kingpin."
                .to_string(),
            platforms: vec![Platform {
                name: "Netflix".to_string(),
                link: "https://netflix.com".to_string(),
                price: "Subscription".to_string(),
                logo: NETFLIX_LOGO.to_string(),
            }],
            tags: vec![
                "Action".to_string(),
                "Gritty".to_string(),
                "Series".to_string(),
            ],
            low_data_friendly: true,
            is_afro: true,
            price_category: PriceCategory::Subscription,
            runtime: None,
        },
        Movie {
            id: 5,
            title: "Spider-Man: Across the Spider-Verse".to_string(),
            year: 2023,
            genres: vec!["Animation".to_string(), "Action".to_string()],
            rating: 8.9,
            poster_url: "https://picsum.photos/seed/spidey/400/600".to_string(),
            backdrop_url: "https://picsum.photos/seed/spidey-bg/1200/600".to_string(),
            trailer_url: "https://www.youtube.com/embed/shW9i6k8cB0".to_string(),
            description: "Miles Morales catapults across the Multiverse, where he encounters a \
                          team of Spider-People charged with protecting its very existence."
                .to_string(),
            platforms: vec![
                Platform {
                    name: "Apple TV".to_string(),
                    link: "https://apple.com".to_string(),
                    price: "₦2,500".to_string(),
                    logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2a/Apple_TV_logo.svg/1200px-Apple_TV_logo.svg.png"
                        .to_string(),
                },
                Platform {
                    name: "Google Play".to_string(),
                    link: "https://play.google.com".to_string(),
                    price: "₦1,800".to_string(),
                    logo: "https://upload.wikimedia.org/wikipedia/commons/d/d0/Google_Play_Arrow_logo.svg"
                        .to_string(),
                },
            ],
            tags: vec!["Blockbuster".to_string(), "Global".to_string()],
            low_data_friendly: false,
            is_afro: false,
            price_category: PriceCategory::Rent,
            runtime: None,
        },
    ]
}
