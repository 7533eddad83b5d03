//! Trailer URL normalization.
//!
//! Upstream video records and historical data carry a mix of bare YouTube
//! keys, share links and watch URLs; everything user-facing is a single
//! embeddable player URL.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use url::Url;

static VIDEO_KEY: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z0-9_-]{6,}$").unwrap());

fn embed_url(key: &str) -> String {
    format!("https://www.youtube.com/embed/{}", key)
}

/// Convert a raw trailer URL or bare video key into an embeddable player
/// URL.
///
/// Returns an empty string when the input is empty, unparseable or not a
/// recognized video link; callers treat empty as "no trailer available".
/// Idempotent on URLs already in embed form.
pub fn to_embed_url(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    if VIDEO_KEY.is_match(input) {
        return embed_url(input);
    }

    let Ok(url) = Url::parse(input) else {
        return String::new();
    };
    let Some(host) = url.host_str() else {
        return String::new();
    };

    if host.contains("youtube.com") {
        if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
            return embed_url(&v);
        }
        if url.path().starts_with("/embed/") {
            return input.to_string();
        }
        if let Some(last) = url
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|segment| !segment.is_empty())
        {
            return embed_url(last);
        }
    }

    if host.contains("youtu.be") {
        let id = url.path().trim_start_matches('/');
        if !id.is_empty() {
            return embed_url(id);
        }
    }

    String::new()
}
