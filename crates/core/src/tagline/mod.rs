//! Naija tagline generation.
//!
//! A single-purpose call to a generative model, with fixed fallback
//! strings so the feature always produces some tagline text, never an
//! error page.

mod llm;

pub use llm::{CompletionRequest, CompletionResponse, GeminiClient, LlmClient, LlmError, LlmUsage};

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::metrics::TAGLINES_TOTAL;

/// Canned tagline for unconfigured or missing-input requests.
pub const FALLBACK_TAGLINE: &str = "A must-watch for the weekend!";
/// Canned tagline when the model call fails.
pub const ERROR_TAGLINE: &str = "The vibiest movie in Naija right now!";

/// Tagline generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaglineConfig {
    /// Gemini API key. Empty means tagline generation degrades to the
    /// fixed fallback string.
    #[serde(default)]
    pub api_key: String,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Custom API base URL (for proxies or tests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Maximum tokens for completions.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for TaglineConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_base: None,
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_max_tokens() -> u32 {
    256
}

/// Generates promotional taglines for movies.
pub struct TaglineService {
    llm: Option<Arc<dyn LlmClient>>,
    max_tokens: u32,
}

impl TaglineService {
    pub fn new(llm: Option<Arc<dyn LlmClient>>, max_tokens: u32) -> Self {
        Self { llm, max_tokens }
    }

    /// Build the service from configuration, constructing a Gemini client
    /// when a key is present.
    pub fn from_config(config: &TaglineConfig) -> Result<Self, LlmError> {
        let llm: Option<Arc<dyn LlmClient>> = if config.api_key.is_empty() {
            None
        } else {
            let mut client = GeminiClient::new(
                &config.api_key,
                &config.model,
                Duration::from_secs(u64::from(config.timeout_secs)),
            )?;
            if let Some(api_base) = &config.api_base {
                client = client.with_api_base(api_base);
            }
            Some(Arc::new(client))
        };

        Ok(Self::new(llm, config.max_tokens))
    }

    /// Whether a generative model is configured.
    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    /// Generate a Naija-style tagline for a movie.
    ///
    /// Returns the fixed fallback when no model is configured or the model
    /// produces nothing; model failures surface as errors for the HTTP
    /// layer to map (it still answers with canned text).
    pub async fn naija_tagline(&self, title: &str, description: &str) -> Result<String, LlmError> {
        let Some(llm) = &self.llm else {
            TAGLINES_TOTAL.with_label_values(&["fallback"]).inc();
            return Ok(FALLBACK_TAGLINE.to_string());
        };

        let request =
            CompletionRequest::new(promoter_prompt(title, description)).with_max_tokens(self.max_tokens);

        let response = llm.complete(request).await.inspect_err(|_| {
            TAGLINES_TOTAL.with_label_values(&["error"]).inc();
        })?;

        let text = response.text.trim();
        if text.is_empty() {
            TAGLINES_TOTAL.with_label_values(&["fallback"]).inc();
            Ok(FALLBACK_TAGLINE.to_string())
        } else {
            TAGLINES_TOTAL.with_label_values(&["generated"]).inc();
            Ok(text.to_string())
        }
    }
}

fn promoter_prompt(title: &str, description: &str) -> String {
    format!(
        "You are a savvy Nigerian movie promoter. Generate a short, catchy, and culturally \
         relevant \"Naija style\" tagline for the movie \"{}\". Description: \"{}\". Keep it \
         under 60 characters and use a bit of Nigerian Pidgin if appropriate. Output ONLY the \
         tagline text.",
        title, description
    )
}
