use nollywatch_core::{Config, MovieAggregator, SanitizedConfig, TaglineService};

/// Shared application state
pub struct AppState {
    config: Config,
    aggregator: MovieAggregator,
    tagline: TaglineService,
}

impl AppState {
    pub fn new(config: Config, aggregator: MovieAggregator, tagline: TaglineService) -> Self {
        Self {
            config,
            aggregator,
            tagline,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn aggregator(&self) -> &MovieAggregator {
        &self.aggregator
    }

    pub fn tagline(&self) -> &TaglineService {
        &self.tagline
    }
}
