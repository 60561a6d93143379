pub mod clients;
pub mod config;
pub mod cursor;
pub mod error;
pub mod instructions;
pub mod model;
pub mod query;
pub mod session;

pub use clients::{DetailStore, HttpClient, OptionsProvider, Recommender};
pub use config::ClientConfig;
pub use cursor::ResultCursor;
pub use error::RecommendError;
pub use instructions::format_instructions;
pub use model::{CriterionWeights, Query, RecipeDetail, ResultSet, Step};
pub use query::{build as build_query, QueryForm};
pub use session::{Notice, RecommendationSession, SessionState};

use std::sync::Arc;

/// Create a session talking to the service described by `config`.
pub fn session_from_config(config: &ClientConfig) -> Result<RecommendationSession, RecommendError> {
    let client = Arc::new(HttpClient::new(config)?);
    Ok(RecommendationSession::new(client.clone(), client))
}

/// Create a session talking to the service at `base_url` with defaults
/// for everything else.
pub fn session_for_url(base_url: &str) -> Result<RecommendationSession, RecommendError> {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    };
    session_from_config(&config)
}
