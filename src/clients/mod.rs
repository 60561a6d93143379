mod http;

pub use http::HttpClient;

use crate::error::RecommendError;
use crate::model::{Query, RecipeDetail, ResultSet};
use async_trait::async_trait;

/// Ranks recipes for a query and returns their identifiers, best first.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, query: &Query) -> Result<ResultSet, RecommendError>;
}

/// Looks up the full record for a single recipe identifier.
#[async_trait]
pub trait DetailStore: Send + Sync {
    async fn fetch_detail(&self, identifier: &str) -> Result<RecipeDetail, RecommendError>;
}

/// Supplies the selectable vocabularies used to populate form fields.
/// The core never checks submitted values against these lists.
#[async_trait]
pub trait OptionsProvider: Send + Sync {
    async fn unique_ingredients(&self) -> Result<Vec<String>, RecommendError>;
    async fn unique_regions(&self) -> Result<Vec<String>, RecommendError>;
    async fn unique_countries(&self) -> Result<Vec<String>, RecommendError>;
}
