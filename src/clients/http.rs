use crate::clients::{DetailStore, OptionsProvider, Recommender};
use crate::config::ClientConfig;
use crate::error::RecommendError;
use crate::model::{Query, RecipeDetail, ResultSet};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// reqwest-backed client for the recommendation service's REST surface.
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RecommendError> {
        Self::with_base_url(config.base_url.clone(), Duration::from_secs(config.timeout))
    }

    pub fn with_base_url(base_url: String, timeout: Duration) -> Result<Self, RecommendError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-recommender/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_strings(&self, path: &str) -> Result<Vec<String>, RecommendError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RecommendError::Status(response.status()));
        }
        let values = response
            .json::<Vec<String>>()
            .await
            .map_err(|e| RecommendError::Parse(e.to_string()))?;
        Ok(values)
    }
}

#[async_trait]
impl Recommender for HttpClient {
    async fn recommend(&self, query: &Query) -> Result<ResultSet, RecommendError> {
        debug!("submitting recommendation query to {}", self.base_url);
        let response = self
            .client
            .post(format!("{}/recommend", self.base_url))
            .json(query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RecommendError::Status(response.status()));
        }

        let results = response
            .json::<ResultSet>()
            .await
            .map_err(|e| RecommendError::Parse(e.to_string()))?;
        debug!("service returned {} result(s)", results.len());
        Ok(results)
    }
}

#[async_trait]
impl DetailStore for HttpClient {
    async fn fetch_detail(&self, identifier: &str) -> Result<RecipeDetail, RecommendError> {
        debug!("fetching detail for '{identifier}'");
        let response = self
            .client
            .get(format!("{}/recipe/{identifier}", self.base_url))
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(RecommendError::NotFound(identifier.to_string())),
            status if !status.is_success() => Err(RecommendError::Status(status)),
            _ => response
                .json::<RecipeDetail>()
                .await
                .map_err(|e| RecommendError::Parse(e.to_string())),
        }
    }
}

#[async_trait]
impl OptionsProvider for HttpClient {
    async fn unique_ingredients(&self) -> Result<Vec<String>, RecommendError> {
        self.get_strings("unique_ingredients").await
    }

    async fn unique_regions(&self) -> Result<Vec<String>, RecommendError> {
        self.get_strings("unique_regions").await
    }

    async fn unique_countries(&self) -> Result<Vec<String>, RecommendError> {
        self.get_strings("unique_countries").await
    }
}
