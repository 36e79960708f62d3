//! HTTP-backed recipe store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::StoreError;
use crate::wire::{Category, NewRecipe, Recipe};

use super::RecipeStore;

/// Recipe store speaking the backend's REST contract under a base URL
/// like "http://localhost:8080/api".
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    /// Create a store for the given API base URL (trailing slashes are
    /// tolerated).
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map the response status before decoding: 404 on an id-addressed
    /// request is NotFound, any other non-success is an API error with the
    /// body attached.
    async fn check(
        response: reqwest::Response,
        id: Option<i64>,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(StoreError::NotFound(id));
            }
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl RecipeStore for HttpStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let url = self.url("/recipes");
        tracing::debug!(%url, "listing recipes");
        let response = self.client.get(&url).send().await?;
        Ok(Self::check(response, None).await?.json().await?)
    }

    async fn get(&self, id: i64) -> Result<Recipe, StoreError> {
        let url = self.url(&format!("/recipes/{}", id));
        tracing::debug!(%url, "fetching recipe");
        let response = self.client.get(&url).send().await?;
        Ok(Self::check(response, Some(id)).await?.json().await?)
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let url = self.url("/recipes");
        tracing::debug!(%url, title = %recipe.title, "creating recipe");
        let response = self.client.post(&url).json(&recipe).send().await?;
        Ok(Self::check(response, None).await?.json().await?)
    }

    async fn update(&self, id: i64, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let url = self.url(&format!("/recipes/{}", id));
        tracing::debug!(%url, "updating recipe");
        let response = self.client.put(&url).json(&recipe).send().await?;
        Ok(Self::check(response, Some(id)).await?.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let url = self.url(&format!("/recipes/{}", id));
        tracing::debug!(%url, "deleting recipe");
        let response = self.client.delete(&url).send().await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }

    async fn search(&self, title: &str) -> Result<Vec<Recipe>, StoreError> {
        let url = self.url("/recipes/search");
        tracing::debug!(%url, title, "searching recipes");
        let response = self
            .client
            .get(&url)
            .query(&[("title", title)])
            .send()
            .await?;
        Ok(Self::check(response, None).await?.json().await?)
    }

    async fn by_category(&self, category: Category) -> Result<Vec<Recipe>, StoreError> {
        let url = self.url(&format!("/recipes/category/{}", category.as_str()));
        tracing::debug!(%url, "listing recipes by category");
        let response = self.client.get(&url).send().await?;
        Ok(Self::check(response, None).await?.json().await?)
    }
}
