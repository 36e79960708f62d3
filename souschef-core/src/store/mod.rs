//! Recipe store collaborators.
//!
//! The core operates on already-fetched, in-memory recipe data; everything
//! network-shaped sits behind [`RecipeStore`] so the normalizer and the
//! execution session are testable without a backend. [`HttpStore`] speaks
//! the backend's REST contract; [`MemoryStore`] backs tests and offline
//! runs.

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::wire::{Category, NewRecipe, Recipe};

/// CRUD plus the backend's filter endpoints, wire-shaped throughout.
///
/// Operations against an unknown id surface as [`StoreError::NotFound`],
/// distinguishable from transport failures. The store performs no retries;
/// transport errors are reported upward unchanged.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn get(&self, id: i64) -> Result<Recipe, StoreError>;

    /// Create the whole recipe graph in one call. The server assigns the
    /// recipe id, nested step ids, and the creation date.
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError>;

    /// Replace the whole recipe graph under an existing id.
    async fn update(&self, id: i64, recipe: NewRecipe) -> Result<Recipe, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Case-insensitive title substring search.
    async fn search(&self, title: &str) -> Result<Vec<Recipe>, StoreError>;

    async fn by_category(&self, category: Category) -> Result<Vec<Recipe>, StoreError>;
}
