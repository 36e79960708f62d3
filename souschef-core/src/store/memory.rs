//! In-memory recipe store for tests and offline runs.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreError;
use crate::wire::{Category, NewRecipe, Recipe};

use super::RecipeStore;

/// Mutex-guarded recipe list with server-style id assignment. NotFound
/// semantics match [`super::HttpStore`].
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    recipes: Vec<Recipe>,
    next_recipe_id: i64,
    next_step_id: i64,
}

impl Inner {
    /// Turn a payload into a stored recipe, assigning ids to steps that
    /// lack one.
    fn materialize(
        &mut self,
        id: i64,
        date_created: Option<chrono::NaiveDate>,
        recipe: NewRecipe,
    ) -> Recipe {
        let steps = recipe
            .steps
            .into_iter()
            .map(|mut step| {
                if step.id.is_none() {
                    step.id = Some(self.next_step_id);
                    self.next_step_id += 1;
                }
                step
            })
            .collect();
        Recipe {
            id: Some(id),
            title: recipe.title,
            category: recipe.category,
            difficulty: recipe.difficulty,
            total_time_minutes: recipe.total_time_minutes,
            prep_time_minutes: recipe.prep_time_minutes,
            date_created,
            ingredients: recipe.ingredients,
            steps,
            image_urls: recipe.image_urls,
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.recipes.iter().position(|r| r.id == Some(id))
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                recipes: Vec::new(),
                next_recipe_id: 1,
                next_step_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("recipe store mutex poisoned")
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.lock().recipes.clone())
    }

    async fn get(&self, id: i64) -> Result<Recipe, StoreError> {
        let inner = self.lock();
        inner
            .position(id)
            .map(|i| inner.recipes[i].clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let mut inner = self.lock();
        let id = inner.next_recipe_id;
        inner.next_recipe_id += 1;
        let stored = inner.materialize(id, Some(Utc::now().date_naive()), recipe);
        tracing::debug!(id, title = %stored.title, "created recipe");
        inner.recipes.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let mut inner = self.lock();
        let position = inner.position(id).ok_or(StoreError::NotFound(id))?;
        // Identity and creation date survive the graph replacement
        let date_created = inner.recipes[position].date_created;
        let stored = inner.materialize(id, date_created, recipe);
        inner.recipes[position] = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let position = inner.position(id).ok_or(StoreError::NotFound(id))?;
        inner.recipes.remove(position);
        tracing::debug!(id, "deleted recipe");
        Ok(())
    }

    async fn search(&self, title: &str) -> Result<Vec<Recipe>, StoreError> {
        let needle = title.to_lowercase();
        Ok(self
            .lock()
            .recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn by_category(&self, category: Category) -> Result<Vec<Recipe>, StoreError> {
        Ok(self
            .lock()
            .recipes
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }
}
