//! Backend wire schema.
//!
//! Field names and enum labels are fixed by the backend REST contract:
//! camelCase fields, uppercase enum values. Serde attributes pin the
//! spellings so an unknown difficulty or category is rejected at the
//! deserialization boundary rather than surfacing as a silent default.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Recipe difficulty as the backend spells it (EASY, MEDIUM, HARD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of recipe categories (PASTA, MEAT, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Pasta,
    Meat,
    Vegetarian,
    Dessert,
    Soup,
    Salad,
}

impl Category {
    /// All categories, in the backend's declaration order.
    pub const ALL: &'static [Category] = &[
        Category::Pasta,
        Category::Meat,
        Category::Vegetarian,
        Category::Dessert,
        Category::Soup,
        Category::Salad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pasta => "PASTA",
            Category::Meat => "MEAT",
            Category::Vegetarian => "VEGETARIAN",
            Category::Dessert => "DESSERT",
            Category::Soup => "SOUP",
            Category::Salad => "SALAD",
        }
    }
}

impl FromStr for Category {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASTA" => Ok(Category::Pasta),
            "MEAT" => Ok(Category::Meat),
            "VEGETARIAN" => Ok(Category::Vegetarian),
            "DESSERT" => Ok(Category::Dessert),
            "SOUP" => Ok(Category::Soup),
            "SALAD" => Ok(Category::Salad),
            _ => Err(NormalizeError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured ingredient. `quantity` and `unit` are both optional;
/// an ingredient with neither is just a free-text name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One ordered instruction. `step_order` is 1-based and contiguous
/// within its recipe; clients renumber after deleting a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub step_order: u32,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A full recipe as the backend returns it.
///
/// `total_time_minutes` is the declared total; it need not equal the sum
/// of step durations and callers must not assume it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub total_time_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDate>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<RecipeStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

/// Create/update payload: a recipe without the server-assigned identity.
/// The server assigns the recipe id, nested step ids, and `dateCreated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub total_time_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<RecipeStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}
