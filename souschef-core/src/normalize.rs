//! Bidirectional mapping between the wire schema and the display schema.
//!
//! The two transforms are not exact inverses. A wire→display→wire round
//! trip preserves title, difficulty, total time, and step text and
//! durations, but ingredient quantity/unit/name splitting may shift when
//! the display string does not follow the unambiguous
//! "<quantity><unit> <name>" form (see [`crate::ingredient_parser`]).

use crate::display;
use crate::error::NormalizeError;
use crate::ingredient_parser::{format_ingredient, parse_ingredient};
use crate::wire;

fn difficulty_to_display(difficulty: wire::Difficulty) -> display::Difficulty {
    match difficulty {
        wire::Difficulty::Easy => display::Difficulty::Easy,
        wire::Difficulty::Medium => display::Difficulty::Medium,
        wire::Difficulty::Hard => display::Difficulty::Hard,
    }
}

fn difficulty_to_wire(difficulty: display::Difficulty) -> wire::Difficulty {
    match difficulty {
        display::Difficulty::Easy => wire::Difficulty::Easy,
        display::Difficulty::Medium => wire::Difficulty::Medium,
        display::Difficulty::Hard => wire::Difficulty::Hard,
    }
}

/// Convert a backend recipe into the display shape.
///
/// An absent recipe id becomes the empty string. Steps without an id get
/// a synthesized "step-<recipeId>-<index>" id (0-based index).
pub fn to_display(recipe: &wire::Recipe) -> display::Recipe {
    let id = recipe.id.map(|id| id.to_string()).unwrap_or_default();

    let ingredients = recipe.ingredients.iter().map(format_ingredient).collect();

    let steps = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| display::Step {
            id: step
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("step-{}-{}", id, index)),
            order: step.step_order,
            title: step.title.clone(),
            description: step.description.clone(),
            duration_minutes: step.duration_minutes,
        })
        .collect();

    display::Recipe {
        id,
        name: recipe.title.clone(),
        category: recipe.category.as_str().to_string(),
        difficulty: difficulty_to_display(recipe.difficulty),
        total_time_minutes: recipe.total_time_minutes,
        ingredients,
        steps,
    }
}

/// Convert a display recipe into a create/update payload.
///
/// Step and recipe identity is dropped (the server assigns it), ingredient
/// strings are re-parsed into structured form, and an unknown category
/// label fails fast rather than passing through to the backend.
pub fn to_wire(recipe: &display::Recipe) -> Result<wire::NewRecipe, NormalizeError> {
    let category: wire::Category = recipe.category.parse()?;

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|line| parse_ingredient(line).into_ingredient())
        .collect();

    let steps = recipe
        .steps
        .iter()
        .map(|step| wire::RecipeStep {
            id: None,
            step_order: step.order,
            title: step.title.clone(),
            description: step.description.clone(),
            duration_minutes: step.duration_minutes,
            image_url: None,
        })
        .collect();

    Ok(wire::NewRecipe {
        title: recipe.name.clone(),
        category,
        difficulty: difficulty_to_wire(recipe.difficulty),
        total_time_minutes: recipe.total_time_minutes,
        prep_time_minutes: None,
        ingredients,
        steps,
        image_urls: None,
    })
}

/// Parse a display-schema id back into the backend's numeric id.
pub fn parse_backend_id(id: &str) -> Result<i64, NormalizeError> {
    id.parse()
        .map_err(|_| NormalizeError::InvalidId(id.to_string()))
}
