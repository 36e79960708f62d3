//! Ingredient line parsing and rendering.
//!
//! Parses flattened ingredient strings (e.g. "400g σπαγγέτι") back into
//! structured data, and renders structured ingredients as display strings.
//! Parsing is best-effort and never fails: anything unrecognized degrades
//! to a name-only ingredient.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::wire::Ingredient;

/// A number immediately followed by a unit word, e.g. "400g" or "2.5kg".
static QUANTITY_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)(\p{L}+)$").expect("Invalid quantity/unit regex")
});

/// Structured result of parsing one ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl ParsedIngredient {
    fn name_only(line: &str) -> Self {
        Self {
            name: line.to_string(),
            quantity: None,
            unit: None,
        }
    }

    /// Convert into a wire ingredient (identity left for the server).
    pub fn into_ingredient(self) -> Ingredient {
        Ingredient {
            id: None,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
        }
    }
}

/// Parse a single ingredient line, first match wins:
///
/// 1. fewer than 2 whitespace tokens: the whole line is the name
/// 2. first token is "<number><unit-word>": split it into quantity and
///    unit, remaining tokens are the name
/// 3. first token is a bare number: quantity is the number; with three or
///    more tokens the second token is consumed as the unit even when it is
///    a real word ("2 μεγάλα λεμόνια" loses "μεγάλα" to the unit slot) -
///    known quirk, kept as-is; with exactly two tokens there is no unit
///    and the second token is the name
/// 4. otherwise the whole line is the name
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let line = line.trim();
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return ParsedIngredient::name_only(line);
    }

    if let Some(caps) = QUANTITY_UNIT.captures(tokens[0]) {
        if let Ok(quantity) = caps[1].parse::<f64>() {
            return ParsedIngredient {
                name: tokens[1..].join(" "),
                quantity: Some(quantity),
                unit: Some(caps[2].to_string()),
            };
        }
    }

    if let Ok(quantity) = tokens[0].parse::<f64>() {
        if tokens.len() >= 3 {
            return ParsedIngredient {
                name: tokens[2..].join(" "),
                quantity: Some(quantity),
                unit: Some(tokens[1].to_string()),
            };
        }
        return ParsedIngredient {
            name: tokens[1].to_string(),
            quantity: Some(quantity),
            unit: None,
        };
    }

    ParsedIngredient::name_only(line)
}

/// Render a structured ingredient as its display string:
/// "<quantity><unit> <name>" when the quantity is present and non-zero and
/// the unit is present and non-empty, otherwise the name alone.
pub fn format_ingredient(ingredient: &Ingredient) -> String {
    match (ingredient.quantity, ingredient.unit.as_deref()) {
        (Some(quantity), Some(unit)) if quantity != 0.0 && !unit.is_empty() => {
            format!("{}{} {}", quantity, unit, ingredient.name)
        }
        _ => ingredient.name.clone(),
    }
}
