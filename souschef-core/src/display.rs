//! Simplified display schema.
//!
//! This is the shape the list/detail/execute views consume: string ids,
//! flattened ingredient strings, lowercase difficulty. Conversion to and
//! from the wire schema lives in [`crate::normalize`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Difficulty as the views spell it (easy, medium, hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = NormalizeError;

    /// Case-insensitive: "easy", "EASY", and "Easy" are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(NormalizeError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instruction as displayed. `order` is the 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
}

/// A recipe as displayed. Ingredients are flattened strings like
/// "400g σπαγγέτι"; `category` carries the wire label through untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub total_time_minutes: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Append a step at the end of the sequence, taking the next
    /// contiguous 1-based position.
    pub fn push_step(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u32,
    ) {
        let index = self.steps.len();
        self.steps.push(Step {
            id: format!("step-{}-{}", self.id, index),
            order: index as u32 + 1,
            title: title.into(),
            description: description.into(),
            duration_minutes,
        });
    }

    /// Remove the step at `index` (0-based) and renumber the remaining
    /// steps to contiguous 1-based positions, preserving relative order.
    /// Returns false if `index` is out of range.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        self.steps.remove(index);
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.order = i as u32 + 1;
        }
        true
    }
}
