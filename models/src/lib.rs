//! Types shared between the browser app and the recipe service.

pub mod draft;
pub mod view;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a recipe generation request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RecipeRequest {
    pub recipe: String,
}

impl RecipeRequest {
    pub fn new(recipe: impl Into<String>) -> Self {
        Self {
            recipe: recipe.into(),
        }
    }
}

/// A head count, some other number, or whatever free text the generator came up with.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServingSize {
    Count(u32),
    /// Fractional or float formatted numbers such as `2.5` or `4.0`.
    Amount(f64),
    Text(String),
}

impl Default for ServingSize {
    fn default() -> Self {
        Self::Count(0)
    }
}

impl fmt::Display for ServingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A generated recipe.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub serving_size: ServingSize,
    /// Preparation time in minutes.
    pub prep_time: f64,
    /// Cooking time in minutes.
    pub cook_time: f64,
    /// Newline separated ingredient list.
    pub ingredients: String,
    /// Newline separated steps.
    pub instructions: String,
    /// Source links, missing and `null` both mean none.
    #[serde(default)]
    pub url: Option<Vec<String>>,
}

impl Recipe {
    /// Source links in the order the service returned them.
    pub fn sources(&self) -> &[String] {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.ingredients.lines()
    }

    pub fn instruction_lines(&self) -> impl Iterator<Item = &str> {
        self.instructions.lines()
    }
}

/// Response envelope of `POST /`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RecipeResponse {
    pub result: Recipe,
}

/// Response of `GET /`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Greeting {
    pub message: String,
}

/// Format a duration given in minutes the way the recipe card shows it.
///
/// Whole numbers print without a decimal point, `10.0` becomes `10 min`.
pub fn minutes(value: f64) -> String {
    format!("{value} min")
}
