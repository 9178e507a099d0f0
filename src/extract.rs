//! Recipe extraction from the Factorio data dump
//!
//! The dump is a JSON document whose `recipe` table maps recipe names to
//! prototype records. Records come in a few shapes:
//!
//! - ingredients are either `["iron-plate", 2]` pairs or
//!   `{"type": "fluid", "name": "water", "amount": 10}` records
//! - outputs are a single `result` (a record, or a bare name meaning one of
//!   it) or a `results` list of records
//! - expensive-mode recipes nest the normal variant under `normal`

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{ExtractError, Result};
use crate::models::{Multiple, Recipe};

#[derive(Debug, Deserialize)]
struct RawDatabase {
    recipe: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RawRecipe {
    ingredients: Vec<RawIngredient>,
    result: Option<RawResult>,
    results: Option<Vec<RawResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawIngredient {
    Pair(String, f64),
    Record { name: String, amount: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawResult {
    Record { name: String, amount: f64 },
    Name(String),
}

impl From<RawIngredient> for Multiple {
    fn from(raw: RawIngredient) -> Self {
        match raw {
            RawIngredient::Pair(name, amount) | RawIngredient::Record { name, amount } => {
                Multiple::new(name, amount)
            }
        }
    }
}

impl From<RawResult> for Multiple {
    fn from(raw: RawResult) -> Self {
        match raw {
            RawResult::Record { name, amount } => Multiple::new(name, amount),
            RawResult::Name(name) => Multiple::new(name, 1.0),
        }
    }
}

/// Read and parse every recipe in the data dump at `path`
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let recipes = parse_recipes(&content)?;
    info!("Extracted {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Parse every recipe in a data dump document
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>> {
    let database: RawDatabase = serde_json::from_str(content)?;
    let table = database.recipe.ok_or(ExtractError::MissingRecipeTable)?;

    table
        .into_iter()
        .map(|(id, record)| parse_recipe(&id, record))
        .collect()
}

/// Parse one recipe record, unwrapping the `normal` difficulty variant first
fn parse_recipe(id: &str, mut record: Value) -> Result<Recipe> {
    if let Some(normal) = record.get_mut("normal") {
        record = normal.take();
    }

    let raw: RawRecipe = serde_json::from_value(record).map_err(|source| ExtractError::Recipe {
        id: id.to_string(),
        source,
    })?;

    let outputs: Vec<Multiple> = match (raw.result, raw.results) {
        (Some(result), _) => vec![result.into()],
        (None, Some(results)) => results.into_iter().map(Multiple::from).collect(),
        (None, None) => {
            return Err(ExtractError::MissingResult { id: id.to_string() });
        }
    };
    let inputs: Vec<Multiple> = raw.ingredients.into_iter().map(Multiple::from).collect();

    let recipe = Recipe::new(inputs, outputs);
    debug!("Parsed {}: {}", id, recipe);
    Ok(recipe)
}
