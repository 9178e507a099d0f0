//! The recipe universe: every recipe under consideration for one run

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use tracing::{debug, info};

use crate::models::{Multiple, Recipe};

/// Items removed from the game whose recipes linger in the data dump
pub const OBSOLETE_ITEMS: &[&str] = &[
    "electric-energy-interface",
    "express-loader",
    "fast-loader",
    "loader",
    "player-port",
    "railgun",
    "railgun-dart",
    "small-plane",
];

/// A set of recipes, deduplicated by structural equality.
///
/// Iteration follows insertion order so runs are reproducible, but equality
/// ignores order.
#[derive(Debug, Clone, Default)]
pub struct RecipeSet {
    recipes: Vec<Recipe>,
}

impl RecipeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe, returning false if an identical one is already present
    pub fn insert(&mut self, recipe: Recipe) -> bool {
        if self.recipes.contains(&recipe) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    pub fn contains(&self, recipe: &Recipe) -> bool {
        self.recipes.contains(recipe)
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes that have `id` among their outputs
    pub fn producers(&self, id: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.has_output(id)).collect()
    }

    /// Recipes that have `id` among their inputs
    pub fn consumers(&self, id: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.has_input(id)).collect()
    }

    /// Distinct ids of every item some recipe outputs, sorted
    pub fn producible_items(&self) -> Vec<&str> {
        let ids: BTreeSet<&str> = self
            .recipes
            .iter()
            .flat_map(|r| r.outputs.iter().map(|m| m.item.id.as_str()))
            .collect();
        ids.into_iter().collect()
    }
}

impl PartialEq for RecipeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.recipes.iter().all(|r| other.contains(r))
    }
}

impl Eq for RecipeSet {}

impl FromIterator<Recipe> for RecipeSet {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut set = Self::new();
        let mut seen = HashSet::new();
        for recipe in iter {
            if seen.insert(recipe.clone()) {
                set.recipes.push(recipe);
            }
        }
        set
    }
}

impl IntoIterator for RecipeSet {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeSet {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Counts gathered while assembling the universe
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    pub extracted: usize,
    pub obsolete: usize,
    pub supplemented: usize,
    pub total: usize,
}

impl fmt::Display for LoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loaded {} recipes ({} extracted, {} obsolete dropped, {} supplemented)",
            self.total, self.extracted, self.obsolete, self.supplemented
        )
    }
}

/// True if the recipe mentions an item that no longer exists in the game
pub fn is_obsolete(recipe: &Recipe) -> bool {
    recipe.touches_any(OBSOLETE_ITEMS)
}

/// Build the universe from extracted recipes plus the hand-written supplement.
///
/// Obsolete filtering applies to extracted recipes only; the supplement is
/// merged unconditionally.
pub fn build_universe(extracted: Vec<Recipe>) -> (RecipeSet, LoadStats) {
    let mut stats = LoadStats {
        extracted: extracted.len(),
        ..LoadStats::default()
    };

    let mut universe = RecipeSet::new();
    for recipe in extracted {
        if is_obsolete(&recipe) {
            debug!("Dropping obsolete recipe {}", recipe);
            stats.obsolete += 1;
            continue;
        }
        universe.insert(recipe);
    }

    for recipe in missing_recipes() {
        if universe.insert(recipe) {
            stats.supplemented += 1;
        }
    }

    stats.total = universe.len();
    info!("{}", stats);
    (universe, stats)
}

/// Early-game recipes the data dump omits
pub fn missing_recipes() -> Vec<Recipe> {
    let recipe = |inputs: &[(&str, f64)], outputs: &[(&str, f64)]| {
        let side = |multiples: &[(&str, f64)]| {
            multiples
                .iter()
                .map(|&(id, quantity)| Multiple::new(id, quantity))
                .collect::<Vec<_>>()
        };
        Recipe::new(side(inputs), side(outputs))
    };

    vec![
        recipe(&[("iron-ore", 1.0)], &[("iron-plate", 1.0)]),
        recipe(&[("copper-ore", 1.0)], &[("copper-plate", 1.0)]),
        recipe(&[("iron-plate", 2.0)], &[("iron-gear-wheel", 1.0)]),
        recipe(&[("copper-plate", 1.0)], &[("copper-cable", 2.0)]),
        recipe(&[("iron-plate", 1.0)], &[("pipe", 1.0)]),
        recipe(
            &[("iron-gear-wheel", 1.0), ("iron-plate", 1.0)],
            &[("transport-belt", 2.0)],
        ),
        recipe(
            &[("iron-plate", 1.0), ("copper-cable", 3.0)],
            &[("electronic-circuit", 1.0)],
        ),
        recipe(
            &[
                ("iron-plate", 10.0),
                ("iron-gear-wheel", 5.0),
                ("electronic-circuit", 3.0),
            ],
            &[("electric-mining-drill", 1.0)],
        ),
        recipe(
            &[
                ("electronic-circuit", 3.0),
                ("iron-gear-wheel", 5.0),
                ("iron-plate", 9.0),
            ],
            &[("assembling-machine-1", 1.0)],
        ),
        recipe(&[("stone", 2.0)], &[("stone-brick", 1.0)]),
        recipe(
            &[
                ("iron-plate", 1.0),
                ("iron-gear-wheel", 1.0),
                ("electronic-circuit", 1.0),
            ],
            &[("inserter", 1.0)],
        ),
        recipe(
            &[
                ("iron-plate", 10.0),
                ("iron-gear-wheel", 5.0),
                ("electronic-circuit", 5.0),
            ],
            &[("radar", 1.0)],
        ),
    ]
}
