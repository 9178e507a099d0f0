//! Recipe dependency closure
//!
//! Starting from one item, repeatedly claim every still-unclaimed recipe
//! that produces (or consumes) an item on the worklist, then queue that
//! recipe's inputs (or outputs). A claimed recipe is removed from the pool
//! and never matched again, which is what makes cyclic production chains
//! terminate.
//!
//! This is the iterative form of the recursive definition
//!
//! ```text
//! filter_target(R, t) = direct ∪ ⋃ { filter_target(R − direct, i) : i input of d ∈ direct }
//!   where direct = { r ∈ R : r produces t }
//! ```
//!
//! A recipe missing from a branch's shrunken pool was claimed by an
//! ancestor of that branch, so both forms return the same set.

use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::debug;

use crate::models::Recipe;
use crate::universe::RecipeSet;

/// Which way to walk the recipe graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From an item back to the recipes that produce it and their inputs
    Upstream,
    /// From an item forward to the recipes that consume it and their outputs
    Downstream,
}

impl Direction {
    fn matches(self, recipe: &Recipe, id: &str) -> bool {
        match self {
            Direction::Upstream => recipe.has_output(id),
            Direction::Downstream => recipe.has_input(id),
        }
    }

    fn next_items(self, recipe: &Recipe) -> impl Iterator<Item = &str> {
        let side = match self {
            Direction::Upstream => &recipe.inputs,
            Direction::Downstream => &recipe.outputs,
        };
        side.iter().map(|multiple| multiple.item.id.as_str())
    }
}

/// Every recipe needed, transitively, to make `id`
pub fn filter_target(universe: &RecipeSet, id: &str) -> RecipeSet {
    closure(universe, id, Direction::Upstream)
}

/// Every recipe that, transitively, uses `id`
pub fn filter_sources(universe: &RecipeSet, id: &str) -> RecipeSet {
    closure(universe, id, Direction::Downstream)
}

/// Walk the universe from `id` in `direction`, returning the claimed recipes
/// in universe order. An item no recipe matches yields an empty set.
pub fn closure(universe: &RecipeSet, id: &str, direction: Direction) -> RecipeSet {
    let mut remaining: BTreeSet<usize> = (0..universe.len()).collect();
    let mut claimed: BTreeSet<usize> = BTreeSet::new();
    let mut seen: HashSet<&str> = HashSet::from([id]);
    let mut worklist: VecDeque<&str> = VecDeque::from([id]);

    while let Some(item) = worklist.pop_front() {
        let direct: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&index| {
                universe
                    .get(index)
                    .is_some_and(|recipe| direction.matches(recipe, item))
            })
            .collect();

        if direct.is_empty() {
            continue;
        }
        debug!("{} recipes match {} ({:?})", direct.len(), item, direction);

        for index in direct {
            remaining.remove(&index);
            claimed.insert(index);

            let Some(recipe) = universe.get(index) else {
                continue;
            };
            for next in direction.next_items(recipe) {
                if seen.insert(next) {
                    worklist.push_back(next);
                }
            }
        }
    }

    claimed
        .into_iter()
        .filter_map(|index| universe.get(index).cloned())
        .collect()
}
