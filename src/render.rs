//! Graphviz rendering of a recipe set
//!
//! Every item becomes an icon-only node and every recipe contributes an edge
//! from each input to each output. Node and edge lines are deduplicated and
//! sorted so the same recipes always render to the same text.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::icons;
use crate::universe::RecipeSet;

/// A rendered dependency graph, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGraph {
    pub nodes: BTreeSet<String>,
    pub edges: BTreeSet<String>,
}

impl DotGraph {
    pub fn new(factorio_path: &Path, recipes: &RecipeSet) -> Self {
        let nodes = recipes
            .iter()
            .flat_map(|recipe| recipe.item_ids())
            .map(|id| {
                format!(
                    "    \"{}\" [label=\"\",image=\"{}\"]",
                    id,
                    icons::image_path(factorio_path, id).display()
                )
            })
            .collect();

        let edges = recipes
            .iter()
            .flat_map(|recipe| recipe.edges())
            .map(|(input, output)| format!("    \"{}\" -> \"{}\"", input, output))
            .collect();

        Self { nodes, edges }
    }
}

impl fmt::Display for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph all {{")?;
        for line in self.nodes.iter().chain(&self.edges) {
            writeln!(f, "{}", line)?;
        }
        write!(f, "}}")
    }
}

/// Render `recipes` as Graphviz source, icons resolved under `factorio_path`
pub fn render(factorio_path: &Path, recipes: &RecipeSet) -> String {
    DotGraph::new(factorio_path, recipes).to_string()
}
