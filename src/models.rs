//! Data models for Factorio items and recipes

use std::fmt;
use std::hash::{Hash, Hasher};

/// A craftable or raw resource, identified by its prototype id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    pub id: String,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Human readable name, e.g. "Iron gear wheel" for `iron-gear-wheel`
    pub fn name(&self) -> String {
        capitalize(&self.id.split('-').collect::<Vec<_>>().join(" "))
    }

    /// Abbreviation built from word initials, e.g. "Igw" for `iron-gear-wheel`
    pub fn short_name(&self) -> String {
        let initials: String = self
            .id
            .split('-')
            .filter_map(|word| word.chars().next())
            .collect();
        capitalize(&initials)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Amount of an item consumed or produced by one recipe run.
///
/// Source data occasionally uses fractional amounts, so this wraps an `f64`
/// and compares by exact bit pattern to stay usable in hashed sets.
#[derive(Debug, Clone, Copy)]
pub struct Quantity(pub f64);

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Quantity {}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// An item together with how many of it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multiple {
    pub item: Item,
    pub quantity: Quantity,
}

impl Multiple {
    pub fn new(id: impl Into<String>, quantity: f64) -> Self {
        Self {
            item: Item::new(id),
            quantity: Quantity(quantity),
        }
    }
}

impl fmt::Display for Multiple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.item.id)
    }
}

/// A transformation of input items into output items.
///
/// Recipes carry no identity of their own: two recipes with the same inputs
/// and outputs in the same order are the same recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipe {
    pub inputs: Vec<Multiple>,
    pub outputs: Vec<Multiple>,
}

impl Recipe {
    pub fn new(inputs: Vec<Multiple>, outputs: Vec<Multiple>) -> Self {
        Self { inputs, outputs }
    }

    pub fn has_input(&self, id: &str) -> bool {
        self.inputs.iter().any(|input| input.item.id == id)
    }

    pub fn has_output(&self, id: &str) -> bool {
        self.outputs.iter().any(|output| output.item.id == id)
    }

    /// Ids of every item on either side, inputs first
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.inputs
            .iter()
            .chain(&self.outputs)
            .map(|multiple| multiple.item.id.as_str())
    }

    /// Every (input id, output id) pair: each input contributes to each output
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inputs.iter().flat_map(move |input| {
            self.outputs
                .iter()
                .map(move |output| (input.item.id.as_str(), output.item.id.as_str()))
        })
    }

    /// True if any item on either side is one of `ids`
    pub fn touches_any(&self, ids: &[&str]) -> bool {
        self.item_ids().any(|id| ids.iter().any(|candidate| *candidate == id))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |multiples: &[Multiple]| {
            multiples
                .iter()
                .map(Multiple::to_string)
                .collect::<Vec<_>>()
                .join(" + ")
        };
        write!(f, "{} -> {}", side(&self.inputs), side(&self.outputs))
    }
}
