//! Factorio recipe dependency graphs
//!
//! Loads the recipe table from a Factorio data dump, narrows it to the
//! recipes an item depends on, and renders the result for Graphviz.

pub mod calculator;
pub mod config;
pub mod error;
pub mod extract;
pub mod icons;
pub mod models;
pub mod render;
pub mod universe;
