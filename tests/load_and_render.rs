use std::fs;
use std::path::Path;

use recipe_graph::calculator::filter_target;
use recipe_graph::extract::load_recipes;
use recipe_graph::universe::{build_universe, OBSOLETE_ITEMS};
use recipe_graph::render::render;
use tempfile::TempDir;

const DATA: &str = r#"{
    "item": {},
    "recipe": {
        "wooden-chest": {
            "ingredients": [["wood", 2]],
            "result": "wooden-chest"
        },
        "iron-chest": {
            "ingredients": [{"type": "item", "name": "iron-plate", "amount": 8}],
            "result": {"name": "iron-chest", "amount": 1}
        },
        "loader": {
            "ingredients": [["inserter", 5], ["electronic-circuit", 5], ["iron-gear-wheel", 5], ["iron-plate", 5], ["transport-belt", 5]],
            "result": "loader"
        },
        "fast-loader": {
            "ingredients": [["fast-transport-belt", 5], ["loader", 1]],
            "result": "fast-loader"
        },
        "oil-refinery": {
            "ingredients": [["steel-plate", 15], ["iron-gear-wheel", 10], ["stone-brick", 10], ["electronic-circuit", 10], ["pipe", 10]],
            "result": "oil-refinery"
        },
        "basic-oil-processing": {
            "ingredients": [{"type": "fluid", "name": "crude-oil", "amount": 100}],
            "results": [{"type": "fluid", "name": "petroleum-gas", "amount": 40}]
        },
        "steel-plate": {
            "normal": {
                "ingredients": [["iron-plate", 5]],
                "result": "steel-plate"
            },
            "expensive": {
                "ingredients": [["iron-plate", 10]],
                "result": "steel-plate"
            }
        }
    }
}"#;

fn write_data(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("data.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_obsolete_recipes_never_loaded() {
    let dir = TempDir::new().unwrap();
    let extracted = load_recipes(&write_data(&dir, DATA)).unwrap();
    assert_eq!(extracted.len(), 7);

    let (universe, stats) = build_universe(extracted);
    assert_eq!(stats.obsolete, 2);
    for recipe in &universe {
        for id in OBSOLETE_ITEMS {
            assert!(!recipe.has_input(id) && !recipe.has_output(id), "{} survived", recipe);
        }
    }
}

#[test]
fn test_iron_chest_graph() {
    let dir = TempDir::new().unwrap();
    let (universe, _) = build_universe(load_recipes(&write_data(&dir, DATA)).unwrap());

    let chain = filter_target(&universe, "iron-chest");
    assert_eq!(chain.len(), 2);

    let dot = render(Path::new("/opt/factorio"), &chain);
    let lines: Vec<&str> = dot.lines().collect();
    assert_eq!(
        lines,
        vec![
            "digraph all {",
            "    \"iron-chest\" [label=\"\",image=\"/opt/factorio/data/base/graphics/icons/iron-chest.png\"]",
            "    \"iron-ore\" [label=\"\",image=\"/opt/factorio/data/base/graphics/icons/iron-ore.png\"]",
            "    \"iron-plate\" [label=\"\",image=\"/opt/factorio/data/base/graphics/icons/iron-plate.png\"]",
            "    \"iron-ore\" -> \"iron-plate\"",
            "    \"iron-plate\" -> \"iron-chest\"",
            "}",
        ]
    );
}

#[test]
fn test_oil_refinery_pulls_in_supplement() {
    let dir = TempDir::new().unwrap();
    let (universe, _) = build_universe(load_recipes(&write_data(&dir, DATA)).unwrap());

    let chain = filter_target(&universe, "oil-refinery");
    // refinery, steel (normal variant), iron plate, gear, brick, circuit, cable, copper plate, pipe
    assert_eq!(chain.len(), 9);
    assert!(chain.iter().any(|r| r.has_output("steel-plate") && r.inputs[0].quantity.0 == 5.0));
    assert!(chain.iter().all(|r| !r.has_output("wooden-chest")));

    let dot = render(Path::new("/opt/factorio"), &chain);
    assert!(dot.contains("    \"stone\" -> \"stone-brick\"\n"));
}

#[test]
fn test_fluid_icons() {
    let dir = TempDir::new().unwrap();
    let (universe, _) = build_universe(load_recipes(&write_data(&dir, DATA)).unwrap());

    let dot = render(Path::new("/f"), &filter_target(&universe, "petroleum-gas"));
    assert!(dot.contains("\"crude-oil\" [label=\"\",image=\"/f/data/base/graphics/icons/fluid/crude-oil.png\"]"));
}

#[test]
fn test_unknown_target_renders_empty_graph() {
    let dir = TempDir::new().unwrap();
    let (universe, _) = build_universe(load_recipes(&write_data(&dir, DATA)).unwrap());

    let chain = filter_target(&universe, "spidertron");
    assert!(chain.is_empty());
    assert_eq!(render(Path::new("/f"), &chain), "digraph all {\n}");
}

#[test]
fn test_malformed_database_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, r#"{"recipe": {"broken": {"ingredients": [["a", 1]]}}}"#);
    assert!(load_recipes(&path).is_err());
}
