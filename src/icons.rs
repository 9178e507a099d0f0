//! Icon file resolution for graph nodes

use std::path::{Path, PathBuf};

const ICON_DIR: &str = "data/base/graphics/icons";

const FLUIDS: &[&str] = &[
    "crude-oil",
    "heavy-oil",
    "light-oil",
    "lubricant",
    "petroleum-gas",
    "steam",
    "sulfuric-acid",
    "water",
];

/// Items whose icon file is named after a different prototype
const RENAMED_ICONS: &[(&str, &str)] = &[
    ("discharge-defense-remote", "discharge-defense-equipment"),
    ("heat-exchanger", "heat-boiler"),
    ("locomotive", "diesel-locomotive"),
    ("low-density-structure", "rocket-structure"),
];

/// Path of the icon for item `id` under a Factorio install at `factorio_path`.
///
/// Unknown ids resolve to `<id>.png`; whether the file exists is not checked.
pub fn image_path(factorio_path: &Path, id: &str) -> PathBuf {
    let mut path = factorio_path.join(ICON_DIR);

    if FLUIDS.iter().any(|fluid| *fluid == id) {
        path.push("fluid");
    } else if id == "empty-barrel" {
        path.push("fluid");
        path.push("barreling");
    }

    let stem = RENAMED_ICONS
        .iter()
        .find(|(item, _)| *item == id)
        .map_or(id, |&(_, icon)| icon);
    path.push(format!("{}.png", stem));
    path
}
