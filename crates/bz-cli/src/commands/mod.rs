pub mod defeat;
pub mod heroes;
pub mod monsters;
pub mod play;

use std::fs;
use std::path::Path;

use bz_loot::table::{rows_from_grid_json, rows_from_records};
use bz_loot::{MonsterLootTable, build_tables};

/// Load loot tables from a JSON file, accepting both source shapes:
/// a record list (optionally wrapped under a sheet name) or a
/// cell-addressed grid object.
pub fn load_tables(path: &Path) -> Result<Vec<MonsterLootTable>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    let rows = match rows_from_records(&text) {
        Ok(rows) => rows,
        Err(_) => rows_from_grid_json(&text)
            .map_err(|e| format!("{} is not a loot table: {e}", path.display()))?,
    };

    Ok(build_tables(&rows))
}
