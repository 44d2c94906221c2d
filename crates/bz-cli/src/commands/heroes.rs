use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use bz_store::{FileStore, load_roster};

pub fn run(store: &Path) -> Result<(), String> {
    let store = FileStore::new(store);
    let roster = load_roster(&store).map_err(|e| e.to_string())?;

    if roster.is_empty() {
        println!("  No heroes on the roster.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name", "ATK", "DEF", "STR", "INT", "MANA", "EXP", "Gold", "Ruhm", "Inventar",
    ]);

    for hero in roster.heroes() {
        let inventory = if hero.inventory.is_empty() {
            "—".to_string()
        } else {
            hero.inventory.join(", ")
        };
        table.add_row(vec![
            hero.name.clone(),
            hero.attack.to_string(),
            hero.defense.to_string(),
            hero.strength.to_string(),
            hero.intelligence.to_string(),
            hero.mana.to_string(),
            hero.exp.to_string(),
            hero.gold.to_string(),
            hero.glory.to_string(),
            inventory,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} heroes", roster.len());

    Ok(())
}
