use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(loot: &Path) -> Result<(), String> {
    let tables = super::load_tables(loot)?;

    if tables.is_empty() {
        println!("  No monsters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Monster", "W6", "W20", "Garantierte Belohnung", "Belohnungen"]);

    for monster in &tables {
        table.add_row(vec![
            monster.name.clone(),
            monster.w6_count.to_string(),
            monster.w20_count.to_string(),
            monster.guaranteed.clone(),
            monster.rewards_by_sum.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} monsters", tables.len());

    Ok(())
}
