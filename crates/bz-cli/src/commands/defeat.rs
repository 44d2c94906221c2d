use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use bz_loot::{RewardParser, apply_effects, resolve_defeat};
use bz_store::{FileStore, load_roster, save_roster};

pub fn run(
    monster: &str,
    hero_name: &str,
    loot: &Path,
    store_path: &Path,
    seed: Option<u64>,
) -> Result<(), String> {
    let tables = super::load_tables(loot)?;
    let lower = monster.to_lowercase();
    let table = tables
        .iter()
        .find(|t| t.name.to_lowercase() == lower)
        .ok_or_else(|| format!("unknown monster: \"{monster}\""))?;

    let mut store = FileStore::new(store_path);
    let mut roster = load_roster(&store).map_err(|e| e.to_string())?;
    let hero = roster
        .find_by_name(hero_name)
        .ok_or_else(|| format!("unknown hero: \"{hero_name}\""))?
        .clone();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let parser = RewardParser::new();
    let (record, effects) = resolve_defeat(&mut rng, table, hero.id, &parser);
    let updated = apply_effects(&hero, &effects);

    roster.replace(updated.clone()).map_err(|e| e.to_string())?;
    save_roster(&mut store, &roster).map_err(|e| e.to_string())?;

    println!("  {} defeated by {}!", table.name.bold(), updated.name);
    if !record.w6_rolls.is_empty() {
        println!(
            "  W6 {:?} = {} → {}",
            record.w6_rolls,
            record.w6_sum,
            record.w6_reward.yellow()
        );
    }
    if !record.w20_rolls.is_empty() {
        println!(
            "  W20 {:?} = {} → {}",
            record.w20_rolls,
            record.w20_sum,
            record.w20_reward.yellow()
        );
    }
    println!("  Garantiert: {}", table.guaranteed.yellow());
    println!(
        "  {} now has EXP {}, Gold {}, Ruhm {}",
        updated.name, updated.exp, updated.gold, updated.glory
    );
    if !updated.inventory.is_empty() {
        println!("  Inventar: {}", updated.inventory.join(", "));
    }

    Ok(())
}
