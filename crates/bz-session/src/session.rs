//! Camp session management.
//!
//! `CampSession` owns the roster loaded from the store and mutates it
//! through line commands: hero management, inventory edits, and monster
//! defeats. Every mutating command saves a full roster snapshot before it
//! returns (save-on-every-mutation, last-write-wins); there is no second
//! writer, so there is no locking.

use rand::SeedableRng;
use rand::rngs::StdRng;

use bz_core::{CoreError, Hero, HeroId, Roster, collate};
use bz_loot::{
    Effect, LootError, LootHistory, MonsterLootTable, RewardParser, apply_effects, resolve_defeat,
};
use bz_store::{RosterStore, load_roster, save_roster};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// An interactive camp session over a roster and a set of loot tables.
pub struct CampSession {
    roster: Roster,
    tables: Vec<MonsterLootTable>,
    history: LootHistory,
    parser: RewardParser,
    selected: Option<HeroId>,
    store: Box<dyn RosterStore>,
    rng: StdRng,
}

impl CampSession {
    /// Start a session: load the roster from the store (an absent blob is
    /// an empty roster) and seed the RNG per the config.
    pub fn new(
        tables: Vec<MonsterLootTable>,
        store: Box<dyn RosterStore>,
        config: SessionConfig,
    ) -> SessionResult<Self> {
        let roster = load_roster(store.as_ref())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            roster,
            tables,
            history: LootHistory::new(),
            parser: RewardParser::new(),
            selected: None,
            store,
            rng,
        })
    }

    /// The roster this session owns.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The loaded loot tables.
    pub fn tables(&self) -> &[MonsterLootTable] {
        &self.tables
    }

    /// The session's loot history.
    pub fn history(&self) -> &LootHistory {
        &self.history
    }

    /// The currently selected hero, if any.
    pub fn selected_hero(&self) -> Option<&Hero> {
        self.selected.and_then(|id| self.roster.get(id))
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "hero" => self.do_hero(rest),
            "heroes" => self.do_hero_list(),
            "select" => self.do_select(rest),
            "inventory" => self.do_inventory(rest),
            "monsters" => self.do_monster_list(),
            "defeat" => self.do_defeat(rest),
            "history" => self.do_history(),
            "status" => self.do_status(),
            "help" => Ok(self.help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn do_hero(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "add" if !arg.is_empty() => {
                self.roster.add(Hero::new(arg))?;
                self.persist()?;
                Ok(format!("Hero added: {arg}"))
            }
            "remove" if !arg.is_empty() => {
                let removed = self.roster.remove_by_name(arg)?;
                if self.selected == Some(removed.id) {
                    self.selected = None;
                }
                self.persist()?;
                Ok(format!("Hero removed: {}", removed.name))
            }
            "edit" if !arg.is_empty() => self.do_hero_edit(arg),
            _ => Err(SessionError::InvalidCommand(
                "usage: hero add|remove|edit <name> [<field> <value>]".to_string(),
            )),
        }
    }

    /// `hero edit <name> <field> <value>` — the name may contain spaces,
    /// so the field and value are taken from the right.
    fn do_hero_edit(&mut self, arg: &str) -> SessionResult<String> {
        let mut parts = arg.rsplitn(3, ' ');
        let value = parts.next().unwrap_or("");
        let field = parts.next().unwrap_or("").to_lowercase();
        let name = parts.next().unwrap_or("").trim();

        if name.is_empty() || field.is_empty() {
            return Err(SessionError::InvalidCommand(
                "usage: hero edit <name> <field> <value>".to_string(),
            ));
        }
        let value: u32 = value.parse().map_err(|_| {
            SessionError::InvalidCommand(format!("\"{value}\" is not a non-negative number"))
        })?;

        let id = self
            .roster
            .find_by_name(name)
            .map(|h| h.id)
            .ok_or_else(|| CoreError::UnknownHero(name.to_string()))?;
        let hero = self
            .roster
            .get_mut(id)
            .ok_or(CoreError::HeroNotFound(id))?;
        hero.set_field(&field, value)?;
        let summary = format!("{}: {field} = {value}", hero.name);
        self.persist()?;
        Ok(summary)
    }

    fn do_hero_list(&self) -> SessionResult<String> {
        if self.roster.is_empty() {
            return Ok("No heroes on the roster.".to_string());
        }
        let mut out = format!("Roster ({} heroes):\n", self.roster.len());
        for hero in self.roster.heroes() {
            let marker = if self.selected == Some(hero.id) {
                "*"
            } else {
                " "
            };
            out.push_str(&format!(
                "{marker} {} — ATK {} DEF {} STR {} INT {} MANA {} | EXP {} Gold {} Ruhm {}\n",
                hero.name,
                hero.attack,
                hero.defense,
                hero.strength,
                hero.intelligence,
                hero.mana,
                hero.exp,
                hero.gold,
                hero.glory,
            ));
            if !hero.inventory.is_empty() {
                out.push_str(&format!("    Inventar: {}\n", hero.inventory.join(", ")));
            }
        }
        Ok(out.trim_end().to_string())
    }

    fn do_select(&mut self, name: &str) -> SessionResult<String> {
        if name.is_empty() {
            return Err(SessionError::InvalidCommand(
                "usage: select <hero name>".to_string(),
            ));
        }
        let hero = self
            .roster
            .find_by_name(name)
            .ok_or_else(|| CoreError::UnknownHero(name.to_string()))?;
        self.selected = Some(hero.id);
        Ok(format!("Selected hero: {}", hero.name))
    }

    /// `inventory <name>` shows a hero's inventory;
    /// `inventory <name> set <items>` replaces it from a comma list.
    fn do_inventory(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidCommand(
                "usage: inventory <hero name> [set <item, item, ...>]".to_string(),
            ));
        }

        if let Some((name, items)) = rest.split_once(" set ") {
            let name = name.trim();
            let mut inventory: Vec<String> = items
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect();
            collate::sort_items(&mut inventory);

            let id = self
                .roster
                .find_by_name(name)
                .map(|h| h.id)
                .ok_or_else(|| CoreError::UnknownHero(name.to_string()))?;
            let hero = self
                .roster
                .get_mut(id)
                .ok_or(CoreError::HeroNotFound(id))?;
            hero.inventory = inventory;
            let summary = format!("{}: {} items", hero.name, hero.inventory.len());
            self.persist()?;
            return Ok(summary);
        }

        let hero = self
            .roster
            .find_by_name(rest)
            .ok_or_else(|| CoreError::UnknownHero(rest.to_string()))?;
        if hero.inventory.is_empty() {
            Ok(format!("{}: inventory is empty", hero.name))
        } else {
            Ok(format!("{}: {}", hero.name, hero.inventory.join(", ")))
        }
    }

    fn do_monster_list(&self) -> SessionResult<String> {
        if self.tables.is_empty() {
            return Ok("No loot tables loaded.".to_string());
        }
        let mut out = format!("Monsters ({}):\n", self.tables.len());
        for table in &self.tables {
            out.push_str(&format!(
                "  {} — {}xW6, {}xW20 | Garantiert: {}\n",
                table.name, table.w6_count, table.w20_count, table.guaranteed,
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_defeat(&mut self, monster: &str) -> SessionResult<String> {
        if monster.is_empty() {
            return Err(SessionError::InvalidCommand(
                "usage: defeat <monster name>".to_string(),
            ));
        }
        let Some(hero_id) = self.selected else {
            return Err(LootError::MissingHero.into());
        };

        let lower = monster.to_lowercase();
        let table = self
            .tables
            .iter()
            .find(|t| t.name.to_lowercase() == lower)
            .ok_or_else(|| SessionError::UnknownMonster(monster.to_string()))?;

        let (record, effects) = resolve_defeat(&mut self.rng, table, hero_id, &self.parser);

        let hero = self
            .roster
            .get(hero_id)
            .ok_or(CoreError::HeroNotFound(hero_id))?;
        let updated = apply_effects(hero, &effects);
        let output = render_defeat(table, &record, &effects, &updated);

        self.roster.replace(updated)?;
        self.persist()?;
        self.history.record(record);

        Ok(output)
    }

    fn do_history(&self) -> SessionResult<String> {
        if self.history.is_empty() {
            return Ok("No defeats recorded this session.".to_string());
        }
        let records = self.history.records();
        let shown = records.len().min(10);
        let mut out = format!(
            "History ({} defeats, showing last {shown}, newest first):\n",
            records.len()
        );
        for record in &records[..shown] {
            out.push_str(&format!(
                "  {} — W6 {:?} = {} → {} | W20 {:?} = {} → {}\n",
                record.monster_id,
                record.w6_rolls,
                record.w6_sum,
                record.w6_reward,
                record.w20_rolls,
                record.w20_sum,
                record.w20_reward,
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_status(&self) -> SessionResult<String> {
        let selected = match self.selected_hero() {
            Some(hero) => hero.name.clone(),
            None => "none".to_string(),
        };
        Ok(format!(
            "Heroes: {}\nMonsters: {}\nSelected: {selected}\nDefeats this session: {}",
            self.roster.len(),
            self.tables.len(),
            self.history.len(),
        ))
    }

    fn help(&self, topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "hero" | "heroes" => "\
Hero Commands:
  hero add <name>                 Create a hero
  hero remove <name>              Delete a hero
  hero edit <name> <field> <val>  Set attack, defense, strength,
                                  intelligence, mana, exp, gold or glory
  heroes                          List the roster
  select <name>                   Choose the hero receiving loot"
                .to_string(),
            "inventory" => "\
Inventory Commands:
  inventory <name>                Show a hero's inventory
  inventory <name> set <items>    Replace it (comma-separated)"
                .to_string(),
            "defeat" | "monsters" => "\
Defeat Commands:
  monsters                        List loaded loot tables
  defeat <monster>                Roll loot for the selected hero
  history                         Show this session's defeats"
                .to_string(),
            _ => "\
Camp Commands:
  hero add|remove|edit            Manage heroes
  heroes                          List the roster
  select <name>                   Choose the hero receiving loot
  inventory <name> [set <items>]  Show or replace an inventory
  monsters                        List loaded loot tables
  defeat <monster>                Roll loot for the selected hero
  history                         Show this session's defeats
  status                          Show session status
  help [hero|inventory|defeat]    Show help
  quit                            Exit"
                .to_string(),
        }
    }

    fn persist(&mut self) -> SessionResult<()> {
        save_roster(self.store.as_mut(), &self.roster)?;
        Ok(())
    }
}

/// Render one defeat for the REPL: rolls per channel (only channels that
/// rolled dice, as the record shows them), the guaranteed slot, and the
/// hero's new counters.
fn render_defeat(
    table: &MonsterLootTable,
    record: &bz_loot::LootRecord,
    effects: &[Effect],
    hero: &Hero,
) -> String {
    let mut out = format!("{} defeated by {}!\n", table.name, hero.name);

    if !record.w6_rolls.is_empty() {
        out.push_str(&format!(
            "  W6 {:?} = {} → {}\n",
            record.w6_rolls, record.w6_sum, record.w6_reward
        ));
    }
    if !record.w20_rolls.is_empty() {
        out.push_str(&format!(
            "  W20 {:?} = {} → {}\n",
            record.w20_rolls, record.w20_sum, record.w20_reward
        ));
    }
    out.push_str(&format!("  Garantiert: {}\n", table.guaranteed));

    let applied: Vec<String> = effects
        .iter()
        .filter(|e| !matches!(e, Effect::NoEffect))
        .map(Effect::to_string)
        .collect();
    if applied.is_empty() {
        out.push_str("  Nothing gained.\n");
    } else {
        out.push_str(&format!("  Gained: {}\n", applied.join("; ")));
    }

    out.push_str(&format!(
        "  {} now has EXP {}, Gold {}, Ruhm {}",
        hero.name, hero.exp, hero.gold, hero.glory
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use bz_loot::table::NO_GUARANTEED_REWARD;
    use bz_store::MemoryStore;

    fn goblin() -> MonsterLootTable {
        // Every reachable W6 sum pays gold, so a seeded roll always hits.
        let rewards: BTreeMap<u32, String> =
            (1..=20).map(|sum| (sum, "10 Gold".to_string())).collect();
        MonsterLootTable {
            id: "Goblin-2".to_string(),
            name: "Goblin".to_string(),
            w6_count: 2,
            w20_count: 0,
            guaranteed: "Schild".to_string(),
            rewards_by_sum: rewards,
        }
    }

    fn empty_handed() -> MonsterLootTable {
        MonsterLootTable {
            id: "Ratte-3".to_string(),
            name: "Ratte".to_string(),
            w6_count: 0,
            w20_count: 0,
            guaranteed: NO_GUARANTEED_REWARD.to_string(),
            rewards_by_sum: BTreeMap::new(),
        }
    }

    fn session() -> CampSession {
        CampSession::new(
            vec![goblin(), empty_handed()],
            Box::new(MemoryStore::new()),
            SessionConfig::default().with_seed(42),
        )
        .unwrap()
    }

    #[test]
    fn starts_with_empty_roster() {
        let s = session();
        assert!(s.roster().is_empty());
        assert!(s.history().is_empty());
        assert!(s.selected_hero().is_none());
    }

    #[test]
    fn loads_existing_roster_from_store() {
        let mut roster = Roster::new();
        roster.add(Hero::new("Thorin")).unwrap();
        let blob = serde_json::to_string(&roster).unwrap();

        let s = CampSession::new(
            Vec::new(),
            Box::new(MemoryStore::with_blob(blob)),
            SessionConfig::default().with_seed(1),
        )
        .unwrap();
        assert_eq!(s.roster().len(), 1);
    }

    #[test]
    fn hero_add_and_list() {
        let mut s = session();
        assert_eq!(s.process("hero add Thorin").unwrap(), "Hero added: Thorin");
        let list = s.process("heroes").unwrap();
        assert!(list.contains("Thorin"));
        assert!(list.contains("1 heroes"));
    }

    #[test]
    fn hero_add_duplicate_fails() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        assert!(s.process("hero add thorin").is_err());
    }

    #[test]
    fn hero_remove_clears_selection() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();
        assert!(s.selected_hero().is_some());

        s.process("hero remove Thorin").unwrap();
        assert!(s.selected_hero().is_none());
        assert!(s.roster().is_empty());
    }

    #[test]
    fn hero_edit_sets_fields() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        assert_eq!(
            s.process("hero edit Thorin attack 3").unwrap(),
            "Thorin: attack = 3"
        );
        assert_eq!(s.roster().find_by_name("Thorin").unwrap().attack, 3);
    }

    #[test]
    fn hero_edit_with_spaced_name() {
        let mut s = session();
        s.process("hero add Sir Thorin").unwrap();
        s.process("hero edit Sir Thorin mana 5").unwrap();
        assert_eq!(s.roster().find_by_name("Sir Thorin").unwrap().mana, 5);
    }

    #[test]
    fn hero_edit_rejects_bad_value() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        assert!(s.process("hero edit Thorin attack viel").is_err());
        assert!(s.process("hero edit Thorin charisma 3").is_err());
    }

    #[test]
    fn select_unknown_hero_fails() {
        let mut s = session();
        assert!(s.process("select Nobody").is_err());
    }

    #[test]
    fn inventory_set_trims_sorts_and_drops_empties() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("inventory Thorin set Zauberstab,  Äxte , , Bogen")
            .unwrap();
        assert_eq!(
            s.roster().find_by_name("Thorin").unwrap().inventory,
            vec!["Äxte", "Bogen", "Zauberstab"]
        );

        let shown = s.process("inventory Thorin").unwrap();
        assert!(shown.contains("Äxte, Bogen, Zauberstab"));
    }

    #[test]
    fn defeat_without_selection_is_missing_hero() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        let err = s.process("defeat Goblin").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Loot(LootError::MissingHero)
        ));
        assert!(s.history().is_empty());
    }

    #[test]
    fn defeat_unknown_monster_fails() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();
        assert!(matches!(
            s.process("defeat Drache").unwrap_err(),
            SessionError::UnknownMonster(_)
        ));
    }

    #[test]
    fn defeat_applies_rewards_and_records_history() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();

        let output = s.process("defeat Goblin").unwrap();
        assert!(output.contains("Goblin defeated by Thorin!"));
        assert!(output.contains("Garantiert: Schild"));

        let hero = s.roster().find_by_name("Thorin").unwrap();
        // Every W6 sum of the fixture pays 10 gold; the guaranteed shield
        // lands in the inventory.
        assert_eq!(hero.gold, 10);
        assert_eq!(hero.inventory, vec!["Schild"]);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().latest().unwrap().monster_id, "Goblin-2");
    }

    #[test]
    fn defeat_inserts_guaranteed_item_in_sorted_position() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("inventory Thorin set Amulett, Zauberstab").unwrap();
        s.process("select Thorin").unwrap();
        s.process("defeat Goblin").unwrap();

        assert_eq!(
            s.roster().find_by_name("Thorin").unwrap().inventory,
            vec!["Amulett", "Schild", "Zauberstab"]
        );
    }

    #[test]
    fn defeat_with_no_rewards_changes_nothing() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();

        let output = s.process("defeat Ratte").unwrap();
        assert!(output.contains("Nothing gained."));

        let hero = s.roster().find_by_name("Thorin").unwrap();
        assert_eq!(hero.gold, 0);
        assert!(hero.inventory.is_empty());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn defeat_is_case_insensitive_on_monster_name() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();
        assert!(s.process("defeat goblin").is_ok());
    }

    #[test]
    fn repeated_defeats_stack_rewards_and_prepend_history() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();
        s.process("defeat Goblin").unwrap();
        s.process("defeat Ratte").unwrap();

        let hero = s.roster().find_by_name("Thorin").unwrap();
        assert_eq!(hero.gold, 10);
        assert_eq!(s.history().len(), 2);
        // Newest first.
        assert_eq!(s.history().records()[0].monster_id, "Ratte-3");
        assert_eq!(s.history().records()[1].monster_id, "Goblin-2");

        let history = s.process("history").unwrap();
        assert!(history.contains("2 defeats"));
    }

    #[test]
    fn duplicate_guaranteed_items_accumulate() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();
        s.process("defeat Goblin").unwrap();
        s.process("defeat Goblin").unwrap();

        let hero = s.roster().find_by_name("Thorin").unwrap();
        assert_eq!(hero.inventory, vec!["Schild", "Schild"]);
        assert_eq!(hero.gold, 20);
    }

    #[test]
    fn mutations_are_persisted_immediately() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        s.process("select Thorin").unwrap();
        s.process("defeat Goblin").unwrap();

        // A fresh session over the same store sees the saved state.
        let blob = s.store.load_blob().unwrap().unwrap();
        let saved: Roster = serde_json::from_str(&blob).unwrap();
        assert_eq!(saved.find_by_name("Thorin").unwrap().gold, 10);
    }

    #[test]
    fn status_reports_counts() {
        let mut s = session();
        s.process("hero add Thorin").unwrap();
        let status = s.process("status").unwrap();
        assert!(status.contains("Heroes: 1"));
        assert!(status.contains("Monsters: 2"));
        assert!(status.contains("Selected: none"));
    }

    #[test]
    fn monsters_listing() {
        let s = session();
        let list = s.do_monster_list().unwrap();
        assert!(list.contains("Goblin — 2xW6, 0xW20"));
        assert!(list.contains(NO_GUARANTEED_REWARD));
    }

    #[test]
    fn unknown_command() {
        let mut s = session();
        assert!(matches!(
            s.process("dance").unwrap_err(),
            SessionError::UnknownCommand(_)
        ));
    }

    #[test]
    fn empty_input_is_silent() {
        let mut s = session();
        assert_eq!(s.process("   ").unwrap(), "");
    }

    #[test]
    fn help_topics() {
        let s = session();
        assert!(s.help("").contains("Camp Commands"));
        assert!(s.help("hero").contains("hero edit"));
        assert!(s.help("inventory").contains("inventory"));
        assert!(s.help("defeat").contains("defeat <monster>"));
    }

    #[test]
    fn quit() {
        let mut s = session();
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert_eq!(s.process("q").unwrap(), "Goodbye!");
    }
}
