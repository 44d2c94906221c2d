//! End-to-end CLI command tests for the `bz` binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A record-list loot file: the goblin pays 10 gold on every reachable
/// 2xW6 sum, so defeat outcomes are assertable without fixing a seed.
fn write_loot_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("loot.json");
    fs::write(
        &path,
        r#"{
    "Tabelle1": [
        {
            "Monster": "Goblin", "W6": 2, "W20": 0,
            "Garantierte Belohnung": "Schild",
            "2": "10 Gold", "3": "10 Gold", "4": "10 Gold", "5": "10 Gold",
            "6": "10 Gold", "7": "10 Gold", "8": "10 Gold", "9": "10 Gold",
            "10": "10 Gold", "11": "10 Gold", "12": "10 Gold"
        },
        {
            "Monster": "Ork", "W6": 0, "W20": 1,
            "5": "Schwert"
        }
    ]
}"#,
    )
    .unwrap();
    path
}

fn write_roster_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("heroes.json");
    fs::write(
        &path,
        r#"{
    "heroes": [
        {
            "id": "6f6f9b34-aaaa-4bbb-8ccc-000000000001",
            "name": "Thorin",
            "attack": 3, "defense": 2, "strength": 4,
            "intelligence": 1, "mana": 0,
            "exp": 0, "gold": 0, "glory": 0,
            "inventory": []
        }
    ]
}"#,
    )
    .unwrap();
    path
}

fn bz() -> Command {
    Command::cargo_bin("bz").unwrap()
}

// ---------------------------------------------------------------------------
// monsters
// ---------------------------------------------------------------------------

#[test]
fn monsters_lists_loot_tables() {
    let dir = TempDir::new().unwrap();
    let loot = write_loot_file(dir.path());

    bz().args(["monsters", "-l", loot.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Goblin")
                .and(predicate::str::contains("Schild"))
                .and(predicate::str::contains("2 monsters")),
        );
}

#[test]
fn monsters_accepts_grid_shape() {
    let dir = TempDir::new().unwrap();
    let loot = dir.path().join("grid.json");
    fs::write(
        &loot,
        r#"{"A2": "Drache", "B2": 1, "C2": 2, "D2": "Krone", "E2": "50 Gold"}"#,
    )
    .unwrap();

    bz().args(["monsters", "-l", loot.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drache").and(predicate::str::contains("Krone")));
}

#[test]
fn monsters_missing_file_fails() {
    bz().args(["monsters", "-l", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn monsters_unreadable_source_fails() {
    let dir = TempDir::new().unwrap();
    let loot = dir.path().join("broken.json");
    fs::write(&loot, "not json at all").unwrap();

    bz().args(["monsters", "-l", loot.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a loot table"));
}

// ---------------------------------------------------------------------------
// heroes
// ---------------------------------------------------------------------------

#[test]
fn heroes_with_no_store_is_empty_roster() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("heroes.json");

    bz().args(["heroes", "-s", store.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No heroes on the roster."));
}

#[test]
fn heroes_lists_roster() {
    let dir = TempDir::new().unwrap();
    let store = write_roster_file(dir.path());

    bz().args(["heroes", "-s", store.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thorin").and(predicate::str::contains("1 heroes")));
}

// ---------------------------------------------------------------------------
// defeat (one-shot)
// ---------------------------------------------------------------------------

#[test]
fn defeat_applies_loot_and_saves() {
    let dir = TempDir::new().unwrap();
    let loot = write_loot_file(dir.path());
    let store = write_roster_file(dir.path());

    bz().args([
        "defeat",
        "Goblin",
        "--hero",
        "Thorin",
        "-l",
        loot.to_str().unwrap(),
        "-s",
        store.to_str().unwrap(),
        "--seed",
        "42",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("defeated by Thorin!")
            .and(predicate::str::contains("Gold 10"))
            .and(predicate::str::contains("Inventar: Schild")),
    );

    // The roster file was rewritten with the new state.
    let saved = fs::read_to_string(&store).unwrap();
    assert!(saved.contains("\"gold\": 10"));
    assert!(saved.contains("Schild"));
}

#[test]
fn defeat_unknown_hero_fails() {
    let dir = TempDir::new().unwrap();
    let loot = write_loot_file(dir.path());
    let store = dir.path().join("heroes.json");

    bz().args([
        "defeat",
        "Goblin",
        "--hero",
        "Nobody",
        "-l",
        loot.to_str().unwrap(),
        "-s",
        store.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown hero"));
}

#[test]
fn defeat_unknown_monster_fails() {
    let dir = TempDir::new().unwrap();
    let loot = write_loot_file(dir.path());
    let store = write_roster_file(dir.path());

    bz().args([
        "defeat",
        "Drache",
        "--hero",
        "Thorin",
        "-l",
        loot.to_str().unwrap(),
        "-s",
        store.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown monster"));
}

// ---------------------------------------------------------------------------
// play (REPL over piped stdin)
// ---------------------------------------------------------------------------

#[test]
fn play_session_full_flow() {
    let dir = TempDir::new().unwrap();
    let loot = write_loot_file(dir.path());
    let store = dir.path().join("heroes.json");

    bz().args([
        "play",
        "-l",
        loot.to_str().unwrap(),
        "-s",
        store.to_str().unwrap(),
        "--seed",
        "7",
    ])
    .write_stdin("hero add Thorin\nselect Thorin\ndefeat Goblin\nquit\n")
    .assert()
    .success()
    .stdout(
        predicate::str::contains("Hero added: Thorin")
            .and(predicate::str::contains("Selected hero: Thorin"))
            .and(predicate::str::contains("Goblin defeated by Thorin!"))
            .and(predicate::str::contains("Goodbye!")),
    );

    // The session saved after every mutation; a later command sees it.
    bz().args(["heroes", "-s", store.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thorin").and(predicate::str::contains("Schild")));
}

#[test]
fn play_reports_errors_and_keeps_running() {
    let dir = TempDir::new().unwrap();
    let loot = write_loot_file(dir.path());
    let store = dir.path().join("heroes.json");

    bz().args([
        "play",
        "-l",
        loot.to_str().unwrap(),
        "-s",
        store.to_str().unwrap(),
    ])
    .write_stdin("defeat Goblin\nquit\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("no hero selected"));
}
