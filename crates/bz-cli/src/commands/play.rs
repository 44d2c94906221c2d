use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use bz_session::{CampSession, SessionConfig};
use bz_store::FileStore;

pub fn run(loot: &Path, store: &Path, seed: Option<u64>) -> Result<(), String> {
    let tables = super::load_tables(loot)?;
    let mut config = SessionConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = CampSession::new(tables, Box::new(FileStore::new(store)), config)
        .map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Beutezug camp session", "Starting".bold());
    println!(
        "  Monsters: {} | Heroes: {}",
        session.tables().len(),
        session.roster().len()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
