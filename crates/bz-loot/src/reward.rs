//! Reward text classification.
//!
//! Reward cells hold free-form German text. Three numeric markers
//! ("15 EXP", "10 Gold", "2 Ruhmesplättchen", any subset in one string)
//! turn into resource deltas; the bare words "Gold" and "Ruhmesplättchen"
//! are shorthand for fixed amounts; sentinel strings grant nothing; and
//! every other string is taken literally as an item name. Matching runs
//! against the raw string, case-sensitive, with no normalization.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::table::NO_GUARANTEED_REWARD;

/// Gold granted by the bare literal "Gold".
const GOLD_TOKEN_VALUE: u32 = 10;

/// Glory granted by the bare literal "Ruhmesplättchen".
const GLORY_TOKEN_VALUE: u32 = 1;

/// A typed, already-parsed consequence of one reward string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Additive change to the hero's reward counters.
    ResourceDelta {
        /// Experience points gained.
        exp: u32,
        /// Gold pieces gained.
        gold: u32,
        /// Glory tokens gained.
        glory: u32,
    },
    /// A literal item granted into the hero's inventory.
    InventoryAdd {
        /// The item name, taken verbatim from the reward text.
        item: String,
    },
    /// A "no reward" sentinel; contributes nothing.
    NoEffect,
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceDelta { exp, gold, glory } => {
                let mut parts = Vec::new();
                if *exp > 0 {
                    parts.push(format!("+{exp} EXP"));
                }
                if *gold > 0 {
                    parts.push(format!("+{gold} Gold"));
                }
                if *glory > 0 {
                    parts.push(format!("+{glory} Ruhmesplättchen"));
                }
                if parts.is_empty() {
                    write!(f, "nichts")
                } else {
                    write!(f, "{}", parts.join(", "))
                }
            }
            Self::InventoryAdd { item } => write!(f, "Gegenstand: {item}"),
            Self::NoEffect => write!(f, "keine Belohnung"),
        }
    }
}

/// Parser for reward text. Pure and stateless: the same input always
/// yields the same effect.
#[derive(Debug)]
pub struct RewardParser {
    exp: Regex,
    gold: Regex,
    glory: Regex,
}

impl Default for RewardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardParser {
    /// Compile the three numeric marker patterns.
    pub fn new() -> Self {
        Self {
            exp: Regex::new(r"(\d+)\s*EXP").expect("literal pattern compiles"),
            gold: Regex::new(r"(\d+)\s*Gold").expect("literal pattern compiles"),
            glory: Regex::new(r"(\d+)\s*Ruhmesplättchen").expect("literal pattern compiles"),
        }
    }

    /// Classify one reward string into an effect.
    pub fn parse(&self, text: &str) -> Effect {
        if is_no_reward(text) {
            return Effect::NoEffect;
        }

        let exp = capture_amount(&self.exp, text);
        let gold = capture_amount(&self.gold, text);
        let glory = capture_amount(&self.glory, text);
        if exp.is_some() || gold.is_some() || glory.is_some() {
            return Effect::ResourceDelta {
                exp: exp.unwrap_or(0),
                gold: gold.unwrap_or(0),
                glory: glory.unwrap_or(0),
            };
        }

        // Literal token shortcuts, only reachable without a numeric marker.
        match text {
            "Gold" => Effect::ResourceDelta {
                exp: 0,
                gold: GOLD_TOKEN_VALUE,
                glory: 0,
            },
            "Ruhmesplättchen" => Effect::ResourceDelta {
                exp: 0,
                gold: 0,
                glory: GLORY_TOKEN_VALUE,
            },
            other => Effect::InventoryAdd {
                item: other.to_string(),
            },
        }
    }
}

/// Whether a reward string is one of the "no reward" sentinels.
fn is_no_reward(text: &str) -> bool {
    text.trim().is_empty() || text.contains("Keine Belohnung") || text == NO_GUARANTEED_REWARD
}

fn capture_amount(marker: &Regex, text: &str) -> Option<u32> {
    marker
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse().unwrap_or(0))
}
