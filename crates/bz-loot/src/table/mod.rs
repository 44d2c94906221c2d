//! Per-monster loot tables and their tabular sources.
//!
//! A `MonsterLootTable` maps dice sums to reward text for one monster. The
//! positional contract with the tabular source (data begins at a fixed
//! header offset, a fixed-width block of reward columns follows the fixed
//! columns) is encoded in named constants here rather than inline offsets.

pub mod builder;
pub mod source;

pub use builder::build_tables;
pub use source::{RowRecord, rows_from_grid, rows_from_grid_json, rows_from_records};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// First sheet row that holds monster data (row 1 is the header).
pub const HEADER_ROW: u32 = 2;

/// Fixed columns before the reward block: name, W6, W20, guaranteed reward.
pub const FIXED_COLUMNS: u32 = 4;

/// Width of the reward block; column k maps to dice-sum key k (1..=20).
pub const REWARD_COLUMN_COUNT: u32 = 20;

/// Sentinel for a monster without a guaranteed reward.
pub const NO_GUARANTEED_REWARD: &str = "Keine garantierte Belohnung";

/// The two dice channels a monster can grant rewards on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceChannel {
    /// Six-sided dice (W6).
    W6,
    /// Twenty-sided dice (W20).
    W20,
}

impl DiceChannel {
    /// Number of sides on this channel's dice.
    pub fn sides(self) -> u32 {
        match self {
            Self::W6 => 6,
            Self::W20 => 20,
        }
    }

    /// Sentinel reward text when the channel's sum has no table entry.
    pub fn no_reward(self) -> &'static str {
        match self {
            Self::W6 => "Keine Belohnung (W6)",
            Self::W20 => "Keine Belohnung (W20)",
        }
    }
}

impl std::fmt::Display for DiceChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::W6 => write!(f, "W6"),
            Self::W20 => write!(f, "W20"),
        }
    }
}

/// The loot table for a single monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterLootTable {
    /// Stable identifier: monster name plus source row.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of six-sided dice rolled on defeat.
    pub w6_count: u32,
    /// Number of twenty-sided dice rolled on defeat.
    pub w20_count: u32,
    /// Reward always granted; `NO_GUARANTEED_REWARD` if none.
    pub guaranteed: String,
    /// Dice-sum → reward text. Sums without an entry yield no reward.
    pub rewards_by_sum: BTreeMap<u32, String>,
}

impl MonsterLootTable {
    /// Dice count for the given channel.
    pub fn dice_count(&self, channel: DiceChannel) -> u32 {
        match channel {
            DiceChannel::W6 => self.w6_count,
            DiceChannel::W20 => self.w20_count,
        }
    }

    /// Resolve a dice sum on a channel to its reward text.
    ///
    /// A sum with no table entry resolves to the channel's sentinel.
    pub fn reward_for_sum(&self, channel: DiceChannel, sum: u32) -> &str {
        self.rewards_by_sum
            .get(&sum)
            .map(String::as_str)
            .unwrap_or_else(|| channel.no_reward())
    }
}
