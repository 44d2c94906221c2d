//! Defeat resolution: one monster kill, from dice to effects.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use bz_core::HeroId;

use crate::dice;
use crate::reward::{Effect, RewardParser};
use crate::table::{DiceChannel, MonsterLootTable};

/// The immutable record of a single resolution event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootRecord {
    /// Unique per resolution event: monster id plus timestamp.
    pub id: String,
    /// The hero the rewards were applied to.
    pub hero_id: HeroId,
    /// The defeated monster's table id.
    pub monster_id: String,
    /// Individual W6 results, in roll order.
    pub w6_rolls: Vec<u32>,
    /// Individual W20 results, in roll order.
    pub w20_rolls: Vec<u32>,
    /// Sum of the W6 rolls (0 when no W6 dice were rolled).
    pub w6_sum: u32,
    /// Sum of the W20 rolls (0 when no W20 dice were rolled).
    pub w20_sum: u32,
    /// Reward text resolved on the W6 channel (sentinel on a miss).
    pub w6_reward: String,
    /// Reward text resolved on the W20 channel (sentinel on a miss).
    pub w20_reward: String,
    /// When the defeat was resolved.
    pub resolved_at: DateTime<Utc>,
}

/// Resolve a defeat event against a monster's loot table.
///
/// Rolls both dice channels, looks each sum up independently, and returns
/// the record together with the effect list in fixed application order:
/// W6 reward, W20 reward, guaranteed reward. The order only matters for
/// inventory appends ahead of the final sort; resource deltas commute.
/// A channel with zero dice still looks up sum 0, which no table maps, so
/// it harmlessly resolves to the channel sentinel.
///
/// Pure apart from the RNG: mutating the hero and persisting the roster
/// are the caller's responsibility.
pub fn resolve_defeat(
    rng: &mut StdRng,
    table: &MonsterLootTable,
    hero_id: HeroId,
    parser: &RewardParser,
) -> (LootRecord, Vec<Effect>) {
    let w6_rolls = dice::roll(
        rng,
        DiceChannel::W6.sides(),
        table.dice_count(DiceChannel::W6),
    );
    let w20_rolls = dice::roll(
        rng,
        DiceChannel::W20.sides(),
        table.dice_count(DiceChannel::W20),
    );
    let w6_sum = dice::sum(&w6_rolls);
    let w20_sum = dice::sum(&w20_rolls);

    let w6_reward = table.reward_for_sum(DiceChannel::W6, w6_sum).to_string();
    let w20_reward = table.reward_for_sum(DiceChannel::W20, w20_sum).to_string();

    let effects = vec![
        parser.parse(&w6_reward),
        parser.parse(&w20_reward),
        parser.parse(&table.guaranteed),
    ];

    let resolved_at = Utc::now();
    let record = LootRecord {
        id: format!("{}-{}", table.id, resolved_at.timestamp_millis()),
        hero_id,
        monster_id: table.id.clone(),
        w6_rolls,
        w20_rolls,
        w6_sum,
        w20_sum,
        w6_reward,
        w20_reward,
        resolved_at,
    };

    (record, effects)
}
