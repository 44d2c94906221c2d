//! Heroes: the persistent player records the loot engine mutates.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Unique identifier for a hero, stable for the hero's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(pub Uuid);

impl HeroId {
    /// Generate a new random hero ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HeroId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A hero on the roster: combat stats, reward counters, and inventory.
///
/// The reward counters (`exp`, `gold`, `glory`) only grow through loot
/// application; `set_field` exists for explicit player edits. The inventory
/// allows duplicates and is kept sorted by the callers that mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identifier.
    pub id: HeroId,
    /// Display name.
    pub name: String,
    /// Attack dice.
    pub attack: u32,
    /// Defense dice.
    pub defense: u32,
    /// Body strength.
    pub strength: u32,
    /// Intelligence.
    pub intelligence: u32,
    /// Mana points.
    pub mana: u32,
    /// Experience points.
    pub exp: u32,
    /// Gold pieces.
    pub gold: u32,
    /// Glory tokens (Ruhmesplättchen).
    pub glory: u32,
    /// Item names, duplicates allowed, sorted ascending after every change.
    pub inventory: Vec<String>,
}

impl Hero {
    /// Create a new hero with all stats and counters at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: HeroId::new(),
            name: name.into(),
            attack: 0,
            defense: 0,
            strength: 0,
            intelligence: 0,
            mana: 0,
            exp: 0,
            gold: 0,
            glory: 0,
            inventory: Vec::new(),
        }
    }

    /// Set a numeric field by its lowercase name.
    ///
    /// Accepts the five combat stats and the three reward counters. The
    /// name and inventory are not reachable through this method.
    pub fn set_field(&mut self, field: &str, value: u32) -> CoreResult<()> {
        match field {
            "attack" => self.attack = value,
            "defense" => self.defense = value,
            "strength" => self.strength = value,
            "intelligence" => self.intelligence = value,
            "mana" => self.mana = value,
            "exp" => self.exp = value,
            "gold" => self.gold = value,
            "glory" => self.glory = value,
            other => return Err(CoreError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Read a numeric field by its lowercase name.
    pub fn field(&self, field: &str) -> CoreResult<u32> {
        match field {
            "attack" => Ok(self.attack),
            "defense" => Ok(self.defense),
            "strength" => Ok(self.strength),
            "intelligence" => Ok(self.intelligence),
            "mana" => Ok(self.mana),
            "exp" => Ok(self.exp),
            "gold" => Ok(self.gold),
            "glory" => Ok(self.glory),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}
