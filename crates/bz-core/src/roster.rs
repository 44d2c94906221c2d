//! The roster: the session's exclusively-owned hero collection.
//!
//! Exactly one `Roster` exists per session and it is the only writer over
//! its heroes. Persistence layers serialize whole-roster snapshots; they are
//! never authoritative between calls.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::hero::{Hero, HeroId};

/// The collection of all heroes in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    heroes: Vec<Hero>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hero. Names must be unique, compared case-insensitively.
    pub fn add(&mut self, hero: Hero) -> CoreResult<()> {
        if self.find_by_name(&hero.name).is_some() {
            return Err(CoreError::DuplicateName(hero.name));
        }
        self.heroes.push(hero);
        Ok(())
    }

    /// Remove a hero by ID, returning it.
    pub fn remove(&mut self, id: HeroId) -> CoreResult<Hero> {
        let pos = self
            .heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or(CoreError::HeroNotFound(id))?;
        Ok(self.heroes.remove(pos))
    }

    /// Remove a hero by name (case-insensitive), returning it.
    pub fn remove_by_name(&mut self, name: &str) -> CoreResult<Hero> {
        let id = self
            .find_by_name(name)
            .map(|h| h.id)
            .ok_or_else(|| CoreError::UnknownHero(name.to_string()))?;
        self.remove(id)
    }

    /// Look up a hero by ID.
    pub fn get(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    /// Look up a hero by ID, mutably.
    pub fn get_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.heroes.iter_mut().find(|h| h.id == id)
    }

    /// Look up a hero by name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&Hero> {
        let lower = name.to_lowercase();
        self.heroes.iter().find(|h| h.name.to_lowercase() == lower)
    }

    /// Replace an existing hero with an updated value, matched by ID.
    pub fn replace(&mut self, hero: Hero) -> CoreResult<()> {
        let slot = self
            .get_mut(hero.id)
            .ok_or(CoreError::HeroNotFound(hero.id))?;
        *slot = hero;
        Ok(())
    }

    /// All heroes in insertion order.
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Number of heroes.
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// Whether the roster has no heroes.
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}
