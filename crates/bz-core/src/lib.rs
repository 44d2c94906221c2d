//! Core types for Beutezug: heroes, the roster, and collation.
//!
//! A `Hero` is a persistent player record: combat stats, reward counters,
//! and a sorted inventory. The `Roster` owns all heroes of a session and is
//! the single writer over them; persistence layers only ever see serialized
//! snapshots of it.

pub mod collate;
pub mod error;
pub mod hero;
pub mod roster;

pub use error::{CoreError, CoreResult};
pub use hero::{Hero, HeroId};
pub use roster::Roster;
