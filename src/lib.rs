//! HabitQuest - habits as a game
//!
//! Declare habits, mark them done, and earn points, coins, levels and badges.
//! Streaks raise the point yield, finishing every habit adds a daily bonus,
//! and coins can be spent on a loot chest.
//!
//! ## Layers
//!
//! 1. **Progression** ([`progression`]): pure reward rules (points, coins,
//!    level thresholds, badge unlocks).
//! 2. **Store** ([`store`]): the mutable tracker plus key-value persistence
//!    (JSON file, SQLite, or memory).

pub mod config;
pub mod domain;
pub mod progression;
pub mod store;

pub use domain::*;
