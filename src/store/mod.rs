//! State store for HabitQuest
//!
//! Keeps habits and progress in memory and persists them through a
//! string key-value backend (`~/.habitquest/data.json` by default).
//!
//! # Usage
//!
//! ```ignore
//! let store = open_store(StorageBackend::Json, &path)?;
//! let mut tracker = HabitTracker::load(store)?;
//!
//! tracker.add_habit("Read 20 pages", Difficulty::Medium)?;
//! for event in tracker.toggle_habit(0)? {
//!     println!("{event:?}");
//! }
//! ```

mod backend;
mod chest;
mod error;
mod tracker;

pub use backend::{JsonFileStore, KeyValueStore, MemoryStore, SqliteStore, open_store};
pub use chest::{ChestOutcome, roll_reward};
pub use error::TrackerError;
pub use tracker::HabitTracker;

/// Persistence keys
pub mod keys {
    pub const POINTS: &str = "points";
    pub const COINS: &str = "coins";
    pub const LEVEL: &str = "level";
    pub const HABITS: &str = "habits";
    pub const BADGES: &str = "badges";
}
