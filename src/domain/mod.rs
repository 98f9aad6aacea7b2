//! Core domain types for HabitQuest

mod habit;
mod progress;

pub use habit::{Difficulty, Habit};
pub use progress::ProgressState;
