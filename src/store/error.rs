/// Errors returned by tracker operations
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Habit name must not be empty")]
    EmptyName,

    #[error("No habit #{} (have {len})", .index + 1)]
    HabitNotFound { index: usize, len: usize },

    #[error("You need at least {need} coins to open the chest (have {have})")]
    NotEnoughCoins { have: u64, need: u64 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
