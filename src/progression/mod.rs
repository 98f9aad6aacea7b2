//! Progression engine: points, coins, levels and badges
//!
//! Everything here is pure. The tracker in [`crate::store`] feeds it the
//! current state and applies the results.

mod checker;
mod definitions;
mod levels;
mod points;

pub use checker::{
    AchievementContext, LEVEL_BADGE_TARGET, STREAK_BADGE_TARGET, all_habits_completed,
    check_achievements, rule_satisfied,
};
pub use definitions::{BADGES, Badge, BadgeId, UNKNOWN_BADGE_COLOR, UNKNOWN_BADGE_ICON};
pub use levels::{LevelUp, POINTS_PER_LEVEL, check_level_up, level_progress, threshold_for};
pub use points::{PointRewards, calculate_points, coins_for_points};

/// Events produced by tracker operations, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionEvent {
    PointsAwarded {
        habit: String,
        points: u64,
        coins: u64,
    },
    StreakReduced {
        habit: String,
        streak: u32,
    },
    StreakBroken {
        habit: String,
    },
    LevelUp(LevelUp),
    BadgeUnlocked(BadgeId),
}
