//! Point and coin yield
//!
//! A completion is worth the difficulty's base points, scaled by the habit's
//! streak and by a daily bonus once every habit is done.

use crate::domain::Difficulty;

/// Reward constants for completing a habit
pub struct PointRewards;

impl PointRewards {
    /// Extra multiplier per streak step (5%)
    pub const STREAK_STEP: f64 = 0.05;

    /// Multiplier applied when every habit is completed (20%)
    pub const ALL_DONE_BONUS: f64 = 1.2;

    /// Points per coin
    pub const POINTS_PER_COIN: u64 = 10;

    /// Streak multiplier: streak 0 = 1.0, streak 1 = 1.05, ...
    pub fn streak_multiplier(streak: u32) -> f64 {
        1.0 + streak as f64 * Self::STREAK_STEP
    }
}

/// Points earned for completing a habit of `difficulty` at `streak`.
///
/// `all_completed` is whether the whole habit list is done after this
/// completion. Halves round up.
pub fn calculate_points(difficulty: Difficulty, streak: u32, all_completed: bool) -> u64 {
    let base = difficulty.base_points() as f64;
    let bonus = if all_completed {
        PointRewards::ALL_DONE_BONUS
    } else {
        1.0
    };
    let raw = base * PointRewards::streak_multiplier(streak) * bonus;
    // f64::round rounds half away from zero, which is "half up" for positive yields
    raw.round() as u64
}

/// Coins granted alongside `points`
pub fn coins_for_points(points: u64) -> u64 {
    points / PointRewards::POINTS_PER_COIN
}
