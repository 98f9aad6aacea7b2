//! Level system
//!
//! Level `n` is left once lifetime points reach `n * 100`.

/// Points per level step
pub const POINTS_PER_LEVEL: u64 = 100;

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Points needed to leave `level`
pub fn threshold_for(level: u32) -> u64 {
    level as u64 * POINTS_PER_LEVEL
}

/// Check whether `points` is enough to leave `level`.
///
/// Gains at most one level per call; a large jump catches up on later checks.
/// `u32::MAX` is the last level.
pub fn check_level_up(points: u64, level: u32) -> (u32, Option<LevelUp>) {
    match level.checked_add(1) {
        Some(new_level) if points >= threshold_for(level) => (
            new_level,
            Some(LevelUp {
                old_level: level,
                new_level,
            }),
        ),
        _ => (level, None),
    }
}

/// Progress from the start of `level` towards the next one (0.0 - 1.0)
pub fn level_progress(points: u64, level: u32) -> f32 {
    let start = threshold_for(level.saturating_sub(1));
    let end = threshold_for(level);
    if end <= start || points >= end {
        return 1.0;
    }
    let into_level = points.saturating_sub(start);
    into_level as f32 / (end - start) as f32
}
