//! Badge checking logic
//!
//! Contains functions to check if badges should be unlocked.

use super::definitions::BadgeId;
use crate::domain::{Difficulty, Habit};

/// State the badge rules look at
#[derive(Debug, Clone, Copy)]
pub struct AchievementContext<'a> {
    pub habits: &'a [Habit],
    pub level: u32,
}

/// Streak needed for the streak badge
pub const STREAK_BADGE_TARGET: u32 = 7;

/// Level needed for the level badge
pub const LEVEL_BADGE_TARGET: u32 = 5;

fn is_unlocked(id: BadgeId, unlocked: &[String]) -> bool {
    unlocked.iter().any(|b| b == id.as_str())
}

/// Whether the rule for `id` holds right now, regardless of what is unlocked
pub fn rule_satisfied(id: BadgeId, ctx: &AchievementContext<'_>) -> bool {
    match id {
        BadgeId::SevenDayStreak => ctx.habits.iter().any(|h| h.streak >= STREAK_BADGE_TARGET),
        BadgeId::FirstHardHabit => ctx
            .habits
            .iter()
            .any(|h| h.difficulty == Difficulty::Hard && h.completed),
        BadgeId::AllHabitsCompleted => all_habits_completed(ctx.habits),
        BadgeId::LevelFive => ctx.level >= LEVEL_BADGE_TARGET,
    }
}

/// Every badge whose rule holds and that isn't in `unlocked` yet, in check order
pub fn check_achievements(ctx: &AchievementContext<'_>, unlocked: &[String]) -> Vec<BadgeId> {
    BadgeId::all()
        .iter()
        .copied()
        .filter(|id| !is_unlocked(*id, unlocked) && rule_satisfied(*id, ctx))
        .collect()
}

/// Non-empty habit list with every habit done
pub fn all_habits_completed(habits: &[Habit]) -> bool {
    !habits.is_empty() && habits.iter().all(|h| h.completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(difficulty: Difficulty, streak: u32, completed: bool) -> Habit {
        Habit {
            name: "test".to_string(),
            difficulty,
            streak,
            completed,
        }
    }

    #[test]
    fn test_streak_badge_at_seven() {
        let habits = vec![habit(Difficulty::Easy, 6, false)];
        let ctx = AchievementContext { habits: &habits, level: 1 };
        assert!(check_achievements(&ctx, &[]).is_empty());

        let habits = vec![habit(Difficulty::Easy, 7, false)];
        let ctx = AchievementContext { habits: &habits, level: 1 };
        assert_eq!(check_achievements(&ctx, &[]), vec![BadgeId::SevenDayStreak]);
    }

    #[test]
    fn test_already_unlocked_not_reported() {
        let habits = vec![habit(Difficulty::Easy, 9, false)];
        let ctx = AchievementContext { habits: &habits, level: 1 };
        let unlocked = vec!["7-Day Streak".to_string()];
        assert!(check_achievements(&ctx, &unlocked).is_empty());
    }

    #[test]
    fn test_hard_habit_must_be_completed() {
        let habits = vec![
            habit(Difficulty::Hard, 3, false),
            habit(Difficulty::Easy, 0, true),
        ];
        let ctx = AchievementContext { habits: &habits, level: 1 };
        assert!(check_achievements(&ctx, &[]).is_empty());
    }

    #[test]
    fn test_multiple_badges_in_one_check() {
        let habits = vec![habit(Difficulty::Hard, 7, true)];
        let ctx = AchievementContext { habits: &habits, level: 5 };
        assert_eq!(
            check_achievements(&ctx, &[]),
            vec![
                BadgeId::SevenDayStreak,
                BadgeId::FirstHardHabit,
                BadgeId::AllHabitsCompleted,
                BadgeId::LevelFive,
            ]
        );
    }

    #[test]
    fn test_all_completed_requires_habits() {
        assert!(!all_habits_completed(&[]));
        let ctx = AchievementContext { habits: &[], level: 1 };
        assert!(check_achievements(&ctx, &[]).is_empty());
    }
}
