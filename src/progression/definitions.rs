//! Badge definitions and metadata
//!
//! Badges are persisted by their display name, so `as_str` doubles as the
//! storage identifier.

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    SevenDayStreak,
    FirstHardHabit,
    AllHabitsCompleted,
    LevelFive,
}

impl BadgeId {
    /// Name used in the `badges` array
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevenDayStreak => "7-Day Streak",
            Self::FirstHardHabit => "First Hard Habit",
            Self::AllHabitsCompleted => "All Habits Completed",
            Self::LevelFive => "Level 5 Achieved",
        }
    }

    /// Parse from a stored badge name
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "7-Day Streak" => Some(Self::SevenDayStreak),
            "First Hard Habit" => Some(Self::FirstHardHabit),
            "All Habits Completed" => Some(Self::AllHabitsCompleted),
            "Level 5 Achieved" => Some(Self::LevelFive),
            _ => None,
        }
    }

    /// All badge IDs in check order
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::SevenDayStreak,
            Self::FirstHardHabit,
            Self::AllHabitsCompleted,
            Self::LevelFive,
        ]
    }
}

impl std::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Badge definition with display metadata
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: BadgeId,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    Badge {
        id: BadgeId::SevenDayStreak,
        description: "Reach a streak of 7 on any habit",
        icon: "🔥",
        color: "gold",
    },
    Badge {
        id: BadgeId::FirstHardHabit,
        description: "Complete a Hard habit",
        icon: "💪",
        color: "silver",
    },
    Badge {
        id: BadgeId::AllHabitsCompleted,
        description: "Have every habit marked done at once",
        icon: "🏆",
        color: "orange",
    },
    Badge {
        id: BadgeId::LevelFive,
        description: "Reach level 5",
        icon: "⭐",
        color: "lightblue",
    },
];

/// Icon and colour for badges loaded from storage that this build doesn't know
pub const UNKNOWN_BADGE_ICON: &str = "🎖️";
pub const UNKNOWN_BADGE_COLOR: &str = "white";

impl Badge {
    /// Get badge definition by ID
    pub fn get(id: BadgeId) -> &'static Badge {
        BADGES
            .iter()
            .find(|b| b.id == id)
            .expect("All badges should be defined")
    }

    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    /// Icon and colour for any stored badge name
    pub fn visual_for(name: &str) -> (&'static str, &'static str) {
        match BadgeId::from_str(name) {
            Some(id) => {
                let badge = Self::get(id);
                (badge.icon, badge.color)
            }
            None => (UNKNOWN_BADGE_ICON, UNKNOWN_BADGE_COLOR),
        }
    }

    pub fn total_count() -> usize {
        BADGES.len()
    }
}
