//! Habit tracker - the mutable state record
//!
//! Holds habits and progress, applies the progression engine on every
//! toggle, and writes the full state back to the key-value store after each
//! mutation.

use std::str::FromStr;

use tracing::{debug, info, warn};

use super::backend::KeyValueStore;
use super::chest::{ChestOutcome, roll_reward};
use super::error::TrackerError;
use super::keys;
use crate::config::ChestSettings;
use crate::domain::{Difficulty, Habit, ProgressState};
use crate::progression::{
    AchievementContext, ProgressionEvent, all_habits_completed, calculate_points,
    check_achievements, check_level_up, coins_for_points,
};

/// Single-user habit tracker bound to a persistence backend
pub struct HabitTracker {
    habits: Vec<Habit>,
    progress: ProgressState,
    chest: ChestSettings,
    store: Box<dyn KeyValueStore>,
}

impl HabitTracker {
    /// Load state from `store`. Missing or malformed values fall back to
    /// defaults; only backend read failures are errors.
    pub fn load(store: Box<dyn KeyValueStore>) -> Result<Self, TrackerError> {
        let points = read_number::<u64>(store.as_ref(), keys::POINTS)?.unwrap_or(0);
        let coins = read_number::<u64>(store.as_ref(), keys::COINS)?.unwrap_or(0);
        let level = read_number::<u32>(store.as_ref(), keys::LEVEL)?
            .filter(|l| *l >= 1)
            .unwrap_or(1);
        let habits = read_habits(store.as_ref())?;
        let badges = read_badges(store.as_ref())?;

        debug!(
            "Loaded {} habits, {} points, {} coins, level {}, {} badges",
            habits.len(),
            points,
            coins,
            level,
            badges.len()
        );

        Ok(Self {
            habits,
            progress: ProgressState {
                points,
                coins,
                level,
                badges,
            },
            chest: ChestSettings::default(),
            store,
        })
    }

    /// Use custom chest cost and reward range
    pub fn with_chest_settings(mut self, chest: ChestSettings) -> Self {
        self.chest = chest;
        self
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn chest_settings(&self) -> &ChestSettings {
        &self.chest
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Whether every habit is done (false when there are none)
    pub fn all_completed(&self) -> bool {
        all_habits_completed(&self.habits)
    }

    /// Share of habits currently done, 0 - 100
    pub fn completion_percent(&self) -> f32 {
        if self.habits.is_empty() {
            return 0.0;
        }
        let done = self.habits.iter().filter(|h| h.completed).count();
        done as f32 / self.habits.len() as f32 * 100.0
    }

    /// Add a new habit. The name is trimmed and must not be empty.
    pub fn add_habit(&mut self, name: &str, difficulty: Difficulty) -> Result<&Habit, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }

        self.habits.push(Habit::new(name, difficulty));
        info!("Added habit '{}' ({})", name, difficulty);
        self.save()?;

        let index = self.habits.len() - 1;
        Ok(&self.habits[index])
    }

    /// Flip a habit between done and not done.
    ///
    /// Completing extends the streak and pays out points and coins, then
    /// checks for a level up and new badges. Undoing only shortens the streak.
    pub fn toggle_habit(&mut self, index: usize) -> Result<Vec<ProgressionEvent>, TrackerError> {
        let len = self.habits.len();
        let habit = self
            .habits
            .get_mut(index)
            .ok_or(TrackerError::HabitNotFound { index, len })?;

        habit.completed = !habit.completed;
        let mut events = Vec::new();

        if habit.completed {
            habit.streak = habit.streak.saturating_add(1);
            let (name, difficulty, streak) = (habit.name.clone(), habit.difficulty, habit.streak);

            let all_done = self.all_completed();
            let earned = calculate_points(difficulty, streak, all_done);
            let coins = coins_for_points(earned);
            debug!(
                "'{}' completed: streak {}, all done {}, +{} points, +{} coins",
                name, streak, all_done, earned, coins
            );

            // Hand-edited data can sit at the top of the range
            self.progress.points = self.progress.points.saturating_add(earned);
            self.progress.coins = self.progress.coins.saturating_add(coins);
            events.push(ProgressionEvent::PointsAwarded {
                habit: name,
                points: earned,
                coins,
            });

            let (level, level_up) = check_level_up(self.progress.points, self.progress.level);
            self.progress.level = level;
            if let Some(level_up) = level_up {
                info!("Level up: {} -> {}", level_up.old_level, level_up.new_level);
                events.push(ProgressionEvent::LevelUp(level_up));
            }

            events.extend(self.unlock_badges());
        } else {
            habit.streak = habit.streak.saturating_sub(1);
            debug!("'{}' undone: streak {}", habit.name, habit.streak);
            events.push(ProgressionEvent::StreakReduced {
                habit: habit.name.clone(),
                streak: habit.streak,
            });
        }

        self.save()?;
        Ok(events)
    }

    /// Roll over to a new day: every habit becomes not done. Habits done
    /// yesterday keep their streak, the rest drop back to 0.
    pub fn new_day(&mut self) -> Result<Vec<ProgressionEvent>, TrackerError> {
        let mut events = Vec::new();
        for habit in &mut self.habits {
            if habit.completed {
                habit.completed = false;
            } else if habit.streak > 0 {
                habit.streak = 0;
                events.push(ProgressionEvent::StreakBroken {
                    habit: habit.name.clone(),
                });
            }
        }
        info!("New day started, {} streaks broken", events.len());

        self.save()?;
        Ok(events)
    }

    fn unlock_badges(&mut self) -> Vec<ProgressionEvent> {
        let ctx = AchievementContext {
            habits: &self.habits,
            level: self.progress.level,
        };
        let newly_unlocked = check_achievements(&ctx, &self.progress.badges);

        let mut events = Vec::new();
        for id in newly_unlocked {
            if self.progress.grant_badge(id.as_str()) {
                info!("Badge unlocked: {}", id);
                events.push(ProgressionEvent::BadgeUnlocked(id));
            }
        }
        events
    }

    /// Spend the chest cost for a random coin reward
    pub fn open_chest(&mut self) -> Result<ChestOutcome, TrackerError> {
        self.open_chest_with(roll_reward)
    }

    /// Open the chest with a caller-supplied roll
    pub fn open_chest_with<F>(&mut self, roll: F) -> Result<ChestOutcome, TrackerError>
    where
        F: FnOnce(&ChestSettings) -> u64,
    {
        let cost = self.chest.cost;
        if self.progress.coins < cost {
            return Err(TrackerError::NotEnoughCoins {
                have: self.progress.coins,
                need: cost,
            });
        }

        self.progress.coins -= cost;
        let reward = roll(&self.chest);
        self.progress.coins = self.progress.coins.saturating_add(reward);
        info!("Chest opened: -{} +{} coins", cost, reward);

        self.save()?;
        Ok(ChestOutcome {
            cost,
            reward,
            coins: self.progress.coins,
        })
    }

    /// Write the full state to the store
    pub fn save(&mut self) -> Result<(), TrackerError> {
        let habits = serde_json::to_string(&self.habits).map_err(anyhow::Error::from)?;
        let badges = serde_json::to_string(&self.progress.badges).map_err(anyhow::Error::from)?;

        self.store.set_all(&[
            (keys::HABITS, habits),
            (keys::POINTS, self.progress.points.to_string()),
            (keys::COINS, self.progress.coins.to_string()),
            (keys::LEVEL, self.progress.level.to_string()),
            (keys::BADGES, badges),
        ])?;
        Ok(())
    }

    /// Wipe the store and start over
    pub fn reset(&mut self) -> Result<(), TrackerError> {
        self.store.clear()?;
        self.habits.clear();
        self.progress = ProgressState::default();
        info!("Progress reset");
        Ok(())
    }
}

fn read_number<T: FromStr>(store: &dyn KeyValueStore, key: &str) -> anyhow::Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match raw.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            warn!("Ignoring malformed '{}' value: {:?}", key, raw);
            Ok(None)
        }
    }
}

fn read_habits(store: &dyn KeyValueStore) -> anyhow::Result<Vec<Habit>> {
    let Some(raw) = store.get(keys::HABITS)? else {
        return Ok(Vec::new());
    };
    let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Ignoring malformed habits list: {}", e);
            return Ok(Vec::new());
        }
    };

    let habits = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Habit>(entry) {
            Ok(habit) => Some(habit),
            Err(e) => {
                warn!("Skipping malformed habit entry: {}", e);
                None
            }
        })
        .collect();
    Ok(habits)
}

fn read_badges(store: &dyn KeyValueStore) -> anyhow::Result<Vec<String>> {
    let Some(raw) = store.get(keys::BADGES)? else {
        return Ok(Vec::new());
    };
    let stored: Vec<String> = match serde_json::from_str(&raw) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Ignoring malformed badges list: {}", e);
            return Ok(Vec::new());
        }
    };

    let mut badges: Vec<String> = Vec::with_capacity(stored.len());
    for badge in stored {
        if !badges.contains(&badge) {
            badges.push(badge);
        }
    }
    Ok(badges)
}
