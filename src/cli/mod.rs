//! CLI command implementations

pub mod chest;
pub mod habit;
pub mod init;
pub mod status;

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use habitquest::config::Config;
use habitquest::progression::{Badge, ProgressionEvent};
use habitquest::store::{HabitTracker, open_store};

/// Path overrides from the command line
pub struct Paths {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
}

/// Load config and open the tracker on the configured backend
pub fn open_tracker(paths: &Paths) -> Result<HabitTracker> {
    let config = Config::load(paths.config.as_deref())?;
    let data_path = paths.data.clone().unwrap_or_else(|| config.data_path());
    debug!(
        "Opening {:?} store at {}",
        config.storage.backend,
        data_path.display()
    );

    let store = open_store(config.storage.backend, &data_path)?;
    let tracker = HabitTracker::load(store)?.with_chest_settings(config.chest);
    Ok(tracker)
}

/// One line per event, the way the tracker announces them
pub fn describe_event(event: &ProgressionEvent) -> String {
    match event {
        ProgressionEvent::PointsAwarded {
            habit,
            points,
            coins,
        } => format!("✔ {habit}: +{points} points, +{coins} coins"),
        ProgressionEvent::StreakReduced { habit, streak } => {
            format!("↩ {habit} undone (streak {streak})")
        }
        ProgressionEvent::StreakBroken { habit } => format!("💔 {habit} streak lost"),
        ProgressionEvent::LevelUp(level_up) => {
            format!("🎉 Level Up! You reached Level {}!", level_up.new_level)
        }
        ProgressionEvent::BadgeUnlocked(id) => {
            let badge = Badge::get(*id);
            format!("{} Achievement Unlocked: {}!", badge.icon, id)
        }
    }
}
