//! Status and badge commands

use anyhow::Result;

use habitquest::progression::{BADGES, Badge, BadgeId, level_progress, threshold_for};

use super::{Paths, open_tracker};

const BAR_WIDTH: usize = 20;

/// Show points, coins, level progress, quest progress and badges
pub fn status_command(paths: &Paths) -> Result<()> {
    let tracker = open_tracker(paths)?;
    let progress = tracker.progress();

    println!("Points: {}", progress.points);
    let chest = tracker.chest_settings();
    println!(
        "Coins:  {}  (chest costs {}, pays {}-{})",
        progress.coins, chest.cost, chest.min_reward, chest.max_reward
    );
    println!(
        "Level:  {}  {} {}/{}",
        progress.level,
        progress_bar(level_progress(progress.points, progress.level)),
        progress.points,
        threshold_for(progress.level)
    );

    let percent = tracker.completion_percent();
    println!(
        "Quest:  {} {:.0}% of {} habits done",
        progress_bar(percent / 100.0),
        percent,
        tracker.habits().len()
    );

    if progress.badges.is_empty() {
        println!("Badges: none yet");
    } else {
        let badges: Vec<String> = progress
            .badges
            .iter()
            .map(|name| format!("{} {}", Badge::visual_for(name).0, name))
            .collect();
        println!("Badges: {}", badges.join("  "));
    }

    Ok(())
}

/// Show the full badge catalog
pub fn badges_command(paths: &Paths) -> Result<()> {
    let tracker = open_tracker(paths)?;
    let progress = tracker.progress();

    let unlocked = BADGES.iter().filter(|b| progress.has_badge(b.name())).count();
    println!("Badges ({}/{}):\n", unlocked, Badge::total_count());

    for badge in BADGES {
        let marker = if progress.has_badge(badge.name()) { "x" } else { " " };
        println!(
            "  [{}] {} {} - {}",
            marker,
            badge.icon,
            badge.name(),
            badge.description
        );
    }

    // Badges from storage that this build has no definition for
    for name in progress.badges.iter().filter(|n| BadgeId::from_str(n).is_none()) {
        println!("  [x] {} {}", Badge::visual_for(name).0, name);
    }

    Ok(())
}

/// Render `fraction` (0.0 - 1.0) as a fixed-width text bar
fn progress_bar(fraction: f32) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
