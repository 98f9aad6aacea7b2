//! Habit commands: add, list, toggle

use anyhow::{Result, bail};

use habitquest::Difficulty;

use super::{Paths, describe_event, open_tracker};

/// Add a new habit
pub fn add_command(paths: &Paths, name: &str, difficulty: Difficulty) -> Result<()> {
    let mut tracker = open_tracker(paths)?;
    let habit = tracker.add_habit(name, difficulty)?;
    println!("Added: {} ({})", habit.name, habit.difficulty);
    println!("Mark it done with: habitquest done {}", tracker.habits().len());
    Ok(())
}

/// List all habits with their 1-based number
pub fn list_command(paths: &Paths) -> Result<()> {
    let tracker = open_tracker(paths)?;
    let habits = tracker.habits();

    if habits.is_empty() {
        println!("No habits added yet. Run 'habitquest add <name>' to start!");
        return Ok(());
    }

    println!("Habits ({}):\n", habits.len());
    for (i, habit) in habits.iter().enumerate() {
        let marker = if habit.completed { "x" } else { " " };
        println!(
            "  {:>2}. [{}] {} ({}) - Streak: {}",
            i + 1,
            marker,
            habit.name,
            habit.difficulty,
            habit.streak
        );
    }
    println!("\nQuest progress: {:.0}%", tracker.completion_percent());

    Ok(())
}

/// Toggle a habit by its 1-based number and print what happened
pub fn toggle_command(paths: &Paths, number: usize) -> Result<()> {
    if number == 0 {
        bail!("Habit numbers start at 1");
    }

    let mut tracker = open_tracker(paths)?;
    let events = tracker.toggle_habit(number - 1)?;
    for event in &events {
        println!("{}", describe_event(event));
    }

    let progress = tracker.progress();
    println!(
        "Points: {}  Coins: {}  Level: {}",
        progress.points, progress.coins, progress.level
    );
    Ok(())
}

/// Start a new day: clear done markers and break unfinished streaks
pub fn new_day_command(paths: &Paths) -> Result<()> {
    let mut tracker = open_tracker(paths)?;
    let events = tracker.new_day()?;
    for event in &events {
        println!("{}", describe_event(event));
    }
    println!("New day! {} habits to do.", tracker.habits().len());
    Ok(())
}
