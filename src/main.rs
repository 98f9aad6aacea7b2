use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use habitquest::Difficulty;

mod cli;

#[derive(Parser)]
#[command(name = "habitquest")]
#[command(about = "HabitQuest - turn daily habits into points, coins, levels and badges")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.habitquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the data file (overrides the configured storage path)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,

        /// Difficulty: easy, medium or hard
        #[arg(short = 'D', long, default_value = "easy")]
        difficulty: Difficulty,
    },

    /// List all habits
    List,

    /// Mark a habit done, or undo it if it is already done
    #[command(alias = "done")]
    Toggle {
        /// Habit number as shown by `list` (starting at 1)
        index: usize,
    },

    /// Start a new day: clear done markers, break streaks of unfinished habits
    NewDay,

    /// Spend coins on the loot chest
    Chest,

    /// Show points, coins, level and badges
    Status,

    /// Show every badge and whether it is unlocked
    Badges,

    /// Initialize a new ~/.habitquest/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Delete all habits and progress
    Reset {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = cli::Paths {
        config: cli.config,
        data: cli.data,
    };

    match cli.command {
        Some(Commands::Add { name, difficulty }) => {
            cli::habit::add_command(&paths, &name, difficulty)?;
        }
        Some(Commands::List) => {
            cli::habit::list_command(&paths)?;
        }
        Some(Commands::Toggle { index }) => {
            cli::habit::toggle_command(&paths, index)?;
        }
        Some(Commands::NewDay) => {
            cli::habit::new_day_command(&paths)?;
        }
        Some(Commands::Chest) => {
            cli::chest::chest_command(&paths)?;
        }
        Some(Commands::Badges) => {
            cli::status::badges_command(&paths)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(paths.config, force)?;
        }
        Some(Commands::Reset { yes }) => {
            cli::init::reset_command(&paths, yes)?;
        }
        Some(Commands::Status) | None => {
            cli::status::status_command(&paths)?;
        }
    }

    Ok(())
}
