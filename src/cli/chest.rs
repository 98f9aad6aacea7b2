//! Loot chest command

use anyhow::Result;

use habitquest::store::TrackerError;

use super::{Paths, open_tracker};

/// Open the loot chest
pub fn chest_command(paths: &Paths) -> Result<()> {
    let mut tracker = open_tracker(paths)?;

    match tracker.open_chest() {
        Ok(outcome) => {
            println!("🎁 Loot Chest Opened! You got {} coins!", outcome.reward);
            println!("Coins: {} (paid {})", outcome.coins, outcome.cost);
        }
        Err(TrackerError::NotEnoughCoins { have, need }) => {
            println!("You need at least {need} coins to open the chest! (you have {have})");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
