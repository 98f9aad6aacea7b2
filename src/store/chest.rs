//! Loot chest rolls

use crate::config::ChestSettings;

/// Result of opening the chest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChestOutcome {
    pub cost: u64,
    pub reward: u64,
    /// Coin balance after paying and collecting
    pub coins: u64,
}

/// Roll a reward in `settings.min_reward..=settings.max_reward` from the OS RNG.
///
/// A reversed range is treated as a fixed `min_reward`.
pub fn roll_reward(settings: &ChestSettings) -> u64 {
    let min = settings.min_reward;
    let max = settings.max_reward;
    if max <= min {
        return min;
    }
    let span = max - min + 1;
    min + random_u64() % span
}

fn random_u64() -> u64 {
    let mut bytes = [0u8; 8];
    if getrandom::getrandom(&mut bytes).is_ok() {
        return u64::from_le_bytes(bytes);
    }

    // Fallback: best-effort entropy if OS RNG is unavailable.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let pid = std::process::id() as u128;
    (nanos ^ pid.rotate_left(17)) as u64
}
