/// Player progress: everything earned so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    /// Lifetime points; never decreases
    pub points: u64,
    /// Spendable currency
    pub coins: u64,
    /// Current level, starting at 1
    pub level: u32,
    /// Unlocked badge names in unlock order, without duplicates
    pub badges: Vec<String>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            points: 0,
            coins: 0,
            level: 1,
            badges: Vec::new(),
        }
    }
}

impl ProgressState {
    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.iter().any(|b| b == name)
    }

    /// Add a badge unless it is already unlocked. Returns true when added.
    pub fn grant_badge(&mut self, name: &str) -> bool {
        if self.has_badge(name) {
            return false;
        }
        self.badges.push(name.to_string());
        true
    }
}
