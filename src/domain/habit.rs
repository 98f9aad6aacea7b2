use serde::{Deserialize, Serialize};

/// How hard a habit is; decides the base point yield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Name as stored in the `habits` JSON array
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Base points before streak and daily bonus are applied
    pub fn base_points(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {other} (expected easy, medium or hard)")),
        }
    }
}

/// A habit the user wants to build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub difficulty: Difficulty,
    /// Consecutive completions; never negative
    #[serde(default)]
    pub streak: u32,
    /// Whether the habit is currently marked done
    #[serde(default)]
    pub completed: bool,
}

impl Habit {
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
            streak: 0,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("e".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("legendary".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_habit_json_shape() {
        let habit = Habit::new("Read", Difficulty::Medium);
        let json = serde_json::to_string(&habit).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Read","difficulty":"Medium","streak":0,"completed":false}"#
        );
    }
}
