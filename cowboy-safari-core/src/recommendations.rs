use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a recommended game is relative to Cowboy Safari.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Casual,
    Moderate,
    Hardcore,
}

impl Difficulty {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Moderate => "Moderate",
            Self::Hardcore => "Hardcore",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A related game shown on recommendation cards.
///
/// `name` doubles as the render key; uniqueness is a content convention, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedGame {
    pub name: String,
    pub summary: String,
    pub play_url: String,
    pub focus: String,
    pub difficulty: Difficulty,
    pub platform: String,
    pub image: String,
    pub image_alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_from_label() {
        let parsed: Difficulty = serde_json::from_str("\"Hardcore\"").unwrap();
        assert_eq!(parsed, Difficulty::Hardcore);
        assert_eq!(parsed.to_string(), "Hardcore");
        assert!(serde_json::from_str::<Difficulty>("\"Nightmare\"").is_err());
    }
}
