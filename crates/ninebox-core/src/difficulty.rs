//! Difficulty levels offered on the homepage.

/// A difficulty level a puzzle game can be launched with.
///
/// The [`Display`](std::fmt::Display) form is the literal label handed to the
/// game window (`"Easy"`, `"Medium"` or `"Hard"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Difficulty {
    /// The easiest level.
    #[display("Easy")]
    Easy,
    /// The intermediate level.
    #[display("Medium")]
    Medium,
    /// The hardest level.
    #[display("Hard")]
    Hard,
}

impl Difficulty {
    /// All difficulty levels, in the order the homepage stacks their buttons.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the label passed to the game window.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Returns the file stem of the button icon for this level.
    #[must_use]
    pub const fn icon_stem(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;

    #[test]
    fn display_matches_label() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string(), difficulty.label());
        }
    }

    #[test]
    fn labels_are_the_literal_level_names() {
        let labels: Vec<_> = Difficulty::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Easy", "Medium", "Hard"]);
    }
}
