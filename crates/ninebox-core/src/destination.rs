//! Secondary screens reachable from the homepage navigation row.

/// A navigation target opened from one of the homepage's top buttons.
///
/// None of these screens has real content yet; each one is shown as a
/// placeholder window carrying its [`title`](Self::title).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Destination {
    /// Best scores.
    #[display("Leaderboard")]
    Leaderboard,
    /// Information about the authors.
    #[display("About Us")]
    AboutUs,
    /// How to play.
    #[display("Game Rules")]
    GameRules,
    /// Unlocked achievements.
    #[display("Achievements")]
    Achievements,
}

impl Destination {
    /// All destinations, in left-to-right order of the navigation row.
    pub const ALL: [Self; 4] = [
        Self::Leaderboard,
        Self::AboutUs,
        Self::GameRules,
        Self::Achievements,
    ];

    /// Window title and label text of the placeholder window.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Leaderboard => "Leaderboard",
            Self::AboutUs => "About Us",
            Self::GameRules => "Game Rules",
            Self::Achievements => "Achievements",
        }
    }

    /// File stem of the navigation button icon.
    #[must_use]
    pub const fn icon_stem(self) -> &'static str {
        match self {
            Self::Leaderboard => "leaderboard",
            Self::AboutUs => "aboutus",
            Self::GameRules => "rules",
            Self::Achievements => "achievements",
        }
    }
}
