//! Fixed locations of the homepage images.

use std::path::{Path, PathBuf};

use crate::{Destination, Difficulty};

/// Maps homepage elements to image files below a root directory.
///
/// Every path is `<root>/images/<name>`; the default root is the current
/// working directory, so the files are looked up as `images/background.jpg`,
/// `images/leaderboard.png` and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    root: PathBuf,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new("")
    }
}

impl AssetCatalog {
    const IMAGE_DIR: &'static str = "images";
    const BACKGROUND: &'static str = "background.jpg";

    /// Creates a catalog rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the homepage background image.
    #[must_use]
    pub fn background(&self) -> PathBuf {
        self.image(Self::BACKGROUND)
    }

    /// Path of the navigation button icon for `destination`.
    #[must_use]
    pub fn destination_icon(&self, destination: Destination) -> PathBuf {
        self.png(destination.icon_stem())
    }

    /// Path of the difficulty button icon for `difficulty`.
    #[must_use]
    pub fn difficulty_icon(&self, difficulty: Difficulty) -> PathBuf {
        self.png(difficulty.icon_stem())
    }

    fn png(&self, stem: &str) -> PathBuf {
        self.image(&format!("{stem}.png"))
    }

    fn image(&self, file_name: &str) -> PathBuf {
        self.root.join(Self::IMAGE_DIR).join(file_name)
    }
}
