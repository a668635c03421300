//! Homepage configuration.
//!
//! Everything here is fixed at startup; there is no settings file and no
//! command-line override.

use eframe::egui::Vec2;
use ninebox_assets::BUTTON_TARGET_WIDTH;
use ninebox_core::AssetCatalog;

#[derive(Debug, Clone, PartialEq)]
pub struct HomepageConfig {
    /// Where the homepage images are looked up.
    pub catalog: AssetCatalog,
    /// Width every button icon is scaled to.
    pub icon_target_width: u32,
    pub window_title: String,
    pub window_size: Vec2,
    pub placeholder_size: Vec2,
    /// Empty border between the window edge and the homepage content.
    pub padding: i8,
    /// Gap between grid cells and between the stacked homepage sections.
    pub gap: f32,
    pub title: String,
    pub title_size: f32,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            catalog: AssetCatalog::default(),
            icon_target_width: BUTTON_TARGET_WIDTH,
            window_title: "Game Homepage".to_owned(),
            window_size: Vec2::new(1024.0, 768.0),
            placeholder_size: Vec2::new(400.0, 300.0),
            padding: 20,
            gap: 20.0,
            title: "9-Box Puzzle Game".to_owned(),
            title_size: 36.0,
        }
    }
}
