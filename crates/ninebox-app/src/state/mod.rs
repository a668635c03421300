use eframe::egui::Rect;

use crate::{
    config::HomepageConfig,
    scheduler::PassScheduler,
    ui::{game_window::GameWindow, homepage::Homepage, placeholder::Placeholders},
};

/// What the main window currently shows.
#[derive(Debug, derive_more::IsVariant)]
pub(crate) enum Screen {
    Homepage(Homepage),
    Game(GameWindow),
}

#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) config: HomepageConfig,
    /// `None` until the homepage is built and between disposing it and
    /// showing the game.
    pub(crate) screen: Option<Screen>,
    pub(crate) placeholders: Placeholders,
    pub(crate) scheduler: PassScheduler,
    /// Main content area as of the last pass.
    pub(crate) content_rect: Option<Rect>,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(config: HomepageConfig) -> Self {
        Self {
            config,
            screen: None,
            placeholders: Placeholders::default(),
            scheduler: PassScheduler::new(),
            content_rect: None,
        }
    }
}
