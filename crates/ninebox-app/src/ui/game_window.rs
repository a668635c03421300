//! Main-window contents once a level is chosen.

use eframe::egui::{CentralPanel, Context, Rect, RichText, ViewportCommand};
use log::debug;
use ninebox_core::Difficulty;

const TITLE_PREFIX: &str = "9-Box Puzzle Game";

/// Stand-in for the puzzle game, constructed with the chosen difficulty.
#[derive(Debug)]
pub(crate) struct GameWindow {
    difficulty: Difficulty,
    visible: bool,
    title_sent: bool,
}

impl GameWindow {
    #[must_use]
    pub(crate) fn new(difficulty: Difficulty) -> Self {
        debug!("Game window constructed ({difficulty})");
        Self {
            difficulty,
            visible: false,
            title_sent: false,
        }
    }

    #[must_use]
    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub(crate) fn title(&self) -> String {
        format!("{TITLE_PREFIX} - {}", self.difficulty())
    }

    /// Marks the window visible. The next pass retitles the main window and
    /// brings it to the front.
    pub(crate) fn become_visible(&mut self) {
        self.visible = true;
        self.title_sent = false;
    }

    #[must_use]
    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    /// Renders the game over the main window. Returns the panel rect, or
    /// `None` while the window is not visible.
    pub(crate) fn show(&mut self, ctx: &Context) -> Option<Rect> {
        if !self.is_visible() {
            return None;
        }
        if !self.title_sent {
            ctx.send_viewport_cmd(ViewportCommand::Title(self.title()));
            ctx.send_viewport_cmd(ViewportCommand::Focus);
            self.title_sent = true;
        }
        let panel = CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.heading(RichText::new(self.difficulty().label()).strong());
            });
        });
        Some(panel.response.rect)
    }
}
