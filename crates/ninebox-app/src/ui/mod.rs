use eframe::egui::{CentralPanel, Context};

use crate::{
    action::ActionRequestQueue,
    state::{AppState, Screen},
};

pub(crate) mod background;
pub(crate) mod game_window;
pub(crate) mod homepage;
pub(crate) mod icon_button;
pub(crate) mod layout;
pub(crate) mod placeholder;
pub(crate) mod texture;

/// Renders the main window, then every open placeholder above it.
pub(crate) fn show(ctx: &Context, state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    let content_rect = match &mut state.screen {
        Some(Screen::Homepage(homepage)) => Some(homepage.show(ctx, action_queue)),
        Some(Screen::Game(game)) => game.show(ctx),
        None => Some(CentralPanel::default().show(ctx, |_ui| {}).response.rect),
    };
    if content_rect.is_some() {
        state.content_rect = content_rect;
    }

    if !state.placeholders.is_empty() {
        state
            .placeholders
            .show(ctx, state.config.placeholder_size, action_queue);
    }
}
