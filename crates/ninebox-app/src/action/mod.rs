use std::mem;

use ninebox_core::{Destination, Difficulty};

use crate::ui::placeholder::PlaceholderId;

pub(crate) mod flows;
pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub(crate) enum Action {
    Screen(ScreenAction),
    Window(WindowAction),
}

/// Transitions of the main window's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScreenAction {
    /// Construct the homepage and show it.
    ShowHomepage,
    /// Dispose the homepage, then schedule the game window.
    StartGame(Difficulty),
    /// Construct the game window and make it visible.
    ShowGame(Difficulty),
}

/// Secondary windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowAction {
    OpenPlaceholder(Destination),
    ClosePlaceholder(PlaceholderId),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
impl ActionRequestQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
