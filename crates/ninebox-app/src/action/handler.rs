use log::debug;

use crate::{
    action::{Action, ActionRequestQueue, ScreenAction, WindowAction, flows},
    state::{AppState, Screen},
    ui::{game_window::GameWindow, homepage::Homepage},
};

pub(crate) fn handle_all(state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(state, action);
    }
}

pub(crate) fn handle(state: &mut AppState, action: Action) {
    match action {
        Action::Screen(action) => action.execute(state),
        Action::Window(action) => action.execute(state),
    }
}

impl ScreenAction {
    fn execute(self, state: &mut AppState) {
        match self {
            ScreenAction::ShowHomepage => {
                state.screen = Some(Screen::Homepage(Homepage::new(&state.config)));
            }
            ScreenAction::StartGame(difficulty) => {
                if !state.screen.as_ref().is_some_and(Screen::is_homepage) {
                    debug!("Ignoring start of {difficulty} game outside the homepage");
                    return;
                }
                // Dropping the homepage releases its images and buttons.
                state.screen = None;
                debug!("Homepage disposed, starting {difficulty} game");
                flows::schedule_game(&mut state.scheduler, difficulty);
            }
            ScreenAction::ShowGame(difficulty) => {
                let mut game = GameWindow::new(difficulty);
                game.become_visible();
                state.screen = Some(Screen::Game(game));
            }
        }
    }
}

impl WindowAction {
    fn execute(self, state: &mut AppState) {
        match self {
            WindowAction::OpenPlaceholder(destination) => {
                state.placeholders.open(destination, state.content_rect);
                debug!("{} placeholder window(s) open", state.placeholders.len());
            }
            WindowAction::ClosePlaceholder(id) => {
                if !state.placeholders.close(id) {
                    debug!("Placeholder {id} was already closed");
                }
            }
        }
    }
}
