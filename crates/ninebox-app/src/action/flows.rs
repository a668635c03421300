//! Work deferred to the next UI pass.
//!
//! Window construction never happens inside the click or constructor that
//! asks for it. It is scheduled on the [`PassScheduler`] and applied on a
//! later pass of the update loop.

use log::debug;
use ninebox_core::Difficulty;

use crate::{action::ScreenAction, scheduler::PassScheduler};

pub(crate) fn schedule_homepage(scheduler: &mut PassScheduler) {
    debug!("Homepage construction scheduled");
    scheduler.schedule(ScreenAction::ShowHomepage.into());
}

pub(crate) fn schedule_game(scheduler: &mut PassScheduler, difficulty: Difficulty) {
    debug!("Game window construction scheduled ({difficulty})");
    scheduler.schedule(ScreenAction::ShowGame(difficulty).into());
}

#[cfg(test)]
mod tests {
    use ninebox_core::Difficulty;

    use super::{schedule_game, schedule_homepage};
    use crate::{
        action::{Action, ActionRequestQueue, ScreenAction},
        scheduler::PassScheduler,
    };

    #[test]
    fn homepage_is_shown_on_first_poll() {
        let mut scheduler = PassScheduler::new();
        schedule_homepage(&mut scheduler);
        assert!(!scheduler.is_idle());

        let mut queue = ActionRequestQueue::default();
        scheduler.poll(&mut queue);

        assert!(scheduler.is_idle());
        assert_eq!(
            queue.take_all(),
            [Action::Screen(ScreenAction::ShowHomepage)]
        );
    }

    #[test]
    fn game_carries_difficulty() {
        let mut scheduler = PassScheduler::new();
        schedule_game(&mut scheduler, Difficulty::Medium);

        let mut queue = ActionRequestQueue::default();
        scheduler.poll(&mut queue);

        assert_eq!(
            queue.take_all(),
            [Action::Screen(ScreenAction::ShowGame(Difficulty::Medium))]
        );
    }
}
