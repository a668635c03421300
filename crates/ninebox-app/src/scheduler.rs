use std::mem;

use log::trace;

use crate::action::{Action, ActionRequestQueue};

/// Actions deferred to a later pass of the update loop.
///
/// The update loop polls it once per pass, before handling input. Anything
/// scheduled during a pass waits for the next poll, even when it is
/// scheduled while handling an action this scheduler just released.
#[derive(Debug, Default)]
pub(crate) struct PassScheduler {
    scheduled: Vec<Action>,
}

impl PassScheduler {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn schedule(&mut self, action: Action) {
        trace!("Scheduled for next pass: {action:?}");
        self.scheduled.push(action);
    }

    /// Returns true if nothing is waiting for the next pass.
    #[must_use]
    pub(crate) fn is_idle(&self) -> bool {
        self.scheduled.is_empty()
    }

    /// Releases every scheduled action into `action_queue` in scheduling
    /// order.
    pub(crate) fn poll(&mut self, action_queue: &mut ActionRequestQueue) {
        for action in mem::take(&mut self.scheduled) {
            action_queue.request(action);
        }
    }
}
