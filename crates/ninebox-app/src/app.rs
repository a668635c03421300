//! 9-Box Puzzle Game desktop application.
//!
//! # Design Notes
//! - The homepage is never built inside the constructor. Construction is
//!   scheduled and runs on the first update pass.
//! - Clicks only enqueue actions; the handler applies them between the
//!   scheduler poll and rendering, and again after rendering.
//! - Starting a game drops the homepage on the click pass and builds the
//!   game window on a later one.

use eframe::{
    App, CreationContext, Frame,
    egui::Context,
};

use crate::{
    action::{self, ActionRequestQueue},
    config::HomepageConfig,
    state::AppState,
    ui,
};

#[derive(Debug)]
pub struct NineBoxApp {
    state: AppState,
}

impl NineBoxApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>, config: HomepageConfig) -> Self {
        cc.egui_ctx
            .tessellation_options_mut(|options| options.feathering = true);

        let mut state = AppState::new(config);
        action::flows::schedule_homepage(&mut state.scheduler);
        Self { state }
    }
}

impl App for NineBoxApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.state.scheduler.poll(&mut action_queue);
        action::handler::handle_all(&mut self.state, &mut action_queue);

        ui::show(ctx, &mut self.state, &mut action_queue);

        action::handler::handle_all(&mut self.state, &mut action_queue);

        if !self.state.scheduler.is_idle() {
            ctx.request_repaint();
        }
    }
}
