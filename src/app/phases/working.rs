use eframe::egui::Context;

use crate::app::{App, phases::phase_view::PhaseView, state::{AppState, WorkingState}};

impl PhaseView for WorkingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_working_state(ctx, self)
    }
}
