//! Minimal knight cover desktop application.
//!
//! # Design Notes
//! - The board is always a full cover: either the minimiser's fixed point or
//!   the grid a demo ended on.
//! - Long work never runs in `update`. Resizing goes to the shared worker
//!   thread and the demo to its own thread; flows relay their results back
//!   as actions.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel},
};

use crate::{
    action::{self, ActionRequestQueue},
    persistence,
    state::{AppState, RepaintSignal, UiState},
    ui, version, view_model_builder,
};

#[derive(Debug)]
pub struct KnightcoverApp {
    app_state: AppState,
    ui_state: UiState,
}

impl KnightcoverApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        log::info!("starting knightcover {}", version::build_version());
        let app_state = cc
            .storage
            .and_then(persistence::load_state)
            .unwrap_or_default();
        log::info!(
            "initial board {}: {} knights",
            app_state.engine.size(),
            app_state.engine.occupied_count()
        );
        let ui_state = UiState::new(RepaintSignal::from_context(&cc.egui_ctx));
        Self {
            app_state,
            ui_state,
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for KnightcoverApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.executor.poll(&mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if self.ui_state.active_modal.is_none() && !self.ui_state.spinner_state.is_active() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
            });
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let control_panel_vm =
            view_model_builder::build_control_panel_vm(&self.app_state, &self.ui_state);
        TopBottomPanel::top("control_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::control_panel::show(ui, &control_panel_vm, &mut action_queue);
            ui.add_space(4.0);
        });

        let sidebar_vm = view_model_builder::build_sidebar_vm(&self.app_state);
        SidePanel::right("sidebar")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });

        let main_screen_vm =
            view_model_builder::build_main_screen_vm(&self.app_state, &self.ui_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::main_screen::show(ui, &main_screen_vm);
        });

        if let Some(modal_request) = &mut self.ui_state.active_modal {
            ui::modal::show(ctx, &mut action_queue, modal_request);
        }

        if let Some(spinner) = self.ui_state.spinner_state.active_kind() {
            ui::spinner::show(ctx, spinner);
        }

        // Flows only advance when polled, so keep frames coming while one waits.
        if !self.ui_state.executor.is_idle() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
