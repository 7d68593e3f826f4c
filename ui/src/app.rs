use crate::{state::State, widgets};

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ensure_loaded(ctx);
        self.state.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("Users");
                ui.separator();
                let pending = self.state.query.result().is_pending();
                if ui
                    .add_enabled(!pending, egui::Button::new("🔄 Refresh"))
                    .clicked()
                {
                    self.state.reload(ctx);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_panel(&mut self.state, ui);
        });
    }
}
