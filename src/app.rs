use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SambatChartApp {
    pub state: AppState,
}

impl Default for SambatChartApp {
    fn default() -> Self {
        Self {
            state: AppState::with_builtin_dataset(),
        }
    }
}

impl eframe::App for SambatChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::T)) {
            self.state.toggle_calendar();
        }

        // ---- Top panel: calendar toggle ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: year table ----
        egui::SidePanel::left("year_table")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::year_chart(ui, &self.state);
        });
    }
}
