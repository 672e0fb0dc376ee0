use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{heatmap, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct GridLensApp {
    pub state: AppState,
}

impl eframe::App for GridLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Tab selector ----
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            panels::tab_bar(ui, &mut self.state);
        });

        // ---- Central panel: the active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Statistics => panels::statistics_tab(ui, &mut self.state),
            Tab::Correlation => heatmap::correlation_tab(ui, &self.state),
            Tab::Heatmap => heatmap::heatmap_tab(ui, &self.state),
            Tab::LinePlot => plot::line_plot_tab(ui, &mut self.state),
            Tab::Log => panels::log_tab(ui, &self.state),
        });
    }
}
