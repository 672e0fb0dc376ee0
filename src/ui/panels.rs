use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Ui};

use crate::state::{AppState, Tab};
use crate::ui::table;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = state.selected() {
            ui.label(format!(
                "{}: {} rows × {} columns",
                state.selected_table.as_deref().unwrap_or_default(),
                table.row_count(),
                table.column_count()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// Render the row of tab selectors under the menu bar.
pub fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            if ui
                .selectable_label(state.active_tab == tab, tab.title())
                .clicked()
            {
                state.set_active_tab(tab);
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Statistics tab
// ---------------------------------------------------------------------------

/// Dataset selector plus the statistics grid.
pub fn statistics_tab(ui: &mut Ui, state: &mut AppState) {
    let names: Vec<String> = state.tables.keys().cloned().collect();
    if names.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view statistics  (File → Open…)");
        });
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Dataset:");
        let current = state.selected_table.clone().unwrap_or_default();
        ComboBox::from_id_salt("dataset_select")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for name in &names {
                    if ui.selectable_label(current == *name, name).clicked() {
                        state.select_table(name);
                    }
                }
            });
    });
    ui.add_space(4.0);

    if state.stats_model.row_count() == 0 {
        ui.label("The selected dataset has no numeric columns.");
        return;
    }

    ui.label("Statistics of the numeric columns:");
    ui.add_space(4.0);
    table::data_grid(ui, &state.stats_model);
}

// ---------------------------------------------------------------------------
// Log tab
// ---------------------------------------------------------------------------

/// Read-only view of the user action log.
pub fn log_tab(ui: &mut Ui, state: &AppState) {
    ui.heading("User action log");
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui: &mut Ui| {
            if state.actions.is_empty() {
                ui.label("No actions recorded yet.");
                return;
            }
            for entry in state.actions.entries() {
                ui.monospace(entry);
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.row_count(),
                    table.column_names()
                );
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "dataset".to_string());
                state.insert_table(name, table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
