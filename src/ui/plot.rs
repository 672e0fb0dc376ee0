use eframe::egui::{ComboBox, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Line-plot tab
// ---------------------------------------------------------------------------

/// Plot one numeric column of the selected dataset against the row index.
pub fn line_plot_tab(ui: &mut Ui, state: &mut AppState) {
    let Some(table) = state.selected().cloned() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view charts  (File → Open…)");
        });
        return;
    };

    let numeric: Vec<String> = table
        .numeric_columns()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    if numeric.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The selected dataset has no numeric columns.");
        });
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Numeric column:");
        let current = state.line_column.clone().unwrap_or_default();
        ComboBox::from_id_salt("line_column")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for name in &numeric {
                    if ui.selectable_label(current == *name, name).clicked() {
                        state.set_line_column(name.clone());
                    }
                }
            });
    });

    let Some(selected) = state.line_column.clone() else {
        return;
    };
    let Some(col_idx) = numeric.iter().position(|n| *n == selected) else {
        return;
    };

    // Stable colour per column position.
    let color = generate_palette(numeric.len())[col_idx];

    let points: Vec<[f64; 2]> = table.numeric_columns()[col_idx]
        .numeric_cells()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|y| [i as f64, y]))
        .collect();

    Plot::new("line_plot")
        .legend(Legend::default())
        .x_axis_label("Index")
        .y_axis_label(&selected)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(points.clone()))
                .name(&selected)
                .color(color)
                .width(1.5);
            plot_ui.line(line);

            let markers = Points::new(PlotPoints::from(points))
                .name(&selected)
                .color(color)
                .radius(2.5);
            plot_ui.points(markers);
        });
}
