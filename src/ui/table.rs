use eframe::egui::Ui;
use egui_extras::{Column as GridColumn, TableBuilder};

use crate::data::table_model::{Axis, TableModel};

// ---------------------------------------------------------------------------
// Generic data grid
// ---------------------------------------------------------------------------

/// Paint a [`TableModel`] as a striped grid with a row-label gutter.
///
/// The widget knows nothing about the underlying data: everything it draws
/// comes from the model's count, header and cell queries.
pub fn data_grid(ui: &mut Ui, model: &TableModel) {
    let n_cols = model.column_count();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(GridColumn::auto().at_least(48.0))
        .columns(GridColumn::auto().at_least(64.0), n_cols)
        .header(22.0, |mut header| {
            header.col(|_ui| {});
            for c in 0..n_cols {
                header.col(|ui| {
                    ui.strong(model.header_label(Axis::Columns, c));
                });
            }
        })
        .body(|body| {
            body.rows(18.0, model.row_count(), |mut row| {
                let r = row.index();
                row.col(|ui| {
                    ui.strong(model.header_label(Axis::Rows, r));
                });
                for c in 0..n_cols {
                    row.col(|ui| {
                        ui.label(model.cell_text(r, c));
                    });
                }
            });
        });
}
