use std::sync::Arc;

use super::model::DataTable;

// ---------------------------------------------------------------------------
// TableModel – adapter between a DataTable snapshot and a grid widget
// ---------------------------------------------------------------------------

/// Which header a grid widget is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// Presents one immutable [`DataTable`] snapshot through the index-based
/// queries a generic grid widget paints from.
///
/// The model never panics on out-of-range coordinates: widgets probe
/// boundary indices while repainting, and a stale coordinate must come back
/// as an empty cell rather than a failure. The snapshot is shared behind an
/// `Arc`, so other consumers (the statistics computation) can read the same
/// data without copies.
#[derive(Debug, Clone)]
pub struct TableModel {
    table: Arc<DataTable>,
}

impl Default for TableModel {
    fn default() -> Self {
        TableModel {
            table: Arc::new(DataTable::empty()),
        }
    }
}

impl TableModel {
    pub fn new(table: Arc<DataTable>) -> Self {
        TableModel { table }
    }

    /// Number of rows in the current snapshot.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Number of columns in the current snapshot.
    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// Textual rendering of the cell at `(row, column)`.
    ///
    /// Out-of-range coordinates yield an empty string.
    pub fn cell_text(&self, row: usize, column: usize) -> String {
        self.table
            .value(row, column)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    /// Header label for the given axis: the row label for [`Axis::Rows`],
    /// the column name for [`Axis::Columns`]. Empty string when out of
    /// range.
    pub fn header_label(&self, axis: Axis, index: usize) -> String {
        match axis {
            Axis::Rows => self.table.row_label(index).unwrap_or_default().to_string(),
            Axis::Columns => self
                .table
                .column(index)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        }
    }

    /// Swap the held snapshot wholesale. Queries reflect the new data from
    /// the next call on; egui re-queries every frame, so no reset signal is
    /// needed.
    pub fn replace_data(&mut self, table: Arc<DataTable>) {
        self.table = table;
    }

    /// The snapshot currently on display.
    pub fn snapshot(&self) -> &Arc<DataTable> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Column};

    fn model_2x2() -> TableModel {
        let table = DataTable::new(vec![
            Column::new("a", vec![CellValue::Integer(1), CellValue::Integer(3)]),
            Column::new("b", vec![CellValue::Integer(2), CellValue::Integer(4)]),
        ])
        .unwrap();
        TableModel::new(Arc::new(table))
    }

    #[test]
    fn in_bounds_queries() {
        let m = model_2x2();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 2);
        assert_eq!(m.cell_text(0, 0), "1");
        assert_eq!(m.cell_text(0, 1), "2");
        assert_eq!(m.cell_text(1, 0), "3");
        assert_eq!(m.cell_text(1, 1), "4");
        assert_eq!(m.header_label(Axis::Columns, 0), "a");
        assert_eq!(m.header_label(Axis::Columns, 1), "b");
        assert_eq!(m.header_label(Axis::Rows, 1), "1");
    }

    #[test]
    fn out_of_range_is_empty_not_panic() {
        let m = model_2x2();
        assert_eq!(m.cell_text(5, 0), "");
        assert_eq!(m.cell_text(0, 5), "");
        assert_eq!(m.cell_text(usize::MAX, usize::MAX), "");
        assert_eq!(m.header_label(Axis::Rows, 99), "");
        assert_eq!(m.header_label(Axis::Columns, 99), "");
    }

    #[test]
    fn empty_snapshot() {
        let m = TableModel::default();
        assert_eq!(m.row_count(), 0);
        assert_eq!(m.column_count(), 0);
        assert_eq!(m.cell_text(0, 0), "");
        assert_eq!(m.header_label(Axis::Columns, 0), "");
    }

    #[test]
    fn replace_data_swaps_dimensions() {
        let mut m = model_2x2();

        let wide = DataTable::new(vec![
            Column::new("x", vec![CellValue::Float(0.5)]),
            Column::new("y", vec![CellValue::Float(1.5)]),
            Column::new("z", vec![CellValue::Float(2.5)]),
        ])
        .unwrap();
        m.replace_data(Arc::new(wide));
        assert_eq!(m.row_count(), 1);
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.cell_text(0, 2), "2.5");
        assert_eq!(m.cell_text(1, 0), "");

        // Non-empty → empty and back.
        m.replace_data(Arc::new(DataTable::empty()));
        assert_eq!(m.row_count(), 0);
        assert_eq!(m.column_count(), 0);
        assert_eq!(m.cell_text(0, 0), "");

        m.replace_data(model_2x2().snapshot().clone());
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.cell_text(1, 1), "4");
    }

    #[test]
    fn snapshot_is_shared_not_copied() {
        let m = model_2x2();
        let other = m.snapshot().clone();
        assert_eq!(Arc::strong_count(&other), 2);
        assert_eq!(other.value(0, 1), Some(&CellValue::Integer(2)));
    }
}
