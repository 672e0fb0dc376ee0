use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a table column
// ---------------------------------------------------------------------------

/// A dynamically-typed scalar mirroring what a delimited text file can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    /// Locale-independent rendering: standard decimal formatting, no
    /// thousands separators. `Null` renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for statistics and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Column – one named column
// ---------------------------------------------------------------------------

/// A named, ordered sequence of cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    /// Row-aligned numeric view of the column.
    ///
    /// Returns `Some` when every non-null cell is numeric; nulls come back
    /// as `None` entries so pairwise statistics can line rows up.
    pub fn numeric_cells(&self) -> Option<Vec<Option<f64>>> {
        let mut out = Vec::with_capacity(self.values.len());
        for v in &self.values {
            match v {
                CellValue::Null => out.push(None),
                other => out.push(Some(other.as_f64()?)),
            }
        }
        Some(out)
    }

    /// Whether the column is numeric (all non-null cells are Integer/Float).
    pub fn is_numeric(&self) -> bool {
        self.values
            .iter()
            .all(|v| v.is_null() || v.as_f64().is_some())
    }
}

// ---------------------------------------------------------------------------
// DataTable – the complete immutable snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("malformed dataset: column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("malformed dataset: {actual} row labels for {expected} rows")]
    RowLabelMismatch { expected: usize, actual: usize },
}

/// An immutable tabular snapshot: ordered named columns of uniform length
/// plus one label per row. Built once, never mutated; consumers share it
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<Column>,
    row_labels: Vec<String>,
    n_rows: usize,
}

impl DataTable {
    /// Build a table with positional row labels ("0", "1", …).
    ///
    /// Fails fast on ragged input: every column must have the same length,
    /// measured against the first one.
    pub fn new(columns: Vec<Column>) -> Result<Self, DataError> {
        let n_rows = columns.first().map_or(0, |c| c.values.len());
        let row_labels = (0..n_rows).map(|i| i.to_string()).collect();
        Self::with_row_labels(columns, row_labels)
    }

    /// Build a table with explicit row labels.
    pub fn with_row_labels(
        columns: Vec<Column>,
        row_labels: Vec<String>,
    ) -> Result<Self, DataError> {
        let n_rows = columns.first().map_or(0, |c| c.values.len());
        for col in &columns {
            if col.values.len() != n_rows {
                return Err(DataError::RaggedColumn {
                    column: col.name.clone(),
                    expected: n_rows,
                    actual: col.values.len(),
                });
            }
        }
        if row_labels.len() != n_rows {
            return Err(DataError::RowLabelMismatch {
                expected: n_rows,
                actual: row_labels.len(),
            });
        }
        Ok(DataTable {
            columns,
            row_labels,
            n_rows,
        })
    }

    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        DataTable {
            columns: Vec::new(),
            row_labels: Vec::new(),
            n_rows: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.n_rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0 && self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn value(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.columns.get(column)?.values.get(row)
    }

    pub fn row_label(&self, row: usize) -> Option<&str> {
        self.row_labels.get(row).map(|s| s.as_str())
    }

    /// The numeric columns, in table order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> DataTable {
        DataTable::new(vec![
            Column::new("a", vec![CellValue::Integer(1), CellValue::Integer(3)]),
            Column::new("b", vec![CellValue::Integer(2), CellValue::Integer(4)]),
        ])
        .unwrap()
    }

    #[test]
    fn dimensions_and_values() {
        let t = two_by_two();
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.value(0, 1), Some(&CellValue::Integer(2)));
        assert_eq!(t.value(1, 0), Some(&CellValue::Integer(3)));
        assert_eq!(t.value(2, 0), None);
    }

    #[test]
    fn default_row_labels_are_positional() {
        let t = two_by_two();
        assert_eq!(t.row_label(0), Some("0"));
        assert_eq!(t.row_label(1), Some("1"));
        assert_eq!(t.row_label(2), None);
    }

    #[test]
    fn ragged_columns_rejected() {
        let err = DataTable::new(vec![
            Column::new("a", vec![CellValue::Integer(1), CellValue::Integer(2)]),
            Column::new("b", vec![CellValue::Integer(3)]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DataError::RaggedColumn {
                column: "b".into(),
                expected: 2,
                actual: 1,
            }
        );
        assert!(err.to_string().contains("malformed dataset"));
    }

    #[test]
    fn row_label_length_checked() {
        let err = DataTable::with_row_labels(
            vec![Column::new("a", vec![CellValue::Integer(1)])],
            vec!["x".into(), "y".into()],
        )
        .unwrap_err();
        assert!(matches!(err, DataError::RowLabelMismatch { .. }));
    }

    #[test]
    fn display_is_stable() {
        assert_eq!(CellValue::Integer(42).to_string(), "42");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Float(1234.75).to_string(), "1234.75");
        assert_eq!(CellValue::Text("ev".into()).to_string(), "ev");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn numeric_view() {
        let col = Column::new(
            "n",
            vec![CellValue::Integer(1), CellValue::Null, CellValue::Float(0.5)],
        );
        assert_eq!(col.numeric_cells(), Some(vec![Some(1.0), None, Some(0.5)]));

        let mixed = Column::new("m", vec![CellValue::Integer(1), CellValue::Text("x".into())]);
        assert!(mixed.numeric_cells().is_none());
        assert!(!mixed.is_numeric());
    }

    #[test]
    fn empty_table() {
        let t = DataTable::empty();
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.column_count(), 0);
        assert!(t.is_empty());
        assert!(t.numeric_columns().is_empty());
    }
}
