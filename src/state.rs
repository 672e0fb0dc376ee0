use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::model::DataTable;
use crate::data::stats::{self, CorrMatrix};
use crate::data::table_model::TableModel;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Statistics,
    Correlation,
    Heatmap,
    LinePlot,
    Log,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Statistics,
        Tab::Correlation,
        Tab::Heatmap,
        Tab::LinePlot,
        Tab::Log,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Statistics => "Statistics",
            Tab::Correlation => "Correlation",
            Tab::Heatmap => "Heatmap",
            Tab::LinePlot => "Line plot",
            Tab::Log => "Log",
        }
    }
}

// ---------------------------------------------------------------------------
// Action log
// ---------------------------------------------------------------------------

/// Ordered record of user-visible actions, shown in the Log tab.
/// Every entry is mirrored to the diagnostic log.
#[derive(Debug, Default)]
pub struct ActionLog {
    entries: Vec<String>,
}

impl ActionLog {
    pub fn record(&mut self, action: impl AsRef<str>) {
        let action = action.as_ref();
        log::info!("action: {action}");
        self.entries.push(format!("Action: {action}"));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded datasets by name.
    pub tables: BTreeMap<String, Arc<DataTable>>,

    /// Name of the dataset the tabs are looking at.
    pub selected_table: Option<String>,

    /// Which tab is showing.
    pub active_tab: Tab,

    /// Grid model for the statistics tab; holds the describe() snapshot.
    pub stats_model: TableModel,

    /// Correlation matrix of the selected dataset (cached on selection).
    pub corr: Option<CorrMatrix>,

    /// Numeric column plotted in the line-plot tab.
    pub line_column: Option<String>,

    /// User action log.
    pub actions: ActionLog,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tables: BTreeMap::new(),
            selected_table: None,
            active_tab: Tab::Statistics,
            stats_model: TableModel::default(),
            corr: None,
            line_column: None,
            actions: ActionLog::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Register a freshly loaded dataset under `name` and select it.
    pub fn insert_table(&mut self, name: impl Into<String>, table: DataTable) {
        let name = name.into();
        self.actions.record(format!("load_dataset {name}"));
        self.tables.insert(name.clone(), Arc::new(table));
        self.select_table(&name);
        self.status_message = None;
    }

    /// The dataset the tabs are looking at.
    pub fn selected(&self) -> Option<&Arc<DataTable>> {
        self.tables.get(self.selected_table.as_deref()?)
    }

    /// Switch the tabs to the named dataset, recomputing the statistics
    /// grid, the correlation matrix, and the default line-plot column.
    pub fn select_table(&mut self, name: &str) {
        self.actions.record(format!("select_dataset {name}"));

        let Some(table) = self.tables.get(name) else {
            self.selected_table = None;
            self.stats_model.replace_data(Arc::new(DataTable::empty()));
            self.corr = None;
            self.line_column = None;
            self.status_message = Some(format!("Dataset not found: {name}"));
            return;
        };

        self.stats_model
            .replace_data(Arc::new(stats::describe(table)));
        self.corr = Some(stats::correlation(table));
        self.line_column = table
            .numeric_columns()
            .first()
            .map(|c| c.name.clone());
        self.selected_table = Some(name.to_string());
    }

    /// Pick the numeric column shown in the line-plot tab.
    pub fn set_line_column(&mut self, column: String) {
        self.actions.record(format!("select_column {column}"));
        self.line_column = Some(column);
    }

    /// Switch tabs; no-op (and no log entry) when already there.
    pub fn set_active_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.actions.record(format!("open_tab {}", tab.title()));
            self.active_tab = tab;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Column};

    fn ev_table() -> DataTable {
        DataTable::new(vec![
            Column::new(
                "model",
                vec![CellValue::Text("Ion GT".into()), CellValue::Text("Volt S".into())],
            ),
            Column::new(
                "range_km",
                vec![CellValue::Float(455.0), CellValue::Float(380.0)],
            ),
            Column::new(
                "seats",
                vec![CellValue::Integer(5), CellValue::Integer(4)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn inserting_selects_and_summarises() {
        let mut state = AppState::default();
        state.insert_table("vehicles", ev_table());

        assert_eq!(state.selected_table.as_deref(), Some("vehicles"));
        // Two numeric columns → two statistics rows, eight statistics.
        assert_eq!(state.stats_model.row_count(), 2);
        assert_eq!(state.stats_model.column_count(), 8);
        assert_eq!(state.corr.as_ref().unwrap().labels, vec!["range_km", "seats"]);
        assert_eq!(state.line_column.as_deref(), Some("range_km"));
    }

    #[test]
    fn selecting_missing_dataset_clears_views() {
        let mut state = AppState::default();
        state.insert_table("vehicles", ev_table());
        state.select_table("nope");

        assert_eq!(state.selected_table, None);
        assert_eq!(state.stats_model.row_count(), 0);
        assert!(state.corr.is_none());
        assert!(state.status_message.as_deref().unwrap().contains("nope"));
    }

    #[test]
    fn actions_are_recorded_in_order() {
        let mut state = AppState::default();
        state.insert_table("vehicles", ev_table());
        state.set_active_tab(Tab::Correlation);
        state.set_active_tab(Tab::Correlation); // no duplicate entry
        state.set_line_column("seats".into());

        assert_eq!(
            state.actions.entries(),
            &[
                "Action: load_dataset vehicles",
                "Action: select_dataset vehicles",
                "Action: open_tab Correlation",
                "Action: select_column seats",
            ]
        );
    }
}
