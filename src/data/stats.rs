use super::model::{CellValue, Column, DataTable};

// ---------------------------------------------------------------------------
// Descriptive statistics over the numeric columns of a table
// ---------------------------------------------------------------------------

const STAT_NAMES: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summarise the numeric columns of `table`.
///
/// The result is itself a [`DataTable`]: one row per numeric column (the
/// row label is the column name), with `count`, `mean`, `std`, `min`,
/// quartiles and `max` as columns. Floats are rounded to 2 decimals for
/// display; nulls in the input are skipped. A table without numeric
/// columns summarises to the empty table.
pub fn describe(table: &DataTable) -> DataTable {
    let numeric = table.numeric_columns();
    if numeric.is_empty() {
        return DataTable::empty();
    }

    let mut stat_columns: Vec<Vec<CellValue>> =
        STAT_NAMES.iter().map(|_| Vec::new()).collect();
    let mut row_labels = Vec::with_capacity(numeric.len());

    for col in numeric {
        let mut values: Vec<f64> = col
            .numeric_cells()
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        values.sort_by(f64::total_cmp);

        row_labels.push(col.name.clone());
        stat_columns[0].push(CellValue::Integer(values.len() as i64));
        stat_columns[1].push(float_cell(mean(&values)));
        stat_columns[2].push(float_cell(sample_std(&values)));
        stat_columns[3].push(float_cell(values.first().copied()));
        stat_columns[4].push(float_cell(percentile(&values, 0.25)));
        stat_columns[5].push(float_cell(percentile(&values, 0.50)));
        stat_columns[6].push(float_cell(percentile(&values, 0.75)));
        stat_columns[7].push(float_cell(values.last().copied()));
    }

    let columns = STAT_NAMES
        .iter()
        .zip(stat_columns)
        .map(|(name, values)| Column::new(*name, values))
        .collect();

    // Lengths are uniform by construction: one entry per numeric column.
    DataTable::with_row_labels(columns, row_labels)
        .unwrap_or_else(|_| DataTable::empty())
}

fn float_cell(v: Option<f64>) -> CellValue {
    match v {
        Some(x) => CellValue::Float(round2(x)),
        None => CellValue::Null,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n − 1 denominator); undefined below 2 values.
fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Linear-interpolation percentile over an already sorted slice,
/// `q` in `[0, 1]`.
fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = pos - lo as f64;
            Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
        }
    }
}

// ---------------------------------------------------------------------------
// Pearson correlation matrix
// ---------------------------------------------------------------------------

/// Square Pearson correlation matrix over the numeric columns of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrMatrix {
    /// Numeric column names, in table order. Row i / column j of `values`
    /// correspond to `labels[i]` vs `labels[j]`.
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrMatrix {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }
}

/// Pairwise-complete Pearson correlation: a row contributes to a pair only
/// when both cells are numeric. Degenerate pairs (fewer than 2 complete
/// rows, or zero variance) come out as NaN.
pub fn correlation(table: &DataTable) -> CorrMatrix {
    let numeric = table.numeric_columns();
    let labels: Vec<String> = numeric.iter().map(|c| c.name.clone()).collect();
    let cells: Vec<Vec<Option<f64>>> = numeric
        .iter()
        .map(|c| c.numeric_cells().unwrap_or_default())
        .collect();

    let n = cells.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&cells[i], &cells[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrMatrix { labels, values }
}

fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let my = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in &pairs {
        cov += (x - mx) * (y - my);
        vx += (x - mx).powi(2);
        vy += (y - my).powi(2);
    }

    let denom = (vx * vy).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}
